use std::{collections::HashMap, hash::Hash};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::{GraderError, Result};

/// A source of random permutations.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Shuffles with a [`rand`] generator.
#[derive(Debug)]
pub struct RandomShuffler<R> {
    rng: R,
}

impl<R: Rng> RandomShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffler<StdRng> {
    /// A shuffler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A shuffler that produces the same permutations for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffle for RandomShuffler<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Distributes `items` over `groups` so that group sizes differ by at most one.
///
/// Both the items and the groups are shuffled first. Shuffling the groups means that when
/// the items don't divide evenly, the groups that end up with one item less vary from run
/// to run. The shuffled items are then laid out in rows as wide as the number of groups
/// and every group takes one column.
///
/// `groups` must not contain duplicates. An empty `groups` is rejected with
/// [`GraderError::NoGraders`].
pub fn partition<T, G, S>(
    mut items: Vec<T>,
    groups: &[G],
    shuffler: &mut S,
) -> Result<HashMap<G, Vec<T>>>
where
    G: Clone + Eq + Hash,
    S: Shuffle,
{
    if groups.is_empty() {
        return Err(GraderError::NoGraders);
    }

    shuffler.shuffle(&mut items);

    let mut groups = groups.to_vec();
    shuffler.shuffle(&mut groups);

    let width = groups.len();
    let mut columns: Vec<Vec<T>> = (0..width)
        .map(|_| Vec::with_capacity(items.len().div_ceil(width)))
        .collect();

    // Item n sits in row n / width, column n % width.
    for (position, item) in items.into_iter().enumerate() {
        columns[position % width].push(item);
    }

    Ok(groups.into_iter().zip(columns).collect())
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod partition_tests;

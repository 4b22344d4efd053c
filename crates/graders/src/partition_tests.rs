use std::collections::HashSet;

use proptest::prelude::*;

use super::*;

/// Leaves everything in the order it was given.
struct InOrder;

impl Shuffle for InOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

/// Reverses instead of shuffling, so the effect of shuffling the groups is visible.
struct Reversed;

impl Shuffle for Reversed {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.reverse();
    }
}

fn sizes<T>(groups: &HashMap<&str, Vec<T>>) -> Vec<usize> {
    let mut sizes: Vec<usize> = groups.values().map(Vec::len).collect();
    sizes.sort_unstable();
    sizes
}

#[test]
fn when_seven_items_go_to_three_groups_it_should_split_three_two_two() {
    let mut shuffler = RandomShuffler::seeded(7);

    let groups = partition((1..=7).collect(), &["a", "b", "c"], &mut shuffler).unwrap();

    assert_eq!(sizes(&groups), vec![2, 2, 3]);
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 7);
}

#[test]
fn when_not_shuffling_it_should_deal_items_column_wise() {
    let groups = partition((1..=7).collect(), &["a", "b", "c"], &mut InOrder).unwrap();

    assert_eq!(groups["a"], vec![1, 4, 7]);
    assert_eq!(groups["b"], vec![2, 5]);
    assert_eq!(groups["c"], vec![3, 6]);
}

#[test]
fn when_groups_are_shuffled_it_should_move_the_larger_share() {
    // Reversed items: 7..1, reversed groups: c, b, a.
    let groups = partition((1..=7).collect(), &["a", "b", "c"], &mut Reversed).unwrap();

    assert_eq!(groups["c"], vec![7, 4, 1]);
    assert_eq!(groups["b"], vec![6, 3]);
    assert_eq!(groups["a"], vec![5, 2]);
}

#[test]
fn when_there_are_no_items_it_should_give_every_group_an_empty_list() {
    let groups = partition(Vec::<u32>::new(), &["a", "b"], &mut InOrder).unwrap();

    assert_eq!(groups.len(), 2);
    assert!(groups.values().all(Vec::is_empty));
}

#[test]
fn when_there_are_fewer_items_than_groups_it_should_give_at_most_one_each() {
    let mut shuffler = RandomShuffler::seeded(3);

    let groups = partition(vec!["x", "y"], &["a", "b", "c", "d"], &mut shuffler).unwrap();

    assert_eq!(sizes(&groups), vec![0, 0, 1, 1]);
}

#[test]
fn when_there_are_no_groups_it_should_fail() {
    let result = partition(vec![1, 2, 3], &[] as &[&str], &mut InOrder);

    assert!(matches!(result, Err(GraderError::NoGraders)));
}

#[test]
fn when_using_the_same_seed_it_should_produce_the_same_assignment() {
    let items: Vec<u32> = (0..20).collect();

    let first = partition(items.clone(), &["a", "b", "c"], &mut RandomShuffler::seeded(42)).unwrap();
    let second = partition(items, &["a", "b", "c"], &mut RandomShuffler::seeded(42)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn when_seeded_from_entropy_it_should_permute_without_losing_items() {
    let mut shuffler = RandomShuffler::from_entropy();
    let mut items: Vec<u32> = (0..50).collect();

    shuffler.shuffle(&mut items);
    items.sort_unstable();

    assert_eq!(items, (0..50).collect::<Vec<u32>>());
}

proptest! {
    #[test]
    fn partition_is_balanced_and_complete(
        item_count in 0usize..200,
        groups in prop::collection::hash_set("[a-z]{1,8}", 1..12),
        seed in any::<u64>(),
    ) {
        let groups: Vec<String> = groups.into_iter().collect();
        let items: Vec<usize> = (0..item_count).collect();

        let assigned = partition(items, &groups, &mut RandomShuffler::seeded(seed)).unwrap();

        prop_assert_eq!(assigned.len(), groups.len());

        let lengths: Vec<usize> = assigned.values().map(Vec::len).collect();
        let max = lengths.iter().copied().max().unwrap_or(0);
        let min = lengths.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);

        let seen: HashSet<usize> = assigned.values().flatten().copied().collect();
        prop_assert_eq!(seen.len(), item_count);
        prop_assert_eq!(lengths.iter().sum::<usize>(), item_count);
    }
}

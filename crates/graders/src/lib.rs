//! Random assignment of graders to student repositories.
//!
//! Repositories are listed page by page from a GitHub organization, filtered down to the
//! ones that belong to students for the configured assignment prefix, and then dealt out
//! round-robin over a shuffled grader roster so every grader gets an even share.

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod partition;
pub mod report;
pub mod telemetry;

use tracing::{info, instrument};

pub use api::repositories::{list_all_repositories, GitHubPager, Repository, RepositoryPager};
pub use classifier::{is_gradable, student_identity_from, Classifier};
pub use config::{GradingConfig, ListingConfig};
pub use error::{GraderError, Result};
pub use partition::{partition, RandomShuffler, Shuffle};
pub use report::Assignment;

/// Lists every repository through `pager`, keeps the gradable ones and distributes them
/// over the configured graders.
///
/// Nothing is returned unless the complete listing succeeded.
#[instrument(skip_all, fields(prefix = %config.prefix()))]
pub async fn assign<P, S, F>(
    pager: &P,
    config: &GradingConfig,
    shuffler: &mut S,
    on_page: F,
) -> Result<Assignment>
where
    P: RepositoryPager,
    S: Shuffle,
    F: FnMut(u32, usize),
{
    if config.graders().is_empty() {
        return Err(GraderError::NoGraders);
    }

    let repositories = list_all_repositories(pager, on_page).await?;
    let listed = repositories.len();

    let classifier = Classifier::new(config);
    let gradable = classifier.filter(repositories);
    info!(
        "{} of {} repos with {} are ready to grade",
        gradable.len(),
        listed,
        config.prefix()
    );

    let groups = partition(gradable, config.graders(), shuffler)?;

    Ok(Assignment::new(config.prefix(), listed, groups))
}

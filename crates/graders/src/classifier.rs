use std::collections::HashSet;

use tracing::debug;

use crate::{api::repositories::Repository, config::GradingConfig};

/// Returns the student identity at the end of `repo_name`.
///
/// The name must contain `"{prefix}-"`. The identity is the last hyphen delimited segment
/// after its last occurrence, which lets a prefix stop short of the full assignment name.
/// An empty string means there is no such suffix.
///
/// ```
/// use graders::student_identity_from;
///
/// assert_eq!(student_identity_from("comp215-week01-intro-2017-danwallach", "comp215-week01"), "danwallach");
/// assert_eq!(student_identity_from("comp215-week01", "comp215-week01"), "");
/// ```
pub fn student_identity_from<'n>(repo_name: &'n str, prefix: &str) -> &'n str {
    let separator = format!("{prefix}-");
    let Some(start) = repo_name.rfind(&separator) else {
        return "";
    };

    let remainder = &repo_name[start + separator.len()..];
    match remainder.rfind('-') {
        Some(last) => &remainder[last + 1..],
        None => remainder,
    }
}

/// Decides if `repo_name` is a student repository that should be graded.
pub fn is_gradable(
    repo_name: &str,
    prefix: &str,
    graders: &HashSet<String>,
    ignored: &HashSet<String>,
) -> bool {
    let identity = student_identity_from(repo_name, prefix);

    !identity.is_empty()
        && repo_name.starts_with(prefix)
        && repo_name != prefix
        && !graders.contains(identity)
        && !ignored.contains(identity)
}

/// Applies the gradability rules of a [`GradingConfig`] to repository listings.
#[derive(Debug)]
pub struct Classifier {
    prefix: String,
    graders: HashSet<String>,
    ignored: HashSet<String>,
}

impl Classifier {
    pub fn new(config: &GradingConfig) -> Self {
        Self {
            prefix: config.prefix().to_string(),
            graders: config.graders().iter().cloned().collect(),
            ignored: config.ignored().iter().cloned().collect(),
        }
    }

    pub fn student_identity<'n>(&self, repo_name: &'n str) -> &'n str {
        student_identity_from(repo_name, &self.prefix)
    }

    pub fn is_gradable(&self, repo_name: &str) -> bool {
        is_gradable(repo_name, &self.prefix, &self.graders, &self.ignored)
    }

    /// Keeps the gradable repositories, preserving their order.
    pub fn filter(&self, repositories: Vec<Repository>) -> Vec<Repository> {
        repositories
            .into_iter()
            .filter(|repository| {
                let keep = self.is_gradable(&repository.name);
                if !keep {
                    debug!(repository = repository.name, "Skipping repository");
                }
                keep
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;

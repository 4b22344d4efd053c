use std::{collections::HashMap, fmt};

use crate::{api::repositories::Repository, classifier::student_identity_from};

/// The graders and the repositories each of them has to grade.
#[derive(Debug, Clone)]
pub struct Assignment {
    prefix: String,
    listed: usize,
    groups: HashMap<String, Vec<Repository>>,
}

impl Assignment {
    pub fn new(prefix: &str, listed: usize, groups: HashMap<String, Vec<Repository>>) -> Self {
        Self {
            prefix: prefix.to_string(),
            listed,
            groups,
        }
    }

    /// Number of repositories in the organization, gradable or not.
    pub fn listed(&self) -> usize {
        self.listed
    }

    pub fn gradable(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn groups(&self) -> &HashMap<String, Vec<Repository>> {
        &self.groups
    }

    /// Graders and their repositories, both sorted without regard to case.
    pub fn sorted(&self) -> Vec<(&str, Vec<&Repository>)> {
        let mut graders: Vec<&String> = self.groups.keys().collect();
        graders.sort_by_key(|grader| grader.to_lowercase());

        graders
            .into_iter()
            .map(|grader| {
                let mut repositories: Vec<&Repository> = self.groups[grader].iter().collect();
                repositories.sort_by_key(|repository| repository.name.to_lowercase());
                (grader.as_str(), repositories)
            })
            .collect()
    }
}

/// Renders the assignment as a Markdown document.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            writeln!(f, "# Grading assignments for (all repositories)")?;
        } else {
            writeln!(f, "# Grading assignments for `{}`", self.prefix)?;
        }
        writeln!(f)?;
        writeln!(f, "{} repositories ready to grade.", self.gradable())?;

        for (grader, repositories) in self.sorted() {
            writeln!(f)?;
            writeln!(f, "## {} ({} total)", grader, repositories.len())?;
            if !repositories.is_empty() {
                writeln!(f)?;
            }
            for repository in repositories {
                writeln!(
                    f,
                    "- [{}]({})",
                    student_identity_from(&repository.name, &self.prefix),
                    repository.clone_url
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

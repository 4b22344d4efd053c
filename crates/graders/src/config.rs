use std::collections::HashSet;

/// The placeholder used when no GitHub token has been configured.
pub const DEFAULT_TOKEN: &str = "YOUR_TOKEN_HERE";

/// The placeholder used when no GitHub organization has been configured.
pub const DEFAULT_PROJECT: &str = "YOUR_PROJECT_HERE";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Who grades and who is never graded for a single run.
///
/// Built once from the command line and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradingConfig {
    prefix: String,
    graders: Vec<String>,
    ignored: Vec<String>,
}

impl GradingConfig {
    /// Creates the configuration, dropping blank entries and repeated graders.
    ///
    /// Graders keep the order in which they were first listed.
    pub fn new<G, I>(prefix: impl Into<String>, graders: G, ignored: I) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            graders: unique_names(graders),
            ignored: unique_names(ignored),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn graders(&self) -> &[String] {
        &self.graders
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}

fn unique_names<N>(names: N) -> Vec<String>
where
    N: IntoIterator,
    N::Item: Into<String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| name.into().trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Connection settings for the GitHub organization listing.
#[derive(Clone, Debug)]
pub struct ListingConfig {
    pub token: String,
    pub project: String,
    pub api_url: String,
}

impl ListingConfig {
    /// Returns true while the token or the project still hold their placeholder values.
    pub fn uses_placeholders(&self) -> bool {
        self.token == DEFAULT_TOKEN || self.project == DEFAULT_PROJECT
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

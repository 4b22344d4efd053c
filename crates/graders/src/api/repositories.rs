use std::future::Future;

use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ListingConfig,
    error::{GraderError, Result},
};

/// A repository as listed by `GET /orgs/{org}/repos`. Other fields are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
}

/// One page at a time access to the repositories of an organization.
pub trait RepositoryPager {
    /// Fetches page `page` (1-based). An empty page means there are no more repositories.
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Repository>>>;
}

/// Requests pages in order until the first empty one.
///
/// `on_page` is called with the page number and the number of repositories on it after
/// every successful request. Any failing page aborts the listing.
pub async fn list_all_repositories<P, F>(pager: &P, mut on_page: F) -> Result<Vec<Repository>>
where
    P: RepositoryPager,
    F: FnMut(u32, usize),
{
    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
        let batch = pager.fetch_page(page).await?;
        on_page(page, batch.len());

        if batch.is_empty() {
            break;
        }

        repositories.extend(batch);
        page += 1;
    }

    info!(
        requests = page,
        repositories = repositories.len(),
        "Finished listing repositories"
    );
    Ok(repositories)
}

/// Lists organization repositories through the GitHub REST API.
pub struct GitHubPager {
    octocrab: Octocrab,
    project: String,
}

impl GitHubPager {
    pub fn new(config: &ListingConfig) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .base_uri(config.api_url.as_str())?
            .personal_token(config.token.clone())
            .build()?;

        Ok(Self {
            octocrab,
            project: config.project.clone(),
        })
    }
}

impl RepositoryPager for GitHubPager {
    #[instrument(skip(self), fields(project = %self.project))]
    async fn fetch_page(&self, page: u32) -> Result<Vec<Repository>> {
        let route = format!("/orgs/{}/repos?page={}", self.project, page);

        debug!("Requesting [{}]", route);
        let response = self.octocrab._get(route).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        if !status.is_success() {
            warn!(
                status_code = status.as_u16(),
                error_message = %body,
                "Listing repositories failed"
            );
            return Err(GraderError::Listing {
                page,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| GraderError::Json { page, source })
    }
}

#[cfg(test)]
#[path = "repositories_tests.rs"]
mod repositories_tests;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraderError>;

#[derive(Debug, Error)]
pub enum GraderError {
    #[error("No graders configured, cannot distribute repositories")]
    NoGraders,

    #[error("Failed to load repos from GitHub (page {page}, status {status}): {body}")]
    Listing { page: u32, status: u16, body: String },

    #[error("Failed to parse the repository list on page {page}: {source}")]
    Json {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("GitHub client error: {0}")]
    GitHub(#[from] octocrab::Error),
}

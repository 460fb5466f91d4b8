use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No GitHub token available; set GITHUB_TOKEN or run interactively")]
    MissingToken,

    #[error("No tracked repositories; select at least one repository")]
    NoRepositories,

    #[error("Invalid repository identifier '{0}', expected owner/name")]
    InvalidRepository(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Conditions that end the run before any repository is processed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MissingToken | Error::NoRepositories)
    }
}

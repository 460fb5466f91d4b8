pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod llm;
pub mod report;
pub mod credentials;
pub mod cli;

pub use config::{Config, ReportSettings, StoredConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use llm::{LLMProvider, OllamaProvider, Summarizer};
pub use report::ReportPipeline;

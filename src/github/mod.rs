pub mod client;
pub mod paginator;

pub use client::GitHubClient;
pub use paginator::{PageStop, Paged, Paginator};

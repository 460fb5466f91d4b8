use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;

/// Why a paginated listing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStop {
    /// A page came back empty.
    Exhausted,
    /// 409: the repository has no commit history.
    Conflict,
    /// Any other non-success status.
    Status(StatusCode),
    /// Request or decoding failure.
    Transport(String),
}

impl PageStop {
    /// Whether the listing ended for a reason other than running out of items.
    pub fn is_failure(&self) -> bool {
        matches!(self, PageStop::Status(_) | PageStop::Transport(_))
    }
}

impl fmt::Display for PageStop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageStop::Exhausted => write!(f, "exhausted"),
            PageStop::Conflict => write!(f, "empty repository (409)"),
            PageStop::Status(status) => write!(f, "HTTP {}", status),
            PageStop::Transport(err) => write!(f, "{}", err),
        }
    }
}

/// Items gathered before `stop`, in the order received.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub stop: PageStop,
}

impl<T> Paged<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            stop: self.stop,
        }
    }
}

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Requests pages 1, 2, ... until an empty page or a non-success response.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        per_page: u32,
    ) -> Paged<T> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        let stop = loop {
            tracing::debug!("Fetching: {} (page {})", url, page);
            let response = match self
                .client
                .get(url)
                .query(query)
                .query(&[("per_page", per_page), ("page", page)])
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => break PageStop::Transport(e.to_string()),
            };

            let status = response.status();
            if status == StatusCode::CONFLICT {
                break PageStop::Conflict;
            }
            if !status.is_success() {
                break PageStop::Status(status);
            }

            let batch: Vec<T> = match response.json().await {
                Ok(batch) => batch,
                Err(e) => break PageStop::Transport(format!("invalid page {}: {}", page, e)),
            };
            if batch.is_empty() {
                break PageStop::Exhausted;
            }

            items.extend(batch);
            page += 1;
        };

        Paged { items, stop }
    }
}

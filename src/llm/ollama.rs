use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::llm::provider::LLMProvider;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OllamaProvider {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

impl OllamaProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let request_body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        tracing::debug!("Sending {} prompt chars to {} ({})", prompt.len(), self.name(), model);
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::LLMApi(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LLMApi(format!(
                "Ollama API error ({}): {}",
                status, body
            )));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::LLMApi(format!("Failed to parse Ollama response: {}", e)))?;

        Ok(result.response.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}

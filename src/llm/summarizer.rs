use std::sync::Arc;

use crate::llm::parser::dedup_numbered_items;
use crate::llm::prompts::SummaryRequest;
use crate::llm::provider::LLMProvider;
use crate::models::{Commit, RepoId, Summary};

/// Turns a repository's commit subjects into a numbered change list.
pub struct Summarizer {
    llm: Arc<dyn LLMProvider>,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    /// Never fails: no commits gives `Summary::NoChanges` without calling the
    /// model, and any provider error gives `Summary::Unavailable`.
    pub async fn summarize(
        &self,
        repository: &RepoId,
        commits: &[Commit],
        language: &str,
        model: &str,
    ) -> Summary {
        if commits.is_empty() {
            return Summary::NoChanges;
        }

        let prompt = SummaryRequest::new(repository, commits, language).to_prompt();
        match self.llm.generate(model, &prompt).await {
            Ok(text) => Summary::Generated(dedup_numbered_items(&text)),
            Err(e) => {
                tracing::warn!("{} summary failed for {}: {}", self.llm.name(), repository, e);
                Summary::Unavailable(e.to_string())
            }
        }
    }
}

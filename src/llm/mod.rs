pub mod provider;
pub mod ollama;
pub mod prompts;
pub mod parser;
pub mod summarizer;

pub use provider::LLMProvider;
pub use ollama::OllamaProvider;
pub use prompts::SummaryRequest;
pub use parser::dedup_numbered_items;
pub use summarizer::Summarizer;

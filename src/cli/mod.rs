pub mod prompts;

pub use prompts::{ensure_settings, prompt_date_range, prompt_token, select_repositories};

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::StoredConfig;
use crate::error::Result;

/// Where an interactively entered token gets saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStore {
    /// `GITHUB_TOKEN=...` appended to the project `.env`.
    DotEnv,
    /// The user-global settings file.
    Settings,
}

impl TokenStore {
    pub const ALL: [TokenStore; 2] = [Self::DotEnv, Self::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DotEnv => ".env (project-local)",
            Self::Settings => "~/.gitreporter/config.json (user-global)",
        }
    }
}

/// Environment first, then the stored settings. Blank tokens count as absent.
pub fn resolve_token(env_token: Option<&str>, stored: &StoredConfig) -> Option<String> {
    env_token
        .into_iter()
        .chain(stored.github_token.as_deref())
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
}

pub fn save_token(
    token: &str,
    store: TokenStore,
    dotenv_path: &Path,
    settings_path: &Path,
    stored: &mut StoredConfig,
) -> Result<()> {
    match store {
        TokenStore::DotEnv => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dotenv_path)?;
            writeln!(file, "GITHUB_TOKEN={}", token)?;
            tracing::info!("Token saved to {}", dotenv_path.display());
        }
        TokenStore::Settings => {
            stored.github_token = Some(token.to_string());
            stored.save(settings_path)?;
            tracing::info!("Token saved to {}", settings_path.display());
        }
    }
    Ok(())
}

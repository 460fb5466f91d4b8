use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::github::client::DEFAULT_API_URL;
use crate::llm::ollama::DEFAULT_OLLAMA_URL;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_MODEL: &str = "mistral";
pub const LANGUAGES: [&str; 2] = ["English", "Русский"];
pub const MODELS: [&str; 2] = ["mistral", "llama3"];

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub ollama_url: String,
    pub output_dir: PathBuf,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let ollama_url = env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());

        let output_dir = env::var("GITREPORTER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));

        let settings_path = match env::var("GITREPORTER_CONFIG") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_settings_path()?,
        };

        Ok(Self {
            github_token,
            github_api_url,
            ollama_url,
            output_dir,
            settings_path,
        })
    }
}

/// `~/.gitreporter/config.json`
pub fn default_settings_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".gitreporter").join("config.json"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Settings persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_commits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked_repos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

impl StoredConfig {
    /// A missing or unreadable file yields empty settings.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Effective report settings, falling back to defaults for unset values.
    pub fn report_settings(&self) -> ReportSettings {
        let defaults = ReportSettings::default();
        ReportSettings {
            language: self.language.clone().unwrap_or(defaults.language),
            include_commits: self.include_commits.unwrap_or(defaults.include_commits),
            llm_model: self.llm_model.clone().unwrap_or(defaults.llm_model),
        }
    }
}

/// Per-run settings handed to the report pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub language: String,
    pub include_commits: bool,
    pub llm_model: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            include_commits: false,
            llm_model: DEFAULT_MODEL.to_string(),
        }
    }
}

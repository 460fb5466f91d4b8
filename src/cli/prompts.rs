use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password, Select};
use std::path::Path;

use crate::config::{StoredConfig, DEFAULT_LANGUAGE, DEFAULT_MODEL, LANGUAGES, MODELS};
use crate::credentials::TokenStore;
use crate::error::{Error, Result};
use crate::models::{parse_date, DateWindow, Repository, WindowPreset};

/// Fills in settings missing from `stored` and persists them if anything changed.
/// Without `interactive` the defaults are used.
pub fn ensure_settings(stored: &mut StoredConfig, path: &Path, interactive: bool) -> Result<()> {
    let mut changed = false;

    if stored.language.is_none() {
        let language = if interactive {
            select("Select report language", &LANGUAGES)?
        } else {
            DEFAULT_LANGUAGE.to_string()
        };
        stored.language = Some(language);
        changed = true;
    }

    if stored.include_commits.is_none() {
        stored.include_commits = Some(false);
        changed = true;
    }

    if stored.llm_model.is_none() {
        let model = if interactive {
            select("Select LLM model", &MODELS)?
        } else {
            DEFAULT_MODEL.to_string()
        };
        stored.llm_model = Some(model);
        changed = true;
    }

    if changed {
        stored.save(path)?;
    }
    Ok(())
}

fn select(prompt: &str, choices: &[&str]) -> Result<String> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(choices)
        .default(0)
        .interact_opt()?
        .ok_or(Error::Cancelled)?;
    Ok(choices[selection].to_string())
}

/// Asks for a personal access token and where to keep it.
pub fn prompt_token() -> Result<Option<(String, TokenStore)>> {
    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your GitHub Personal Access Token")
        .allow_empty_password(true)
        .interact()?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Ok(None);
    }

    let labels: Vec<_> = TokenStore::ALL.iter().map(|s| s.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Where to save the token?")
        .items(&labels)
        .default(0)
        .interact_opt()?
        .ok_or(Error::Cancelled)?;

    Ok(Some((token, TokenStore::ALL[selection])))
}

pub fn select_repositories(repos: &[Repository]) -> Result<Vec<String>> {
    let choices: Vec<String> = repos.iter().map(|r| r.id().to_string()).collect();
    if choices.is_empty() {
        return Ok(Vec::new());
    }

    let selections = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select repositories to track (space to toggle, enter to confirm)")
        .items(&choices)
        .interact_opt()?
        .ok_or(Error::Cancelled)?;

    Ok(selections.into_iter().map(|i| choices[i].clone()).collect())
}

pub fn prompt_date_range(today: NaiveDate) -> Result<DateWindow> {
    let mut labels: Vec<&str> = WindowPreset::ALL.iter().map(|p| p.label()).collect();
    labels.push("Custom");

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select commit range")
        .items(&labels)
        .default(0)
        .interact_opt()?
        .ok_or(Error::Cancelled)?;

    match WindowPreset::ALL.get(selection) {
        Some(preset) => Ok(DateWindow::preset(*preset, today)),
        None => {
            let since = prompt_date("Start date (YYYY-MM-DD)")?;
            let until = prompt_date("End date (YYYY-MM-DD)")?;
            Ok(DateWindow::new(since, until))
        }
    }
}

fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_date(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    parse_date(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_defaults_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut stored = StoredConfig::default();

        ensure_settings(&mut stored, &path, false).unwrap();

        assert_eq!(stored.language.as_deref(), Some("English"));
        assert_eq!(stored.include_commits, Some(false));
        assert_eq!(stored.llm_model.as_deref(), Some("mistral"));
        assert_eq!(StoredConfig::load(&path), stored);
    }

    #[test]
    fn test_complete_settings_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut stored = StoredConfig {
            language: Some("Русский".to_string()),
            include_commits: Some(true),
            llm_model: Some("llama3".to_string()),
            ..Default::default()
        };

        ensure_settings(&mut stored, &path, true).unwrap();

        assert!(!path.exists());
    }
}

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use gitreporter::cli::{ensure_settings, prompt_date_range, prompt_token, select_repositories};
use gitreporter::credentials::{resolve_token, save_token};
use gitreporter::models::{parse_date, DateWindow, RepoId, WindowPreset};
use gitreporter::{
    Config, Error, GitHubClient, OllamaProvider, ReportPipeline, Result, StoredConfig, Summarizer,
};

#[derive(Parser, Debug)]
#[command(name = "gitreporter")]
#[command(version = "0.1.0")]
#[command(about = "Summarize commit activity across tracked GitHub repositories")]
struct Args {
    /// First day of the window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    since: Option<NaiveDate>,

    /// Day after the last day of the window (YYYY-MM-DD), defaults to since + 1 day
    #[arg(long, value_parser = parse_date, requires = "since")]
    until: Option<NaiveDate>,

    /// Repository to report on (owner/name), overrides the tracked list
    #[arg(short, long = "repo")]
    repos: Vec<String>,

    /// Summary language for this run
    #[arg(short, long)]
    language: Option<String>,

    /// Ollama model for this run
    #[arg(short, long)]
    model: Option<String>,

    /// Include the flat commit list in the report
    #[arg(long)]
    include_commits: bool,

    /// Settings file (defaults to ~/.gitreporter/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Never prompt; use defaults and fail on missing token or repositories
    #[arg(long)]
    non_interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitreporter=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args).await {
        Err(Error::Cancelled) => {
            println!("Cancelled by user.");
            Ok(())
        }
        Err(e) if e.is_fatal() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.config {
        config.settings_path = path;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    let interactive = !args.non_interactive;

    // Settings
    let mut stored = StoredConfig::load(&config.settings_path);
    ensure_settings(&mut stored, &config.settings_path, interactive)?;
    let mut settings = stored.report_settings();
    if let Some(language) = args.language {
        settings.language = language;
    }
    if let Some(model) = args.model {
        settings.llm_model = model;
    }
    settings.include_commits |= args.include_commits;

    // Credential
    let token = obtain_token(&config, &mut stored, interactive)?;
    let github = GitHubClient::with_base_url(&token, &config.github_api_url)?;

    // Tracked repositories
    let tracked = if args.repos.is_empty() {
        tracked_repositories(&github, &mut stored, &config.settings_path, interactive).await?
    } else {
        args.repos
    };
    let repositories = parse_repositories(&tracked)?;

    // Window
    let today = Local::now().date_naive();
    let window = match (args.since, args.until) {
        (Some(since), Some(until)) => DateWindow::new(since, until),
        (Some(since), None) => DateWindow::new(since, since + Duration::days(1)),
        _ if interactive => prompt_date_range(today)?,
        _ => DateWindow::preset(WindowPreset::Today, today),
    };

    tracing::info!(
        "Reporting {} repositories for {} with {}",
        repositories.len(),
        window,
        settings.llm_model
    );

    let llm = OllamaProvider::new(&config.ollama_url)?;
    let pipeline = ReportPipeline::new(
        github,
        Summarizer::new(Arc::new(llm)),
        settings,
        &config.output_dir,
    );
    let report = pipeline.run(&repositories, &window, today).await?;

    for repo in report.degraded() {
        tracing::warn!("{} degraded: {:?}", repo.repository, repo.status);
    }

    Ok(())
}

fn obtain_token(config: &Config, stored: &mut StoredConfig, interactive: bool) -> Result<String> {
    if let Some(token) = resolve_token(config.github_token.as_deref(), stored) {
        return Ok(token);
    }
    if !interactive {
        return Err(Error::MissingToken);
    }

    let (token, store) = prompt_token()?.ok_or(Error::MissingToken)?;
    save_token(&token, store, Path::new(".env"), &config.settings_path, stored)?;
    Ok(token)
}

async fn tracked_repositories(
    github: &GitHubClient,
    stored: &mut StoredConfig,
    settings_path: &Path,
    interactive: bool,
) -> Result<Vec<String>> {
    if !stored.tracked_repos.is_empty() {
        return Ok(stored.tracked_repos.clone());
    }
    if !interactive {
        return Err(Error::NoRepositories);
    }

    let available = github.list_repositories().await?;
    let selected = select_repositories(&available)?;
    if selected.is_empty() {
        return Err(Error::NoRepositories);
    }

    stored.tracked_repos = selected.clone();
    stored.save(settings_path)?;
    Ok(selected)
}

fn parse_repositories(tracked: &[String]) -> Result<Vec<RepoId>> {
    let repositories: Vec<RepoId> = tracked
        .iter()
        .filter_map(|id| match id.parse::<RepoId>() {
            Ok(repo) => Some(repo),
            Err(e) => {
                tracing::warn!("Skipping {}", e);
                None
            }
        })
        .collect();

    if repositories.is_empty() {
        return Err(Error::NoRepositories);
    }
    Ok(repositories)
}

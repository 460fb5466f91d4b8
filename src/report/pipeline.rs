use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ReportSettings;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::llm::Summarizer;
use crate::models::{CommitsByRepo, DateWindow, RepoId, RepoReport, RepoStatus, RunReport, Summary};
use crate::report::artifact::write_artifact;
use crate::report::formatter::{
    format_commit_report, format_repo_summary, render_artifact, report_heading,
};

/// Fetches, summarizes and persists one report run, one repository at a time.
pub struct ReportPipeline {
    github: GitHubClient,
    summarizer: Summarizer,
    settings: ReportSettings,
    output_dir: PathBuf,
}

impl ReportPipeline {
    pub fn new(
        github: GitHubClient,
        summarizer: Summarizer,
        settings: ReportSettings,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            github,
            summarizer,
            settings,
            output_dir: output_dir.into(),
        }
    }

    pub async fn run(
        &self,
        repositories: &[RepoId],
        window: &DateWindow,
        today: NaiveDate,
    ) -> Result<RunReport> {
        if window.is_inverted() {
            tracing::warn!("Window start {} is after its end {}", window.since, window.until);
        }

        // Step 1: Fetch commits, one repository after another
        let mut commits_by_repo = CommitsByRepo::new();
        let mut fetch_errors = Vec::with_capacity(repositories.len());
        for repo in repositories {
            if commits_by_repo.get(repo).is_some() {
                tracing::warn!("{} is tracked twice, skipping the repeat", repo);
                continue;
            }
            let spinner = spinner(format!("Fetching commits for {}", repo));
            let paged = self.github.fetch_commits(repo, window).await;
            spinner.finish_and_clear();

            tracing::info!("{}: {} commit(s)", repo, paged.items.len());
            fetch_errors.push(paged.stop.is_failure().then(|| paged.stop.to_string()));
            commits_by_repo.insert(repo.clone(), paged.items);
        }

        // Step 2: Commit list
        let commit_report =
            format_commit_report(&commits_by_repo, window, self.settings.include_commits);
        if self.settings.include_commits {
            println!("{}", commit_report);
        }

        let heading = report_heading(today, commits_by_repo.len());
        println!("\n{}\n", heading);

        // Step 3: Summaries, printed as they arrive
        let mut reports = Vec::with_capacity(commits_by_repo.len());
        for ((repo, commits), fetch_error) in commits_by_repo.iter().zip(fetch_errors) {
            let spinner = spinner(format!("Summarizing {}", repo));
            let summary = self
                .summarizer
                .summarize(repo, commits, &self.settings.language, &self.settings.llm_model)
                .await;
            spinner.finish_and_clear();

            let status = match (&summary, fetch_error) {
                (_, Some(reason)) => RepoStatus::FetchError(reason),
                (Summary::Unavailable(reason), None) => RepoStatus::SummarizeError(reason.clone()),
                (Summary::NoChanges, None) => RepoStatus::Empty,
                (Summary::Generated(_), None) => RepoStatus::Success,
            };

            let report = RepoReport {
                repository: repo.clone(),
                commits: commits.to_vec(),
                status,
                summary,
            };
            println!("{}", format_repo_summary(&report));
            reports.push(report);
        }

        // Step 4: Persist once everything is in
        let contents = render_artifact(&commit_report, &heading, &reports);
        let artifact_path = write_artifact(&self.output_dir, window, &contents)?;
        tracing::info!("Report written to: {}", artifact_path.display());

        Ok(RunReport {
            heading,
            commit_report,
            repositories: reports,
            artifact_path,
        })
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

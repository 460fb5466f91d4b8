use chrono::NaiveDate;

use crate::models::{CommitsByRepo, DateWindow, RepoReport, DATE_FORMAT};

/// Flat commit list grouped by repository, or an empty string when commit
/// details are not requested.
pub fn format_commit_report(
    commits_by_repo: &CommitsByRepo,
    window: &DateWindow,
    include_commits: bool,
) -> String {
    if !include_commits {
        return String::new();
    }

    let mut lines = vec![format!("# Commit List: {}\n", window)];
    for (repo, commits) in commits_by_repo.iter() {
        lines.push(format!("## {}", repo));
        if commits.is_empty() {
            lines.push("- No commits".to_string());
        }
        for commit in commits {
            lines.push(format!("- {}", commit.subject));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn report_heading(today: NaiveDate, repo_count: usize) -> String {
    format!("{} ({} repositories)", today.format(DATE_FORMAT), repo_count)
}

/// One `REPO:` block, followed by a blank separator line.
pub fn format_repo_summary(report: &RepoReport) -> String {
    format!("REPO: {}\n{}\n", report.repository, report.summary.text().trim())
}

/// Full artifact text: optional commit report, heading, then every summary.
pub fn render_artifact(commit_report: &str, heading: &str, repos: &[RepoReport]) -> String {
    let mut output = String::new();
    output.push_str(commit_report);
    output.push_str(&format!("\n{}\n\n", heading));
    for repo in repos {
        output.push_str(&format_repo_summary(repo));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Commit, RepoId, RepoStatus, Summary};

    fn window() -> DateWindow {
        DateWindow::parse("2024-01-01", "2024-01-02").unwrap()
    }

    fn sample() -> CommitsByRepo {
        let repo = RepoId::new("me", "repo");
        let mut map = CommitsByRepo::new();
        map.insert(repo.clone(), vec![Commit::new("Fix login bug", repo)]);
        map
    }

    #[test]
    fn test_suppressed_without_details() {
        assert_eq!(format_commit_report(&sample(), &window(), false), "");
        assert_eq!(format_commit_report(&CommitsByRepo::new(), &window(), false), "");
    }

    #[test]
    fn test_report_content() {
        let report = format_commit_report(&sample(), &window(), true);
        assert_eq!(
            report,
            "# Commit List: 2024-01-01 — 2024-01-02\n\n## me/repo\n- Fix login bug\n"
        );
    }

    #[test]
    fn test_empty_repo_and_order() {
        let other = RepoId::new("me", "quiet");
        let repo = RepoId::new("me", "repo");
        let mut map = CommitsByRepo::new();
        map.insert(other.clone(), Vec::new());
        map.insert(
            repo.clone(),
            vec![
                Commit::new("Second", repo.clone()),
                Commit::new("First", repo.clone()),
            ],
        );

        let report = format_commit_report(&map, &window(), true);
        assert_eq!(
            report,
            "# Commit List: 2024-01-01 — 2024-01-02\n\n\
             ## me/quiet\n- No commits\n\n\
             ## me/repo\n- Second\n- First\n"
        );
    }

    #[test]
    fn test_heading() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(report_heading(today, 2), "2024-05-07 (2 repositories)");
    }

    #[test]
    fn test_render_artifact() {
        let repos = vec![
            RepoReport {
                repository: RepoId::new("me", "repo"),
                commits: Vec::new(),
                status: RepoStatus::Success,
                summary: Summary::Generated("\n1. Login works\n".to_string()),
            },
            RepoReport {
                repository: RepoId::new("me", "quiet"),
                commits: Vec::new(),
                status: RepoStatus::Empty,
                summary: Summary::NoChanges,
            },
        ];

        let artifact = render_artifact("", "2024-05-07 (2 repositories)", &repos);
        assert_eq!(
            artifact,
            "\n2024-05-07 (2 repositories)\n\n\
             REPO: me/repo\n1. Login works\n\n\
             REPO: me/quiet\nNo significant changes.\n\n"
        );
    }
}

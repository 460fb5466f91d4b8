use serde::{Deserialize, Serialize};

use super::repository::RepoId;

/// Item of the upstream commit listing; only the message is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSummary {
    #[serde(default)]
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub subject: String,
    pub repository: RepoId,
}

impl Commit {
    pub fn new(subject: impl Into<String>, repository: RepoId) -> Self {
        Self {
            subject: subject.into(),
            repository,
        }
    }

    pub fn from_summary(summary: &CommitSummary, repository: &RepoId) -> Self {
        Self::new(subject_line(&summary.commit.message), repository.clone())
    }
}

/// First line of a commit message.
pub fn subject_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_line_drops_body() {
        assert_eq!(subject_line("Fix login\n\nLonger body text"), "Fix login");
        assert_eq!(subject_line("Windows line\r\nbody"), "Windows line");
        assert_eq!(subject_line(""), "");
    }

    #[test]
    fn test_from_summary() {
        let summary: CommitSummary = serde_json::from_str(
            r#"{"sha": "abc123", "commit": {"message": "Add export\n\nDetails", "author": {}}}"#,
        )
        .unwrap();
        let repo = RepoId::new("me", "repo");
        let commit = Commit::from_summary(&summary, &repo);
        assert_eq!(commit.subject, "Add export");
        assert_eq!(commit.repository, repo);
    }
}

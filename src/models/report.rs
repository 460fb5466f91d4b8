use std::path::PathBuf;

use super::commit::Commit;
use super::repository::RepoId;

/// Commits per repository, in tracked-list order.
#[derive(Debug, Clone, Default)]
pub struct CommitsByRepo {
    entries: Vec<(RepoId, Vec<Commit>)>,
}

impl CommitsByRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the commits of an already present repository in place.
    pub fn insert(&mut self, repository: RepoId, commits: Vec<Commit>) {
        match self.entries.iter_mut().find(|(r, _)| *r == repository) {
            Some(entry) => entry.1 = commits,
            None => self.entries.push((repository, commits)),
        }
    }

    pub fn get(&self, repository: &RepoId) -> Option<&[Commit]> {
        self.entries
            .iter()
            .find(|(r, _)| r == repository)
            .map(|(_, c)| c.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RepoId, &[Commit])> {
        self.entries.iter().map(|(r, c)| (r, c.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Generated(String),
    NoChanges,
    Unavailable(String),
}

impl Summary {
    pub const NO_CHANGES: &'static str = "No significant changes.";
    pub const UNAVAILABLE: &'static str = "[LLM summary unavailable]";

    /// Text written to the console and the artifact.
    pub fn text(&self) -> &str {
        match self {
            Summary::Generated(text) => text,
            Summary::NoChanges => Self::NO_CHANGES,
            Summary::Unavailable(_) => Self::UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    Success,
    Empty,
    FetchError(String),
    SummarizeError(String),
}

impl RepoStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, RepoStatus::FetchError(_) | RepoStatus::SummarizeError(_))
    }
}

#[derive(Debug, Clone)]
pub struct RepoReport {
    pub repository: RepoId,
    pub commits: Vec<Commit>,
    pub status: RepoStatus,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub heading: String,
    pub commit_report: String,
    pub repositories: Vec<RepoReport>,
    pub artifact_path: PathBuf,
}

impl RunReport {
    pub fn degraded(&self) -> impl Iterator<Item = &RepoReport> {
        self.repositories.iter().filter(|r| r.status.is_degraded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_by_repo_keeps_insertion_order() {
        let mut map = CommitsByRepo::new();
        let b = RepoId::new("me", "b");
        let a = RepoId::new("me", "a");
        map.insert(b.clone(), vec![Commit::new("one", b.clone())]);
        map.insert(a.clone(), Vec::new());
        map.insert(b.clone(), Vec::new());

        let order: Vec<_> = map.iter().map(|(r, _)| r.to_string()).collect();
        assert_eq!(order, vec!["me/b", "me/a"]);
        assert_eq!(map.get(&b).map(|c| c.len()), Some(0));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_summary_sentinels() {
        assert_eq!(Summary::NoChanges.text(), "No significant changes.");
        assert_eq!(
            Summary::Unavailable("timeout".into()).text(),
            "[LLM summary unavailable]"
        );
        assert_eq!(Summary::Generated("1. Item".into()).text(), "1. Item");
    }
}

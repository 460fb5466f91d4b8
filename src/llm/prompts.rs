use crate::models::{Commit, RepoId};

#[derive(Debug, Clone)]
pub struct SummaryRequest<'a> {
    pub repository: &'a RepoId,
    pub commits: &'a [Commit],
    pub language: &'a str,
}

impl<'a> SummaryRequest<'a> {
    pub fn new(repository: &'a RepoId, commits: &'a [Commit], language: &'a str) -> Self {
        Self {
            repository,
            commits,
            language,
        }
    }

    /// Commit subjects, one per line, in listing order.
    pub fn changes_text(&self) -> String {
        self.commits
            .iter()
            .map(|c| c.subject.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_prompt(&self) -> String {
        format!(
            "For repository '{repo}', analyze the following project changes. \
             Output ONLY a numbered list of meaningful, user-facing or business-relevant changes. \
             EXCLUDE any points about Dockerfile, docker, yaml, yml, config, workflow, CI/CD, \
             documentation, readme, version bumps, or other technical/configuration-only changes. \
             Each item must be a clear, concise sentence describing what was actually improved, \
             fixed, or added for the end user or business logic. \
             No intro, no conclusion, no commit hashes, no word 'commit'. \
             Output in {language}.\n{changes}",
            repo = self.repository,
            language = self.language,
            changes = self.changes_text(),
        )
    }
}

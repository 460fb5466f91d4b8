use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Entry from the authenticated user's repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub private: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

impl Repository {
    pub fn id(&self) -> RepoId {
        RepoId::new(&self.owner.login, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_id() {
        let id: RepoId = "me/repo".parse().unwrap();
        assert_eq!(id.owner, "me");
        assert_eq!(id.name, "repo");
        assert_eq!(id.to_string(), "me/repo");
    }

    #[test]
    fn test_reject_malformed_repo_id() {
        for bad in ["", "repo", "/repo", "me/", "a/b/c", "/"] {
            assert!(bad.parse::<RepoId>().is_err(), "accepted {:?}", bad);
        }
    }
}

//! Repository and issue references
//!
//! Parses the `owner/name` and `owner/name#number` forms used on the
//! command line and in `GITHUB_REPOSITORY`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a repository or issue reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRefError {
    /// Repository was not of the form `owner/name`
    #[error("invalid repository '{0}', expected owner/name")]
    InvalidRepo(String),

    /// Issue reference was not of the form `owner/name#number`
    #[error("invalid issue reference '{0}', expected owner/name#number")]
    InvalidIssue(String),
}

/// A GitHub repository (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Create a repository reference from its parts
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = ParseRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            },
            _ => Err(ParseRefError::InvalidRepo(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// An issue in a specific repository (`owner/name#number`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueLocator {
    /// Repository holding the issue
    pub repo: RepoRef,
    /// Issue number
    pub number: u64,
}

impl FromStr for IssueLocator {
    type Err = ParseRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParseRefError::InvalidIssue(s.to_string());

        let (repo, number) = s.rsplit_once('#').ok_or_else(invalid)?;
        let repo = repo.parse::<RepoRef>().map_err(|_| invalid())?;
        let number = number.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self { repo, number })
    }
}

impl fmt::Display for IssueLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

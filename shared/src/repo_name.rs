use std::fmt;

use crate::error::WorkflowError;

/// Message shown when an `owner/repo` string does not parse.
pub const INVALID_REPO_FORMAT: &str = "Invalid repository format. Use owner/repo";

/// A GitHub repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFullName {
    /// Account or organisation.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoFullName {
    /// Parses `owner/repo`: exactly one `/`, both halves non-empty after
    /// trimming.
    pub fn parse(input: &str) -> Result<Self, WorkflowError> {
        let mut parts = input.split('/');
        let (Some(owner), Some(repo), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(WorkflowError::invalid(INVALID_REPO_FORMAT));
        };
        let (owner, repo) = (owner.trim(), repo.trim());
        if owner.is_empty() || repo.is_empty() {
            return Err(WorkflowError::invalid(INVALID_REPO_FORMAT));
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `/api/repos/{owner}/{repo}` with both segments percent-encoded.
    pub fn api_path(&self) -> String {
        format!(
            "/api/repos/{}/{}",
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        )
    }
}

impl fmt::Display for RepoFullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

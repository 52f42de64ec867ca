use serde_json::json;

use crate::{
    error::WorkflowError,
    http::ApiRequest,
    repo_name::RepoFullName,
    workflow::{Inflight, WorkflowResult},
};

/// Editable OG post fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgPostField {
    /// `owner/repo`.
    RepoFullName,
    /// Numeric tweet id.
    TweetId,
}

/// OG Posts tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OgPostsState {
    /// `owner/repo` input.
    pub repo_full_name: String,
    /// Tweet id input.
    pub tweet_id: String,
    /// Loading counter.
    pub inflight: Inflight,
    /// Last set/get outcome.
    pub result: Option<WorkflowResult>,
}

impl OgPostsState {
    /// Applies an input edit.
    pub fn edit(&mut self, field: OgPostField, value: String) {
        match field {
            OgPostField::RepoFullName => self.repo_full_name = value,
            OgPostField::TweetId => self.tweet_id = value,
        }
    }

    /// `POST /api/repos/{owner}/{repo}/og-post` with `{tweetId}`.
    pub fn plan_set(&self) -> Result<ApiRequest, WorkflowError> {
        if self.repo_full_name.trim().is_empty() {
            return Err(WorkflowError::invalid("Repository and tweet ID are required."));
        }
        let repo = RepoFullName::parse(&self.repo_full_name)?;
        let tweet_id = self.tweet_id.trim();
        if tweet_id.is_empty() {
            return Err(WorkflowError::invalid("Repository and tweet ID are required."));
        }
        Ok(ApiRequest::post(
            format!("{}/og-post", repo.api_path()),
            json!({ "tweetId": tweet_id }),
        ))
    }

    /// `GET /api/repos/{owner}/{repo}/og-post`.
    pub fn plan_get(&self) -> Result<ApiRequest, WorkflowError> {
        if self.repo_full_name.trim().is_empty() {
            return Err(WorkflowError::invalid("Repository is required."));
        }
        let repo = RepoFullName::parse(&self.repo_full_name)?;
        Ok(ApiRequest::get(format!("{}/og-post", repo.api_path())))
    }
}

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{ApiError, WorkflowError},
    http::ApiRequest,
    repo_name::RepoFullName,
    workflow::{Inflight, WorkflowResult},
};

/// Editable repository fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoField {
    /// Add panel: owning user.
    UserId,
    /// Add panel: `owner/repo`.
    RepoFullName,
    /// Add panel: optional webhook secret.
    WebhookSecret,
    /// Context panel: `owner/repo`.
    ContextRepo,
    /// List panel: owning user.
    ListUserId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddRepoBody<'a> {
    repo_full_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_secret: Option<&'a str>,
}

/// Repositories tab: add, context and list panels with one shared loading
/// flag and three results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReposState {
    /// Add: user id.
    pub user_id: String,
    /// Add: `owner/repo`.
    pub repo_full_name: String,
    /// Add: webhook secret.
    pub webhook_secret: String,
    /// Context: `owner/repo`.
    pub context_repo: String,
    /// List: user id.
    pub list_user_id: String,
    /// Shared loading counter.
    pub inflight: Inflight,
    /// Add outcome.
    pub add_result: Option<WorkflowResult>,
    /// Context outcome.
    pub context_result: Option<WorkflowResult>,
    /// List outcome.
    pub list_result: Option<WorkflowResult>,
}

impl ReposState {
    /// Applies an input edit.
    pub fn edit(&mut self, field: RepoField, value: String) {
        match field {
            RepoField::UserId => self.user_id = value,
            RepoField::RepoFullName => self.repo_full_name = value,
            RepoField::WebhookSecret => self.webhook_secret = value,
            RepoField::ContextRepo => self.context_repo = value,
            RepoField::ListUserId => self.list_user_id = value,
        }
    }

    /// `POST /api/users/{userId}/repos`.
    pub fn plan_add(&self) -> Result<ApiRequest, WorkflowError> {
        let user_id = self.user_id.trim();
        let repo_full_name = self.repo_full_name.trim();
        if user_id.is_empty() || repo_full_name.is_empty() {
            return Err(WorkflowError::invalid("User ID and repository are required."));
        }
        let webhook_secret = Some(self.webhook_secret.trim()).filter(|value| !value.is_empty());
        let body = AddRepoBody {
            repo_full_name,
            webhook_secret,
        };
        ApiRequest::post_json(format!("/api/users/{}/repos", urlencoding::encode(user_id)), &body)
            .map_err(|err: ApiError| WorkflowError::invalid(err.to_string()))
    }

    /// `GET /api/repos/{owner}/{repo}/context`.
    pub fn plan_context(&self) -> Result<ApiRequest, WorkflowError> {
        if self.context_repo.trim().is_empty() {
            return Err(WorkflowError::invalid("Repository is required."));
        }
        let repo = RepoFullName::parse(&self.context_repo)?;
        Ok(ApiRequest::get(format!("{}/context", repo.api_path())))
    }

    /// `GET /api/users/{userId}/repos`.
    pub fn plan_list(&self) -> Result<ApiRequest, WorkflowError> {
        let user_id = self.list_user_id.trim();
        if user_id.is_empty() {
            return Err(WorkflowError::invalid("User ID is required."));
        }
        Ok(ApiRequest::get(format!("/api/users/{}/repos", urlencoding::encode(user_id))))
    }
}

/// One row of the user repository table.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoRow {
    /// `owner/repo`.
    pub repo_full_name: String,
    /// Whether monitoring is active.
    pub is_active: bool,
    /// Parsed creation timestamp.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Creation timestamp as sent, for values that do not parse.
    pub created_at_raw: Option<String>,
}

impl RepoRow {
    pub(crate) fn from_value(value: &Value) -> Self {
        let text = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| value.get(*name).and_then(Value::as_str))
                .map(str::to_string)
        };
        let is_active = ["is_active", "isActive"]
            .iter()
            .find_map(|name| value.get(*name))
            .map(|flag| match flag {
                Value::Bool(flag) => *flag,
                Value::Number(number) => number.as_i64().unwrap_or(0) != 0,
                _ => false,
            })
            .unwrap_or(false);
        let created_at_raw = text(&["created_at", "createdAt"]);
        Self {
            repo_full_name: text(&["repo_full_name", "repoFullName"]).unwrap_or_default(),
            is_active,
            created_at: created_at_raw.as_deref().and_then(parse_timestamp),
            created_at_raw,
        }
    }

    /// Creation time in epoch milliseconds, for the browser's locale
    /// formatter.
    pub fn created_at_millis(&self) -> Option<i64> {
        self.created_at.map(|ts| ts.timestamp_millis())
    }
}

/// Accepts RFC 3339 and the `YYYY-MM-DD HH:MM:SS` form SQLite emits (UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// How a list-repos payload is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoListing {
    /// Non-empty `repos` array.
    Table(Vec<RepoRow>),
    /// `repos` is an empty array.
    Empty,
    /// Anything else; shown as JSON.
    Raw,
}

impl RepoListing {
    /// Classifies a successful `/api/users/{id}/repos` payload.
    pub fn classify(data: &Value) -> Self {
        match data.get("repos") {
            Some(Value::Array(items)) if items.is_empty() => RepoListing::Empty,
            Some(Value::Array(items)) => {
                RepoListing::Table(items.iter().map(RepoRow::from_value).collect())
            },
            _ => RepoListing::Raw,
        }
    }
}

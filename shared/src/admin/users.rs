use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, WorkflowError},
    http::ApiRequest,
    workflow::{Inflight, WorkflowResult},
};

/// Subscription tier accepted by `/api/users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Default tier.
    #[default]
    Free,
    /// Paid tier.
    Pro,
    /// Contract tier.
    Enterprise,
}

impl Tier {
    /// Every tier in selector order.
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Pro, Tier::Enterprise];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Pro => "pro",
            Tier::Enterprise => "enterprise",
        }
    }

    /// Parses a wire value; unknown values fall back to [`Tier::Free`].
    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// Required user id.
    UserId,
    /// Optional GitHub login.
    GithubUsername,
    /// Optional display name.
    DisplayName,
    /// Optional email.
    Email,
    /// Lookup panel id.
    LookupId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsertUserBody<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    tier: Tier,
}

fn optional(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|value| !value.is_empty())
}

/// Users tab: upsert and lookup panels sharing one loading flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    /// Upsert: user id.
    pub user_id: String,
    /// Upsert: GitHub login.
    pub github_username: String,
    /// Upsert: display name.
    pub display_name: String,
    /// Upsert: email.
    pub email: String,
    /// Upsert: tier.
    pub tier: Tier,
    /// Lookup: user id.
    pub lookup_id: String,
    /// Shared loading counter.
    pub inflight: Inflight,
    /// Upsert outcome.
    pub upsert_result: Option<WorkflowResult>,
    /// Lookup outcome.
    pub lookup_result: Option<WorkflowResult>,
}

impl UsersState {
    /// Applies an input edit.
    pub fn edit(&mut self, field: UserField, value: String) {
        match field {
            UserField::UserId => self.user_id = value,
            UserField::GithubUsername => self.github_username = value,
            UserField::DisplayName => self.display_name = value,
            UserField::Email => self.email = value,
            UserField::LookupId => self.lookup_id = value,
        }
    }

    /// `POST /api/users`; blank optional fields are omitted.
    pub fn plan_upsert(&self) -> Result<ApiRequest, WorkflowError> {
        let user_id = optional(&self.user_id)
            .ok_or_else(|| WorkflowError::invalid("User ID is required."))?;
        let body = UpsertUserBody {
            user_id,
            github_username: optional(&self.github_username),
            display_name: optional(&self.display_name),
            email: optional(&self.email),
            tier: self.tier,
        };
        ApiRequest::post_json("/api/users", &body)
            .map_err(|err: ApiError| WorkflowError::invalid(err.to_string()))
    }

    /// `GET /api/users/{userId}`.
    pub fn plan_lookup(&self) -> Result<ApiRequest, WorkflowError> {
        let lookup_id = optional(&self.lookup_id)
            .ok_or_else(|| WorkflowError::invalid("User ID is required."))?;
        Ok(ApiRequest::get(format!("/api/users/{}", urlencoding::encode(lookup_id))))
    }
}

//! Signed-in user models for the `/api/me` surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    admin::RepoRow,
    error::WorkflowError,
    http::ApiRequest,
    repo_name::RepoFullName,
};

/// `GET /api/me` path.
pub const ME_PATH: &str = "/api/me";
/// `/api/me/repos` path.
pub const MY_REPOS_PATH: &str = "/api/me/repos";
/// `POST /auth/logout` path.
pub const LOGOUT_PATH: &str = "/auth/logout";
/// Browser redirect that starts GitHub OAuth.
pub const GITHUB_LOGIN_PATH: &str = "/auth/github";

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    /// Stable user id.
    #[serde(alias = "userId", alias = "user_id")]
    pub id: String,
    /// GitHub login.
    #[serde(alias = "githubUsername", alias = "github_username", alias = "login")]
    pub username: String,
    /// Display name.
    #[serde(alias = "displayName", alias = "display_name")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(alias = "avatarUrl", alias = "avatar_url")]
    pub avatar: Option<String>,
    /// Subscription tier.
    pub tier: Option<String>,
    /// Session token, when the backend hands one out.
    pub token: Option<String>,
}

impl CurrentUser {
    /// Parses `/api/me`, accepting both `{user: {..}}` and a bare object.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let user = payload.get("user").filter(|user| user.is_object()).unwrap_or(payload);
        let mut parsed: CurrentUser = serde_json::from_value(user.clone()).ok()?;
        if parsed.token.is_none() {
            parsed.token = payload.get("token").and_then(Value::as_str).map(str::to_string);
        }
        (!parsed.id.is_empty() || !parsed.username.is_empty()).then_some(parsed)
    }

    /// Value written to `gitlogsAuthToken`: the session token, else the id.
    pub fn session_marker(&self) -> String {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .unwrap_or(if self.id.is_empty() { self.username.as_str() } else { self.id.as_str() })
            .to_string()
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.username.as_str())
    }
}

/// A repository the signed-in user monitors.
#[derive(Debug, Clone, PartialEq)]
pub struct MyRepo {
    /// Row data.
    pub row: RepoRow,
}

impl MyRepo {
    /// Parses `{repos: [..]}` or a bare array.
    pub fn list_from_payload(payload: &Value) -> Vec<Self> {
        let items = payload
            .get("repos")
            .and_then(Value::as_array)
            .or_else(|| payload.as_array());
        items
            .map(|items| {
                items
                    .iter()
                    .map(|item| MyRepo {
                        row: RepoRow::from_value(item),
                    })
                    .filter(|repo| !repo.row.repo_full_name.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `DELETE /api/me/repos/{owner}/{repo}`.
    pub fn remove_request(&self) -> Result<ApiRequest, WorkflowError> {
        let repo = RepoFullName::parse(&self.row.repo_full_name)?;
        Ok(ApiRequest::delete(format!(
            "{}/{}/{}",
            MY_REPOS_PATH,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.repo)
        )))
    }
}

/// `POST /api/me/repos` with `{repoFullName}`.
pub fn add_my_repo_request(input: &str) -> Result<ApiRequest, WorkflowError> {
    let repo = RepoFullName::parse(input)?;
    Ok(ApiRequest::post(
        MY_REPOS_PATH,
        serde_json::json!({ "repoFullName": repo.to_string() }),
    ))
}

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_user_with_top_level_token() {
        let user = CurrentUser::from_payload(&json!({
            "user": {"userId": "42", "githubUsername": "octocat", "avatarUrl": "https://a"},
            "token": "sess-1"
        }))
        .expect("user");
        assert_eq!(user.id, "42");
        assert_eq!(user.username, "octocat");
        assert_eq!(user.session_marker(), "sess-1");
        assert_eq!(user.display_name(), "octocat");
    }

    #[test]
    fn marker_falls_back_to_id() {
        let user = CurrentUser::from_payload(&json!({"id": "7", "name": "Ada"})).expect("user");
        assert_eq!(user.session_marker(), "7");
        assert_eq!(user.display_name(), "Ada");
        assert!(CurrentUser::from_payload(&json!({})).is_none());
    }

    #[test]
    fn repos_accept_both_shapes() {
        let wrapped =
            MyRepo::list_from_payload(&json!({"repos": [{"repoFullName": "a/b", "isActive": 1}]}));
        assert_eq!(wrapped.len(), 1);
        assert!(wrapped[0].row.is_active);
        let bare = MyRepo::list_from_payload(&json!([{"repo_full_name": "c/d"}, {}]));
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[0].row.repo_full_name, "c/d");
    }

    #[test]
    fn add_and_remove_requests() {
        let add = add_my_repo_request(" a / b ").expect("valid");
        assert_eq!(add.method, Method::POST);
        assert_eq!(add.body, Some(json!({"repoFullName": "a/b"})));
        assert!(add_my_repo_request("nope").is_err());

        let repo = &MyRepo::list_from_payload(&json!([{"repoFullName": "a/b"}]))[0];
        let remove = repo.remove_request().expect("valid");
        assert_eq!(remove.method, Method::DELETE);
        assert_eq!(remove.path, "/api/me/repos/a/b");
    }
}

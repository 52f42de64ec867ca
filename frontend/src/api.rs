use async_trait::async_trait;
use gitlogs_shared::{
    account::{self, CurrentUser, MyRepo},
    execute, AdminAction, ApiClient, ApiError, ApiRequest, CookiePolicy, PlannedCall,
    PreparedRequest, RawResponse, Transport,
};
use gloo_net::http::RequestBuilder;
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::config;

/// `fetch`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let credentials = match request.cookies {
            CookiePolicy::Include => RequestCredentials::Include,
            CookiePolicy::Omit => RequestCredentials::Omit,
        };
        let builder = request
            .headers
            .iter()
            .fold(
                RequestBuilder::new(&request.url)
                    .method(request.method.clone())
                    .credentials(credentials),
                |builder, (name, value)| builder.header(name, value),
            );

        let response = match request.body {
            Some(body) => builder.body(body).map_err(network_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let body = response.text().await.map_err(network_error)?;
        Ok(RawResponse {
            status: response.status(),
            status_text: response.status_text(),
            content_type: response.headers().get("content-type"),
            body,
        })
    }
}

pub fn client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport, config::backend())
}

/// Runs a planned admin call and returns the action that records it.
pub async fn run_admin_call(call: PlannedCall) -> AdminAction {
    execute(&client(), call).await
}

pub fn github_login_url() -> String {
    config::backend().url(account::GITHUB_LOGIN_PATH)
}

pub async fn fetch_current_user() -> Result<Option<CurrentUser>, ApiError> {
    let payload = client().public_call(ApiRequest::get(account::ME_PATH)).await?;
    Ok(CurrentUser::from_payload(&payload))
}

pub async fn fetch_my_repos() -> Result<Vec<MyRepo>, ApiError> {
    let payload = client()
        .public_call(ApiRequest::get(account::MY_REPOS_PATH))
        .await?;
    Ok(MyRepo::list_from_payload(&payload))
}

/// Sends a prepared `/api/me/repos` mutation.
pub async fn update_my_repos(request: ApiRequest) -> Result<Value, ApiError> {
    client().public_call(request).await
}

pub async fn logout() -> Result<(), ApiError> {
    client()
        .public_call(ApiRequest::post_empty(account::LOGOUT_PATH))
        .await
        .map(|_| ())
}

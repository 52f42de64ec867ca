//! Admin controller scenarios driven through a recording transport.

use std::{cell::RefCell, collections::VecDeque};

use async_trait::async_trait;
use futures::executor::block_on;
use gitlogs_shared::{
    admin::{
        stats::{HEALTH_PATH, STATS_PATH},
        OgPostField, RepoField, RepoListing,
    },
    execute,
    http::API_KEY_HEADER,
    AdminAction, AdminCommand, AdminState, ApiClient, ApiError, ApiRequest, BackendConfig,
    CookiePolicy, CredentialStore, GateTransition, HealthPoller, MemoryStore, Mode, OverviewStatus,
    Plan, PollerCommand, PreparedRequest, RawResponse, Slot, Transport, WorkflowResult,
};
use http::Method;
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<PreparedRequest>>,
    replies: RefCell<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    fn reply_json(&self, status: u16, body: Value) {
        self.replies.borrow_mut().push_back(RawResponse {
            status,
            status_text: if status == 200 { "OK" } else { "Error" }.to_string(),
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        });
    }

    fn reply_raw(&self, reply: RawResponse) {
        self.replies.borrow_mut().push_back(reply);
    }

    fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Network("no reply queued".to_string()))
    }
}

fn client() -> ApiClient<RecordingTransport> {
    ApiClient::new(
        RecordingTransport::default(),
        BackendConfig::resolve(Some("https://api.test/"), false),
    )
}

fn admin_state() -> AdminState {
    let mut state = AdminState::new("secret".to_string(), Some("tok".to_string()));
    assert_eq!(state.apply(AdminAction::SetMode(Mode::Admin)), GateTransition::Opened);
    state
}

/// Plans, marks started, sends, and applies the answer.
fn run(state: &mut AdminState, client: &ApiClient<RecordingTransport>, command: AdminCommand) {
    match state.plan(command) {
        Plan::Dispatch(call) => {
            state.apply(AdminAction::Started {
                slot: call.slot,
                epoch: call.epoch,
            });
            let finished = block_on(execute(client, call));
            state.apply(finished);
        },
        Plan::Rejected {
            slot,
            message,
        } => {
            state.apply(AdminAction::Rejected {
                slot,
                message,
            });
        },
        Plan::Skip => {},
    }
}

#[test]
fn user_mode_admin_call_is_refused_without_network() {
    let client = client();
    let credentials = AdminState::new("secret".to_string(), Some("tok".to_string())).credentials();
    let err = block_on(client.admin_call(&credentials, ApiRequest::get("/api/stats")))
        .expect_err("gate closed");
    assert_eq!(err.to_string(), "Switch to Admin mode to use admin APIs.");
    assert!(client.transport().sent().is_empty());
}

#[test]
fn health_payload_drives_overview() {
    let client = client();
    let mut state = admin_state();
    let payload = json!({
        "status": "healthy",
        "queue": {"pending": 7, "processing": 2, "rateLimitRemaining": 293}
    });
    client.transport().reply_json(200, payload.clone());
    run(&mut state, &client, AdminCommand::LoadOverview);

    let overview = state.overview();
    assert_eq!(overview.status, OverviewStatus::Ok);
    assert_eq!(overview.status.label(), "✓ OK");
    assert_eq!(overview.queue.as_i64(), Some(7));
    assert_eq!(overview.processing.as_i64(), Some(2));
    assert_eq!(overview.rate_limit.as_i64(), Some(293));
    assert_eq!(state.stats.health_data, Some(payload));

    let sent = client.transport().sent();
    assert_eq!(sent[0].url, format!("https://api.test{HEALTH_PATH}"));
    assert_eq!(sent[0].cookies, CookiePolicy::Omit);
}

#[test]
fn malformed_repo_is_reported_without_request() {
    let client = client();
    let mut state = admin_state();
    state.apply(AdminAction::EditOgPost(OgPostField::RepoFullName, "hello".to_string()));
    state.apply(AdminAction::EditOgPost(OgPostField::TweetId, "123".to_string()));
    run(&mut state, &client, AdminCommand::SetOgPost);

    assert_eq!(
        state.og_posts.result,
        Some(WorkflowResult::Failure("Invalid repository format. Use owner/repo".to_string()))
    );
    assert!(client.transport().sent().is_empty());
    assert!(!state.is_loading(Slot::OgPost));
}

#[test]
fn og_post_set_sends_key_and_body() {
    let client = client();
    let mut state = admin_state();
    state.apply(AdminAction::EditOgPost(
        OgPostField::RepoFullName,
        "octocat/hello-world".to_string(),
    ));
    state.apply(AdminAction::EditOgPost(OgPostField::TweetId, "123".to_string()));
    client.transport().reply_json(200, json!({"ok": true}));
    run(&mut state, &client, AdminCommand::SetOgPost);

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::POST);
    assert_eq!(sent[0].url, "https://api.test/api/repos/octocat/hello-world/og-post");
    assert_eq!(sent[0].header(API_KEY_HEADER), Some("secret"));
    let body: Value = serde_json::from_str(sent[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body, json!({"tweetId": "123"}));
    assert_eq!(state.og_posts.result, Some(WorkflowResult::Success(json!({"ok": true}))));
}

#[test]
fn poll_lifecycle_over_twenty_five_seconds() {
    let client = client();
    let mut state = AdminState::new("secret".to_string(), Some("tok".to_string()));
    let mut poller = HealthPoller::default();
    let mut fetch_times = Vec::new();

    assert_eq!(poller.sync(state.can_use_admin()), None);
    state.apply(AdminAction::SetMode(Mode::Admin));
    assert_eq!(poller.sync(state.can_use_admin()), Some(PollerCommand::Start));

    for now_ms in (0..=25_000u32).step_by(1_000) {
        let due = now_ms % 10_000 == 0;
        if due && poller.on_tick() {
            client.transport().reply_json(200, json!({"status": "healthy"}));
            run(&mut state, &client, AdminCommand::LoadOverview);
            fetch_times.push(now_ms);
        }
        if now_ms == 25_000 {
            state.apply(AdminAction::SetMode(Mode::User));
            assert_eq!(poller.sync(state.can_use_admin()), Some(PollerCommand::Stop));
        }
    }
    assert_eq!(fetch_times, vec![0, 10_000, 20_000]);

    assert!(!poller.on_tick());
    run(&mut state, &client, AdminCommand::LoadOverview);
    assert_eq!(client.transport().sent().len(), 3);
    assert!(state.overview().is_sentinel());
    assert!(state.stats.health_data.is_none());
}

#[test]
fn each_admin_entry_loads_health_and_stats_once() {
    let client = client();
    let mut state = admin_state();
    let mut poller = HealthPoller::default();

    let count = |path: &str| {
        client
            .transport()
            .sent()
            .iter()
            .filter(|request| request.url.ends_with(path))
            .count()
    };

    for entry in 1..=2 {
        let start = poller.sync(state.can_use_admin()).expect("gate opened");
        assert_eq!(start, PollerCommand::Start);
        for command in start.immediate_commands() {
            client.transport().reply_json(200, json!({"status": "healthy"}));
            run(&mut state, &client, *command);
        }
        assert_eq!(poller.sync(state.can_use_admin()), None);
        assert_eq!(count(HEALTH_PATH), entry);
        assert_eq!(count(STATS_PATH), entry);
        assert_eq!(state.overview().status, OverviewStatus::Ok);

        state.apply(AdminAction::SetMode(Mode::User));
        let stop = poller.sync(state.can_use_admin()).expect("gate closed");
        assert_eq!(stop, PollerCommand::Stop);
        assert!(stop.immediate_commands().is_empty());
        assert!(state.overview().is_sentinel());
        state.apply(AdminAction::SetMode(Mode::Admin));
    }
}

#[test]
fn empty_error_body_is_recorded_as_invalid_json() {
    let client = client();
    let mut state = admin_state();
    client.transport().reply_raw(RawResponse {
        status: 502,
        status_text: "Bad Gateway".to_string(),
        content_type: Some("application/json".to_string()),
        body: String::new(),
    });
    run(&mut state, &client, AdminCommand::RefreshStats);
    assert_eq!(
        state.stats.stats_data,
        Some(json!({"error": "Invalid JSON response from server (502 Bad Gateway)"}))
    );
}

#[test]
fn list_repos_renders_table() {
    let client = client();
    let mut state = admin_state();
    state.apply(AdminAction::EditRepo(
        RepoField::ListUserId,
        "u-1".to_string(),
    ));
    client.transport().reply_json(
        200,
        json!({"repos": [{"repo_full_name": "a/b", "is_active": true, "created_at": "2024-01-02T03:04:05Z"}]}),
    );
    run(&mut state, &client, AdminCommand::ListUserRepos);

    let data = state
        .repos
        .list_result
        .as_ref()
        .and_then(WorkflowResult::data)
        .expect("success");
    let RepoListing::Table(rows) = RepoListing::classify(data) else {
        panic!("expected a table");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].repo_full_name, "a/b");
    assert!(rows[0].is_active);
    assert!(rows[0].created_at_millis().is_some());
}

#[test]
fn html_error_page_is_summarised() {
    let client = client();
    let mut state = admin_state();
    let page = format!("<!DOCTYPE html><html><body>{}</body></html>", "x".repeat(300));
    client.transport().reply_raw(RawResponse {
        status: 500,
        status_text: "Internal Server Error".to_string(),
        content_type: Some("text/html".to_string()),
        body: page.clone(),
    });
    run(&mut state, &client, AdminCommand::RefreshStats);

    let stats = state.stats.stats_data.as_ref().expect("recorded");
    let message = stats["error"].as_str().expect("error message");
    assert!(message.contains("500"));
    let sample: String = page.chars().take(100).collect();
    assert!(message.ends_with(&sample));
    assert!(!message.contains(&page[..101]));
    assert!(!state.is_loading(Slot::Stats));
}

#[test]
fn empty_key_keeps_gate_closed() {
    let client = client();
    let mut state = AdminState::new(String::new(), Some("tok".to_string()));
    assert_eq!(state.apply(AdminAction::SetMode(Mode::Admin)), GateTransition::Unchanged);
    assert!(matches!(state.plan(AdminCommand::RefreshStats), Plan::Skip));
    run(&mut state, &client, AdminCommand::GetOgPost);
    assert!(client.transport().sent().is_empty());
    assert_eq!(
        state.og_posts.result.as_ref().and_then(WorkflowResult::message),
        Some("Switch to Admin mode and add your API key.")
    );
}

#[test]
fn saved_key_round_trips_through_storage() {
    let backing = MemoryStore::default();
    let store = CredentialStore::new(&backing);
    let mut state = AdminState::new(store.read_admin_key(), store.read_auth_token());
    state.apply(AdminAction::EditApiKey("k-123".to_string()));
    store.write_admin_key(state.api_key());
    state.apply(AdminAction::ApiKeySaved);

    let reloaded = AdminState::new(store.read_admin_key(), store.read_auth_token());
    assert_eq!(reloaded.api_key(), "k-123");
    assert!(reloaded.auth_token().is_none());
}

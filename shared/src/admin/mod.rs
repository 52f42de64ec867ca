//! Admin dashboard controller.
//!
//! [`AdminState`] is the single source of truth for the admin surface. Hosts
//! feed it [`AdminAction`]s (the frontend wraps it in a Yew reducer) and ask
//! it to [`AdminState::plan`] each [`AdminCommand`] into a guarded API call.
//! Every gate closure bumps an epoch so responses that arrive afterwards are
//! dropped instead of repopulating cleared state.

/// OG Posts tab.
pub mod og_posts;
/// Repositories tab.
pub mod repos;
/// Stats tab.
pub mod stats;
/// Users tab.
pub mod users;

use serde_json::Value;

pub use self::{
    og_posts::{OgPostField, OgPostsState},
    repos::{RepoField, RepoListing, RepoRow, ReposState},
    stats::StatsState,
    users::{Tier, UserField, UsersState},
};
use crate::{
    access::{AccessState, AdminView, GateTransition, Mode},
    error::WorkflowError,
    http::{AdminCredentials, ApiClient, ApiRequest, Transport},
    overview::Overview,
    workflow::{Inflight, WorkflowResult},
};

/// How long the "saved" notice stays up.
pub const SAVE_NOTICE_MS: u32 = 2_500;
/// Text of the "saved" notice.
pub const SAVE_NOTICE_TEXT: &str = "API key saved";

/// Admin tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    /// OG post binding.
    #[default]
    OgPosts,
    /// User management.
    Users,
    /// Repository management.
    Repos,
    /// Raw stats and health.
    Stats,
}

impl TabId {
    /// Fixed tab order.
    pub const ALL: [TabId; 4] = [TabId::OgPosts, TabId::Users, TabId::Repos, TabId::Stats];

    /// Tab button label.
    pub fn label(self) -> &'static str {
        match self {
            TabId::OgPosts => "OG Posts",
            TabId::Users => "Users",
            TabId::Repos => "Repositories",
            TabId::Stats => "Stats",
        }
    }

    /// Stable identifier.
    pub fn slug(self) -> &'static str {
        match self {
            TabId::OgPosts => "og-posts",
            TabId::Users => "users",
            TabId::Repos => "repos",
            TabId::Stats => "stats",
        }
    }
}

/// Result slot a request writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// OG post set/get.
    OgPost,
    /// User upsert.
    UserUpsert,
    /// User lookup.
    UserLookup,
    /// Repo add.
    RepoAdd,
    /// Repo context.
    RepoContext,
    /// User repo list.
    RepoList,
    /// Stats refresh.
    Stats,
    /// Explicit health refresh.
    Health,
    /// Background health poll.
    Overview,
}

impl Slot {
    /// Slots that only run while the gate is open and never report a gate
    /// error.
    fn is_background(self) -> bool {
        matches!(self, Slot::Stats | Slot::Health | Slot::Overview)
    }
}

/// Something the operator (or the poller) asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    /// Bind an OG tweet.
    SetOgPost,
    /// Read the bound OG tweet.
    GetOgPost,
    /// Create or update a user.
    UpsertUser,
    /// Read a user.
    LookupUser,
    /// Attach a repository to a user.
    AddRepo,
    /// Read repository context.
    GetRepoContext,
    /// List a user's repositories.
    ListUserRepos,
    /// Reload `/api/stats`.
    RefreshStats,
    /// Reload `/api/health` from the Stats tab.
    RefreshHealth,
    /// Poller tick.
    LoadOverview,
}

impl AdminCommand {
    /// Slot this command writes into.
    pub fn slot(self) -> Slot {
        match self {
            AdminCommand::SetOgPost | AdminCommand::GetOgPost => Slot::OgPost,
            AdminCommand::UpsertUser => Slot::UserUpsert,
            AdminCommand::LookupUser => Slot::UserLookup,
            AdminCommand::AddRepo => Slot::RepoAdd,
            AdminCommand::GetRepoContext => Slot::RepoContext,
            AdminCommand::ListUserRepos => Slot::RepoList,
            AdminCommand::RefreshStats => Slot::Stats,
            AdminCommand::RefreshHealth => Slot::Health,
            AdminCommand::LoadOverview => Slot::Overview,
        }
    }
}

/// A request ready to be sent, tagged with where its answer belongs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCall {
    /// Result slot.
    pub slot: Slot,
    /// Request to send through `admin_call`.
    pub request: ApiRequest,
    /// Gate snapshot to send it with.
    pub credentials: AdminCredentials,
    /// Epoch the answer must match to be applied.
    pub epoch: u64,
}

/// Outcome of planning a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Send the request.
    Dispatch(PlannedCall),
    /// Report the message in the slot; nothing is sent.
    Rejected {
        /// Slot to report into.
        slot: Slot,
        /// Gate or validation message.
        message: String,
    },
    /// Background command while the gate is closed; do nothing.
    Skip,
}

/// Sends a planned call and wraps the answer for [`AdminState::apply`].
pub async fn execute<T: Transport>(client: &ApiClient<T>, call: PlannedCall) -> AdminAction {
    let outcome = client
        .admin_call(&call.credentials, call.request)
        .await
        .map_err(|err| err.to_string());
    AdminAction::Finished {
        slot: call.slot,
        epoch: call.epoch,
        outcome,
    }
}

/// Transient confirmation shown next to the key bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number; only the matching timeout may clear it.
    pub id: u64,
    /// Text shown.
    pub text: &'static str,
}

/// Everything that can change the admin state.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    /// Mode switcher.
    SetMode(Mode),
    /// Key input edited (memory only).
    EditApiKey(String),
    /// Key written to storage.
    ApiKeySaved,
    /// Notice timeout fired.
    ClearNotice(u64),
    /// Reveal/mask the key input.
    ToggleKeyVisible,
    /// Auth token re-read after a storage event.
    AuthTokenChanged(Option<String>),
    /// Tab switcher.
    SelectTab(TabId),
    /// OG post input edited.
    EditOgPost(OgPostField, String),
    /// User input edited.
    EditUser(UserField, String),
    /// Tier selector changed.
    SetTier(Tier),
    /// Repository input edited.
    EditRepo(RepoField, String),
    /// Planning failed; report without sending.
    Rejected {
        /// Slot to report into.
        slot: Slot,
        /// Message to show.
        message: String,
    },
    /// Request sent.
    Started {
        /// Slot whose loading flag rises.
        slot: Slot,
        /// Epoch at planning time.
        epoch: u64,
    },
    /// Response (or failure) received.
    Finished {
        /// Slot to write into.
        slot: Slot,
        /// Epoch at planning time.
        epoch: u64,
        /// Parsed body or error message.
        outcome: Result<Value, String>,
    },
}

/// In-memory admin controller state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    mode: Mode,
    api_key: String,
    auth_token: Option<String>,
    key_visible: bool,
    save_notice: Option<Notice>,
    notice_seq: u64,
    active_tab: TabId,
    overview: Overview,
    epoch: u64,
    /// OG Posts tab.
    pub og_posts: OgPostsState,
    /// Users tab.
    pub users: UsersState,
    /// Repositories tab.
    pub repos: ReposState,
    /// Stats tab.
    pub stats: StatsState,
}

impl AdminState {
    /// Initial state from persisted credentials; always starts in user mode.
    pub fn new(api_key: String, auth_token: Option<String>) -> Self {
        Self {
            api_key,
            auth_token: auth_token.filter(|token| !token.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Derived gate.
    pub fn access(&self) -> AccessState {
        AccessState::derive(self.mode, &self.api_key, self.auth_token.as_deref())
    }

    /// `mode == Admin && api_key != ""`.
    pub fn can_use_admin(&self) -> bool {
        self.access().can_use_admin
    }

    /// Surface to render.
    pub fn view(&self) -> AdminView {
        self.access().view()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Key as currently typed.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Stored auth token.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Whether the key input is unmasked.
    pub fn key_visible(&self) -> bool {
        self.key_visible
    }

    /// Active "saved" notice.
    pub fn save_notice(&self) -> Option<&Notice> {
        self.save_notice.as_ref()
    }

    /// Active tab.
    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Health overview.
    pub fn overview(&self) -> &Overview {
        &self.overview
    }

    /// Gate-closure counter.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Credentials for `admin_call`.
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            can_use_admin: self.can_use_admin(),
            api_key: self.api_key.clone(),
        }
    }

    /// Whether `slot`'s workflow has a request outstanding.
    pub fn is_loading(&self, slot: Slot) -> bool {
        match slot {
            Slot::OgPost => self.og_posts.inflight.is_loading(),
            Slot::UserUpsert | Slot::UserLookup => self.users.inflight.is_loading(),
            Slot::RepoAdd | Slot::RepoContext | Slot::RepoList => self.repos.inflight.is_loading(),
            Slot::Stats => self.stats.stats_inflight.is_loading(),
            Slot::Health => self.stats.health_inflight.is_loading(),
            Slot::Overview => false,
        }
    }

    /// Whether `slot`'s submit buttons accept clicks: gate open and nothing
    /// outstanding.
    pub fn can_submit(&self, slot: Slot) -> bool {
        self.can_use_admin() && !self.is_loading(slot)
    }

    /// Validates the gate and inputs for `command`.
    pub fn plan(&self, command: AdminCommand) -> Plan {
        let slot = command.slot();
        if !self.can_use_admin() {
            if slot.is_background() {
                return Plan::Skip;
            }
            return Plan::Rejected {
                slot,
                message: WorkflowError::GateClosed.to_string(),
            };
        }

        let request = match command {
            AdminCommand::SetOgPost => self.og_posts.plan_set(),
            AdminCommand::GetOgPost => self.og_posts.plan_get(),
            AdminCommand::UpsertUser => self.users.plan_upsert(),
            AdminCommand::LookupUser => self.users.plan_lookup(),
            AdminCommand::AddRepo => self.repos.plan_add(),
            AdminCommand::GetRepoContext => self.repos.plan_context(),
            AdminCommand::ListUserRepos => self.repos.plan_list(),
            AdminCommand::RefreshStats => Ok(StatsState::plan_stats()),
            AdminCommand::RefreshHealth | AdminCommand::LoadOverview => {
                Ok(StatsState::plan_health())
            },
        };

        match request {
            Ok(request) => {
                log::debug!("planned {:?}: {} {}", slot, request.method, request.path);
                Plan::Dispatch(PlannedCall {
                    slot,
                    request,
                    credentials: self.credentials(),
                    epoch: self.epoch,
                })
            },
            Err(err) => Plan::Rejected {
                slot,
                message: err.to_string(),
            },
        }
    }

    /// Applies one action and reports how the gate moved.
    pub fn apply(&mut self, action: AdminAction) -> GateTransition {
        let before = self.can_use_admin();
        match action {
            AdminAction::SetMode(mode) => self.mode = mode,
            AdminAction::EditApiKey(key) => self.api_key = key,
            AdminAction::ApiKeySaved => {
                self.notice_seq += 1;
                self.save_notice = Some(Notice {
                    id: self.notice_seq,
                    text: SAVE_NOTICE_TEXT,
                });
            },
            AdminAction::ClearNotice(id) => {
                if self.save_notice.as_ref().is_some_and(|notice| notice.id == id) {
                    self.save_notice = None;
                }
            },
            AdminAction::ToggleKeyVisible => self.key_visible = !self.key_visible,
            AdminAction::AuthTokenChanged(token) => {
                self.auth_token = token.filter(|token| !token.trim().is_empty());
            },
            AdminAction::SelectTab(tab) => self.active_tab = tab,
            AdminAction::EditOgPost(field, value) => self.og_posts.edit(field, value),
            AdminAction::EditUser(field, value) => self.users.edit(field, value),
            AdminAction::SetTier(tier) => self.users.tier = tier,
            AdminAction::EditRepo(field, value) => self.repos.edit(field, value),
            AdminAction::Rejected {
                slot,
                message,
            } => self.record(slot, Err(message)),
            AdminAction::Started {
                slot,
                epoch,
            } => {
                if epoch == self.epoch {
                    if let Some(inflight) = self.inflight_mut(slot) {
                        inflight.begin();
                    }
                }
            },
            AdminAction::Finished {
                slot,
                epoch,
                outcome,
            } => {
                if epoch != self.epoch {
                    log::debug!("dropping {:?} response from epoch {}", slot, epoch);
                } else {
                    if let Some(inflight) = self.inflight_mut(slot) {
                        inflight.finish();
                    }
                    self.record(slot, outcome);
                }
            },
        }

        let transition = GateTransition::between(before, self.can_use_admin());
        if transition == GateTransition::Closed {
            self.close_gate();
        }
        transition
    }

    fn close_gate(&mut self) {
        self.epoch += 1;
        self.overview = Overview::sentinel();
        self.stats.clear();
        self.og_posts.inflight.reset();
        self.users.inflight.reset();
        self.repos.inflight.reset();
    }

    fn inflight_mut(&mut self, slot: Slot) -> Option<&mut Inflight> {
        match slot {
            Slot::OgPost => Some(&mut self.og_posts.inflight),
            Slot::UserUpsert | Slot::UserLookup => Some(&mut self.users.inflight),
            Slot::RepoAdd | Slot::RepoContext | Slot::RepoList => Some(&mut self.repos.inflight),
            Slot::Stats => Some(&mut self.stats.stats_inflight),
            Slot::Health => Some(&mut self.stats.health_inflight),
            Slot::Overview => None,
        }
    }

    fn record(&mut self, slot: Slot, outcome: Result<Value, String>) {
        match slot {
            Slot::OgPost => self.og_posts.result = Some(WorkflowResult::from_outcome(outcome)),
            Slot::UserUpsert => self.users.upsert_result = Some(WorkflowResult::from_outcome(outcome)),
            Slot::UserLookup => self.users.lookup_result = Some(WorkflowResult::from_outcome(outcome)),
            Slot::RepoAdd => self.repos.add_result = Some(WorkflowResult::from_outcome(outcome)),
            Slot::RepoContext => {
                self.repos.context_result = Some(WorkflowResult::from_outcome(outcome))
            },
            Slot::RepoList => self.repos.list_result = Some(WorkflowResult::from_outcome(outcome)),
            Slot::Stats => self.stats.record_stats(outcome),
            Slot::Health => {
                self.overview = match &outcome {
                    Ok(health) => Overview::from_health(health),
                    Err(_) => Overview::errored(),
                };
                self.stats.record_health(outcome);
            },
            Slot::Overview => match outcome {
                Ok(health) => {
                    self.overview = Overview::from_health(&health);
                    self.stats.health_data = Some(health);
                },
                Err(message) => {
                    log::warn!("health poll failed: {}", message);
                    self.overview = Overview::errored();
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::overview::OverviewStatus;

    fn unlocked_admin(key: &str) -> AdminState {
        let mut state = AdminState::new(key.to_string(), Some("tok".to_string()));
        state.apply(AdminAction::SetMode(Mode::Admin));
        state
    }

    fn dispatch(state: &AdminState, command: AdminCommand) -> PlannedCall {
        match state.plan(command) {
            Plan::Dispatch(call) => call,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn starts_in_user_mode_with_sentinels() {
        let state = AdminState::new("k".to_string(), Some("tok".to_string()));
        assert_eq!(state.mode(), Mode::User);
        assert!(!state.can_use_admin());
        assert!(state.overview().is_sentinel());
        assert_eq!(state.view(), AdminView::UserModeCard);
    }

    #[test]
    fn entering_admin_opens_gate_only_with_key() {
        let mut state = AdminState::new(String::new(), Some("tok".to_string()));
        assert_eq!(state.apply(AdminAction::SetMode(Mode::Admin)), GateTransition::Unchanged);
        assert_eq!(
            state.apply(AdminAction::EditApiKey("k".to_string())),
            GateTransition::Opened
        );
        assert_eq!(state.apply(AdminAction::EditApiKey(String::new())), GateTransition::Closed);
    }

    #[test]
    fn closed_gate_rejects_workflows_and_skips_background() {
        let state = AdminState::new("k".to_string(), Some("tok".to_string()));
        assert_eq!(
            state.plan(AdminCommand::SetOgPost),
            Plan::Rejected {
                slot: Slot::OgPost,
                message: "Switch to Admin mode and add your API key.".to_string(),
            }
        );
        assert_eq!(state.plan(AdminCommand::RefreshStats), Plan::Skip);
        assert_eq!(state.plan(AdminCommand::LoadOverview), Plan::Skip);
    }

    #[test]
    fn loading_spans_started_to_finished() {
        let mut state = unlocked_admin("k");
        state.apply(AdminAction::EditOgPost(OgPostField::RepoFullName, "a/b".to_string()));
        let call = dispatch(&state, AdminCommand::GetOgPost);
        assert!(!state.is_loading(Slot::OgPost));
        state.apply(AdminAction::Started {
            slot: call.slot,
            epoch: call.epoch,
        });
        assert!(state.is_loading(Slot::OgPost));
        assert!(state.og_posts.result.is_none());
        state.apply(AdminAction::Finished {
            slot: call.slot,
            epoch: call.epoch,
            outcome: Ok(json!({"tweetId": "1"})),
        });
        assert!(!state.is_loading(Slot::OgPost));
        assert_eq!(state.og_posts.result, Some(WorkflowResult::Success(json!({"tweetId": "1"}))));
    }

    #[test]
    fn last_completion_wins() {
        let mut state = unlocked_admin("k");
        state.apply(AdminAction::EditUser(UserField::LookupId, "u".to_string()));
        let call = dispatch(&state, AdminCommand::LookupUser);
        for _ in 0..2 {
            state.apply(AdminAction::Started {
                slot: call.slot,
                epoch: call.epoch,
            });
        }
        state.apply(AdminAction::Finished {
            slot: call.slot,
            epoch: call.epoch,
            outcome: Ok(json!({"n": 2})),
        });
        assert!(state.is_loading(Slot::UserLookup));
        state.apply(AdminAction::Finished {
            slot: call.slot,
            epoch: call.epoch,
            outcome: Ok(json!({"n": 1})),
        });
        assert!(!state.is_loading(Slot::UserLookup));
        assert_eq!(state.users.lookup_result, Some(WorkflowResult::Success(json!({"n": 1}))));
    }

    #[test]
    fn switching_to_user_clears_and_drops_late_responses() {
        let mut state = unlocked_admin("k");
        let poll = dispatch(&state, AdminCommand::LoadOverview);
        state.apply(AdminAction::Finished {
            slot: poll.slot,
            epoch: poll.epoch,
            outcome: Ok(json!({"status": "healthy", "queue": {"pending": 1}})),
        });
        let stats = dispatch(&state, AdminCommand::RefreshStats);
        state.apply(AdminAction::Started {
            slot: stats.slot,
            epoch: stats.epoch,
        });
        assert_eq!(state.overview().status, OverviewStatus::Ok);

        assert_eq!(state.apply(AdminAction::SetMode(Mode::User)), GateTransition::Closed);
        assert!(state.overview().is_sentinel());
        assert_eq!(state.stats, StatsState::default());

        state.apply(AdminAction::Finished {
            slot: stats.slot,
            epoch: stats.epoch,
            outcome: Ok(json!({"users": 3})),
        });
        assert!(state.stats.stats_data.is_none());
        assert!(!state.is_loading(Slot::Stats));
    }

    #[test]
    fn poll_failure_keeps_health_data() {
        let mut state = unlocked_admin("k");
        let poll = dispatch(&state, AdminCommand::LoadOverview);
        state.apply(AdminAction::Finished {
            slot: Slot::Overview,
            epoch: poll.epoch,
            outcome: Ok(json!({"status": "healthy"})),
        });
        state.apply(AdminAction::Finished {
            slot: Slot::Overview,
            epoch: poll.epoch,
            outcome: Err("Network error: offline".to_string()),
        });
        assert_eq!(state.overview(), &Overview::errored());
        assert_eq!(state.stats.health_data, Some(json!({"status": "healthy"})));
    }

    #[test]
    fn explicit_health_failure_records_error_payload() {
        let mut state = unlocked_admin("k");
        let call = dispatch(&state, AdminCommand::RefreshHealth);
        state.apply(AdminAction::Started {
            slot: call.slot,
            epoch: call.epoch,
        });
        assert!(state.is_loading(Slot::Health));
        state.apply(AdminAction::Finished {
            slot: call.slot,
            epoch: call.epoch,
            outcome: Err("HTTP 503: Service Unavailable".to_string()),
        });
        assert_eq!(state.stats.health_data, Some(json!({"error": "HTTP 503: Service Unavailable"})));
        assert_eq!(state.overview().status, OverviewStatus::Error);
    }

    #[test]
    fn notice_is_cleared_only_by_its_own_timeout() {
        let mut state = AdminState::default();
        state.apply(AdminAction::ApiKeySaved);
        let first = state.save_notice().map(|notice| notice.id).expect("notice");
        state.apply(AdminAction::ApiKeySaved);
        state.apply(AdminAction::ClearNotice(first));
        assert_eq!(state.save_notice().map(|notice| notice.text), Some(SAVE_NOTICE_TEXT));
        let second = state.save_notice().map(|notice| notice.id).expect("notice");
        state.apply(AdminAction::ClearNotice(second));
        assert!(state.save_notice().is_none());
    }

    #[test]
    fn clearing_token_locks_view() {
        let mut state = unlocked_admin("k");
        assert_eq!(state.view(), AdminView::AdminSurface);
        state.apply(AdminAction::AuthTokenChanged(None));
        assert_eq!(state.view(), AdminView::Locked);
    }

    #[test]
    fn submit_needs_open_gate_and_idle_slot() {
        let mut state = AdminState::new(String::new(), Some("tok".to_string()));
        state.apply(AdminAction::SetMode(Mode::Admin));
        assert_eq!(state.view(), AdminView::AdminSurface);
        assert!(!state.can_submit(Slot::OgPost));
        assert!(!state.can_submit(Slot::Stats));

        state.apply(AdminAction::EditApiKey("k".to_string()));
        assert!(state.can_submit(Slot::OgPost));
        state.apply(AdminAction::EditOgPost(OgPostField::RepoFullName, "a/b".to_string()));
        let call = dispatch(&state, AdminCommand::GetOgPost);
        state.apply(AdminAction::Started {
            slot: call.slot,
            epoch: call.epoch,
        });
        assert!(!state.can_submit(Slot::OgPost));
        assert!(state.can_submit(Slot::UserLookup));
    }

    #[test]
    fn tabs_keep_fixed_order() {
        let labels: Vec<_> = TabId::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["OG Posts", "Users", "Repositories", "Stats"]);
        let mut state = AdminState::default();
        state.apply(AdminAction::SelectTab(TabId::Stats));
        assert_eq!(state.active_tab(), TabId::Stats);
    }
}

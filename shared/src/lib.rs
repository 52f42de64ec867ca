//! Controller logic for the GitLogs web dashboard.
//!
//! Everything here is plain Rust with no browser dependency, so the admin
//! gate, poller and tab workflows can be exercised with native tests. The
//! `gitlogs-frontend` crate supplies the browser transport, storage and
//! timers.

/// Signed-in user models.
pub mod account;
/// Admin and user mode gating.
pub mod access;
/// Admin dashboard controller and tab workflows.
pub mod admin;
/// Backend base URL resolution.
pub mod config;
/// Browser storage keys and the credential store.
pub mod credentials;
/// Error types.
pub mod error;
/// Guarded API client and response normalisation.
pub mod http;
/// OAuth return parsing.
pub mod oauth;
/// Health overview model.
pub mod overview;
/// Health poller state machine.
pub mod poller;
/// `owner/repo` parsing.
pub mod repo_name;
/// Workflow results and loading counters.
pub mod workflow;

pub use access::{AccessState, AdminView, GateTransition, Mode};
pub use admin::{execute, AdminAction, AdminCommand, AdminState, Plan, PlannedCall, Slot, TabId};
pub use config::BackendConfig;
pub use credentials::{CredentialStore, KeyValueStore, MemoryStore, StorageChange};
pub use error::{ApiError, WorkflowError};
pub use self::http::{
    AdminCredentials, ApiClient, ApiRequest, CookiePolicy, PreparedRequest, RawResponse, Transport,
};
pub use oauth::OAuthCallback;
pub use overview::{Metric, Overview, OverviewStatus};
pub use poller::{HealthPoller, PollerCommand, PollerState};
pub use repo_name::RepoFullName;
pub use workflow::{Inflight, WorkflowResult};

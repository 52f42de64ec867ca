use serde_json::{json, Value};

use crate::{http::ApiRequest, workflow::Inflight};

/// Path of the health endpoint, shared by the poller and the Stats tab.
pub const HEALTH_PATH: &str = "/api/health";
/// Path of the admin stats endpoint.
pub const STATS_PATH: &str = "/api/stats";

/// Stats tab: two raw payloads with separate loading flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsState {
    /// Last `/api/stats` payload, or `{"error": ..}`.
    pub stats_data: Option<Value>,
    /// Last `/api/health` payload, or `{"error": ..}`.
    pub health_data: Option<Value>,
    /// `/api/stats` loading counter.
    pub stats_inflight: Inflight,
    /// `/api/health` loading counter (explicit refresh only).
    pub health_inflight: Inflight,
}

impl StatsState {
    /// `GET /api/stats`.
    pub fn plan_stats() -> ApiRequest {
        ApiRequest::get(STATS_PATH)
    }

    /// `GET /api/health`.
    pub fn plan_health() -> ApiRequest {
        ApiRequest::get(HEALTH_PATH)
    }

    /// Records a stats outcome; errors are kept as `{"error": message}`.
    pub fn record_stats(&mut self, outcome: Result<Value, String>) {
        self.stats_data = Some(outcome.unwrap_or_else(|message| json!({ "error": message })));
    }

    /// Records an explicit health refresh outcome.
    pub fn record_health(&mut self, outcome: Result<Value, String>) {
        self.health_data = Some(outcome.unwrap_or_else(|message| json!({ "error": message })));
    }

    /// Drops both payloads and loading flags.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_stored_as_error_objects() {
        let mut state = StatsState::default();
        state.record_stats(Err("HTTP 500: Internal Server Error".to_string()));
        assert_eq!(state.stats_data, Some(json!({"error": "HTTP 500: Internal Server Error"})));
        state.record_health(Ok(json!({"status": "healthy"})));
        assert_eq!(state.health_data, Some(json!({"status": "healthy"})));
        state.clear();
        assert_eq!(state, StatsState::default());
    }
}

use serde_json::Value;

/// Outcome shown next to the control that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// Parsed response body.
    Success(Value),
    /// Human-readable error.
    Failure(String),
}

impl WorkflowResult {
    /// Builds a result from a call outcome.
    pub fn from_outcome(outcome: Result<Value, String>) -> Self {
        match outcome {
            Ok(data) => WorkflowResult::Success(data),
            Err(message) => WorkflowResult::Failure(message),
        }
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowResult::Success(_))
    }

    /// Error text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            WorkflowResult::Failure(message) => Some(message),
            WorkflowResult::Success(_) => None,
        }
    }

    /// Success payload, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            WorkflowResult::Success(data) => Some(data),
            WorkflowResult::Failure(_) => None,
        }
    }
}

/// Outstanding request counter behind a workflow's `loading` flag.
///
/// Several sub-panels can share one counter; the flag stays raised until the
/// last of them has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inflight(u32);

impl Inflight {
    /// A request was issued.
    pub fn begin(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// A request finished, whatever the outcome.
    pub fn finish(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Drops every outstanding request, e.g. when the gate closes.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// `loading` flag.
    pub fn is_loading(&self) -> bool {
        self.0 > 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn shared_counter_stays_loading_until_last_finish() {
        let mut inflight = Inflight::default();
        inflight.begin();
        inflight.begin();
        inflight.finish();
        assert!(inflight.is_loading());
        inflight.finish();
        assert!(!inflight.is_loading());
        inflight.finish();
        assert!(!inflight.is_loading());
    }

    #[test]
    fn outcome_maps_to_variant() {
        let ok = WorkflowResult::from_outcome(Ok(json!({"ok": true})));
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&json!({"ok": true})));
        let err = WorkflowResult::from_outcome(Err("boom".to_string()));
        assert_eq!(err.message(), Some("boom"));
    }
}

use std::fmt;

use serde_json::Value;

/// Placeholder shown for any unknown value.
pub const SENTINEL: &str = "--";

/// Health verdict shown in the first overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverviewStatus {
    /// Backend reported `healthy`.
    Ok,
    /// Backend reported anything else, or the call failed.
    Error,
    /// Gate closed or nothing loaded yet.
    #[default]
    Unknown,
}

impl OverviewStatus {
    /// Display text.
    pub fn label(self) -> &'static str {
        match self {
            OverviewStatus::Ok => "✓ OK",
            OverviewStatus::Error => "✗ Error",
            OverviewStatus::Unknown => SENTINEL,
        }
    }
}

impl fmt::Display for OverviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One numeric overview cell; absent or `null` renders as [`SENTINEL`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metric(Option<Value>);

impl Metric {
    /// Unknown value.
    pub fn unknown() -> Self {
        Self(None)
    }

    /// Wraps a JSON field, treating `null` as unknown.
    pub fn from_value(value: Option<&Value>) -> Self {
        Self(value.filter(|value| !value.is_null()).cloned())
    }

    /// Integer view, if the value is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_ref().and_then(Value::as_i64)
    }

    /// Whether the cell shows the sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for Metric {
    fn from(value: i64) -> Self {
        Self(Some(Value::from(value)))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str(SENTINEL),
            Some(Value::String(text)) => f.write_str(text),
            Some(other) => write!(f, "{other}"),
        }
    }
}

/// Four-value health summary at the top of the admin surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overview {
    /// Health verdict.
    pub status: OverviewStatus,
    /// `queue.pending`.
    pub queue: Metric,
    /// `queue.processing`.
    pub processing: Metric,
    /// `queue.rateLimitRemaining`.
    pub rate_limit: Metric,
}

impl Overview {
    /// All sentinels; shown while the gate is closed.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Error status with sentinel metrics; shown after a failed health call.
    pub fn errored() -> Self {
        Self {
            status: OverviewStatus::Error,
            ..Self::default()
        }
    }

    /// Derives the overview from a `/api/health` payload.
    pub fn from_health(health: &Value) -> Self {
        let status = if health.get("status").and_then(Value::as_str) == Some("healthy") {
            OverviewStatus::Ok
        } else {
            OverviewStatus::Error
        };
        let queue = health.get("queue");
        let field = |name: &str| Metric::from_value(queue.and_then(|queue| queue.get(name)));
        Self {
            status,
            queue: field("pending"),
            processing: field("processing"),
            rate_limit: field("rateLimitRemaining"),
        }
    }

    /// Whether every cell shows the sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn healthy_payload_maps_every_field() {
        let overview = Overview::from_health(&json!({
            "status": "healthy",
            "queue": {"pending": 7, "processing": 2, "rateLimitRemaining": 293}
        }));
        assert_eq!(overview.status.label(), "✓ OK");
        assert_eq!(overview.queue.as_i64(), Some(7));
        assert_eq!(overview.processing.as_i64(), Some(2));
        assert_eq!(overview.rate_limit.as_i64(), Some(293));
    }

    #[test]
    fn unhealthy_without_queue_shows_sentinels() {
        let overview = Overview::from_health(&json!({"status": "degraded"}));
        assert_eq!(overview.status, OverviewStatus::Error);
        assert_eq!(overview.queue.to_string(), SENTINEL);
        assert_eq!(overview.processing.to_string(), SENTINEL);
        assert_eq!(overview.rate_limit.to_string(), SENTINEL);
    }

    #[test]
    fn null_metric_is_unknown_but_zero_is_not() {
        let overview = Overview::from_health(&json!({
            "status": "healthy",
            "queue": {"pending": 0, "processing": null}
        }));
        assert_eq!(overview.queue.to_string(), "0");
        assert!(overview.processing.is_unknown());
    }

    #[test]
    fn sentinel_and_errored() {
        assert!(Overview::sentinel().is_sentinel());
        assert_eq!(Overview::sentinel().status.label(), SENTINEL);
        assert_eq!(Overview::errored().status.label(), "✗ Error");
        assert!(Overview::errored().queue.is_unknown());
    }
}

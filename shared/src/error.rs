//! Error types surfaced by the API client and the admin workflows.
//!
//! Callers never branch on the variant: every error is rendered through its
//! `Display` message into a workflow result slot or a banner.

use thiserror::Error;

/// Number of body characters kept when a response is not JSON.
pub const BODY_SAMPLE_CHARS: usize = 100;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Admin endpoint called while the gate is closed.
    #[error("Switch to Admin mode to use admin APIs.")]
    AdminModeRequired,
    /// Response content type was not JSON.
    #[error("Server returned non-JSON response ({status} {status_text}): {body_sample}")]
    NonJsonResponse {
        /// HTTP status code.
        status: u16,
        /// HTTP status text.
        status_text: String,
        /// First [`BODY_SAMPLE_CHARS`] characters of the body.
        body_sample: String,
    },
    /// Response claimed JSON but did not parse.
    #[error("Invalid JSON response from server ({status} {status_text})")]
    MalformedJson {
        /// HTTP status code.
        status: u16,
        /// HTTP status text.
        status_text: String,
    },
    /// Non-2xx response carrying a JSON body.
    #[error("{message}")]
    Backend {
        /// `error`, `message`, or a generic `HTTP <status>` string.
        message: String,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Failure detected before a workflow issues any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// `can_use_admin` is false.
    #[error("Switch to Admin mode and add your API key.")]
    GateClosed,
    /// A required field is empty or malformed.
    #[error("{0}")]
    InvalidInput(String),
}

impl WorkflowError {
    /// Convenience constructor for [`WorkflowError::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Takes at most `max` characters, never splitting a code point.
pub fn body_sample(body: &str, max: usize) -> String {
    body.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_sample_respects_char_boundaries() {
        let body = "é".repeat(150);
        let sample = body_sample(&body, BODY_SAMPLE_CHARS);
        assert_eq!(sample.chars().count(), 100);
    }

    #[test]
    fn gate_messages_are_distinct() {
        assert_eq!(ApiError::AdminModeRequired.to_string(), "Switch to Admin mode to use admin APIs.");
        assert_eq!(WorkflowError::GateClosed.to_string(), "Switch to Admin mode and add your API key.");
    }

    #[test]
    fn non_json_message_carries_status_and_sample() {
        let err = ApiError::NonJsonResponse {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body_sample: "<html>".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
        assert!(message.contains("<html>"));
    }
}

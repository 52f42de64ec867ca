//! OAuth return handling.

use url::form_urlencoded;

/// Outcome the backend reports when it redirects back after GitHub login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthCallback {
    /// `?auth=success`.
    Success,
    /// `?error=<message>`.
    Error(String),
}

impl OAuthCallback {
    /// Parses `location.search` (with or without the leading `?`).
    ///
    /// An `error` parameter wins over `auth=success`; anything else yields
    /// `None`.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut success = false;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "error" => {
                    let message = value.trim();
                    let message = if message.is_empty() { "Authentication failed" } else { message };
                    return Some(OAuthCallback::Error(message.to_string()));
                },
                "auth" if value == "success" => success = true,
                _ => {},
            }
        }
        success.then_some(OAuthCallback::Success)
    }

    /// Banner text.
    pub fn message(&self) -> String {
        match self {
            OAuthCallback::Success => "Signed in with GitHub.".to_string(),
            OAuthCallback::Error(message) => format!("Sign-in failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag() {
        assert_eq!(OAuthCallback::from_query("?auth=success"), Some(OAuthCallback::Success));
        assert_eq!(OAuthCallback::from_query("auth=pending"), None);
        assert_eq!(OAuthCallback::from_query(""), None);
    }

    #[test]
    fn error_is_decoded_and_wins() {
        assert_eq!(
            OAuthCallback::from_query("?auth=success&error=access%20denied"),
            Some(OAuthCallback::Error("access denied".to_string()))
        );
        assert_eq!(
            OAuthCallback::from_query("?error="),
            Some(OAuthCallback::Error("Authentication failed".to_string()))
        );
    }
}

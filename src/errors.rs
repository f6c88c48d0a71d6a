use serde_json::Value;
use thiserror::Error;

/// Structured payload of a non-`ok` Slack Web API response.
///
/// Slack attaches `needed` and `provided` scope hints to permission errors;
/// both are kept when present, along with the complete raw envelope so the
/// operator can inspect exactly what the platform returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub code: String,
    pub needed: Option<String>,
    pub provided: Option<String>,
    pub response: Value,
}

impl ApiFailure {
    #[must_use]
    pub fn from_response(response: Value) -> Self {
        let code = response
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error")
            .to_string();
        let needed = response
            .get("needed")
            .and_then(Value::as_str)
            .map(str::to_string);
        let provided = response
            .get("provided")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            code,
            needed,
            provided,
            response,
        }
    }

    /// Scope Slack says the call needed, or an explicit "none".
    #[must_use]
    pub fn needed_hint(&self) -> &str {
        self.needed.as_deref().unwrap_or("none")
    }

    /// Scopes the token actually carried, or an explicit "none".
    #[must_use]
    pub fn provided_hint(&self) -> &str {
        self.provided.as_deref().unwrap_or("none")
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlackError {
    #[error("no message found at that channel and timestamp")]
    MessageNotFound,

    #[error("Slack API error: {}", .0.code)]
    ApiFailure(ApiFailure),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

impl From<ApiFailure> for SlackError {
    fn from(failure: ApiFailure) -> Self {
        SlackError::ApiFailure(failure)
    }
}

use std::error::Error;

use serde_json::json;
use slackedit::errors::{ApiFailure, SlackError};

#[test]
fn api_failure_keeps_code_hints_and_raw_payload() {
    let response = json!({
        "ok": false,
        "error": "missing_scope",
        "needed": "chat:write",
        "provided": "channels:read"
    });

    let failure = ApiFailure::from_response(response.clone());

    assert_eq!(failure.code, "missing_scope");
    assert_eq!(failure.needed_hint(), "chat:write");
    assert_eq!(failure.provided_hint(), "channels:read");
    assert_eq!(failure.response, response);
}

#[test]
fn hints_default_to_an_explicit_none_marker() {
    let failure = ApiFailure::from_response(json!({"ok": false, "error": "message_not_found"}));

    assert_eq!(failure.needed_hint(), "none");
    assert_eq!(failure.provided_hint(), "none");
}

#[test]
fn missing_error_field_reads_as_unknown() {
    let failure = ApiFailure::from_response(json!({"ok": false}));

    assert_eq!(failure.code, "unknown_error");
}

#[test]
fn slack_error_display() {
    assert_eq!(
        SlackError::MessageNotFound.to_string(),
        "no message found at that channel and timestamp"
    );

    let error = SlackError::ApiFailure(ApiFailure::from_response(json!({"error": "ratelimited"})));
    assert_eq!(error.to_string(), "Slack API error: ratelimited");

    assert_eq!(
        SlackError::HttpError("connection reset".to_string()).to_string(),
        "Failed to send HTTP request: connection reset"
    );
}

#[test]
fn slack_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SlackError::MessageNotFound;
    assert_error(&error);
}

#[test]
fn api_failure_converts_into_slack_error() {
    let failure = ApiFailure::from_response(json!({"error": "channel_not_found"}));
    let error: SlackError = failure.clone().into();

    assert_eq!(error, SlackError::ApiFailure(failure));
}

// We can't easily construct a reqwest::Error directly, but we can verify that
// the From<reqwest::Error> conversion exists.
#[allow(unused)]
fn _check_reqwest_conversion(err: reqwest::Error) -> SlackError {
    SlackError::from(err)
}

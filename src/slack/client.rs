//! Slack Web API message client.
//!
//! Both calls go over the raw Web API rather than a typed session: the error
//! surface must keep Slack's `needed`/`provided` scope hints and the complete
//! response payload, and only the raw envelope carries those.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackHistoryMessage};
use tracing::info;

use crate::errors::{ApiFailure, SlackError};
use crate::permalink::MessageLocator;

// One process-wide HTTP client; nothing overrides its timeout per call.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Read-only snapshot of a fetched message. Only the textual body crosses
/// this boundary; blocks, attachments, and sender fields stay behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub text: String,
}

/// The two remote operations the editor needs.
#[async_trait]
pub trait MessageApi {
    /// Fetch the single message at or before `locator.ts` in the channel.
    async fn fetch_latest_at(&self, locator: &MessageLocator)
    -> Result<MessageRecord, SlackError>;

    /// Replace the text of the message at `locator`. Fire-once; the operator
    /// resubmits manually on failure.
    async fn update_text(&self, locator: &MessageLocator, text: &str) -> Result<(), SlackError>;
}

/// Web API client holding the bot token. Constructed once at startup and
/// shared read-only from then on.
pub struct SlackMessageClient {
    token: SlackApiToken,
}

impl SlackMessageClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    async fn call_method(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, SlackError> {
        let url = format!("https://slack.com/api/{method}");
        let resp = HTTP_CLIENT
            .post(&url)
            .bearer_auth(&self.token.token_value.0)
            .form(params)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SlackError::HttpError(format!(
                "{method} HTTP {}",
                resp.status()
            )));
        }

        let json: Value = resp.json().await?;
        if json.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            Ok(json)
        } else {
            Err(SlackError::ApiFailure(ApiFailure::from_response(json)))
        }
    }
}

#[async_trait]
impl MessageApi for SlackMessageClient {
    async fn fetch_latest_at(
        &self,
        locator: &MessageLocator,
    ) -> Result<MessageRecord, SlackError> {
        // History ending at the locator's instant, inclusive, one result:
        // "the message at or before this timestamp".
        let params = [
            ("channel", locator.channel.0.as_str()),
            ("latest", locator.ts.0.as_str()),
            ("limit", "1"),
            ("inclusive", "true"),
        ];
        let json = self.call_method("conversations.history", &params).await?;

        let messages: Vec<SlackHistoryMessage> = json
            .get("messages")
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| SlackError::HttpError(format!("malformed history payload: {e}")))?
            .unwrap_or_default();

        info!(
            channel = %locator.channel.0,
            ts = %locator.ts.0,
            count = messages.len(),
            "fetched channel history"
        );

        match messages.into_iter().next() {
            Some(message) => Ok(MessageRecord {
                text: message.content.text.unwrap_or_default(),
            }),
            None => Err(SlackError::MessageNotFound),
        }
    }

    async fn update_text(&self, locator: &MessageLocator, text: &str) -> Result<(), SlackError> {
        let params = [
            ("channel", locator.channel.0.as_str()),
            ("ts", locator.ts.0.as_str()),
            ("text", text),
        ];
        self.call_method("chat.update", &params).await?;
        info!(channel = %locator.channel.0, ts = %locator.ts.0, "updated message text");
        Ok(())
    }
}

//! The interactive edit cycle, kept free of UI types.
//!
//! One cycle walks `AwaitingUrl` to `MessageLoaded` to one of the update
//! outcomes. Every outcome also lands in a [`Notice`] that the front end
//! renders verbatim. Submitting a new URL starts the next cycle regardless of
//! where the previous one ended; nothing carries over between unrelated URLs.

use tracing::{info, warn};

use crate::errors::SlackError;
use crate::permalink::{MessageLocator, parse_permalink};
use crate::slack::{MessageApi, MessageRecord};

pub const INVALID_URL_MESSAGE: &str = "Not a valid Slack message URL. Paste a message permalink.";
pub const NOT_FOUND_MESSAGE: &str = "No message found at that link.";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Message updated.";

/// Where the current cycle stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Waiting for a permalink.
    AwaitingUrl,
    /// The last submission did not parse.
    UrlInvalid,
    /// A message is loaded and editable.
    MessageLoaded {
        locator: MessageLocator,
        current_text: String,
    },
    /// The replacement text was accepted by the platform.
    UpdateSucceeded {
        locator: MessageLocator,
        current_text: String,
    },
    /// The platform rejected the update; the loaded text stays editable so
    /// the operator can resubmit.
    UpdateFailed {
        locator: MessageLocator,
        current_text: String,
    },
}

impl SessionState {
    /// The loaded message's locator, in any post-fetch state.
    #[must_use]
    pub fn locator(&self) -> Option<&MessageLocator> {
        match self {
            SessionState::MessageLoaded { locator, .. }
            | SessionState::UpdateSucceeded { locator, .. }
            | SessionState::UpdateFailed { locator, .. } => Some(locator),
            SessionState::AwaitingUrl | SessionState::UrlInvalid => None,
        }
    }

    /// The loaded message's current text, in any post-fetch state.
    #[must_use]
    pub fn loaded_text(&self) -> Option<&str> {
        match self {
            SessionState::MessageLoaded { current_text, .. }
            | SessionState::UpdateSucceeded { current_text, .. }
            | SessionState::UpdateFailed { current_text, .. } => Some(current_text),
            SessionState::AwaitingUrl | SessionState::UrlInvalid => None,
        }
    }
}

/// Fully rendered diagnostic for a failed remote call: the platform error
/// code, the scope hints (an explicit "none" when absent), and the raw
/// response payload when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub code: String,
    pub needed: String,
    pub provided: String,
    pub raw: Option<String>,
}

impl ErrorReport {
    fn from_error(error: &SlackError) -> Self {
        match error {
            SlackError::ApiFailure(failure) => Self {
                code: failure.code.clone(),
                needed: failure.needed_hint().to_string(),
                provided: failure.provided_hint().to_string(),
                raw: serde_json::to_string_pretty(&failure.response).ok(),
            },
            other => Self {
                code: other.to_string(),
                needed: "none".to_string(),
                provided: "none".to_string(),
                raw: None,
            },
        }
    }
}

/// What the user should see after the last action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
    Diagnostic(ErrorReport),
}

/// The edit-cycle state machine. Holds the injected API handle and reacts to
/// the two form events; it never touches a UI type.
pub struct EditSession<A> {
    api: A,
    state: SessionState,
    notice: Option<Notice>,
}

impl<A: MessageApi> EditSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: SessionState::AwaitingUrl,
            notice: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Drop back to URL entry, abandoning anything loaded.
    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingUrl;
        self.notice = None;
    }

    /// Handle a submitted permalink. Starts a fresh cycle no matter how the
    /// previous one ended.
    pub async fn on_submit_url(&mut self, url: &str) {
        self.reset();

        let Some(locator) = parse_permalink(url) else {
            self.state = SessionState::UrlInvalid;
            self.notice = Some(Notice::Error(INVALID_URL_MESSAGE.to_string()));
            return;
        };

        info!(channel = %locator.channel.0, ts = %locator.ts.0, "permalink parsed");

        match self.api.fetch_latest_at(&locator).await {
            Ok(MessageRecord { text }) => {
                self.notice = Some(Notice::Info(format!(
                    "Loaded message {} from channel {}",
                    locator.ts.0, locator.channel.0
                )));
                self.state = SessionState::MessageLoaded {
                    locator,
                    current_text: text,
                };
            }
            Err(SlackError::MessageNotFound) => {
                self.notice = Some(Notice::Error(NOT_FOUND_MESSAGE.to_string()));
            }
            Err(error) => {
                warn!(%error, "failed to fetch message");
                self.notice = Some(Notice::Diagnostic(ErrorReport::from_error(&error)));
            }
        }
    }

    /// Handle the edited text being submitted. Only meaningful with a loaded
    /// message; ignored otherwise.
    pub async fn on_submit_update(&mut self, text: &str) {
        let Some(locator) = self.state.locator().cloned() else {
            warn!("update submitted without a loaded message; ignoring");
            return;
        };
        let current_text = self.state.loaded_text().unwrap_or("").to_string();

        match self.api.update_text(&locator, text).await {
            Ok(()) => {
                info!(channel = %locator.channel.0, ts = %locator.ts.0, "message updated");
                self.notice = Some(Notice::Info(UPDATE_SUCCESS_MESSAGE.to_string()));
                self.state = SessionState::UpdateSucceeded {
                    locator,
                    current_text: text.to_string(),
                };
            }
            Err(error) => {
                warn!(%error, "failed to update message");
                self.notice = Some(Notice::Diagnostic(ErrorReport::from_error(&error)));
                self.state = SessionState::UpdateFailed {
                    locator,
                    current_text,
                };
            }
        }
    }
}

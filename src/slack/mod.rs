//! Slack Web API integration.

pub mod client;

// Re-export main types for convenience
pub use client::{MessageApi, MessageRecord, SlackMessageClient};

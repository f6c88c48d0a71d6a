//! slackedit - edit Slack bot messages from the terminal.
//!
//! Paste a message permalink, review the message's current text, and submit a
//! replacement over the Slack Web API. One linear interaction per cycle: the
//! permalink is parsed into a channel + timestamp locator, the message at
//! that instant is fetched, and the edited text is written back with
//! `chat.update`.
//!
//! Module map:
//! - [`permalink`]: permalink parsing and timestamp canonicalization
//! - [`slack`]: the Web API adapter (fetch-at-or-before, update-text)
//! - [`controller`]: the UI-agnostic edit-cycle state machine
//! - [`app`] and [`ui`]: the terminal front end
//! - [`config`] and [`cli`]: credential resolution and startup

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod permalink;
pub mod slack;
pub mod ui;

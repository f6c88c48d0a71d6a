use std::sync::LazyLock;

use regex::Regex;
use slack_morphism::{SlackChannelId, SlackTs};

/// Channel + timestamp pair addressing one message, extracted from a
/// `.../archives/<CHANNEL>/p<DIGITS>` permalink. Either both fields come out
/// of a matching URL or there is no locator at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLocator {
    pub channel: SlackChannelId,
    pub ts: SlackTs,
}

static PERMALINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"archives/([A-Z0-9]+)/p(\d+)").expect("permalink pattern compiles")
});

/// Extract a [`MessageLocator`] from a pasted permalink.
///
/// The match is not anchored: the first `archives/<CHANNEL>/p<DIGITS>`
/// substring wins wherever it sits in the input, so trailing query strings
/// such as `?thread_ts=...` are ignored. Anything without that substring
/// yields `None`; there is no finer-grained failure.
#[must_use]
pub fn parse_permalink(input: &str) -> Option<MessageLocator> {
    let caps = PERMALINK_RE.captures(input)?;
    let channel = caps.get(1)?.as_str().to_string();
    let digits = caps.get(2)?.as_str();
    Some(MessageLocator {
        channel: SlackChannelId::new(channel),
        ts: SlackTs::new(canonical_ts(digits)),
    })
}

/// Rewrite a permalink digit run into Slack's `seconds.micros` form.
///
/// Runs of ten digits or fewer come back untouched, with no separator.
fn canonical_ts(digits: &str) -> String {
    if digits.len() > 10 {
        format!("{}.{}", &digits[..10], &digits[10..])
    } else {
        digits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ts_splits_after_ten_digits() {
        assert_eq!(canonical_ts("1234567890123456"), "1234567890.123456");
        assert_eq!(canonical_ts("12345678901"), "1234567890.1");
    }

    #[test]
    fn canonical_ts_leaves_short_runs_alone() {
        assert_eq!(canonical_ts("1234567890"), "1234567890");
        assert_eq!(canonical_ts("123"), "123");
    }

    #[test]
    fn lowercase_channel_segment_does_not_match() {
        assert!(parse_permalink("https://x.slack.com/archives/c0abcde/p123").is_none());
    }
}

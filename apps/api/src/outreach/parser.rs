//! Response Parser — turns raw generated text back into structured messages.
//!
//! The follow-up split relies on the literal `FOLLOW-UP {n}:` markers that
//! `prompts::FOLLOW_UP_PROMPT_TEMPLATE` asks the model to emit. When the model
//! does not follow that format the raw text is passed through untouched.

use serde::Serialize;

/// Number of messages in a follow-up sequence.
pub const FOLLOW_UP_COUNT: usize = 3;

/// Result of splitting a follow-up response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum FollowUps {
    /// All three markers found with non-empty bodies, in sequence order.
    Sequence([String; FOLLOW_UP_COUNT]),
    /// Markers missing or a body was empty. Holds the raw response verbatim.
    Unparsed(String),
}

impl FollowUps {
    /// The messages as a flat list: three entries, or one for the unparsed fallback.
    pub fn messages(&self) -> Vec<&str> {
        match self {
            FollowUps::Sequence(messages) => messages.iter().map(String::as_str).collect(),
            FollowUps::Unparsed(raw) => vec![raw.as_str()],
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, FollowUps::Unparsed(_))
    }
}

/// The literal marker that opens follow-up `n` (1-based).
pub fn follow_up_marker(n: usize) -> String {
    format!("FOLLOW-UP {n}:")
}

/// Trims surrounding whitespace. No truncation: the prompt asks for 300
/// characters but enforcing that is up to the caller.
pub fn parse_connection_message(raw: &str) -> String {
    raw.trim().to_string()
}

/// Splits a follow-up response on `FOLLOW-UP 1:` / `2:` / `3:`.
///
/// Each body runs from just after its marker to the first following marker
/// for the next position, or to the end of the text. The first occurrence of
/// every marker wins, so a marker echoed inside a later body does not move
/// the split.
pub fn parse_follow_ups(raw: &str) -> FollowUps {
    match split_on_markers(raw) {
        Some(messages) => FollowUps::Sequence(messages),
        None => FollowUps::Unparsed(raw.to_string()),
    }
}

fn split_on_markers(raw: &str) -> Option<[String; FOLLOW_UP_COUNT]> {
    let mut messages: [String; FOLLOW_UP_COUNT] = Default::default();

    for (n, slot) in (1..=FOLLOW_UP_COUNT).zip(messages.iter_mut()) {
        let marker = follow_up_marker(n);
        let start = raw.find(marker.as_str())? + marker.len();
        let body = &raw[start..];

        let end = if n < FOLLOW_UP_COUNT {
            body.find(follow_up_marker(n + 1).as_str())
                .unwrap_or(body.len())
        } else {
            body.len()
        };

        let message = body[..end].trim();
        if message.is_empty() {
            return None;
        }
        *slot = message.to_string();
    }

    Some(messages)
}

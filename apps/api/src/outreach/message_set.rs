//! The stored result of one prospect analysis.

use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;
use crate::outreach::parser::FollowUps;

/// Placeholder prefix stored when the connection message could not be generated.
pub const CONNECTION_ERROR_PREFIX: &str = "Error generating message";
/// Placeholder prefix stored when the follow-up sequence could not be generated.
pub const FOLLOW_UP_ERROR_PREFIX: &str = "Error generating follow-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Generated,
    Failed,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Generated => "generated",
            GenerationStatus::Failed => "failed",
        }
    }
}

/// How the follow-up half of a message set came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpStatus {
    /// Three messages split on markers.
    Parsed,
    /// The model ignored the format; the raw response is in `follow_up_fallback`.
    Degraded,
    /// The generator call failed; the error placeholder is in `follow_up_fallback`.
    Failed,
}

impl FollowUpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpStatus::Parsed => "parsed",
            FollowUpStatus::Degraded => "degraded",
            FollowUpStatus::Failed => "failed",
        }
    }
}

/// Kind of a row in the `messages` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Connection,
    FollowUp,
    FollowUpUnparsed,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Connection => "connection",
            MessageKind::FollowUp => "follow_up",
            MessageKind::FollowUpUnparsed => "follow_up_unparsed",
        }
    }
}

/// One message ready to be written to the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord<'a> {
    pub kind: MessageKind,
    /// 0 for the connection request, 1-3 for follow-ups.
    pub position: i16,
    pub content: &'a str,
}

/// A connection message plus its follow-up sequence.
///
/// `follow_ups` always holds exactly 0 or 3 non-empty messages. When it is
/// empty, `follow_up_fallback` carries the raw response or the error
/// placeholder and `follow_up_status` says which. Fields are private so the
/// invariant can only be established by `assemble`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMessageSet {
    connection_message: String,
    connection_status: GenerationStatus,
    follow_ups: Vec<String>,
    follow_up_status: FollowUpStatus,
    follow_up_fallback: Option<String>,
}

impl GeneratedMessageSet {
    /// Folds both generation outcomes into a displayable set. Failures become
    /// visible placeholder text; nothing here can fail.
    pub fn assemble(
        connection: Result<String, LlmError>,
        follow_ups: Result<FollowUps, LlmError>,
    ) -> Self {
        let (connection_message, connection_status) = match connection {
            Ok(message) => (message, GenerationStatus::Generated),
            Err(e) => (
                format!("{CONNECTION_ERROR_PREFIX}: {e}"),
                GenerationStatus::Failed,
            ),
        };

        let (follow_ups, follow_up_status, follow_up_fallback) = match follow_ups {
            Ok(FollowUps::Sequence(messages)) => {
                (messages.to_vec(), FollowUpStatus::Parsed, None)
            }
            Ok(FollowUps::Unparsed(raw)) => (Vec::new(), FollowUpStatus::Degraded, Some(raw)),
            Err(e) => (
                Vec::new(),
                FollowUpStatus::Failed,
                Some(format!("{FOLLOW_UP_ERROR_PREFIX}: {e}")),
            ),
        };

        Self {
            connection_message,
            connection_status,
            follow_ups,
            follow_up_status,
            follow_up_fallback,
        }
    }

    pub fn connection_message(&self) -> &str {
        &self.connection_message
    }

    pub fn connection_status(&self) -> GenerationStatus {
        self.connection_status
    }

    /// Exactly three messages, or none.
    pub fn follow_ups(&self) -> &[String] {
        &self.follow_ups
    }

    pub fn follow_up_status(&self) -> FollowUpStatus {
        self.follow_up_status
    }

    pub fn follow_up_fallback(&self) -> Option<&str> {
        self.follow_up_fallback.as_deref()
    }

    /// Rows for the `messages` table, in sequence order.
    pub fn message_records(&self) -> Vec<MessageRecord<'_>> {
        let mut records = vec![MessageRecord {
            kind: MessageKind::Connection,
            position: 0,
            content: &self.connection_message,
        }];

        records.extend(
            self.follow_ups
                .iter()
                .zip(1i16..)
                .map(|(content, position)| MessageRecord {
                    kind: MessageKind::FollowUp,
                    position,
                    content,
                }),
        );

        if let Some(fallback) = &self.follow_up_fallback {
            records.push(MessageRecord {
                kind: MessageKind::FollowUpUnparsed,
                position: 1,
                content: fallback,
            });
        }

        records
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProspectRow {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub profile_summary: String,
    pub recent_activity: String,
    pub profile_url: Option<String>,
    pub connection_message: String,
    pub connection_status: String,
    /// JSON array of exactly 0 or 3 strings.
    pub follow_up_messages: Value,
    pub follow_up_status: String,
    pub follow_up_fallback: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageRow {
    pub id: Uuid,
    pub prospect_id: Uuid,
    pub message_type: String,
    pub sequence_position: i16,
    pub message_content: String,
    pub status: String,
    pub sent_at: Option<DateTime<Utc>>,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

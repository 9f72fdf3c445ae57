//! Persistence for campaigns, prospects and their generated messages.
//!
//! Rows are written once and never updated: a prospect and its message set
//! are inserted together in one transaction.

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::campaign::CampaignRow;
use crate::models::prospect::{MessageRow, ProspectRow};
use crate::outreach::message_set::GeneratedMessageSet;
use crate::outreach::types::{CampaignConfig, ProspectProfile};

/// Status every new prospect and message starts in.
const DRAFT_STATUS: &str = "draft";

pub async fn insert_campaign(
    pool: &PgPool,
    campaign: &CampaignConfig,
) -> Result<CampaignRow, sqlx::Error> {
    let row = sqlx::query_as::<_, CampaignRow>(
        r#"
        INSERT INTO campaigns
            (id, name, product_description, target_industry, outreach_goal, brand_voice,
             target_roles, company_size, region, triggers)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&campaign.name)
    .bind(&campaign.product_description)
    .bind(&campaign.target_industry)
    .bind(&campaign.outreach_goal)
    .bind(&campaign.brand_voice)
    .bind(&campaign.target_roles)
    .bind(campaign.company_size.map(|s| s.as_str()))
    .bind(campaign.region.map(|r| r.as_str()))
    .bind(&campaign.triggers)
    .fetch_one(pool)
    .await?;

    info!("Created campaign {} ('{}')", row.id, row.name);
    Ok(row)
}

/// All campaigns, newest first.
pub async fn list_campaigns(pool: &PgPool) -> Result<Vec<CampaignRow>, sqlx::Error> {
    sqlx::query_as::<_, CampaignRow>("SELECT * FROM campaigns ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_campaign(
    pool: &PgPool,
    campaign_id: Uuid,
) -> Result<Option<CampaignRow>, sqlx::Error> {
    sqlx::query_as::<_, CampaignRow>("SELECT * FROM campaigns WHERE id = $1")
        .bind(campaign_id)
        .fetch_optional(pool)
        .await
}

/// Inserts the prospect with its message set and one `messages` row per message.
/// Returns the new prospect id.
pub async fn insert_prospect(
    pool: &PgPool,
    campaign_id: Uuid,
    prospect: &ProspectProfile,
    profile_url: Option<&str>,
    messages: &GeneratedMessageSet,
) -> Result<Uuid, sqlx::Error> {
    let prospect_id = Uuid::new_v4();
    let follow_up_messages = Value::from(messages.follow_ups().to_vec());

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO prospects
            (id, campaign_id, name, title, company, industry, profile_summary, recent_activity,
             profile_url, connection_message, connection_status, follow_up_messages,
             follow_up_status, follow_up_fallback, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        "#,
    )
    .bind(prospect_id)
    .bind(campaign_id)
    .bind(&prospect.name)
    .bind(&prospect.title)
    .bind(&prospect.company)
    .bind(&prospect.industry)
    .bind(&prospect.profile_summary)
    .bind(&prospect.recent_activity)
    .bind(profile_url)
    .bind(messages.connection_message())
    .bind(messages.connection_status().as_str())
    .bind(&follow_up_messages)
    .bind(messages.follow_up_status().as_str())
    .bind(messages.follow_up_fallback())
    .bind(DRAFT_STATUS)
    .execute(&mut *tx)
    .await?;

    for record in messages.message_records() {
        sqlx::query(
            r#"
            INSERT INTO messages
                (id, prospect_id, message_type, sequence_position, message_content, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(prospect_id)
        .bind(record.kind.as_str())
        .bind(record.position)
        .bind(record.content)
        .bind(DRAFT_STATUS)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Saved prospect {} to campaign {} (follow-ups: {})",
        prospect_id,
        campaign_id,
        messages.follow_up_status().as_str()
    );
    Ok(prospect_id)
}

pub async fn list_prospects(
    pool: &PgPool,
    campaign_id: Uuid,
) -> Result<Vec<ProspectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProspectRow>(
        "SELECT * FROM prospects WHERE campaign_id = $1 ORDER BY created_at DESC",
    )
    .bind(campaign_id)
    .fetch_all(pool)
    .await
}

pub async fn prospect_exists(pool: &PgPool, prospect_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM prospects WHERE id = $1)")
        .bind(prospect_id)
        .fetch_one(pool)
        .await
}

/// A prospect's messages: connection first, then follow-ups in order.
pub async fn list_messages(
    pool: &PgPool,
    prospect_id: Uuid,
) -> Result<Vec<MessageRow>, sqlx::Error> {
    sqlx::query_as::<_, MessageRow>(
        "SELECT * FROM messages WHERE prospect_id = $1 ORDER BY sequence_position, message_type",
    )
    .bind(prospect_id)
    .fetch_all(pool)
    .await
}

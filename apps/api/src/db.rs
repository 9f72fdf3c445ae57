use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_CAMPAIGNS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS campaigns (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    product_description TEXT NOT NULL,
    target_industry TEXT NOT NULL,
    outreach_goal TEXT NOT NULL,
    brand_voice TEXT NOT NULL,
    target_roles TEXT,
    company_size TEXT,
    region TEXT,
    triggers TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_PROSPECTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS prospects (
    id UUID PRIMARY KEY,
    campaign_id UUID NOT NULL REFERENCES campaigns(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    industry TEXT NOT NULL,
    profile_summary TEXT NOT NULL,
    recent_activity TEXT NOT NULL DEFAULT '',
    profile_url TEXT,
    connection_message TEXT NOT NULL,
    connection_status TEXT NOT NULL,
    follow_up_messages JSONB NOT NULL,
    follow_up_status TEXT NOT NULL,
    follow_up_fallback TEXT,
    status TEXT NOT NULL DEFAULT 'draft',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_PROSPECTS_CAMPAIGN_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_prospects_campaign_id ON prospects (campaign_id)";

const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id UUID PRIMARY KEY,
    prospect_id UUID NOT NULL REFERENCES prospects(id) ON DELETE CASCADE,
    message_type TEXT NOT NULL,
    sequence_position SMALLINT NOT NULL,
    message_content TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'draft',
    sent_at TIMESTAMPTZ,
    response TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_MESSAGES_PROSPECT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_messages_prospect_id ON messages (prospect_id)";

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Applies the schema. Every statement is idempotent, so this runs on each startup.
/// Tables are created in foreign-key order.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    let migrations = [
        CREATE_CAMPAIGNS_TABLE,
        CREATE_PROSPECTS_TABLE,
        CREATE_PROSPECTS_CAMPAIGN_INDEX,
        CREATE_MESSAGES_TABLE,
        CREATE_MESSAGES_PROSPECT_INDEX,
    ];

    for migration in migrations {
        sqlx::query(migration)
            .execute(pool)
            .await
            .context("Failed to run migration")?;
    }

    info!("Database schema ready");
    Ok(())
}

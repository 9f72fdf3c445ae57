use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::outreach::types::CampaignConfig;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CampaignRow {
    pub id: Uuid,
    pub name: String,
    pub product_description: String,
    pub target_industry: String,
    pub outreach_goal: String,
    pub brand_voice: String,
    pub target_roles: Option<String>,
    pub company_size: Option<String>,
    pub region: Option<String>,
    pub triggers: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CampaignRow {
    /// Rebuilds the pipeline input from a stored row. An unrecognised
    /// enum column is logged and dropped; it never feeds a prompt.
    pub fn to_config(&self) -> CampaignConfig {
        CampaignConfig {
            name: self.name.clone(),
            product_description: self.product_description.clone(),
            target_industry: self.target_industry.clone(),
            outreach_goal: self.outreach_goal.clone(),
            brand_voice: self.brand_voice.clone(),
            target_roles: self.target_roles.clone(),
            company_size: parse_column(self.id, "company_size", self.company_size.as_deref()),
            region: parse_column(self.id, "region", self.region.as_deref()),
            triggers: self.triggers.clone(),
        }
    }
}

fn parse_column<T>(campaign_id: Uuid, column: &str, value: Option<&str>) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.and_then(|raw| match raw.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Campaign {campaign_id} has unreadable {column}: {e}");
            None
        }
    })
}

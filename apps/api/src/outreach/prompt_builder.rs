//! Prompt Builder — renders the connection and follow-up templates.
//!
//! Pure formatting: no I/O, no clock, no randomness. Field values are embedded
//! verbatim, including text that reads like instructions to the model.

use crate::llm_client::prompts::fill_template;
use crate::outreach::prompts::{CONNECTION_PROMPT_TEMPLATE, FOLLOW_UP_PROMPT_TEMPLATE};
use crate::outreach::types::{CampaignConfig, ProspectProfile};

/// LinkedIn's limit on connection request notes. Requested from the model,
/// never enforced on its output.
pub const CONNECTION_CHAR_LIMIT: usize = 300;

/// Builds the prompt for a single connection request message.
///
/// `recent_activity` is appended to the prospect details only when non-blank.
pub fn build_connection_prompt(campaign: &CampaignConfig, prospect: &ProspectProfile) -> String {
    let recent_activity_line = if prospect.recent_activity.trim().is_empty() {
        String::new()
    } else {
        format!("\n- Recent Activity: {}", prospect.recent_activity)
    };
    let char_limit = CONNECTION_CHAR_LIMIT.to_string();

    fill_template(
        CONNECTION_PROMPT_TEMPLATE,
        &[
            ("product_description", campaign.product_description.as_str()),
            ("target_industry", campaign.target_industry.as_str()),
            ("outreach_goal", campaign.outreach_goal.as_str()),
            ("brand_voice", campaign.brand_voice.as_str()),
            ("prospect_name", prospect.name.as_str()),
            ("prospect_title", prospect.title.as_str()),
            ("prospect_company", prospect.company.as_str()),
            ("prospect_industry", prospect.industry.as_str()),
            ("profile_summary", prospect.profile_summary.as_str()),
            ("recent_activity_line", recent_activity_line.as_str()),
            ("char_limit", char_limit.as_str()),
        ],
    )
}

/// Builds the prompt for the three-message follow-up sequence.
pub fn build_follow_up_prompt(campaign: &CampaignConfig, prospect: &ProspectProfile) -> String {
    fill_template(
        FOLLOW_UP_PROMPT_TEMPLATE,
        &[
            ("product_description", campaign.product_description.as_str()),
            ("target_industry", campaign.target_industry.as_str()),
            ("outreach_goal", campaign.outreach_goal.as_str()),
            ("brand_voice", campaign.brand_voice.as_str()),
            ("prospect_name", prospect.name.as_str()),
            ("prospect_title", prospect.title.as_str()),
            ("prospect_company", prospect.company.as_str()),
        ],
    )
}

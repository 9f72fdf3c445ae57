//! Outreach Generation — runs prompts through the injected `TextGenerator`.
//!
//! Flow per prospect: build prompt → generate → parse, once for the connection
//! request and once for the follow-up sequence. No retries, no caching; a
//! failed call becomes placeholder text in the `GeneratedMessageSet`.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::llm_client::{LlmError, TextGenerator};
use crate::outreach::message_set::{GeneratedMessageSet, CONNECTION_ERROR_PREFIX};
use crate::outreach::parser::{parse_connection_message, parse_follow_ups, FollowUps};
use crate::outreach::prompt_builder::{
    build_connection_prompt, build_follow_up_prompt, CONNECTION_CHAR_LIMIT,
};
use crate::outreach::types::{CampaignConfig, ProspectProfile};

/// One row of a bulk run: who the message is for and what came back.
#[derive(Debug, Clone, Serialize)]
pub struct BulkMessage {
    pub prospect: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub connection_message: String,
    pub failed: bool,
}

/// Generates and trims a connection request. Errors propagate to the caller.
pub async fn generate_connection_message(
    generator: &dyn TextGenerator,
    campaign: &CampaignConfig,
    prospect: &ProspectProfile,
) -> Result<String, LlmError> {
    let prompt = build_connection_prompt(campaign, prospect);
    let raw = generator.generate(&prompt).await?;
    let message = parse_connection_message(&raw);

    let chars = message.chars().count();
    if chars > CONNECTION_CHAR_LIMIT {
        warn!(
            "Connection message for {} is {} chars (limit {}), keeping as generated",
            prospect.name, chars, CONNECTION_CHAR_LIMIT
        );
    }

    Ok(message)
}

/// Generates the follow-up sequence and splits it on markers.
/// A response that ignores the format comes back as `FollowUps::Unparsed`.
pub async fn generate_follow_ups(
    generator: &dyn TextGenerator,
    campaign: &CampaignConfig,
    prospect: &ProspectProfile,
) -> Result<FollowUps, LlmError> {
    let prompt = build_follow_up_prompt(campaign, prospect);
    let raw = generator.generate(&prompt).await?;
    let follow_ups = parse_follow_ups(&raw);

    debug!(
        "Follow-up response for {} yielded {} message(s)",
        prospect.name,
        follow_ups.messages().len()
    );
    if follow_ups.is_degraded() {
        warn!(
            "Follow-up response for {} did not match the FOLLOW-UP format; passing raw text through",
            prospect.name
        );
    }

    Ok(follow_ups)
}

/// Produces the full message set for one prospect. Never fails: generation
/// errors are logged and turned into placeholder messages.
pub async fn generate_message_set(
    generator: &dyn TextGenerator,
    campaign: &CampaignConfig,
    prospect: &ProspectProfile,
) -> GeneratedMessageSet {
    info!(
        "Generating outreach for {} ({}, {}) in campaign '{}'",
        prospect.name, prospect.title, prospect.company, campaign.name
    );

    let connection = generate_connection_message(generator, campaign, prospect).await;
    if let Err(e) = &connection {
        warn!("Connection message generation failed for {}: {e}", prospect.name);
    }

    let follow_ups = generate_follow_ups(generator, campaign, prospect).await;
    if let Err(e) = &follow_ups {
        warn!("Follow-up generation failed for {}: {e}", prospect.name);
    }

    GeneratedMessageSet::assemble(connection, follow_ups)
}

/// Generates connection messages for several prospects, one after another.
/// Output order matches input order; one failure does not stop the run.
pub async fn generate_bulk(
    generator: &dyn TextGenerator,
    campaign: &CampaignConfig,
    prospects: &[ProspectProfile],
) -> Vec<BulkMessage> {
    let mut results = Vec::with_capacity(prospects.len());

    for (index, prospect) in prospects.iter().enumerate() {
        info!(
            "Bulk generation {}/{}: {}",
            index + 1,
            prospects.len(),
            prospect.name
        );

        let (connection_message, failed) =
            match generate_connection_message(generator, campaign, prospect).await {
                Ok(message) => (message, false),
                Err(e) => {
                    warn!("Bulk generation failed for {}: {e}", prospect.name);
                    (format!("{CONNECTION_ERROR_PREFIX}: {e}"), true)
                }
            };

        results.push(BulkMessage {
            prospect: prospect.name.clone(),
            title: prospect.title.clone(),
            company: prospect.company.clone(),
            industry: prospect.industry.clone(),
            connection_message,
            failed,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outreach::message_set::{FollowUpStatus, GenerationStatus};
    use crate::test_support::{anjali, hr_campaign, prospect, Reply, ScriptedGenerator};

    const THREE_FOLLOW_UPS: &str = "FOLLOW-UP 1:\nThanks for connecting!\n\n\
        FOLLOW-UP 2:\nHere is a case study.\n\n\
        FOLLOW-UP 3:\nOne last idea.";

    #[tokio::test]
    async fn test_message_set_happy_path() {
        let generator = ScriptedGenerator::new(vec![
            Reply::text("  Hi Anjali, loved your hybrid hiring post!  \n"),
            Reply::text(THREE_FOLLOW_UPS),
        ]);

        let set = generate_message_set(&generator, &hr_campaign(), &anjali()).await;

        assert_eq!(set.connection_message(), "Hi Anjali, loved your hybrid hiring post!");
        assert_eq!(set.connection_status(), GenerationStatus::Generated);
        assert_eq!(
            set.follow_ups(),
            ["Thanks for connecting!", "Here is a case study.", "One last idea."]
        );
        assert_eq!(set.follow_up_status(), FollowUpStatus::Parsed);
    }

    #[tokio::test]
    async fn test_message_set_sends_connection_then_follow_up_prompt() {
        let generator = ScriptedGenerator::new(vec![
            Reply::text("Hi"),
            Reply::text(THREE_FOLLOW_UPS),
        ]);

        generate_message_set(&generator, &hr_campaign(), &anjali()).await;

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], build_connection_prompt(&hr_campaign(), &anjali()));
        assert_eq!(prompts[1], build_follow_up_prompt(&hr_campaign(), &anjali()));
    }

    #[tokio::test]
    async fn test_message_set_degraded_follow_ups_are_observable() {
        let generator = ScriptedGenerator::new(vec![
            Reply::text("Hi"),
            Reply::text("Sure! 1) Hello 2) Hi again 3) Bye"),
        ]);

        let set = generate_message_set(&generator, &hr_campaign(), &anjali()).await;

        assert_eq!(set.follow_up_status(), FollowUpStatus::Degraded);
        assert!(set.follow_ups().is_empty());
        assert_eq!(
            set.follow_up_fallback(),
            Some("Sure! 1) Hello 2) Hi again 3) Bye")
        );
    }

    #[tokio::test]
    async fn test_message_set_survives_generation_failures() {
        let generator = ScriptedGenerator::new(vec![Reply::Fail(429), Reply::Fail(500)]);

        let set = generate_message_set(&generator, &hr_campaign(), &anjali()).await;

        assert_eq!(set.connection_status(), GenerationStatus::Failed);
        assert!(set.connection_message().starts_with("Error generating message:"));
        assert_eq!(set.follow_up_status(), FollowUpStatus::Failed);
        assert!(set
            .follow_up_fallback()
            .unwrap()
            .starts_with("Error generating follow-up:"));
    }

    #[tokio::test]
    async fn test_connection_failure_still_attempts_follow_ups() {
        let generator = ScriptedGenerator::new(vec![Reply::Fail(500), Reply::text(THREE_FOLLOW_UPS)]);

        let set = generate_message_set(&generator, &hr_campaign(), &anjali()).await;

        assert_eq!(set.connection_status(), GenerationStatus::Failed);
        assert_eq!(set.follow_up_status(), FollowUpStatus::Parsed);
        assert_eq!(generator.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_connection_message_propagates_error() {
        let generator = ScriptedGenerator::new(vec![Reply::Fail(401)]);

        let result = generate_connection_message(&generator, &hr_campaign(), &anjali()).await;

        assert!(matches!(result, Err(LlmError::Api { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_over_limit_connection_message_is_not_truncated() {
        let generator = ScriptedGenerator::new(vec![Reply::Text("y".repeat(400))]);

        let message = generate_connection_message(&generator, &hr_campaign(), &anjali())
            .await
            .unwrap();

        assert_eq!(message.len(), 400);
    }

    #[tokio::test]
    async fn test_bulk_keeps_input_order_and_continues_after_failure() {
        let generator = ScriptedGenerator::new(vec![
            Reply::text("Hi Rajesh"),
            Reply::Fail(503),
            Reply::text("Hi Amit"),
        ]);
        let prospects = vec![
            prospect("Rajesh Kumar", "CTO", "TechStart Solutions"),
            prospect("Priya Sharma", "Head of Growth", "ScaleUp Inc"),
            prospect("Amit Patel", "VP Engineering", "Innovation Labs"),
        ];

        let results = generate_bulk(&generator, &hr_campaign(), &prospects).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].prospect, "Rajesh Kumar");
        assert_eq!(results[0].connection_message, "Hi Rajesh");
        assert!(!results[0].failed);
        assert_eq!(results[1].prospect, "Priya Sharma");
        assert!(results[1].failed);
        assert!(results[1].connection_message.starts_with("Error generating message:"));
        assert_eq!(results[2].connection_message, "Hi Amit");
        assert_eq!(results[2].company, "Innovation Labs");
    }

    #[tokio::test]
    async fn test_bulk_only_requests_connection_messages() {
        let generator = ScriptedGenerator::new(vec![Reply::text("a"), Reply::text("b")]);
        let prospects = vec![prospect("A", "CTO", "X"), prospect("B", "CEO", "Y")];

        generate_bulk(&generator, &hr_campaign(), &prospects).await;

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts
            .iter()
            .all(|p| p.starts_with("Generate a personalized LinkedIn connection request message.")));
    }
}

// All LLM prompt templates for the outreach module.
// Placeholders are filled by llm_client::prompts::fill_template.

/// Connection request template.
/// Replace: {product_description}, {target_industry}, {outreach_goal}, {brand_voice},
///          {prospect_name}, {prospect_title}, {prospect_company}, {prospect_industry},
///          {profile_summary}, {recent_activity_line}, {char_limit}
pub const CONNECTION_PROMPT_TEMPLATE: &str = r#"Generate a personalized LinkedIn connection request message.

Campaign Context:
- Product/Service: {product_description}
- Target Industry: {target_industry}
- Outreach Goal: {outreach_goal}
- Brand Voice: {brand_voice}

Prospect Details:
- Name: {prospect_name}
- Title: {prospect_title}
- Company: {prospect_company}
- Industry: {prospect_industry}
- Profile Summary: {profile_summary}{recent_activity_line}

Requirements:
- Maximum {char_limit} characters (LinkedIn limit)
- Personalized and relevant
- Professional but {brand_voice} tone
- Include specific value proposition
- End with a soft call-to-action

Generate only the message, no additional text."#;

/// Follow-up sequence template. The FOLLOW-UP markers in the format block are
/// what `parser::parse_follow_ups` splits on; keep them in sync.
/// Replace: {product_description}, {target_industry}, {outreach_goal}, {brand_voice},
///          {prospect_name}, {prospect_title}, {prospect_company}
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = r#"Generate 3 follow-up messages for LinkedIn outreach sequence.

Campaign Context:
- Product/Service: {product_description}
- Target Industry: {target_industry}
- Outreach Goal: {outreach_goal}
- Brand Voice: {brand_voice}

Prospect Details:
- Name: {prospect_name}
- Title: {prospect_title}
- Company: {prospect_company}

Generate 3 different follow-up messages:
1. First follow-up (2-3 days after connection) - soft reminder with value
2. Second follow-up (1 week later) - share case study or insight
3. Final follow-up (2 weeks later) - last attempt with different angle

Each message should be:
- Under 200 words
- {brand_voice} tone
- Provide value, not just ask for time
- Have clear but not pushy CTA

Format as:
FOLLOW-UP 1:
[message]

FOLLOW-UP 2:
[message]

FOLLOW-UP 3:
[message]"#;

// Shared prompt constants and prompt-building utilities.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments and the template filler.

/// System prompt sent with every outreach generation call.
pub const OUTREACH_SYSTEM: &str = "You are an experienced B2B sales copywriter. \
    You write concise, personalized LinkedIn outreach messages. \
    Follow the requested output format exactly. \
    Do NOT add explanations, headings, or commentary outside the requested messages.";

/// Fills `{name}` placeholders in `template` in a single left-to-right pass.
///
/// Values are inserted verbatim and never rescanned, so a value containing
/// `{other}` stays literal. Unknown placeholders and lone braces are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

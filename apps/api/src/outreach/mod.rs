// Outreach engine: prompt building, generation, response parsing, persistence.
// All generation goes through the injected TextGenerator, never a global client.

pub mod generator;
pub mod handlers;
pub mod message_set;
pub mod parser;
pub mod prompt_builder;
pub mod prompts;
pub mod store;
pub mod types;

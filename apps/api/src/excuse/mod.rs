// Excuse drafting: request parameters, tone guide, instruction composition, generation.
// All completion calls go through llm_client — no direct HTTP calls here.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod tone;

// Instruction template for excuse drafting.
// Reuses the closing directive from llm_client::prompts.

/// System instruction template.
/// Replace: {tone_guide}, {closing}, {recipient}, {intensity}, {event} (event last).
pub const EXCUSE_SYSTEM_TEMPLATE: &str = r#"You are a social engineering expert. Draft a text message.
TARGET: {recipient}
EVENT: {event}
INTENSITY: {intensity}

TONE GUIDE:
{tone_guide}

{closing}"#;

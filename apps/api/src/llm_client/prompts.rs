// Shared prompt fragments for completion calls.
// Each service that builds instructions defines its own prompts.rs alongside it.

/// Closing directive that keeps the completion pasteable as-is.
pub const RAW_MESSAGE_ONLY: &str = "Do not include quotes. Just the raw text for the message.";

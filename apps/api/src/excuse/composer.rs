//! Prompt Composer — turns validated request parameters into the instruction sent to the model.

use crate::excuse::models::ExcuseRequest;
use crate::excuse::prompts::EXCUSE_SYSTEM_TEMPLATE;
use crate::excuse::tone::tone_guide;
use crate::llm_client::prompts::RAW_MESSAGE_ONLY;

/// Creativity parameter attached to every excuse instruction.
pub const CREATIVITY: f64 = 0.8;

/// The instruction text plus the sampling temperature it should be sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedInstruction {
    pub text: String,
    pub temperature: f64,
}

/// Builds the excuse-drafting instruction. Deterministic for identical inputs.
///
/// The event is substituted last: it is the only free text, so any
/// `{placeholder}` it contains must survive untouched.
pub fn compose_instruction(request: &ExcuseRequest) -> ComposedInstruction {
    let text = EXCUSE_SYSTEM_TEMPLATE
        .replace("{tone_guide}", &tone_guide())
        .replace("{closing}", RAW_MESSAGE_ONLY)
        .replace("{recipient}", request.recipient.label())
        .replace("{intensity}", request.intensity.label())
        .replace("{event}", &request.event);

    ComposedInstruction {
        text,
        temperature: CREATIVITY,
    }
}

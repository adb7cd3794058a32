//! Excuse generation — orchestrates one interaction.
//!
//! Flow: validate → compose_instruction → CompletionService::complete → text.
//! The completion service is never touched when validation fails.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::excuse::composer::compose_instruction;
use crate::excuse::models::ExcuseInput;
use crate::llm_client::CompletionService;

/// Runs one interaction and returns the completion text verbatim.
pub async fn generate_excuse(
    completion: &dyn CompletionService,
    input: ExcuseInput,
) -> Result<String, AppError> {
    let interaction_id = Uuid::new_v4();

    let request = input.validate().inspect_err(|e| {
        info!("Interaction {interaction_id} rejected: {e}");
    })?;

    let instruction = compose_instruction(&request);
    info!(
        "Interaction {}: recipient={:?} intensity={:?} event_len={}",
        interaction_id,
        request.recipient,
        request.intensity,
        request.event.len()
    );

    let text = completion
        .complete(&request.credential, &instruction.text, instruction.temperature)
        .await
        .map_err(|e| {
            warn!("Interaction {interaction_id} failed: {e}");
            AppError::from(e)
        })?;

    info!("Interaction {} produced {} chars", interaction_id, text.len());
    Ok(text)
}

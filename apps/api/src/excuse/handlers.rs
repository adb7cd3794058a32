//! Axum route handlers for the Excuse JSON API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::excuse::generator::generate_excuse;
use crate::excuse::models::ExcuseInput;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExcuseResponse {
    pub text: String,
}

/// POST /api/v1/excuses
///
/// Same pipeline as the form: presence checks, compose, one completion call.
pub async fn handle_generate_excuse(
    State(state): State<AppState>,
    Json(input): Json<ExcuseInput>,
) -> Result<Json<ExcuseResponse>, AppError> {
    let text = generate_excuse(state.completion.as_ref(), input).await?;
    Ok(Json(ExcuseResponse { text }))
}

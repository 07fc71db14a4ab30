//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::generate_listing;
use crate::models::listing::ListingResult;
use crate::models::product::ProductPayload;
use crate::state::AppState;

/// Default creativity matching the form slider's initial position.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub produto: ProductPayload,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub resultado: ListingResult,
}

/// POST /api/v1/listings/generate
///
/// Validates the payload, runs one completion, and returns the decoded
/// listing. All completion failures become user-facing messages here; none
/// escape as unhandled faults.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(mut request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.produto.nome.trim().is_empty() {
        return Err(AppError::Validation(
            "Informe pelo menos o Nome do produto.".to_string(),
        ));
    }

    request.produto.normalize();

    let resultado = generate_listing(
        state.llm.as_ref(),
        &request.produto,
        request.temperature.clamp(0.0, 1.0),
    )
    .await
    .map_err(AppError::from_llm_failure)?;

    Ok(Json(GenerateResponse { resultado }))
}

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::errors::AppError;
use crate::metrics;
use crate::models::{ClassificationResult, Identity};
use crate::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BfhlRequest {
    pub data: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/bfhl — classify `data` and echo the configured identity
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<BfhlRequest>, JsonRejection>,
) -> Result<Json<BfhlResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected /api/bfhl body");
        metrics::record_rejection();
        AppError::from(rejection)
    })?;

    let started = Instant::now();
    let result = classify(&body.data).map_err(|e| {
        tracing::warn!(error = %e, tokens = body.data.len(), "Classification failed");
        metrics::record_rejection();
        AppError::from(e)
    })?;
    metrics::record_classification(&result, started.elapsed().as_secs_f64());

    tracing::debug!(
        tokens = body.data.len(),
        numeric = result.numeric_count(),
        alphabetic = result.alphabets.len(),
        special = result.special_characters.len(),
        sum = %result.sum,
        "Classified tokens"
    );

    Ok(Json(BfhlResponse {
        is_success: true,
        identity: state.config.identity.clone(),
        result,
    }))
}

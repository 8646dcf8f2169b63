//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::scorer::{score_with_fallback, ScoreOutcome};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Accepts both the backend's snake_case and the web client's camelCase names.
#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    #[serde(default, alias = "resumeText")]
    pub resume_text: Option<String>,
    #[serde(default, alias = "jobDescription")]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AtsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: ScoreOutcome,
}

fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ats-calculator
///
/// Scores a résumé against a job description. The analysis backend is tried
/// first; if it fails the local calculator answers and the response carries a note.
pub async fn handle_ats_calculator(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsResponse>, AppError> {
    let resume_text = require_text(request.resume_text, "resume_text")?;
    let job_description = require_text(request.job_description, "job_description")?;

    let outcome = score_with_fallback(
        state.primary_scorer.as_ref(),
        state.fallback_scorer.as_ref(),
        &resume_text,
        &job_description,
    )
    .await?;

    info!(
        "ATS score {} (keyword match {}%) via {}",
        outcome.record.overall_score, outcome.record.keyword_match, outcome.scorer_backend
    );

    Ok(Json(AtsResponse {
        success: true,
        outcome,
    }))
}

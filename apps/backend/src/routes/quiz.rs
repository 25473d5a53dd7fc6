//! Quiz scoring endpoint

use axum::Json;
use studygen_core::score;

use crate::error::Result;
use crate::models::{ScoreRequest, ScoreResponse};

/// POST /api/quiz/score
/// Scores submitted answers against the questions they answer
pub async fn score_answers(Json(payload): Json<ScoreRequest>) -> Result<Json<ScoreResponse>> {
    let result = score(&payload.answers, &payload.questions)?;

    tracing::debug!(
        correct = result.correct,
        total = result.total,
        "Scored quiz"
    );

    Ok(Json(result.into()))
}

//! Study material generation endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{FlashcardsResponse, GenerateRequest, QuizResponse, StudyMaterialsResponse};
use crate::AppState;

/// POST /api/generate
/// Generates flashcards and a quiz from the same text
pub async fn study_materials(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<StudyMaterialsResponse>> {
    let response = state.generation.study_materials(&payload.text)?;
    Ok(Json(response))
}

/// POST /api/flashcards
pub async fn flashcards(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<FlashcardsResponse>> {
    let flashcards = state.generation.flashcards(&payload.text)?;
    Ok(Json(FlashcardsResponse { flashcards }))
}

/// POST /api/quiz
pub async fn quiz(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<QuizResponse>> {
    let quiz = state.generation.quiz(&payload.text)?;
    Ok(Json(QuizResponse { quiz }))
}

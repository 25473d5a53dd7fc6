//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from studygen-core
pub use studygen_core::{Flashcard, Grade, QuizQuestion, ScoreResult};

/// Body of every generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

/// POST /api/generate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterialsResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
}

/// POST /api/flashcards response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

/// POST /api/quiz response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
}

/// POST /api/quiz/score request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Option<usize>>,
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/quiz/score response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
    pub message: String,
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        let grade = result.grade();
        Self {
            correct: result.correct,
            total: result.total,
            percentage: result.percentage,
            grade,
            message: grade.message().to_string(),
        }
    }
}

//! Heuristic study material generation from plain text.
//!
//! Provides:
//! - Sentence segmentation
//! - Flashcard extraction (definition and key-term rules, line-chunk fallback)
//! - Fill-in-the-blank quiz generation with distractors
//! - Quiz scoring and grading
//! - A caller-owned study session state machine

pub mod error;
pub mod flashcards;
pub mod quiz;
pub mod scoring;
pub mod segmenter;
pub mod session;
pub mod types;

use rand::Rng;

pub use error::{Result, StudyError};
pub use flashcards::{CardDraft, CardRule};
pub use quiz::ImportantTokens;
pub use scoring::score;
pub use segmenter::segment;
pub use session::{QuizPhase, Screen, StudySession};
pub use types::{
    Flashcard, GenerationLimits, Grade, QuizAnswerSet, QuizQuestion, ScoreResult, BLANK,
    OPTION_COUNT,
};

/// Generate up to 15 flashcards from `text`.
pub fn generate_flashcards(text: &str) -> Vec<Flashcard> {
    flashcards::generate(text, &GenerationLimits::default())
}

/// Generate up to 10 quiz questions from `text`.
pub fn generate_quiz<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<QuizQuestion> {
    quiz::generate(text, &GenerationLimits::default(), rng)
}

//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// Lecture notes that exercise both flashcard rules and the quiz generator.
pub const LECTURE_NOTES: &str = "Photosynthesis is the process by which plants convert sunlight into energy. \
    It occurs in chloroplasts and involves two main stages. \
    Researchers studying Chlorophyll found it absorbs mostly blue and red light. \
    The mitochondria is the powerhouse of the cell.";

/// Notes without sentence punctuation, forcing the flashcard chunk fallback.
pub const UNPUNCTUATED_NOTES: &str = "introduction to cellular biology and its many branches\n\
    more notes about the structure of living cells here\n";

/// Body for the generation endpoints.
pub fn generate_request(text: &str) -> Value {
    json!({ "text": text })
}

/// Generate `count` definition sentences.
pub fn definition_sentences(count: usize) -> String {
    (0..count)
        .map(|i| format!("Concept number {} is an important Scientific idea to remember.", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A quiz question whose correct option is at `correct_answer`.
pub fn quiz_question(id: usize, correct_answer: usize) -> Value {
    json!({
        "id": id,
        "question": format!("Question {} is about _____", id),
        "options": ["Process", "System", "Method", "Theory"],
        "correct_answer": correct_answer,
        "explanation": "The correct answer is \"Process\" based on the content."
    })
}

/// Body for the scoring endpoint.
pub fn score_request(answers: Value, questions: Vec<Value>) -> Value {
    json!({ "answers": answers, "questions": questions })
}

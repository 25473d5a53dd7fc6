//! Error types for studygen-core.

use thiserror::Error;

/// Result type alias using StudyError.
pub type Result<T> = std::result::Result<T, StudyError>;

/// Contract violations by the caller.
///
/// Generation itself never fails: low-content input degrades to empty output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    #[error("expected {questions} answers, got {answers}")]
    AnswerCountMismatch { answers: usize, questions: usize },

    #[error("selection {selection} out of range for question {question} ({options} options)")]
    InvalidSelection {
        question: usize,
        selection: usize,
        options: usize,
    },

    #[error("no study text to generate from")]
    EmptyText,

    #[error("unknown flashcard {id}")]
    UnknownCard { id: usize },

    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {question} has not been answered")]
    Unanswered { question: usize },

    #[error("already at the first question")]
    NoPreviousQuestion,

    #[error("quiz is finished; restart it to answer again")]
    QuizFinished,

    #[error("inconsistent session state: {0}")]
    InconsistentSession(&'static str),
}

//! Core types for generated study material.

use serde::{Deserialize, Serialize};

/// Placeholder substituted for the key term in a quiz question.
pub const BLANK: &str = "_____";

/// Number of options every quiz question carries.
pub const OPTION_COUNT: usize = 4;

/// A question/answer pair derived from one sentence or text chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Position in the generated sequence (0-based).
    pub id: usize,
    pub question: String,
    pub answer: String,
}

/// A fill-in-the-blank question with four candidate terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Position in the generated sequence (0-based).
    pub id: usize,
    /// Source sentence with the key term replaced by [`BLANK`].
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the key term.
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    /// The option text that answers this question.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// Per-question selections, `None` meaning unanswered.
pub type QuizAnswerSet = Vec<Option<usize>>;

/// Outcome of scoring a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage, 0-100.
    pub percentage: u32,
}

impl ScoreResult {
    /// Grade band for this score.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Feedback band shown with a quiz result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    KeepStudying,
}

impl Grade {
    /// Band a percentage: 80 and up is excellent, 60 and up is good.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else {
            Self::KeepStudying
        }
    }

    /// Message displayed alongside the score.
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job!",
            Self::KeepStudying => "Keep studying!",
        }
    }
}

/// Caps applied by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationLimits {
    pub max_flashcards: usize,
    /// Cap on cards produced from newline chunks when no sentence matched.
    pub max_fallback_cards: usize,
    pub max_quiz_questions: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_flashcards: 15,
            max_fallback_cards: 10,
            max_quiz_questions: 10,
        }
    }
}

/// Length in characters, as used by every threshold in this crate.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Whether the first character of `s` is uppercase.
pub(crate) fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// `token` without its trailing sentence terminators.
pub(crate) fn strip_terminal(token: &str) -> &str {
    token.trim_end_matches(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_percentage(100), Grade::Excellent);
        assert_eq!(Grade::from_percentage(80), Grade::Excellent);
        assert_eq!(Grade::from_percentage(79), Grade::Good);
        assert_eq!(Grade::from_percentage(60), Grade::Good);
        assert_eq!(Grade::from_percentage(59), Grade::KeepStudying);
        assert_eq!(Grade::from_percentage(0), Grade::KeepStudying);
    }

    #[test]
    fn grade_messages() {
        assert_eq!(Grade::Excellent.message(), "Excellent work!");
        assert_eq!(Grade::Good.message(), "Good job!");
        assert_eq!(Grade::KeepStudying.message(), "Keep studying!");
    }

    #[test]
    fn default_limits() {
        let limits = GenerationLimits::default();
        assert_eq!(limits.max_flashcards, 15);
        assert_eq!(limits.max_fallback_cards, 10);
        assert_eq!(limits.max_quiz_questions, 10);
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert!(starts_uppercase("Énergie"));
        assert!(!starts_uppercase("1984"));
        assert!(!starts_uppercase(""));
    }

    #[test]
    fn strip_terminal_keeps_inner_punctuation() {
        assert_eq!(strip_terminal("Chloroplasts."), "Chloroplasts");
        assert_eq!(strip_terminal("really?!"), "really");
        assert_eq!(strip_terminal("e.g."), "e.g");
        assert_eq!(strip_terminal("cell,"), "cell,");
    }

    #[test]
    fn grade_serializes_snake_case() {
        let json = serde_json::to_string(&Grade::KeepStudying).unwrap();
        assert_eq!(json, "\"keep_studying\"");
    }
}

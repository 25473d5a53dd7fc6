//! Fill-in-the-blank quiz generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::segmenter::segment;
use crate::types::{
    char_len, starts_uppercase, strip_terminal, GenerationLimits, QuizQuestion, BLANK,
    OPTION_COUNT,
};

/// Sentences must be strictly longer than this to become questions.
const MIN_SENTENCE_LEN: usize = 40;

/// Filler distractors used when a sentence has too few important tokens.
pub const GENERIC_DISTRACTORS: [&str; 6] =
    ["Process", "System", "Method", "Theory", "Principle", "Concept"];

/// Selects tokens salient enough to be blanked or offered as options.
///
/// A token is important when it is longer than `min_len` and either starts
/// with an uppercase letter or is longer than `long_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportantTokens {
    pub min_len: usize,
    pub long_len: usize,
}

impl Default for ImportantTokens {
    fn default() -> Self {
        Self {
            min_len: 5,
            long_len: 8,
        }
    }
}

impl ImportantTokens {
    pub fn is_important(&self, token: &str) -> bool {
        let len = char_len(token);
        len > self.min_len && (starts_uppercase(token) || len > self.long_len)
    }

    /// Important whitespace-separated tokens, in sentence order, with
    /// sentence terminators stripped.
    pub fn extract<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split_whitespace()
            .map(strip_terminal)
            .filter(|token| self.is_important(token))
            .collect()
    }
}

/// Generate quiz questions, drawing distractors and option order from `rng`.
pub fn generate<R: Rng + ?Sized>(
    text: &str,
    limits: &GenerationLimits,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let selector = ImportantTokens::default();
    let mut questions = Vec::new();

    for sentence in segment(text) {
        if questions.len() >= limits.max_quiz_questions {
            break;
        }
        if char_len(sentence) <= MIN_SENTENCE_LEN {
            continue;
        }

        let important = selector.extract(sentence);
        let Some((&key_term, others)) = important.split_first() else {
            continue;
        };

        let mut options = vec![key_term.to_string()];
        for &word in others.iter().take(OPTION_COUNT - 1) {
            if !options.iter().any(|o| o == word) {
                options.push(word.to_string());
            }
        }
        pad_with_generic(&mut options, rng);
        options.shuffle(rng);

        let Some(correct_answer) = options.iter().position(|o| o == key_term) else {
            continue;
        };

        questions.push(QuizQuestion {
            id: questions.len(),
            question: sentence.replacen(key_term, BLANK, 1),
            options,
            correct_answer,
            explanation: format!("The correct answer is \"{}\" based on the content.", key_term),
        });
    }

    tracing::debug!(count = questions.len(), "generated quiz questions");
    questions
}

/// Fill up to [`OPTION_COUNT`] with generic distractors not already present.
fn pad_with_generic<R: Rng + ?Sized>(options: &mut Vec<String>, rng: &mut R) {
    while options.len() < OPTION_COUNT {
        let unused: Vec<&str> = GENERIC_DISTRACTORS
            .iter()
            .copied()
            .filter(|generic| !options.iter().any(|o| o == generic))
            .collect();

        match unused.choose(rng) {
            Some(pick) => options.push(pick.to_string()),
            None => break,
        }
    }
}

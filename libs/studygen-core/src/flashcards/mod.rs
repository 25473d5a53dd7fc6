//! Flashcard generation.

pub mod rules;

use crate::segmenter::segment;
use crate::types::{char_len, Flashcard, GenerationLimits};

pub use rules::{default_rules, CardDraft, CardRule, DefinitionRule, KeyTermRule};

/// Fallback chunks must be strictly longer than this after trimming.
const MIN_CHUNK_LEN: usize = 30;

/// Generate flashcards using the built-in rule chain.
pub fn generate(text: &str, limits: &GenerationLimits) -> Vec<Flashcard> {
    generate_with_rules(text, limits, &default_rules())
}

/// Generate flashcards with a custom rule chain.
///
/// If no sentence matches any rule, cards are built from newline-separated
/// chunks of the raw text instead.
pub fn generate_with_rules(
    text: &str,
    limits: &GenerationLimits,
    rules: &[Box<dyn CardRule>],
) -> Vec<Flashcard> {
    let mut cards = Vec::new();

    for sentence in segment(text) {
        if cards.len() >= limits.max_flashcards {
            break;
        }

        if let Some(draft) = rules.iter().find_map(|rule| rule.apply(sentence)) {
            cards.push(Flashcard {
                id: cards.len(),
                question: draft.question,
                answer: draft.answer,
            });
        }
    }

    if cards.is_empty() {
        cards = chunk_cards(text, limits.max_fallback_cards);
        tracing::debug!(count = cards.len(), "no sentence matched, using chunk fallback");
    }

    cards
}

/// One "Key Concept N" card per sufficiently long line.
fn chunk_cards(text: &str, max_cards: usize) -> Vec<Flashcard> {
    text.split('\n')
        .map(str::trim)
        .filter(|chunk| char_len(chunk) > MIN_CHUNK_LEN)
        .take(max_cards)
        .enumerate()
        .map(|(idx, chunk)| Flashcard {
            id: idx,
            question: format!("Key Concept {}", idx + 1),
            answer: chunk.to_string(),
        })
        .collect()
}

//! Sentence-to-card extraction rules.
//!
//! Rules are tried in order for each sentence; the first one that produces a
//! draft wins.

use crate::types::{char_len, starts_uppercase, strip_terminal};

/// Question/answer pair produced by a rule before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub answer: String,
}

/// Trait for flashcard extraction rules.
pub trait CardRule: Send + Sync {
    /// Rule identifier.
    fn name(&self) -> &'static str;

    /// Build a card from a trimmed sentence, if the rule matches.
    fn apply(&self, sentence: &str) -> Option<CardDraft>;
}

/// Turns "X is Y" style sentences into "What x?" / "Y" cards.
#[derive(Debug, Clone)]
pub struct DefinitionRule {
    /// Split markers in priority order.
    pub markers: &'static [&'static str],
    /// Sentences must be strictly longer than this.
    pub min_len: usize,
}

impl Default for DefinitionRule {
    fn default() -> Self {
        Self {
            markers: &[" is ", " are ", " means "],
            min_len: 30,
        }
    }
}

impl CardRule for DefinitionRule {
    fn name(&self) -> &'static str {
        "definition"
    }

    fn apply(&self, sentence: &str) -> Option<CardDraft> {
        if char_len(sentence) <= self.min_len {
            return None;
        }

        let parts = split_on_markers(sentence, self.markers);
        let (subject, rest) = parts.split_first()?;
        if rest.is_empty() {
            return None;
        }

        Some(CardDraft {
            question: format!("What {}?", subject.to_lowercase().trim()),
            answer: rest.join(" is ").trim().to_string(),
        })
    }
}

/// Split at every marker occurrence, leftmost first.
///
/// When two markers start at the same position the earlier one in `markers`
/// wins.
fn split_on_markers<'a>(text: &'a str, markers: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = text;

    while let Some((pos, len)) = markers
        .iter()
        .filter_map(|marker| rest.find(marker).map(|pos| (pos, marker.len())))
        .min_by_key(|&(pos, _)| pos)
    {
        parts.push(&rest[..pos]);
        rest = &rest[pos + len..];
    }
    parts.push(rest);

    parts
}

/// Picks a capitalized term from a long sentence: "Explain: Term".
#[derive(Debug, Clone)]
pub struct KeyTermRule {
    /// Sentences must be strictly longer than this.
    pub min_len: usize,
    /// Terms must be strictly longer than this.
    pub min_term_len: usize,
}

impl Default for KeyTermRule {
    fn default() -> Self {
        Self {
            min_len: 50,
            min_term_len: 6,
        }
    }
}

impl CardRule for KeyTermRule {
    fn name(&self) -> &'static str {
        "key_term"
    }

    fn apply(&self, sentence: &str) -> Option<CardDraft> {
        if char_len(sentence) <= self.min_len {
            return None;
        }

        let term = sentence
            .split_whitespace()
            .map(strip_terminal)
            .find(|word| char_len(word) > self.min_term_len && starts_uppercase(word))?;

        Some(CardDraft {
            question: format!("Explain: {}", term),
            answer: sentence.to_string(),
        })
    }
}

/// The built-in rule chain: definitions first, then key terms.
pub fn default_rules() -> Vec<Box<dyn CardRule>> {
    vec![
        Box::new(DefinitionRule::default()),
        Box::new(KeyTermRule::default()),
    ]
}

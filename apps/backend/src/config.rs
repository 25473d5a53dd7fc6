//! Environment-driven configuration

use studygen_core::GenerationLimits;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Longest accepted study text, in characters.
    pub max_text_length: usize,
    pub limits: GenerationLimits,
    /// Fixed RNG seed; every request generates the same output when set.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_text_length: 100_000,
            limits: GenerationLimits::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |name: &'static str, default: usize| -> Result<usize, ConfigError> {
            match lookup(name) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber { name, value }),
                None => Ok(default),
            }
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };

        let seed = match lookup("GENERATION_SEED") {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        name: "GENERATION_SEED",
                        value,
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            max_text_length: number("MAX_TEXT_LENGTH", defaults.max_text_length)?,
            limits: GenerationLimits {
                max_flashcards: number("MAX_FLASHCARDS", defaults.limits.max_flashcards)?,
                max_fallback_cards: number(
                    "MAX_FALLBACK_CARDS",
                    defaults.limits.max_fallback_cards,
                )?,
                max_quiz_questions: number(
                    "MAX_QUIZ_QUESTIONS",
                    defaults.limits.max_quiz_questions,
                )?,
            },
            seed,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

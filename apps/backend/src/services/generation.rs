//! Study material generation service

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use studygen_core::{flashcards, quiz, Flashcard, GenerationLimits, QuizQuestion};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::StudyMaterialsResponse;

/// Validates input text and runs the generators with a per-request RNG.
#[derive(Debug, Clone)]
pub struct GenerationService {
    limits: GenerationLimits,
    max_text_length: usize,
    seed: Option<u64>,
}

impl GenerationService {
    pub fn new(config: &Config) -> Self {
        Self {
            limits: config.limits,
            max_text_length: config.max_text_length,
            seed: config.seed,
        }
    }

    /// Reject blank text and text over the configured length.
    pub fn validate(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ApiError::BadRequest("text must not be empty".to_string()));
        }

        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(ApiError::PayloadTooLarge(format!(
                "{} characters, limit is {}",
                length, self.max_text_length
            )));
        }

        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn flashcards(&self, text: &str) -> Result<Vec<Flashcard>> {
        self.validate(text)?;
        Ok(flashcards::generate(text, &self.limits))
    }

    pub fn quiz(&self, text: &str) -> Result<Vec<QuizQuestion>> {
        self.validate(text)?;
        Ok(quiz::generate(text, &self.limits, &mut self.rng()))
    }

    /// Generate both flashcards and quiz in one pass.
    pub fn study_materials(&self, text: &str) -> Result<StudyMaterialsResponse> {
        self.validate(text)?;

        let mut rng = self.rng();
        let flashcards = flashcards::generate(text, &self.limits);
        let quiz = quiz::generate(text, &self.limits, &mut rng);

        let response = StudyMaterialsResponse {
            generation_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            flashcards,
            quiz,
        };

        tracing::info!(
            generation_id = %response.generation_id,
            text_chars = text.chars().count(),
            flashcards = response.flashcards.len(),
            questions = response.quiz.len(),
            "Generated study materials"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(max_text_length: usize, seed: Option<u64>) -> GenerationService {
        GenerationService::new(&Config {
            max_text_length,
            seed,
            ..Config::default()
        })
    }

    #[test]
    fn test_rejects_blank_text() {
        let result = service(100, None).validate("  \n\t ");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_rejects_long_text() {
        let result = service(10, None).validate("this is longer than ten characters");
        assert!(matches!(result, Err(ApiError::PayloadTooLarge(_))));
    }

    #[test]
    fn test_length_counts_characters() {
        // ten characters, more than ten bytes
        assert!(service(10, None).validate("éééééééééé").is_ok());
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let service = service(1_000, Some(7));
        let text = "The mitochondria is the powerhouse of the cell. \
                    Photosynthesis happens inside Chloroplasts in plant leaves.";
        let first = service.study_materials(text).unwrap();
        let second = service.study_materials(text).unwrap();
        assert_eq!(first.quiz, second.quiz);
        assert_eq!(first.flashcards, second.flashcards);
        assert_ne!(first.generation_id, second.generation_id);
    }

    #[test]
    fn test_respects_configured_limits() {
        let service = GenerationService::new(&Config {
            limits: GenerationLimits {
                max_flashcards: 1,
                max_fallback_cards: 1,
                max_quiz_questions: 1,
            },
            ..Config::default()
        });
        let text = "Mercury is the closest planet to the Sun in our system. \
                    Venus is the hottest planet in the Solar System by far.";
        assert_eq!(service.flashcards(text).unwrap().len(), 1);
        assert_eq!(service.quiz(text).unwrap().len(), 1);
    }
}

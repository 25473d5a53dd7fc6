//! Caller-owned study session state.
//!
//! Tracks which screen is shown, which cards are flipped and how far the
//! learner is through the quiz. The generators never see this state; the
//! session only calls them and stores what they return.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};
use crate::types::{Flashcard, GenerationLimits, QuizAnswerSet, QuizQuestion, ScoreResult};
use crate::{flashcards, quiz, scoring};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Upload,
    Flashcards,
    Quiz,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Upload
    }
}

/// Progress through the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum QuizPhase {
    /// Answering the question at `cursor`.
    Answering { cursor: usize },
    Results,
}

impl Default for QuizPhase {
    fn default() -> Self {
        Self::Answering { cursor: 0 }
    }
}

/// Screen, flashcard and quiz progress for one learner.
///
/// Deserializing checks that there is one answer slot per question and that
/// the quiz cursor points at a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SessionState")]
pub struct StudySession {
    source_text: String,
    flashcards: Vec<Flashcard>,
    quiz: Vec<QuizQuestion>,
    answers: QuizAnswerSet,
    flipped: BTreeSet<usize>,
    screen: Screen,
    phase: QuizPhase,
}

/// Unchecked wire form of [`StudySession`].
#[derive(Deserialize)]
struct SessionState {
    #[serde(default)]
    source_text: String,
    #[serde(default)]
    flashcards: Vec<Flashcard>,
    #[serde(default)]
    quiz: Vec<QuizQuestion>,
    #[serde(default)]
    answers: QuizAnswerSet,
    #[serde(default)]
    flipped: BTreeSet<usize>,
    #[serde(default)]
    screen: Screen,
    #[serde(default)]
    phase: QuizPhase,
}

impl TryFrom<SessionState> for StudySession {
    type Error = StudyError;

    fn try_from(state: SessionState) -> Result<Self> {
        if state.answers.len() != state.quiz.len() {
            return Err(StudyError::InconsistentSession(
                "answer count differs from question count",
            ));
        }
        if let QuizPhase::Answering { cursor } = state.phase {
            if cursor > 0 && cursor >= state.quiz.len() {
                return Err(StudyError::InconsistentSession("cursor is past the last question"));
            }
        }
        if state.flipped.iter().any(|&id| id >= state.flashcards.len()) {
            return Err(StudyError::InconsistentSession("flipped card does not exist"));
        }

        Ok(Self {
            source_text: state.source_text,
            flashcards: state.flashcards,
            quiz: state.quiz,
            answers: state.answers,
            flipped: state.flipped,
            screen: state.screen,
            phase: state.phase,
        })
    }
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Replace the study text. Previously generated material is kept until
    /// the next [`generate`](Self::generate).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Regenerate flashcards and quiz from the current text.
    ///
    /// Resets answers, flipped cards and quiz progress, then shows the
    /// flashcards screen.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        limits: &GenerationLimits,
        rng: &mut R,
    ) -> Result<()> {
        if self.source_text.trim().is_empty() {
            return Err(StudyError::EmptyText);
        }

        self.flashcards = flashcards::generate(&self.source_text, limits);
        self.quiz = quiz::generate(&self.source_text, limits, rng);
        self.answers = vec![None; self.quiz.len()];
        self.flipped.clear();
        self.phase = QuizPhase::default();
        self.screen = Screen::Flashcards;

        tracing::debug!(
            flashcards = self.flashcards.len(),
            questions = self.quiz.len(),
            "study session regenerated"
        );
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_flipped(&self, card_id: usize) -> bool {
        self.flipped.contains(&card_id)
    }

    /// Flip a card over, returning whether it now shows its answer.
    pub fn toggle_flip(&mut self, card_id: usize) -> Result<bool> {
        if card_id >= self.flashcards.len() {
            return Err(StudyError::UnknownCard { id: card_id });
        }
        if self.flipped.remove(&card_id) {
            Ok(false)
        } else {
            self.flipped.insert(card_id);
            Ok(true)
        }
    }

    /// The question being answered, if the quiz is in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Answering { cursor } => self.quiz.get(cursor),
            QuizPhase::Results => None,
        }
    }

    fn cursor(&self) -> Result<usize> {
        if self.quiz.is_empty() {
            return Err(StudyError::NoQuestions);
        }
        match self.phase {
            QuizPhase::Answering { cursor } => Ok(cursor),
            QuizPhase::Results => Err(StudyError::QuizFinished),
        }
    }

    /// Record a selection for the current question, replacing any earlier one.
    pub fn select_answer(&mut self, option: usize) -> Result<()> {
        let cursor = self.cursor()?;
        let options = self
            .quiz
            .get(cursor)
            .map(|question| question.options.len())
            .ok_or(StudyError::InconsistentSession("cursor is past the last question"))?;
        if option >= options {
            return Err(StudyError::InvalidSelection {
                question: cursor,
                selection: option,
                options,
            });
        }
        let slot = self
            .answers
            .get_mut(cursor)
            .ok_or(StudyError::InconsistentSession("missing answer slot"))?;
        *slot = Some(option);
        Ok(())
    }

    /// Move past the current question; finishing the last one shows results.
    pub fn next_question(&mut self) -> Result<QuizPhase> {
        let cursor = self.cursor()?;
        match self.answers.get(cursor) {
            Some(Some(_)) => {}
            Some(None) => return Err(StudyError::Unanswered { question: cursor }),
            None => return Err(StudyError::InconsistentSession("missing answer slot")),
        }

        self.phase = if cursor + 1 < self.quiz.len() {
            QuizPhase::Answering { cursor: cursor + 1 }
        } else {
            QuizPhase::Results
        };
        Ok(self.phase)
    }

    pub fn previous_question(&mut self) -> Result<()> {
        let cursor = self.cursor()?;
        if cursor == 0 {
            return Err(StudyError::NoPreviousQuestion);
        }
        self.phase = QuizPhase::Answering { cursor: cursor - 1 };
        Ok(())
    }

    /// Clear all answers and start the same quiz again.
    pub fn restart_quiz(&mut self) {
        self.answers = vec![None; self.quiz.len()];
        self.phase = QuizPhase::default();
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Position through the quiz as a percentage, counting the current question.
    pub fn progress_percent(&self) -> u32 {
        if self.quiz.is_empty() {
            return 0;
        }
        match self.phase {
            QuizPhase::Answering { cursor } => ((cursor + 1) * 100 / self.quiz.len()) as u32,
            QuizPhase::Results => 100,
        }
    }

    pub fn score(&self) -> Result<ScoreResult> {
        scoring::score(&self.answers, &self.quiz)
    }
}

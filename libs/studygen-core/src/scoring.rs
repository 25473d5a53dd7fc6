//! Quiz scoring.

use crate::error::{Result, StudyError};
use crate::types::{QuizQuestion, ScoreResult};

/// Score a completed (or partially completed) answer set.
///
/// Unanswered slots count as wrong. An empty quiz scores 0%.
pub fn score(answers: &[Option<usize>], questions: &[QuizQuestion]) -> Result<ScoreResult> {
    if answers.len() != questions.len() {
        return Err(StudyError::AnswerCountMismatch {
            answers: answers.len(),
            questions: questions.len(),
        });
    }

    let mut correct = 0;
    for (idx, (answer, question)) in answers.iter().zip(questions).enumerate() {
        let Some(selection) = *answer else {
            continue;
        };
        if selection >= question.options.len() {
            return Err(StudyError::InvalidSelection {
                question: idx,
                selection,
                options: question.options.len(),
            });
        }
        if selection == question.correct_answer {
            correct += 1;
        }
    }

    let total = questions.len();
    Ok(ScoreResult {
        correct,
        total,
        percentage: percentage(correct, total),
    })
}

/// `100 * correct / total` rounded half up; 0 for an empty quiz.
fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

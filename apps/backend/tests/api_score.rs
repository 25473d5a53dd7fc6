//! Quiz scoring API tests.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;
use studygen_backend::models::{QuizResponse, ScoreResponse};
use studygen_core::Grade;

/// Test partial credit is reported with a grade.
#[tokio::test]
async fn test_score_half_correct() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quiz/score")
        .json(&fixtures::score_request(
            json!([0, 1]),
            vec![fixtures::quiz_question(0, 0), fixtures::quiz_question(1, 2)],
        ))
        .await;

    response.assert_status_ok();
    let body: ScoreResponse = response.json();

    assert_eq!(body.correct, 1);
    assert_eq!(body.total, 2);
    assert_eq!(body.percentage, 50);
    assert_eq!(body.grade, Grade::KeepStudying);
    assert_eq!(body.message, "Keep studying!");
}

/// Test unanswered questions count as wrong.
#[tokio::test]
async fn test_score_with_unanswered() {
    let server = TestContext::new().server();

    let body: Value = server
        .post("/api/quiz/score")
        .json(&fixtures::score_request(
            json!([3, null, 1]),
            vec![
                fixtures::quiz_question(0, 3),
                fixtures::quiz_question(1, 0),
                fixtures::quiz_question(2, 1),
            ],
        ))
        .await
        .json();

    assert_eq!(body["correct"], 2);
    assert_eq!(body["percentage"], 67);
    assert_eq!(body["grade"], "good");
}

/// Test an empty quiz scores zero rather than failing.
#[tokio::test]
async fn test_score_empty_quiz() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quiz/score")
        .json(&fixtures::score_request(json!([]), vec![]))
        .await;

    response.assert_status_ok();
    let body: ScoreResponse = response.json();
    assert_eq!(body.total, 0);
    assert_eq!(body.percentage, 0);
}

/// Test mismatched answer count is rejected.
#[tokio::test]
async fn test_score_length_mismatch() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quiz/score")
        .json(&fixtures::score_request(
            json!([0]),
            vec![fixtures::quiz_question(0, 0), fixtures::quiz_question(1, 0)],
        ))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_answers");
    assert_eq!(body["message"], "Invalid answers: expected 2 answers, got 1");
}

/// Test an out-of-range selection is rejected.
#[tokio::test]
async fn test_score_invalid_selection() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quiz/score")
        .json(&fixtures::score_request(
            json!([9]),
            vec![fixtures::quiz_question(0, 0)],
        ))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test answering a generated quiz perfectly scores 100.
#[tokio::test]
async fn test_generate_then_score_perfect() {
    let server = TestContext::new().server();

    let quiz: QuizResponse = server
        .post("/api/quiz")
        .json(&fixtures::generate_request(fixtures::LECTURE_NOTES))
        .await
        .json();
    assert!(!quiz.quiz.is_empty());

    let answers: Vec<Option<usize>> = quiz.quiz.iter().map(|q| Some(q.correct_answer)).collect();

    let body: ScoreResponse = server
        .post("/api/quiz/score")
        .json(&json!({ "answers": answers, "questions": quiz.quiz }))
        .await
        .json();

    assert_eq!(body.percentage, 100);
    assert_eq!(body.grade, Grade::Excellent);
    assert_eq!(body.message, "Excellent work!");
}

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::JsonBody,
    models::QuizBody,
    names,
    rejections::{AppError, ResultExt},
    services::trivia::{QuizOutcome, QuizScope},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::GAMEPLAY_URL, post(next_question))
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    /// Absent once every question in scope has been played.
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<QuestionModel>,
}

async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let category = body
        .quiz_category
        .ok_or(AppError::BadRequest("missing quiz category"))?;
    let previous = body
        .previous_questions
        .ok_or(AppError::BadRequest("missing previous questions"))?;

    tracing::debug!(
        category_id = category.id,
        category = category.kind.as_deref().unwrap_or("all"),
        played = previous.len(),
        "selecting quiz question"
    );

    let outcome = state
        .trivia
        .next_quiz_question(QuizScope::from_category_id(category.id), &previous)
        .await
        .reject("could not select quiz question")?;

    let question = match outcome {
        QuizOutcome::Next(question) => Some(question),
        QuizOutcome::Exhausted => None,
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

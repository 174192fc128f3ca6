use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::{IdPath, JsonBody},
    models::{NewQuestion, SearchBody},
    names,
    pagination::Page,
    rejections::{AppError, ResultExt},
    services::trivia::{CreateOutcome, DeleteOutcome, ListOutcome, SearchOutcome},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, get(list_questions).post(create_question))
        .route(names::SEARCH_URL, post(search_questions))
        .route(names::QUESTION_URL, delete(delete_question))
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
    /// Always `null`: this listing spans every category.
    current_category: Option<i32>,
    categories: BTreeMap<i32, String>,
}

async fn list_questions(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<QuestionsResponse>, AppError> {
    let outcome = state
        .trivia
        .list_questions(page)
        .await
        .reject("could not get questions")?;

    let ListOutcome::Page(page) = outcome else {
        return Err(AppError::NotFound("no questions on page"));
    };

    let categories = state
        .trivia
        .categories()
        .await
        .reject("could not get categories")?
        .unwrap_or_default();

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: None,
        categories,
    }))
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i32,
    questions: Vec<QuestionModel>,
    total_questions: usize,
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewQuestion>,
) -> Result<Json<CreatedResponse>, AppError> {
    let outcome = state
        .trivia
        .create_question(body)
        .await
        .reject("could not create question")?;

    match outcome {
        CreateOutcome::Created(created, page) => Ok(Json(CreatedResponse {
            success: true,
            created,
            questions: page.questions,
            total_questions: page.total,
        })),
        CreateOutcome::EmptyFields => Err(AppError::Unprocessable("question or answer is empty")),
        CreateOutcome::UnknownCategory => Err(AppError::Unprocessable("unknown category")),
    }
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
}

async fn search_questions(
    State(state): State<AppState>,
    page: Page,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<SearchResponse>, AppError> {
    let outcome = state
        .trivia
        .search(body.search_term.as_deref(), page)
        .await
        .reject("could not search questions")?;

    match outcome {
        SearchOutcome::Found(page) => Ok(Json(SearchResponse {
            success: true,
            questions: page.questions,
            total_questions: page.total,
        })),
        SearchOutcome::NoMatches => Err(AppError::NotFound("no questions match search term")),
        SearchOutcome::EmptyTerm => Err(AppError::BadRequest("missing search term")),
    }
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i32,
    questions: Vec<QuestionModel>,
    total_questions: usize,
}

async fn delete_question(
    State(state): State<AppState>,
    IdPath(question_id): IdPath,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state
        .trivia
        .delete_question(question_id)
        .await
        .reject("could not reload questions after delete")?;

    match outcome {
        DeleteOutcome::Deleted(page) => Ok(Json(DeletedResponse {
            success: true,
            deleted: question_id,
            questions: page.questions,
            total_questions: page.total,
        })),
        DeleteOutcome::NotFound => Err(AppError::NotFound("question does not exist")),
        DeleteOutcome::Failed => Err(AppError::Unprocessable("could not delete question")),
    }
}

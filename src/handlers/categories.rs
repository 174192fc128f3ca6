use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::IdPath,
    names,
    pagination::Page,
    rejections::{AppError, ResultExt},
    services::trivia::ListOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i32, String>,
    total_categories: usize,
}

async fn categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .trivia
        .categories()
        .await
        .reject("could not get categories")?
        .ok_or(AppError::NotFound("no categories"))?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
    category: i32,
    current_category: i32,
}

async fn category_questions(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    page: Page,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let outcome = state
        .trivia
        .list_category_questions(category_id, page)
        .await
        .reject("could not get category questions")?;

    match outcome {
        ListOutcome::Page(page) => Ok(Json(CategoryQuestionsResponse {
            success: true,
            questions: page.questions,
            total_questions: page.total,
            category: category_id,
            current_category: category_id,
        })),
        ListOutcome::Empty => Err(AppError::NotFound("no questions in category page")),
    }
}

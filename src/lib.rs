pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod rejections;
pub mod services;
pub mod utils;

use axum::Router;

use services::trivia::TriviaService;

#[derive(Clone)]
pub struct AppState {
    pub trivia: TriviaService,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            trivia: TriviaService::new(db),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::gameplay::routes())
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .fallback(rejections::not_found)
        .with_state(state)
}

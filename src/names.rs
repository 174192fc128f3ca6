pub const CATEGORIES_URL: &str = "/categories";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_URL: &str = "/questions/search";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const GAMEPLAY_URL: &str = "/gameplay";

pub fn question_url(question_id: i32) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i32) -> String {
    format!("/categories/{category_id}/questions")
}

pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_DIFFICULTY: i32 = 1;

/// Quiz category id that selects questions from every category.
pub const ALL_CATEGORIES_ID: i32 = 0;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "tracing=info,axum=debug,trivia=debug";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Database model structs

use serde::Serialize;

/// A stored question, serialized as `{id, question, answer, category, difficulty}`.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct QuestionModel {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: i32,
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct CategoryModel {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Validated input for inserting a question.
#[derive(Clone, Debug, PartialEq)]
pub struct NewQuestionModel {
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: i32,
}

use color_eyre::Result;

use super::models::{NewQuestionModel, QuestionModel};
use super::Db;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Db {
    pub async fn questions(&self) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_in_category(&self, category_id: i32) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match on the question text. Wildcard characters in
    /// `term` match literally.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(&format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions
            WHERE lower(question) LIKE '%' || lower(?) || '%' ESCAPE '\'
            ORDER BY id"
        ))
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_question(&self, question_id: i32) -> Result<Option<QuestionModel>> {
        let question = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Returns `None` when the category reference names no category.
    pub async fn insert_question(&self, new: &NewQuestionModel) -> Result<Option<i32>> {
        let inserted = sqlx::query_scalar::<_, i32>(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(question_id) => {
                tracing::info!("new question created with id: {question_id}");
                Ok(Some(question_id))
            }
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                tracing::warn!("question references unknown category: {:?}", new.category);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `false` when no question has this id.
    pub async fn delete_question(&self, question_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("question deleted: id={question_id}");
        }
        Ok(deleted)
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

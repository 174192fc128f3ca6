#![allow(dead_code)]

use trivia::db::{Db, NewQuestionModel};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(question: &str, answer: &str, category: i32, difficulty: i32) -> NewQuestionModel {
    NewQuestionModel {
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category),
        difficulty,
    }
}

/// Inserts `n` questions spread over categories 1 to 3, returning their ids in order.
pub async fn seed_questions(db: &Db, n: usize) -> Vec<i32> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let q = new_question(
            &format!("Question {}", i + 1),
            &format!("Answer {}", i + 1),
            (i % 3) as i32 + 1,
            (i % 5) as i32 + 1,
        );
        let id = db
            .insert_question(&q)
            .await
            .expect("insert question")
            .expect("seeded category exists");
        ids.push(id);
    }
    ids
}

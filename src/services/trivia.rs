use std::collections::{BTreeMap, HashSet};

use color_eyre::Result;
use rand::seq::SliceRandom;

use crate::db::models::{CategoryModel, NewQuestionModel, QuestionModel};
use crate::db::Db;
use crate::models::NewQuestion;
use crate::names;
use crate::pagination::Page;

// ---------------------------------------------------------------------------
// TriviaRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait TriviaRepository: Send + Sync {
    fn categories(&self) -> impl std::future::Future<Output = Result<Vec<CategoryModel>>> + Send;

    /// All questions, ascending by id.
    fn questions(&self) -> impl std::future::Future<Output = Result<Vec<QuestionModel>>> + Send;

    fn questions_in_category(
        &self,
        category_id: i32,
    ) -> impl std::future::Future<Output = Result<Vec<QuestionModel>>> + Send;

    fn search_questions(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<QuestionModel>>> + Send;

    /// Resolves to `None` when the category reference names no category.
    fn insert_question(
        &self,
        question: NewQuestionModel,
    ) -> impl std::future::Future<Output = Result<Option<i32>>> + Send;

    /// Resolves to `false` when the question does not exist.
    fn delete_question(
        &self,
        question_id: i32,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

impl TriviaRepository for Db {
    async fn categories(&self) -> Result<Vec<CategoryModel>> {
        Db::categories(self).await
    }

    async fn questions(&self) -> Result<Vec<QuestionModel>> {
        Db::questions(self).await
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<QuestionModel>> {
        Db::questions_in_category(self, category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        Db::search_questions(self, term).await
    }

    async fn insert_question(&self, question: NewQuestionModel) -> Result<Option<i32>> {
        Db::insert_question(self, &question).await
    }

    async fn delete_question(&self, question_id: i32) -> Result<bool> {
        Db::delete_question(self, question_id).await
    }
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// One page of a question listing together with the size of the whole listing.
#[derive(Debug, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<QuestionModel>,
    pub total: usize,
}

impl QuestionPage {
    fn new(all: Vec<QuestionModel>, page: Page) -> Self {
        let total = all.len();
        Self {
            questions: page.slice(all),
            total,
        }
    }
}

pub enum ListOutcome {
    Page(QuestionPage),
    /// The requested page holds no questions.
    Empty,
}

pub enum SearchOutcome {
    Found(QuestionPage),
    NoMatches,
    /// The search term was missing or blank.
    EmptyTerm,
}

pub enum CreateOutcome {
    /// Contains the new id and the first page of all questions.
    Created(i32, QuestionPage),
    /// Question or answer text was empty.
    EmptyFields,
    /// The category reference points at no category.
    UnknownCategory,
}

pub enum DeleteOutcome {
    /// Contains the first page of the remaining questions.
    Deleted(QuestionPage),
    NotFound,
    /// Storage refused the delete.
    Failed,
}

#[derive(Debug, PartialEq)]
pub enum QuizOutcome {
    Next(QuestionModel),
    /// Every question in scope has already been played.
    Exhausted,
}

/// The pool a quiz draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    pub fn from_category_id(category_id: i32) -> Self {
        if category_id == names::ALL_CATEGORIES_ID {
            QuizScope::All
        } else {
            QuizScope::Category(category_id)
        }
    }
}

// ---------------------------------------------------------------------------
// TriviaService
// ---------------------------------------------------------------------------

pub struct TriviaService<R: TriviaRepository = Db> {
    repo: R,
}

impl<R: TriviaRepository + Clone> Clone for TriviaService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: TriviaRepository> TriviaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Category id to type label. `None` when there are no categories.
    pub async fn categories(&self) -> Result<Option<BTreeMap<i32, String>>> {
        let categories = self.repo.categories().await?;
        if categories.is_empty() {
            return Ok(None);
        }

        Ok(Some(categories.into_iter().map(|c| (c.id, c.kind)).collect()))
    }

    pub async fn list_questions(&self, page: Page) -> Result<ListOutcome> {
        let all = self.repo.questions().await?;
        Ok(list_outcome(QuestionPage::new(all, page)))
    }

    pub async fn list_category_questions(
        &self,
        category_id: i32,
        page: Page,
    ) -> Result<ListOutcome> {
        let in_category = self.repo.questions_in_category(category_id).await?;
        Ok(list_outcome(QuestionPage::new(in_category, page)))
    }

    pub async fn search(&self, term: Option<&str>, page: Page) -> Result<SearchOutcome> {
        let term = match term.map(str::trim) {
            Some(term) if !term.is_empty() => term,
            _ => return Ok(SearchOutcome::EmptyTerm),
        };

        let matches = self.repo.search_questions(term).await?;
        if matches.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        Ok(SearchOutcome::Found(QuestionPage::new(matches, page)))
    }

    pub async fn create_question(&self, new: NewQuestion) -> Result<CreateOutcome> {
        let (question, answer) = match (new.question, new.answer) {
            (Some(q), Some(a)) if !q.trim().is_empty() && !a.trim().is_empty() => (q, a),
            _ => return Ok(CreateOutcome::EmptyFields),
        };

        let inserted = self
            .repo
            .insert_question(NewQuestionModel {
                question,
                answer,
                category: new.category,
                difficulty: new.difficulty.unwrap_or(names::DEFAULT_DIFFICULTY),
            })
            .await?;
        let Some(question_id) = inserted else {
            return Ok(CreateOutcome::UnknownCategory);
        };

        let all = self.repo.questions().await?;
        Ok(CreateOutcome::Created(
            question_id,
            QuestionPage::new(all, Page::FIRST),
        ))
    }

    /// Only a failed delete itself is an outcome; failing to reload the remaining
    /// questions afterwards is an error.
    pub async fn delete_question(&self, question_id: i32) -> Result<DeleteOutcome> {
        match self.repo.delete_question(question_id).await {
            Ok(true) => {}
            Ok(false) => return Ok(DeleteOutcome::NotFound),
            Err(e) => {
                tracing::error!("failed to delete question {question_id}: {e}");
                return Ok(DeleteOutcome::Failed);
            }
        }

        let remaining = self.repo.questions().await?;
        Ok(DeleteOutcome::Deleted(QuestionPage::new(
            remaining,
            Page::FIRST,
        )))
    }

    /// Draws uniformly from the questions in `scope` whose ids are not in `previous`.
    pub async fn next_quiz_question(
        &self,
        scope: QuizScope,
        previous: &[i32],
    ) -> Result<QuizOutcome> {
        let pool = match scope {
            QuizScope::All => self.repo.questions().await?,
            QuizScope::Category(category_id) => {
                self.repo.questions_in_category(category_id).await?
            }
        };

        let used: HashSet<i32> = previous.iter().copied().collect();
        let unused: Vec<QuestionModel> = pool
            .into_iter()
            .filter(|q| !used.contains(&q.id))
            .collect();

        let picked = unused.choose(&mut rand::thread_rng()).cloned();
        Ok(picked.map_or(QuizOutcome::Exhausted, QuizOutcome::Next))
    }
}

fn list_outcome(page: QuestionPage) -> ListOutcome {
    if page.questions.is_empty() {
        ListOutcome::Empty
    } else {
        ListOutcome::Page(page)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

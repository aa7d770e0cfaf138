use serde::Serialize;

use quiz_core::model::{Question, QuestionId, Quiz, QuizId};
use quiz_core::Clock;

use crate::error::CatalogError;

//
// ─── OVERVIEW ──────────────────────────────────────────────────────────────────
//

/// Listing entry handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOverview {
    pub id: QuizId,
    pub name: String,
    pub question_count: usize,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// In-memory, append-only collection of quizzes.
///
/// Lives for the whole process; quizzes and questions are only ever added,
/// never edited or removed. Identifiers are monotonic and advance only when a
/// mutation succeeds.
#[derive(Debug)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
    clock: Clock,
    next_quiz_id: u64,
    next_question_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            quizzes: Vec::new(),
            clock: Clock::default(),
            next_quiz_id: 1,
            next_question_id: 1,
        }
    }

    /// Use the given clock for quiz creation timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Appends a new, empty quiz and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Quiz` if the name is empty or whitespace-only.
    pub fn create_quiz(&mut self, name: impl Into<String>) -> Result<QuizId, CatalogError> {
        let id = QuizId::new(self.next_quiz_id);
        let quiz = Quiz::new(id, name, self.clock.now())?;
        self.next_quiz_id += 1;
        self.quizzes.push(quiz);
        Ok(id)
    }

    /// Appends a question to the named quiz, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if `quiz_id` does not resolve; the
    /// catalog is left unchanged. Returns `CatalogError::Question` if the
    /// question fails validation.
    pub fn add_question(
        &mut self,
        quiz_id: QuizId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<QuestionId, CatalogError> {
        let index = self
            .quizzes
            .iter()
            .position(|q| q.id() == quiz_id)
            .ok_or(CatalogError::NotFound(quiz_id))?;

        let id = QuestionId::new(self.next_question_id);
        let question = Question::new(id, text, options, correct_answer)?;
        self.next_question_id += 1;
        self.quizzes[index].push_question(question);
        Ok(id)
    }

    /// Read-only listing snapshot in insertion order.
    #[must_use]
    pub fn list_quizzes(&self) -> Vec<QuizOverview> {
        self.quizzes
            .iter()
            .map(|quiz| QuizOverview {
                id: quiz.id(),
                name: quiz.name().to_owned(),
                question_count: quiz.question_count(),
            })
            .collect()
    }

    /// Fetch a quiz by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if absent.
    pub fn get_quiz(&self, quiz_id: QuizId) -> Result<&Quiz, CatalogError> {
        self.quizzes
            .iter()
            .find(|q| q.id() == quiz_id)
            .ok_or(CatalogError::NotFound(quiz_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

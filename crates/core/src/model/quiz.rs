use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz name cannot be empty")]
    EmptyName,
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A named, ordered collection of questions.
///
/// Starts empty; questions are appended over time and keep their insertion
/// order, which is also the presentation order. A quiz with zero questions is
/// valid but cannot be taken as a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    name: String,
    questions: Vec<Question>,
    created_at: DateTime<Utc>,
}

impl Quiz {
    /// Creates a new, empty Quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyName` if the name is empty or whitespace-only.
    pub fn new(
        id: QuizId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuizError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            questions: Vec::new(),
            created_at,
        })
    }

    /// Appends a question, preserving insertion order.
    pub fn push_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least {min} options, got {len}")]
    TooFewOptions { min: usize, len: usize },

    #[error("option text cannot be empty")]
    EmptyOption,

    #[error("correct answer must be one of the options")]
    UnknownCorrectAnswer,
}

/// Minimum number of answer options a question must offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question.
///
/// Immutable once created: the option list keeps its authoring order, and the
/// correct answer is guaranteed to be one of the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Creates a new Question.
    ///
    /// Text and options are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is empty or
    /// whitespace-only, `QuestionError::TooFewOptions` for fewer than
    /// [`MIN_OPTIONS`] options, `QuestionError::EmptyOption` if any option is
    /// blank, and `QuestionError::UnknownCorrectAnswer` if the correct answer
    /// does not match any option.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let options: Vec<String> = options.iter().map(|o| o.trim().to_owned()).collect();
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                min: MIN_OPTIONS,
                len: options.len(),
            });
        }
        if options.iter().any(String::is_empty) {
            return Err(QuestionError::EmptyOption);
        }

        let correct_answer = correct_answer.into();
        let correct_answer = correct_answer.trim();
        if !options.iter().any(|o| o == correct_answer) {
            return Err(QuestionError::UnknownCorrectAnswer);
        }

        Ok(Self {
            id,
            text: text.to_owned(),
            options,
            correct_answer: correct_answer.to_owned(),
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in authoring order. Presentation is expected to shuffle.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        self.correct_answer == candidate
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

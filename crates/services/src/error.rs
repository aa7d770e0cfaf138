//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizError, QuizId};

/// Errors emitted by the quiz `Catalog`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("quiz {0} does not exist")]
    NotFound(QuizId),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by the session engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has no questions to take")]
    EmptyQuiz,
    #[error("session already completed")]
    Completed,
    #[error("last question already answered; finalize or reset the attempt")]
    AlreadyAnswered,
    #[error("attempt cannot be finalized before the last question is answered")]
    NotAwaitingSubmit,
    #[error("quiz {given} is not the quiz bound to this session ({bound})")]
    QuizMismatch { bound: QuizId, given: QuizId },
    #[error("question {index} is missing from the bound quiz")]
    QuestionUnavailable { index: usize },
}

/// Errors emitted by `SessionWorkflow`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionFlowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

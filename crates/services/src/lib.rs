#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use catalog::{Catalog, QuizOverview};
pub use error::{CatalogError, SessionError, SessionFlowError};

pub use sessions::{
    AnswerOutcome, MissedAnswer, QuizSession, SessionPhase, SessionProgress, SessionWorkflow,
};

mod engine;
mod progress;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use engine::{AnswerOutcome, MissedAnswer, QuizSession, SessionPhase};
pub use progress::SessionProgress;
pub use workflow::SessionWorkflow;

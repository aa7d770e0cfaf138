mod ids;
mod question;
mod quiz;

pub use ids::{ParseIdError, QuestionId, QuizId};
pub use question::{Question, QuestionError, MIN_OPTIONS};
pub use quiz::{Quiz, QuizError};

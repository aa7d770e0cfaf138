use quiz_core::model::QuizId;
use quiz_core::Clock;

use crate::catalog::Catalog;
use crate::error::SessionFlowError;
use super::engine::{AnswerOutcome, QuizSession};

/// Command front the presentation layer wires its actions to.
///
/// Resolves the bound quiz from the catalog for every command and supplies
/// timestamps from its clock, so the session itself never holds catalog
/// references or reads the wall clock.
#[derive(Debug, Clone)]
pub struct SessionWorkflow {
    clock: Clock,
}

impl SessionWorkflow {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Select a quiz and start a fresh attempt at it.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Catalog` if the id does not resolve and
    /// `SessionFlowError::Session` if the quiz has no questions.
    pub fn start_session(
        &self,
        catalog: &Catalog,
        quiz_id: QuizId,
    ) -> Result<QuizSession, SessionFlowError> {
        let quiz = catalog.get_quiz(quiz_id)?;
        Ok(QuizSession::start(quiz, self.clock.now())?)
    }

    /// Shuffled options for the session's current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Catalog` if the bound quiz disappeared from
    /// the catalog and `SessionFlowError::Session` for a finalized attempt.
    pub fn current_options(
        &self,
        catalog: &Catalog,
        session: &QuizSession,
    ) -> Result<Vec<String>, SessionFlowError> {
        let quiz = catalog.get_quiz(session.quiz_id())?;
        Ok(session.present_options(quiz)?)
    }

    /// Answer the session's current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Catalog` if the bound quiz is missing and
    /// `SessionFlowError::Session` when no answer is currently expected.
    pub fn answer_current(
        &self,
        catalog: &Catalog,
        session: &mut QuizSession,
        candidate: &str,
    ) -> Result<AnswerOutcome, SessionFlowError> {
        let quiz = catalog.get_quiz(session.quiz_id())?;
        Ok(session.submit_answer(quiz, candidate)?)
    }

    /// Step back to the previous question; no-op when there is none.
    pub fn go_back(&self, session: &mut QuizSession) {
        session.go_back();
    }

    /// Finalize the attempt into its score.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` unless the attempt awaits submit.
    pub fn finalize(&self, session: &mut QuizSession) -> Result<(), SessionFlowError> {
        session.finalize(self.clock.now())?;
        Ok(())
    }

    /// Retry the same quiz from the top.
    pub fn retry(&self, session: &mut QuizSession) {
        session.reset(self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, SessionError};
    use quiz_core::time::fixed_clock;

    fn seeded_catalog() -> (Catalog, QuizId) {
        let mut catalog = Catalog::new().with_clock(fixed_clock());
        let quiz_id = catalog.create_quiz("Capitals").unwrap();
        catalog
            .add_question(
                quiz_id,
                "France?",
                vec!["Paris".to_string(), "Lyon".to_string()],
                "Paris",
            )
            .unwrap();
        (catalog, quiz_id)
    }

    #[test]
    fn start_session_unknown_quiz_is_not_found() {
        let (catalog, _) = seeded_catalog();
        let workflow = SessionWorkflow::new(fixed_clock());

        let missing = QuizId::new(42);
        let err = workflow.start_session(&catalog, missing).unwrap_err();
        assert_eq!(
            err,
            SessionFlowError::Catalog(CatalogError::NotFound(missing))
        );
    }

    #[test]
    fn start_session_empty_quiz_is_rejected() {
        let mut catalog = Catalog::new().with_clock(fixed_clock());
        let quiz_id = catalog.create_quiz("Empty").unwrap();
        let workflow = SessionWorkflow::new(fixed_clock());

        let err = workflow.start_session(&catalog, quiz_id).unwrap_err();
        assert_eq!(err, SessionFlowError::Session(SessionError::EmptyQuiz));
    }

    #[test]
    fn commands_drive_a_full_attempt() {
        let (catalog, quiz_id) = seeded_catalog();
        let workflow = SessionWorkflow::new(fixed_clock());

        let mut session = workflow.start_session(&catalog, quiz_id).unwrap();
        let mut options = workflow.current_options(&catalog, &session).unwrap();
        options.sort();
        assert_eq!(options, ["Lyon", "Paris"]);

        let outcome = workflow
            .answer_current(&catalog, &mut session, "Paris")
            .unwrap();
        assert!(outcome.is_correct);
        assert!(outcome.awaiting_submit);

        workflow.finalize(&mut session).unwrap();
        assert!(session.is_completed());
        assert_eq!(session.score(), 1);

        workflow.retry(&mut session);
        assert!(!session.is_completed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }
}

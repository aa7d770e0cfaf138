use chrono::{DateTime, Utc};
use rand::rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;

use quiz_core::model::{QuestionId, Quiz, QuizId};

use crate::error::SessionError;
use super::progress::SessionProgress;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Phase of one attempt at a quiz.
///
/// Exactly one phase holds at a time. "Idle" (no active quiz) is the absence
/// of a `QuizSession`, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Questions remain unanswered; the index points at the next one.
    InProgress,
    /// The last question was answered but the attempt is not finalized yet.
    AwaitingSubmit,
    /// The attempt was finalized into a score.
    Completed,
}

//
// ─── ANSWER RECORDS ────────────────────────────────────────────────────────────
//

/// Record of a question answered incorrectly, kept for the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedAnswer {
    pub question_text: String,
    pub submitted_answer: String,
    pub correct_answer: String,
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question_id: QuestionId,
    pub is_correct: bool,
    /// True when this was the last question and the attempt now awaits submit.
    pub awaiting_submit: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at answering one quiz, stepped through question by question.
///
/// The session binds a quiz by identifier and borrows its question data per
/// operation; it never copies or mutates catalog state. The question count is
/// captured at start so questions appended mid-attempt do not move the end of
/// the quiz.
pub struct QuizSession {
    quiz_id: QuizId,
    question_count: usize,
    current: usize,
    score: u32,
    missed: Vec<MissedAnswer>,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a new attempt at the given quiz.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuiz` if the quiz has no questions.
    pub fn start(quiz: &Quiz, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if quiz.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        Ok(Self {
            quiz_id: quiz.id(),
            question_count: quiz.question_count(),
            current: 0,
            score: 0,
            missed: Vec::new(),
            phase: SessionPhase::InProgress,
            started_at,
            completed_at: None,
        })
    }

    fn guard_quiz(&self, quiz: &Quiz) -> Result<(), SessionError> {
        if quiz.id() != self.quiz_id {
            return Err(SessionError::QuizMismatch {
                bound: self.quiz_id,
                given: quiz.id(),
            });
        }
        Ok(())
    }

    /// The current question's options in a fresh random order.
    ///
    /// Every call shuffles independently, so two renders of the same question
    /// may show different orders. That is intended; nothing is cached. No
    /// state is mutated.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the attempt is finalized and
    /// `SessionError::QuizMismatch` for a quiz other than the bound one.
    pub fn present_options(&self, quiz: &Quiz) -> Result<Vec<String>, SessionError> {
        self.guard_quiz(quiz)?;
        if self.phase == SessionPhase::Completed {
            return Err(SessionError::Completed);
        }

        let question = quiz
            .question(self.current)
            .ok_or(SessionError::QuestionUnavailable {
                index: self.current,
            })?;
        let mut options = question.options().to_vec();
        options.shuffle(&mut rng());
        Ok(options)
    }

    /// Grade `candidate` against the current question and advance.
    ///
    /// A correct answer (exact, case-sensitive match) bumps the score; an
    /// incorrect one appends a [`MissedAnswer`]. On the last question the
    /// session moves to `AwaitingSubmit` and the index stays put.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` from `AwaitingSubmit`,
    /// `SessionError::Completed` after finalization, and
    /// `SessionError::QuizMismatch` for a quiz other than the bound one.
    pub fn submit_answer(
        &mut self,
        quiz: &Quiz,
        candidate: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        self.guard_quiz(quiz)?;
        match self.phase {
            SessionPhase::Completed => return Err(SessionError::Completed),
            SessionPhase::AwaitingSubmit => return Err(SessionError::AlreadyAnswered),
            SessionPhase::InProgress => {}
        }

        let question = quiz
            .question(self.current)
            .ok_or(SessionError::QuestionUnavailable {
                index: self.current,
            })?;

        let is_correct = question.is_correct(candidate);
        if is_correct {
            self.score += 1;
        } else {
            self.missed.push(MissedAnswer {
                question_text: question.text().to_owned(),
                submitted_answer: candidate.to_owned(),
                correct_answer: question.correct_answer().to_owned(),
            });
        }

        let awaiting_submit = self.current + 1 >= self.question_count;
        if awaiting_submit {
            self.phase = SessionPhase::AwaitingSubmit;
        } else {
            self.current += 1;
        }

        Ok(AnswerOutcome {
            question_id: question.id(),
            is_correct,
            awaiting_submit,
        })
    }

    /// Step back to the previous question.
    ///
    /// Only has an effect while `InProgress` with a question behind the
    /// current one; otherwise it is a silent no-op. Going back does not
    /// retract the score or missed entry already recorded for the revisited
    /// question, so re-answering it counts again.
    pub fn go_back(&mut self) {
        if self.phase == SessionPhase::InProgress && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Finalize the attempt into its score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingSubmit` while questions remain and
    /// `SessionError::Completed` when the attempt is already finalized.
    pub fn finalize(&mut self, completed_at: DateTime<Utc>) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::InProgress => Err(SessionError::NotAwaitingSubmit),
            SessionPhase::Completed => Err(SessionError::Completed),
            SessionPhase::AwaitingSubmit => {
                self.phase = SessionPhase::Completed;
                self.completed_at = Some(completed_at);
                Ok(())
            }
        }
    }

    /// Restart the attempt at question 0 with score and missed list cleared.
    ///
    /// The bound quiz is kept. Valid from any phase; from `InProgress` it is
    /// a plain reinitialization.
    pub fn reset(&mut self, restarted_at: DateTime<Utc>) {
        self.current = 0;
        self.score = 0;
        self.missed.clear();
        self.phase = SessionPhase::InProgress;
        self.started_at = restarted_at;
        self.completed_at = None;
    }

    // Accessors
    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn missed_answers(&self) -> &[MissedAnswer] {
        &self.missed
    }

    #[must_use]
    pub fn is_awaiting_submit(&self) -> bool {
        self.phase == SessionPhase::AwaitingSubmit
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Number of questions in the attempt, fixed at start.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Number of answers recorded so far (score plus missed entries).
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.score as usize + self.missed.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a summary of the current attempt for rendering.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.question_count,
            answered: self.answered_count(),
            score: self.score,
            missed: self.missed.len(),
            awaiting_submit: self.is_awaiting_submit(),
            is_complete: self.is_completed(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_id", &self.quiz_id)
            .field("question_count", &self.question_count)
            .field("current", &self.current)
            .field("score", &self.score)
            .field("missed_len", &self.missed.len())
            .field("phase", &self.phase)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use quiz_core::time::fixed_clock;
use services::{Catalog, SessionPhase, SessionWorkflow};

/// Authoring a quiz through the catalog, taking it, finalizing, and retrying.
#[test]
fn author_take_finalize_and_retry() {
    let mut catalog = Catalog::new().with_clock(fixed_clock());

    let quiz_id = catalog.create_quiz("Capitals").unwrap();
    catalog
        .add_question(
            quiz_id,
            "France?",
            vec![
                "Paris".to_string(),
                "Lyon".to_string(),
                "Nice".to_string(),
                "Tours".to_string(),
            ],
            "Paris",
        )
        .unwrap();
    catalog
        .add_question(
            quiz_id,
            "Japan?",
            vec![
                "Osaka".to_string(),
                "Tokyo".to_string(),
                "Kyoto".to_string(),
                "Nara".to_string(),
            ],
            "Tokyo",
        )
        .unwrap();

    let listing = catalog.list_quizzes();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "Capitals");
    assert_eq!(listing[0].question_count, 2);

    let workflow = SessionWorkflow::new(fixed_clock());
    let mut session = workflow.start_session(&catalog, quiz_id).unwrap();
    assert_eq!(session.phase(), SessionPhase::InProgress);

    // Every render reshuffles, but always over the same four options.
    for _ in 0..3 {
        let mut options = workflow.current_options(&catalog, &session).unwrap();
        options.sort();
        assert_eq!(options, ["Lyon", "Nice", "Paris", "Tours"]);
    }

    let first = workflow
        .answer_current(&catalog, &mut session, "Lyon")
        .unwrap();
    assert!(!first.is_correct);

    let second = workflow
        .answer_current(&catalog, &mut session, "Tokyo")
        .unwrap();
    assert!(second.is_correct);
    assert!(second.awaiting_submit);

    workflow.finalize(&mut session).unwrap();
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert_eq!(session.score(), 1);
    assert_eq!(session.missed_answers().len(), 1);
    assert_eq!(session.missed_answers()[0].question_text, "France?");
    assert_eq!(session.missed_answers()[0].submitted_answer, "Lyon");
    assert_eq!(session.missed_answers()[0].correct_answer, "Paris");

    // Retry the same quiz and score perfectly this time.
    workflow.retry(&mut session);
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.quiz_id(), quiz_id);

    workflow
        .answer_current(&catalog, &mut session, "Paris")
        .unwrap();
    workflow
        .answer_current(&catalog, &mut session, "Tokyo")
        .unwrap();
    workflow.finalize(&mut session).unwrap();

    assert_eq!(session.score(), 2);
    assert!(session.missed_answers().is_empty());

    let progress = session.progress();
    assert_eq!(progress.total, 2);
    assert_eq!(progress.answered, 2);
    assert!(progress.is_complete);
}

/// Questions appended after a session started do not extend that attempt.
#[test]
fn questions_added_mid_attempt_do_not_move_the_end() {
    let mut catalog = Catalog::new().with_clock(fixed_clock());
    let quiz_id = catalog.create_quiz("Growing").unwrap();
    catalog
        .add_question(
            quiz_id,
            "2 + 2?",
            vec!["4".to_string(), "5".to_string()],
            "4",
        )
        .unwrap();

    let workflow = SessionWorkflow::new(fixed_clock());
    let mut session = workflow.start_session(&catalog, quiz_id).unwrap();

    catalog
        .add_question(
            quiz_id,
            "3 + 3?",
            vec!["6".to_string(), "7".to_string()],
            "6",
        )
        .unwrap();

    let outcome = workflow
        .answer_current(&catalog, &mut session, "4")
        .unwrap();
    assert!(outcome.awaiting_submit);
    assert_eq!(session.question_count(), 1);

    // A fresh attempt picks up the appended question.
    let renewed = workflow.start_session(&catalog, quiz_id).unwrap();
    assert_eq!(renewed.question_count(), 2);
}

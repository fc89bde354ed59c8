#[cfg(test)]
mod quiz_integration_tests {
    use crate::config::QuizConfig;
    use crate::error::{QuizAction, QuizError};
    use crate::models::{SessionStatus, StudyCard};
    use crate::quiz::{QuizEngine, QuizEvent};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cards(n: u32) -> Vec<StudyCard> {
        (1..=n)
            .map(|i| {
                StudyCard::new(
                    i,
                    format!("Term {}", i),
                    format!("Definition {}", i),
                    if i <= n / 2 { "Space" } else { "Nature" },
                )
            })
            .collect()
    }

    fn engine_with(config: QuizConfig) -> QuizEngine<StdRng> {
        QuizEngine::with_rng(config, StdRng::seed_from_u64(7))
    }

    fn engine() -> QuizEngine<StdRng> {
        engine_with(QuizConfig::default())
    }

    fn tick_n(engine: &mut QuizEngine<StdRng>, n: u32) -> Vec<QuizEvent> {
        (0..n).flat_map(|_| engine.tick()).collect()
    }

    fn correct_answer(engine: &QuizEngine<StdRng>) -> String {
        engine.current_question().unwrap().correct_answer.clone()
    }

    fn timeouts(events: &[QuizEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, QuizEvent::TimedOut(_)))
            .count()
    }

    #[test]
    fn test_start_initialises_session() {
        let mut engine = engine();
        assert_eq!(engine.status(), SessionStatus::NotStarted);

        engine.start(&cards(15)).unwrap();
        assert_eq!(engine.status(), SessionStatus::InProgress);
        assert_eq!(engine.questions().len(), 5);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.remaining_secs(), Some(30));
        assert!(engine.current_question().is_some());
    }

    #[test]
    fn test_start_while_in_progress_is_rejected() {
        let mut engine = engine();
        engine.start(&cards(6)).unwrap();
        let questions = engine.questions().to_vec();

        let err = engine.start(&cards(6)).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                action: QuizAction::Start,
                status: SessionStatus::InProgress,
            }
        );
        assert_eq!(engine.questions(), questions.as_slice());
    }

    #[test]
    fn test_answer_before_start_is_rejected() {
        let mut engine = engine();
        let err = engine.answer("anything").unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { .. }));
        assert_eq!(engine.stats().total_answered, 0);
    }

    #[test]
    fn test_correct_answer_increments_score_and_stats() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();

        let answer = engine.answer(&correct_answer(&engine)).unwrap();
        assert!(answer.correct);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.stats().total_correct, 1);
        assert_eq!(engine.stats().total_answered, 1);
        let topic_total: u32 = engine.stats().by_topic.values().map(|t| t.total).sum();
        assert_eq!(topic_total, 1);
    }

    #[test]
    fn test_wrong_answer_counts_without_credit() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();

        let answer = engine.answer("not an option").unwrap();
        assert!(!answer.correct);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.stats().total_answered, 1);
        assert_eq!(engine.stats().total_correct, 0);
    }

    #[test]
    fn test_answer_during_feedback_is_rejected() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();
        engine.answer(&first_option(&engine)).unwrap();

        assert!(engine.is_feedback_pending());
        assert!(engine.feedback().is_some());
        let err = engine.answer("again").unwrap_err();
        assert_eq!(
            err,
            QuizError::FeedbackPending {
                action: QuizAction::Answer,
                question: 1,
            }
        );
        assert_eq!(engine.stats().total_answered, 1);
    }

    fn first_option(engine: &QuizEngine<StdRng>) -> String {
        let question = engine.current_question().unwrap();
        question.options.first().cloned().unwrap()
    }

    #[test]
    fn test_feedback_period_then_advance() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();
        engine.answer(&correct_answer(&engine)).unwrap();
        assert_eq!(engine.remaining_secs(), None);

        assert!(engine.tick().is_empty());
        assert_eq!(engine.current_index(), 0);

        let events = engine.tick();
        assert_eq!(events, vec![QuizEvent::Advanced { question: 1 }]);
        assert_eq!(engine.current_index(), 1);
        assert!(!engine.is_feedback_pending());
        assert!(engine.feedback().is_none());
        assert_eq!(engine.remaining_secs(), Some(30));
    }

    #[test]
    fn test_two_question_scenario() {
        let mut engine = engine();
        engine.start(&cards(2)).unwrap();
        assert_eq!(engine.questions().len(), 2);

        engine.answer(&correct_answer(&engine)).unwrap();
        tick_n(&mut engine, 2);
        assert_eq!(engine.current_index(), 1);

        engine.answer("definitely wrong").unwrap();
        let events = tick_n(&mut engine, 2);

        assert!(matches!(events.last(), Some(QuizEvent::Completed(_))));
        assert_eq!(engine.status(), SessionStatus::Completed);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.stats().total_answered, 2);
        assert_eq!(engine.summary().overall_accuracy, 50.0);
        assert_eq!(engine.current_index(), 2);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_countdown_reports_remaining_seconds() {
        let mut engine = engine();
        engine.start(&cards(5)).unwrap();

        let events = engine.tick();
        assert_eq!(
            events,
            vec![QuizEvent::Countdown {
                question: 0,
                remaining: 29
            }]
        );
        assert_eq!(engine.remaining_secs(), Some(29));
    }

    #[test]
    fn test_timeout_fires_exactly_once() {
        let mut engine = engine();
        engine.start(&cards(5)).unwrap();

        let events = tick_n(&mut engine, 29);
        assert_eq!(timeouts(&events), 0);
        assert!(engine.history().is_empty());

        let events = engine.tick();
        assert_eq!(timeouts(&events), 1);
        assert_eq!(engine.history().len(), 1);
        assert!(engine.history()[0].timed_out());
        assert_eq!(engine.stats().total_answered, 1);
        assert_eq!(engine.stats().total_correct, 0);
        assert_eq!(engine.score(), 0);

        assert!(matches!(
            engine.answer("late"),
            Err(QuizError::FeedbackPending { .. })
        ));

        let events = tick_n(&mut engine, 2);
        assert_eq!(events, vec![QuizEvent::Advanced { question: 1 }]);

        let events = tick_n(&mut engine, 29);
        assert_eq!(timeouts(&events), 0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_answer_cancels_pending_countdown() {
        let mut engine = engine();
        engine.start(&cards(5)).unwrap();

        tick_n(&mut engine, 29);
        assert_eq!(engine.remaining_secs(), Some(1));
        engine.answer(&correct_answer(&engine)).unwrap();

        let events = tick_n(&mut engine, 3);
        assert_eq!(timeouts(&events), 0);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.stats().total_answered, 1);
    }

    #[test]
    fn test_every_resolution_advances_or_completes() {
        for seed in 0..5 {
            let mut engine = QuizEngine::with_rng(QuizConfig::default(), StdRng::seed_from_u64(seed));
            engine.start(&cards(7)).unwrap();
            let total = engine.questions().len();

            let mut step = 0;
            while engine.status() == SessionStatus::InProgress {
                let before_index = engine.current_index();
                let before_answered = engine.stats().total_answered;

                if step % 2 == 0 {
                    engine.answer_index(0).unwrap();
                    tick_n(&mut engine, 2);
                } else {
                    tick_n(&mut engine, 30 + 2);
                }

                assert_eq!(engine.stats().total_answered, before_answered + 1);
                assert_eq!(engine.current_index(), before_index + 1);
                step += 1;
            }

            assert_eq!(step, total);
            assert_eq!(engine.status(), SessionStatus::Completed);
            assert_eq!(engine.current_index(), total);
            let stats = engine.stats();
            let by_topic: u32 = stats.by_topic.values().map(|t| t.total).sum();
            let by_difficulty: u32 = stats.by_difficulty.values().map(|t| t.total).sum();
            assert_eq!(by_topic, stats.total_answered);
            assert_eq!(by_difficulty, stats.total_answered);
        }
    }

    #[test]
    fn test_empty_deck_completes_immediately() {
        let mut engine = engine();
        engine.start(&[]).unwrap();

        assert_eq!(engine.status(), SessionStatus::Completed);
        assert!(engine.questions().is_empty());
        assert_eq!(engine.remaining_secs(), None);
        assert!(engine.tick().is_empty());

        let summary = engine.summary();
        assert_eq!(summary.overall_accuracy, 0.0);
        assert!(summary.per_topic_accuracy.is_empty());
    }

    #[test]
    fn test_restart_resets_session() {
        let config = QuizConfig {
            answer_feedback_secs: 0,
            ..QuizConfig::default()
        };
        let mut engine = engine_with(config);
        engine.start(&cards(3)).unwrap();
        while engine.status() == SessionStatus::InProgress {
            engine.answer(&correct_answer(&engine)).unwrap();
        }
        assert_eq!(engine.score(), 3);

        engine.start(&cards(3)).unwrap();
        assert_eq!(engine.status(), SessionStatus::InProgress);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.questions().len(), 3);
        assert_eq!(engine.stats().total_answered, 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.remaining_secs(), Some(30));
    }

    #[test]
    fn test_zero_feedback_advances_immediately() {
        let config = QuizConfig {
            answer_feedback_secs: 0,
            timeout_feedback_secs: 0,
            countdown_secs: 2,
            ..QuizConfig::default()
        };
        let mut engine = engine_with(config);
        engine.start(&cards(4)).unwrap();

        engine.answer(&correct_answer(&engine)).unwrap();
        assert_eq!(engine.current_index(), 1);
        assert!(!engine.is_feedback_pending());

        let events = tick_n(&mut engine, 2);
        assert_eq!(timeouts(&events), 1);
        assert!(events.contains(&QuizEvent::Advanced { question: 2 }));
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn test_answer_index_out_of_range() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();

        let err = engine.answer_index(9).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidOption {
                index: 9,
                available: 4
            }
        );
        assert_eq!(engine.stats().total_answered, 0);
    }

    #[test]
    fn test_answer_index_uses_option_text() {
        let mut engine = engine();
        engine.start(&cards(10)).unwrap();
        let question = engine.current_question().unwrap().clone();
        let correct_index = question.correct_index().unwrap();

        let answer = engine.answer_index(correct_index).unwrap();
        assert!(answer.correct);
        assert_eq!(answer.selected.as_deref(), Some(question.correct_answer.as_str()));
    }

    #[test]
    fn test_abandon_returns_to_not_started() {
        let mut engine = engine();
        engine.start(&cards(5)).unwrap();
        engine.answer("x").unwrap();

        engine.abandon();
        assert_eq!(engine.status(), SessionStatus::NotStarted);
        assert!(engine.questions().is_empty());
        assert!(engine.tick().is_empty());
        assert!(engine.start(&cards(5)).is_ok());
    }

    #[test]
    fn test_progress_tracks_current_index() {
        let config = QuizConfig {
            answer_feedback_secs: 0,
            ..QuizConfig::default()
        };
        let mut engine = engine_with(config);
        engine.start(&cards(4)).unwrap();
        assert_eq!(engine.progress(), 0.0);

        engine.answer("x").unwrap();
        engine.answer("y").unwrap();
        assert_eq!(engine.progress(), 0.5);
    }
}

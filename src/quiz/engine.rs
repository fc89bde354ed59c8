//! Session controller for the timed multiple-choice quiz.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> InProgress -> Completed
//!                   ^             |
//!                   +--- start ---+
//! ```
//!
//! Each question gets a countdown. Answering (or the countdown running out)
//! resolves the question and opens a feedback period during which no input is
//! accepted. When the feedback period ends the engine moves to the next
//! question or completes. The engine owns no thread; the caller drives it by
//! calling `tick()` once per second.

use rand::Rng;
use rand::rngs::ThreadRng;

use super::generator::{GeneratorOptions, generate_with};
use super::stats::{PerformanceStats, PerformanceSummary, compute_summary};
use super::timer::{Scheduler, TimerHandle, TimerKind};
use crate::config::QuizConfig;
use crate::error::{QuizAction, QuizError};
use crate::logger;
use crate::models::{AnswerEvent, QuizQuestion, SessionStatus, StudyCard};

/// State of one quiz attempt. Replaced wholesale on every `start()`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    /// Equals `questions.len()` once the session is completed.
    pub current_index: usize,
    pub score: u32,
    pub stats: PerformanceStats,
    pub status: SessionStatus,
    pub history: Vec<AnswerEvent>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            stats: PerformanceStats::new(),
            status: SessionStatus::NotStarted,
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// Countdown for `question` moved; `remaining` seconds are left.
    Countdown { question: usize, remaining: u32 },
    TimedOut(AnswerEvent),
    Advanced { question: usize },
    Completed(PerformanceSummary),
}

#[derive(Debug)]
pub struct QuizEngine<R = ThreadRng> {
    config: QuizConfig,
    rng: R,
    session: QuizSession,
    scheduler: Scheduler,
    countdown: Option<TimerHandle>,
    feedback: Option<TimerHandle>,
    last_answer: Option<AnswerEvent>,
}

impl QuizEngine<ThreadRng> {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(config: QuizConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            session: QuizSession::default(),
            scheduler: Scheduler::new(),
            countdown: None,
            feedback: None,
            last_answer: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.session.questions
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.session.status {
            SessionStatus::InProgress => self.session.questions.get(self.session.current_index),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn stats(&self) -> &PerformanceStats {
        &self.session.stats
    }

    pub fn history(&self) -> &[AnswerEvent] {
        &self.session.history
    }

    /// Seconds left on the current question, `None` while no countdown runs.
    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.and_then(|h| self.scheduler.remaining(h))
    }

    /// The resolution being shown during the feedback period.
    pub fn feedback(&self) -> Option<&AnswerEvent> {
        self.last_answer.as_ref()
    }

    pub fn is_feedback_pending(&self) -> bool {
        self.feedback.is_some()
    }

    /// Fraction of questions already passed, 0.0 ..= 1.0.
    pub fn progress(&self) -> f64 {
        let total = self.session.questions.len();
        if total == 0 {
            return 0.0;
        }
        self.session.current_index as f64 / total as f64
    }

    pub fn summary(&self) -> PerformanceSummary {
        compute_summary(&self.session.stats)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Generates a fresh question list and resets score, stats and history.
    pub fn start(&mut self, cards: &[StudyCard]) -> Result<(), QuizError> {
        if self.session.status == SessionStatus::InProgress {
            return Err(QuizError::InvalidTransition {
                action: QuizAction::Start,
                status: self.session.status,
            });
        }

        self.cancel_timers();
        let options = GeneratorOptions::from(&self.config);
        let questions = generate_with(cards, self.config.question_count, &options, &mut self.rng);
        logger::log(&format!(
            "Starting quiz with {} questions from {} cards",
            questions.len(),
            cards.len()
        ));

        self.session = QuizSession {
            questions,
            status: SessionStatus::InProgress,
            ..QuizSession::default()
        };

        if self.session.questions.is_empty() {
            self.session.status = SessionStatus::Completed;
            logger::log("No questions generated, quiz completed immediately");
        } else {
            self.arm_countdown();
        }
        Ok(())
    }

    pub fn answer(&mut self, selected: &str) -> Result<AnswerEvent, QuizError> {
        self.ensure_can_answer()?;
        let (answer, _) = self.resolve(Some(selected.to_string()));
        Ok(answer)
    }

    /// Answers with the option at `index` of the current question.
    pub fn answer_index(&mut self, index: usize) -> Result<AnswerEvent, QuizError> {
        self.ensure_can_answer()?;
        let selected = self
            .current_question()
            .and_then(|q| q.options.get(index).cloned());
        match selected {
            Some(option) => self.answer(&option),
            None => Err(QuizError::InvalidOption {
                index,
                available: self.current_question().map_or(0, |q| q.options.len()),
            }),
        }
    }

    /// Advances all timers by one second.
    pub fn tick(&mut self) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        let fired = self.scheduler.tick();

        if let Some(remaining) = self.remaining_secs() {
            events.push(QuizEvent::Countdown {
                question: self.session.current_index,
                remaining,
            });
        }

        for timer in fired {
            match timer.kind {
                TimerKind::Countdown { question }
                    if self.countdown == Some(timer.handle)
                        && question == self.session.current_index
                        && self.session.status == SessionStatus::InProgress =>
                {
                    self.countdown = None;
                    logger::log(&format!("Question {} timed out", question + 1));
                    let (answer, advanced) = self.resolve(None);
                    events.push(QuizEvent::TimedOut(answer));
                    events.extend(advanced);
                }
                TimerKind::Feedback { question }
                    if self.feedback == Some(timer.handle)
                        && question == self.session.current_index =>
                {
                    self.feedback = None;
                    events.push(self.advance());
                }
                kind => logger::log(&format!("Ignoring stale timer {:?}", kind)),
            }
        }

        events
    }

    /// Drops the current session, e.g. when the quiz view is left mid-way.
    pub fn abandon(&mut self) {
        self.cancel_timers();
        self.session = QuizSession::default();
    }

    // ── Internals ────────────────────────────────────────────────────

    fn ensure_can_answer(&self) -> Result<(), QuizError> {
        if self.session.status != SessionStatus::InProgress {
            return Err(QuizError::InvalidTransition {
                action: QuizAction::Answer,
                status: self.session.status,
            });
        }
        if self.feedback.is_some() {
            return Err(QuizError::FeedbackPending {
                action: QuizAction::Answer,
                question: self.session.current_index + 1,
            });
        }
        Ok(())
    }

    /// Records the outcome of the current question and opens the feedback
    /// period. Returns the advance event when the period is zero-length.
    fn resolve(&mut self, selected: Option<String>) -> (AnswerEvent, Option<QuizEvent>) {
        if let Some(handle) = self.countdown.take() {
            self.scheduler.cancel(handle);
        }

        let index = self.session.current_index;
        let question = &self.session.questions[index];
        let correct = selected.as_deref() == Some(question.correct_answer.as_str());
        let answer = AnswerEvent {
            question_id: question.id,
            question_index: index,
            topic: question.topic.clone(),
            difficulty: question.difficulty,
            selected,
            correct_answer: question.correct_answer.clone(),
            correct,
        };

        if correct {
            self.session.score += 1;
        }
        self.session
            .stats
            .record(&answer.topic, answer.difficulty, correct);
        self.session.history.push(answer.clone());
        logger::log(&format!(
            "Question {} resolved: {} (score {})",
            index + 1,
            if answer.timed_out() {
                "timed out"
            } else if correct {
                "correct"
            } else {
                "incorrect"
            },
            self.session.score
        ));

        let feedback_secs = if answer.timed_out() {
            self.config.timeout_feedback_secs
        } else {
            self.config.answer_feedback_secs
        };

        if feedback_secs == 0 {
            return (answer, Some(self.advance()));
        }

        self.feedback = Some(
            self.scheduler
                .arm(TimerKind::Feedback { question: index }, feedback_secs),
        );
        self.last_answer = Some(answer.clone());
        (answer, None)
    }

    fn advance(&mut self) -> QuizEvent {
        self.last_answer = None;
        self.session.current_index += 1;

        if self.session.current_index < self.session.questions.len() {
            self.arm_countdown();
            QuizEvent::Advanced {
                question: self.session.current_index,
            }
        } else {
            self.session.status = SessionStatus::Completed;
            let summary = self.summary();
            logger::log(&format!(
                "Quiz completed: {}/{} ({:.1}%)",
                self.session.score,
                self.session.questions.len(),
                summary.overall_accuracy
            ));
            QuizEvent::Completed(summary)
        }
    }

    fn arm_countdown(&mut self) {
        let handle = self.scheduler.arm(
            TimerKind::Countdown {
                question: self.session.current_index,
            },
            self.config.countdown_secs,
        );
        self.countdown = Some(handle);
    }

    fn cancel_timers(&mut self) {
        self.scheduler.clear();
        self.countdown = None;
        self.feedback = None;
        self.last_answer = None;
    }
}

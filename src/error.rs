use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::SessionStatus;

/// Operations the presentation layer can request from the quiz engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Answer,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizAction::Start => f.write_str("start"),
            QuizAction::Answer => f.write_str("answer"),
        }
    }
}

/// Rejected quiz requests. None of these are fatal; the session keeps its last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("cannot {action} while the quiz is {status}")]
    InvalidTransition {
        action: QuizAction,
        status: SessionStatus,
    },

    #[error("cannot {action} while feedback for question {question} is showing")]
    FeedbackPending { action: QuizAction, question: usize },

    #[error("option {index} does not exist (question has {available} options)")]
    InvalidOption { index: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("please fill in all fields ({0} is empty)")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = QuizError::InvalidTransition {
            action: QuizAction::Answer,
            status: SessionStatus::NotStarted,
        };
        assert_eq!(err.to_string(), "cannot answer while the quiz is not started");
    }

    #[test]
    fn test_feedback_pending_message() {
        let err = QuizError::FeedbackPending {
            action: QuizAction::Answer,
            question: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot answer while feedback for question 2 is showing"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = DeckError::MissingField("term");
        assert_eq!(err.to_string(), "please fill in all fields (term is empty)");
    }

    #[test]
    fn test_app_error_wraps_quiz_error() {
        let err: AppError = QuizError::InvalidOption {
            index: 5,
            available: 4,
        }
        .into();
        assert!(matches!(err, AppError::Quiz(_)));
        assert_eq!(
            err.to_string(),
            "option 5 does not exist (question has 4 options)"
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const DEFAULT_COUNTDOWN_SECS: u32 = 30;
pub const DEFAULT_ANSWER_FEEDBACK_SECS: u32 = 2;
pub const DEFAULT_TIMEOUT_FEEDBACK_SECS: u32 = 2;
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// What the generator does when a deck is too small to supply a full set of wrong options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortOptionPolicy {
    /// Keep the question with however many options are available.
    #[default]
    AllowFewer,
    /// Top up with definitions of cards already used as questions.
    Backfill,
    /// Drop questions that cannot reach the full option count.
    SkipQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub question_count: usize,
    pub countdown_secs: u32,
    pub answer_feedback_secs: u32,
    pub timeout_feedback_secs: u32,
    pub option_count: usize,
    pub short_option_policy: ShortOptionPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            answer_feedback_secs: DEFAULT_ANSWER_FEEDBACK_SECS,
            timeout_feedback_secs: DEFAULT_TIMEOUT_FEEDBACK_SECS,
            option_count: DEFAULT_OPTION_COUNT,
            short_option_policy: ShortOptionPolicy::AllowFewer,
        }
    }
}

impl QuizConfig {
    /// Reads a JSON config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: QuizConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.option_count < 2 {
            return Err(ConfigError::Invalid(format!(
                "option_count must be at least 2, got {}",
                self.option_count
            )));
        }
        if self.countdown_secs == 0 {
            return Err(ConfigError::Invalid(
                "countdown_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub mod app;
pub mod browser;
pub mod config;
pub mod csv;
pub mod deck;
pub mod error;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod quiz_tests;

// Re-exports for convenience
pub use app::App;
pub use browser::FlashcardBrowser;
pub use config::{QuizConfig, ShortOptionPolicy};
pub use csv::{get_deck_files, load_deck};
pub use deck::{Deck, TopicFilter};
pub use error::{AppError, ConfigError, DeckError, QuizError};
pub use models::{AnswerEvent, AppState, Difficulty, QuizQuestion, SessionStatus, StudyCard};
pub use quiz::{PerformanceStats, PerformanceSummary, QuizEngine, QuizEvent, QuizSession};
pub use session::handle_key;
pub use ui::draw;

pub mod layout;
mod flashcards;
mod menu;
mod quiz;
mod summary;

use std::borrow::Cow;

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::app::App;
use crate::models::AppState;

pub use flashcards::{draw_card_form, draw_flashcards};
pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

/// Renders the screen that belongs to the current application state.
pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Flashcards => draw_flashcards(f, app),
        AppState::AddCard => draw_card_form(f, app),
        AppState::Quiz => draw_quiz(f, app),
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Summary => draw_summary(f, app),
    }
}

pub(crate) fn key_span<'a>(key: impl Into<Cow<'a, str>>) -> Span<'a> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::logger;
use crate::models::AppState;
use crate::utils::option_index;

/// Routes a key press to the handler of the current screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Flashcards => handle_flashcard_input(app, key),
        AppState::AddCard => handle_form_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

pub fn handle_menu_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            app.selected_deck = app.selected_deck.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_deck < app.deck_sources.len().saturating_sub(1) {
                app.selected_deck += 1;
            }
        }
        KeyCode::Enter => app.open_selected_deck(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_flashcard_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.browser.flip(),
        KeyCode::Right | KeyCode::Char('l') => app.browser.next(&app.deck),
        KeyCode::Left | KeyCode::Char('h') => app.browser.previous(&app.deck),
        KeyCode::Char('t') => app.browser.cycle_filter(&app.deck),
        KeyCode::Char('n') => {
            app.form.error = None;
            app.state = AppState::AddCard;
        }
        KeyCode::Char('s') => app.start_quiz(),
        KeyCode::Esc => {
            app.status_message = None;
            app.state = AppState::Menu;
        }
        _ => {}
    }
}

pub fn handle_form_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.state = AppState::Flashcards,
        KeyCode::Tab => app.form.focus_next(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.push(c),
        _ => {}
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.state = AppState::QuizQuitConfirm,
        KeyCode::Char(c) => {
            let Some(index) = option_index(c) else {
                return;
            };
            if let Err(e) = app.engine.answer_index(index) {
                logger::log(&format!("Answer rejected: {}", e));
            }
            app.sync_quiz_state();
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => app.leave_quiz(),
        KeyCode::Char('n') | KeyCode::Esc => app.state = AppState::Quiz,
        _ => {}
    }
}

pub fn handle_summary_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.start_quiz(),
        KeyCode::Char('m') => {
            app.engine.abandon();
            app.state = AppState::Flashcards;
        }
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

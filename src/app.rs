use std::path::{Path, PathBuf};

use crate::browser::FlashcardBrowser;
use crate::config::QuizConfig;
use crate::csv::{get_deck_files, load_deck};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::logger;
use crate::models::{AppState, SessionStatus};
use crate::quiz::{QuizEngine, QuizEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Topic,
    Term,
    Definition,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Topic => FormField::Term,
            FormField::Term => FormField::Definition,
            FormField::Definition => FormField::Topic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Topic => "Topic",
            FormField::Term => "Term",
            FormField::Definition => "Definition",
        }
    }
}

/// Input state of the "add flashcard" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub topic: String,
    pub term: String,
    pub definition: String,
    pub focused: FormField,
    pub error: Option<String>,
}

impl CardForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Topic => &self.topic,
            FormField::Term => &self.term,
            FormField::Definition => &self.definition,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Topic => &mut self.topic,
            FormField::Term => &mut self.term,
            FormField::Definition => &mut self.definition,
        }
    }

    pub fn push(&mut self, c: char) {
        self.error = None;
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Keeps the topic so several cards can be added to the same topic in a row.
    pub fn clear_card(&mut self) {
        self.term.clear();
        self.definition.clear();
        self.focused = FormField::Term;
        self.error = None;
    }
}

/// A deck the menu can open: the built-in starter deck or a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    Builtin,
    File(PathBuf),
}

impl DeckSource {
    pub fn label(&self) -> String {
        match self {
            DeckSource::Builtin => format!("{} (built-in)", crate::deck::BUILTIN_DECK_NAME),
            DeckSource::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    pub fn load(&self) -> Result<Deck, DeckError> {
        match self {
            DeckSource::Builtin => Ok(Deck::builtin()),
            DeckSource::File(path) => load_deck(path),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub deck_sources: Vec<DeckSource>,
    pub selected_deck: usize,
    pub deck: Deck,
    pub browser: FlashcardBrowser,
    pub form: CardForm,
    pub engine: QuizEngine,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: QuizConfig, deck_dir: &Path) -> Self {
        let mut deck_sources = vec![DeckSource::Builtin];
        deck_sources.extend(get_deck_files(deck_dir).into_iter().map(DeckSource::File));

        Self {
            state: AppState::Menu,
            deck_sources,
            selected_deck: 0,
            deck: Deck::builtin(),
            browser: FlashcardBrowser::new(),
            form: CardForm::default(),
            engine: QuizEngine::new(config),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn open_selected_deck(&mut self) {
        let Some(source) = self.deck_sources.get(self.selected_deck) else {
            return;
        };
        match source.load() {
            Ok(deck) => {
                logger::log(&format!("Opened deck {} ({} cards)", deck.name, deck.len()));
                self.deck = deck;
                self.browser = FlashcardBrowser::new();
                self.status_message = None;
                self.state = AppState::Flashcards;
            }
            Err(e) => {
                logger::log(&format!("Failed to open deck: {}", e));
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Starts (or restarts) a quiz over the cards visible in the browser.
    pub fn start_quiz(&mut self) {
        let cards = self.browser.visible_cards(&self.deck);
        match self.engine.start(&cards) {
            Ok(()) => {
                self.status_message = None;
                self.state = if self.engine.status() == SessionStatus::Completed {
                    AppState::Summary
                } else {
                    AppState::Quiz
                };
            }
            Err(e) => {
                logger::log(&format!("Could not start quiz: {}", e));
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn leave_quiz(&mut self) {
        self.engine.abandon();
        self.state = AppState::Flashcards;
    }

    pub fn submit_form(&mut self) {
        let form = &self.form;
        let result = self
            .deck
            .add_card(&form.term, &form.definition, &form.topic)
            .map(|card| card.term.clone());
        match result {
            Ok(term) => {
                self.status_message = Some(format!("Added \"{}\"", term));
                self.form.clear_card();
                self.state = AppState::Flashcards;
            }
            Err(e) => self.form.error = Some(e.to_string()),
        }
    }

    /// Called once per second by the event loop.
    pub fn on_tick(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        for event in self.engine.tick() {
            if let QuizEvent::Completed(_) = event {
                self.state = AppState::Summary;
            }
        }
    }

    pub fn sync_quiz_state(&mut self) {
        if self.state == AppState::Quiz && self.engine.status() == SessionStatus::Completed {
            self.state = AppState::Summary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(QuizConfig::default(), Path::new("/no/such/dir"))
    }

    #[test]
    fn test_new_app_lists_builtin_deck() {
        let app = app();
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.deck_sources, vec![DeckSource::Builtin]);
        assert_eq!(app.deck_sources[0].label(), "Starter Deck (built-in)");
    }

    #[test]
    fn test_open_builtin_deck() {
        let mut app = app();
        app.open_selected_deck();
        assert_eq!(app.state, AppState::Flashcards);
        assert_eq!(app.deck.len(), 15);
    }

    #[test]
    fn test_open_broken_deck_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "nope").unwrap();
        let mut app = App::new(QuizConfig::default(), dir.path());
        app.selected_deck = 1;

        app.open_selected_deck();
        assert_eq!(app.state, AppState::Menu);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_start_quiz_uses_filtered_cards() {
        let mut app = app();
        app.open_selected_deck();
        app.browser
            .set_filter(crate::deck::TopicFilter::Topic("Space".to_string()));

        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.engine.questions().len(), 3);
        assert!(app.engine.questions().iter().all(|q| q.topic == "Space"));
    }

    #[test]
    fn test_start_quiz_with_empty_filter_goes_to_summary() {
        let mut app = app();
        app.open_selected_deck();
        app.browser
            .set_filter(crate::deck::TopicFilter::Topic("Music".to_string()));

        app.start_quiz();
        assert_eq!(app.state, AppState::Summary);
    }

    #[test]
    fn test_submit_form_adds_card() {
        let mut app = app();
        app.open_selected_deck();
        app.state = AppState::AddCard;
        app.form.topic = "Space".to_string();
        app.form.term = "Nebula".to_string();
        app.form.definition = "A cloud of gas and dust.".to_string();

        app.submit_form();
        assert_eq!(app.state, AppState::Flashcards);
        assert_eq!(app.deck.len(), 16);
        assert_eq!(app.form.topic, "Space");
        assert!(app.form.term.is_empty());
    }

    #[test]
    fn test_submit_incomplete_form_keeps_it_open() {
        let mut app = app();
        app.state = AppState::AddCard;
        app.form.term = "Nebula".to_string();

        app.submit_form();
        assert_eq!(app.state, AppState::AddCard);
        assert!(app.form.error.is_some());
    }

    #[test]
    fn test_tick_outside_quiz_is_ignored() {
        let mut app = app();
        app.open_selected_deck();
        app.start_quiz();
        app.state = AppState::QuizQuitConfirm;

        app.on_tick();
        assert_eq!(app.engine.remaining_secs(), Some(30));
    }

    #[test]
    fn test_leave_quiz_abandons_session() {
        let mut app = app();
        app.open_selected_deck();
        app.start_quiz();

        app.leave_quiz();
        assert_eq!(app.state, AppState::Flashcards);
        assert_eq!(app.engine.status(), SessionStatus::NotStarted);
    }

    #[test]
    fn test_form_field_cycle() {
        let mut form = CardForm::default();
        assert_eq!(form.focused, FormField::Topic);
        form.push('X');
        form.focus_next();
        form.push('Y');
        form.backspace();
        form.push('Z');
        assert_eq!(form.topic, "X");
        assert_eq!(form.term, "Z");
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused, FormField::Topic);
    }
}

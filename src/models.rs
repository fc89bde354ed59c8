use std::fmt;

/// A term/definition/topic triple. Used both for studying and as quiz content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyCard {
    pub id: u32,
    pub term: String,
    pub definition: String,
    pub topic: String,
}

impl StudyCard {
    pub fn new(
        id: u32,
        term: impl Into<String>,
        definition: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
            topic: topic.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// 1-based, unique within one session.
    pub id: u32,
    pub card_id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub topic: String,
}

impl QuizQuestion {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::NotStarted => "not started",
            SessionStatus::InProgress => "in progress",
            SessionStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Outcome of one resolved question. `selected == None` means the countdown ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEvent {
    pub question_id: u32,
    pub question_index: usize,
    pub topic: String,
    pub difficulty: Difficulty,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}

impl AnswerEvent {
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Flashcards,
    AddCard,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

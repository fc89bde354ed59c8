use crate::deck::{Deck, TopicFilter};
use crate::models::StudyCard;

/// Cursor over the visible cards of a deck, one card face at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardBrowser {
    pub filter: TopicFilter,
    pub index: usize,
    pub showing_definition: bool,
}

impl FlashcardBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_cards(&self, deck: &Deck) -> Vec<StudyCard> {
        deck.filter(&self.filter)
    }

    pub fn current(&self, deck: &Deck) -> Option<StudyCard> {
        self.visible_cards(deck).get(self.index).cloned()
    }

    pub fn flip(&mut self) {
        self.showing_definition = !self.showing_definition;
    }

    pub fn next(&mut self, deck: &Deck) {
        let len = self.visible_cards(deck).len();
        self.showing_definition = false;
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, deck: &Deck) {
        let len = self.visible_cards(deck).len();
        self.showing_definition = false;
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn set_filter(&mut self, filter: TopicFilter) {
        self.filter = filter;
        self.index = 0;
        self.showing_definition = false;
    }

    /// Steps through "All Topics" followed by each deck topic, wrapping around.
    pub fn cycle_filter(&mut self, deck: &Deck) {
        let topics = deck.topics();
        let next = match &self.filter {
            TopicFilter::All => topics.first().cloned().map(TopicFilter::Topic),
            TopicFilter::Topic(current) => topics
                .iter()
                .position(|t| t == current)
                .and_then(|i| topics.get(i + 1))
                .cloned()
                .map(TopicFilter::Topic),
        };
        self.set_filter(next.unwrap_or(TopicFilter::All));
    }
}

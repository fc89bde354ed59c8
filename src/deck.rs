use crate::error::DeckError;
use crate::models::StudyCard;

pub const BUILTIN_DECK_NAME: &str = "Starter Deck";

/// Which cards of a deck are visible to the flashcard browser and the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(String),
}

impl TopicFilter {
    pub fn matches(&self, card: &StudyCard) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Topic(topic) => card.topic == *topic,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TopicFilter::All => "All Topics",
            TopicFilter::Topic(topic) => topic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    cards: Vec<StudyCard>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn from_cards(name: impl Into<String>, cards: Vec<StudyCard>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn builtin() -> Self {
        let cards = BUILTIN_CARDS
            .iter()
            .enumerate()
            .map(|(i, (term, definition, topic))| {
                StudyCard::new(i as u32 + 1, *term, *definition, *topic)
            })
            .collect();
        Self::from_cards(BUILTIN_DECK_NAME, cards)
    }

    pub fn cards(&self) -> &[StudyCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Adds a card. Every field is required; surrounding whitespace is trimmed.
    pub fn add_card(
        &mut self,
        term: &str,
        definition: &str,
        topic: &str,
    ) -> Result<&StudyCard, DeckError> {
        let topic = required("topic", topic)?;
        let term = required("term", term)?;
        let definition = required("definition", definition)?;

        let id = self.cards.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.cards.push(StudyCard::new(id, term, definition, topic));
        crate::logger::log(&format!("Added card {} to deck {}", id, self.name));
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Distinct topics in the order they first appear.
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for card in &self.cards {
            if !topics.contains(&card.topic) {
                topics.push(card.topic.clone());
            }
        }
        topics
    }

    pub fn filter(&self, filter: &TopicFilter) -> Vec<StudyCard> {
        self.cards
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DeckError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DeckError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

const BUILTIN_CARDS: &[(&str, &str, &str)] = &[
    (
        "CPU",
        "The brain of your computer. It processes all instructions and calculations, making your computer work.",
        "Computers",
    ),
    (
        "RAM",
        "Your computer's short-term memory. It temporarily stores data that your CPU needs to access quickly.",
        "Computers",
    ),
    (
        "HTTP",
        "The language of the web. It's how your browser communicates with websites to load pages and content.",
        "Computers",
    ),
    (
        "Mount Everest",
        "The world's highest peak at 29,029 feet. Located in the Himalayas between Nepal and China.",
        "Geography",
    ),
    (
        "Amazon River",
        "The world's largest river by water volume. Flows through South America and contains 20% of Earth's freshwater.",
        "Geography",
    ),
    (
        "Great Barrier Reef",
        "The world's largest living structure. A coral reef system off Australia's coast, visible from space.",
        "Geography",
    ),
    (
        "Democracy",
        "A system where power comes from the people. Citizens vote to choose their leaders and make decisions.",
        "Politics",
    ),
    (
        "Capitalism",
        "An economic system where private businesses own resources and compete in a free market.",
        "Capitalism",
    ),
    (
        "United Nations",
        "A global organization of 193 countries working together for peace, security, and international cooperation.",
        "Politics",
    ),
    (
        "Photosynthesis",
        "How plants make food. They use sunlight to convert water and carbon dioxide into energy and oxygen.",
        "Nature",
    ),
    (
        "Biodiversity",
        "The variety of life on Earth. Includes all plants, animals, and microorganisms in different ecosystems.",
        "Nature",
    ),
    (
        "Ecosystem",
        "A community of living things and their environment. Everything works together in a balanced system.",
        "Nature",
    ),
    (
        "Milky Way",
        "Our home galaxy. A spiral galaxy containing our solar system and billions of other stars.",
        "Space",
    ),
    (
        "Black Hole",
        "A space region with gravity so strong nothing can escape, not even light. Formed from collapsed stars.",
        "Space",
    ),
    (
        "Andromeda Galaxy",
        "Our nearest large galaxy neighbor. Will collide with the Milky Way in about 4.5 billion years.",
        "Space",
    ),
];

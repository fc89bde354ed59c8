use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::deck::Deck;
use crate::error::DeckError;
use crate::models::StudyCard;

pub const DEFAULT_DECK_DIR: &str = "flashcards";
pub const DEFAULT_TOPIC: &str = "General";

pub fn get_deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && (ext == "csv" || ext == "json")
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

#[derive(Debug, Deserialize)]
struct CardRecord {
    term: String,
    definition: String,
    #[serde(default)]
    topic: Option<String>,
}

/// Loads a deck from a `.json` array of cards or a `term,definition,topic` CSV file.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let content = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "deck".to_string());

    let records = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str::<Vec<CardRecord>>(&content).map_err(|source| DeckError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        parse_csv(&content)
    };

    let cards = records
        .into_iter()
        .filter(|r| !r.term.trim().is_empty() && !r.definition.trim().is_empty())
        .enumerate()
        .map(|(i, r)| {
            let topic = r
                .topic
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string());
            StudyCard::new(i as u32 + 1, r.term.trim(), r.definition.trim(), topic)
        })
        .collect::<Vec<_>>();

    crate::logger::log(&format!(
        "Loaded {} cards from {}",
        cards.len(),
        path.display()
    ));
    Ok(Deck::from_cards(name, cards))
}

fn parse_csv(content: &str) -> Vec<CardRecord> {
    content
        .lines()
        .map(parse_csv_line)
        .filter(|fields| fields.len() >= 2)
        .map(|mut fields| {
            let topic = if fields.len() > 2 {
                Some(fields.swap_remove(2))
            } else {
                None
            };
            let definition = fields.swap_remove(1);
            let term = fields.swap_remove(0);
            CardRecord {
                term,
                definition,
                topic,
            }
        })
        .collect()
}

/// Splits one CSV line. Quoted fields may contain commas; `""` inside quotes is a literal quote.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

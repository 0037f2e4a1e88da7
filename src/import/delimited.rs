//! Delimited text import for flashcard decks.
//! Reads two-column TSV or CSV files; the first two fields of every row become front and back.

use crate::error::AppError;
use crate::models::{Deck, Flashcard};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    /// Attempt order when detecting the delimiter of a file.
    pub const TRIAL_ORDER: [Delimiter; 2] = [Delimiter::Tab, Delimiter::Comma];

    fn byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }
}

/// Loads a deck from the file at `path`.
/// Only an unreadable file is an error; a file without usable rows gives an empty deck.
pub fn load_deck(path: &Path) -> Result<Deck, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Untitled");

    let deck = parse_deck(name, &contents);
    if deck.is_empty() {
        tracing::warn!("No flashcards found in '{}'", path.display());
    } else if let Some(delimiter) = deck.delimiter {
        tracing::info!(
            "Read {} flashcards from '{}' ({:?} separated)",
            deck.len(),
            path.display(),
            delimiter
        );
    }
    Ok(deck)
}

/// Parses file contents, trying tab first and comma second.
pub fn parse_deck(name: &str, contents: &str) -> Deck {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    for delimiter in Delimiter::TRIAL_ORDER {
        let flashcards = parse_rows(contents, delimiter);
        if !flashcards.is_empty() {
            return Deck {
                name: name.to_string(),
                flashcards,
                delimiter: Some(delimiter),
            };
        }
        tracing::debug!("No usable rows with {:?} delimiter", delimiter);
    }

    Deck::new(name, Vec::new())
}

fn parse_rows(contents: &str, delimiter: Delimiter) -> Vec<Flashcard> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        // Tab-separated decks are split raw; quotes are part of the text
        .quoting(delimiter == Delimiter::Comma)
        .from_reader(contents.as_bytes());

    let mut flashcards = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Stopping {:?} parse: {}", delimiter, e);
                break;
            }
        };
        if let (Some(front), Some(back)) = (record.get(0), record.get(1)) {
            flashcards.push(Flashcard::new(front, back));
        }
    }
    flashcards
}

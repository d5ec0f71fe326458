pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod grid;
pub mod puzzle;

pub use config::Config;
pub use error::{FinderError, Result};
pub use finder::{find, BoundsCheck, Direction, WordFinder};
pub use grid::{Coordinate, Grid};
pub use puzzle::Puzzle;

use serde::{Deserialize, Serialize};

/// A word to look for and, once searched, where it was found.
///
/// `location` is `None` both before a search and when the word is not in the
/// grid; a found word always has one coordinate per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub location: Option<Vec<Coordinate>>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.location.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReport {
    pub found: usize,
    pub missing: usize,
    pub words: Vec<Word>,
}

impl SearchReport {
    /// Search every word in turn with `finder`.
    pub fn run<I, S>(finder: &WordFinder<'_>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = Self::default();

        for text in words {
            let mut word = Word::new(text);
            finder.find_word(&mut word)?;
            if word.is_found() {
                report.found += 1;
            } else {
                report.missing += 1;
            }
            report.words.push(word);
        }

        Ok(report)
    }
}

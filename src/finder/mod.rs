pub mod direction;

use crate::error::{FinderError, Result};
use crate::grid::{Coordinate, Grid};
use crate::Word;
pub use direction::{BoundsCheck, Direction};

/// Locate `text` in `grid`.
///
/// Cells are scanned in row-major order and, at every cell holding the first
/// character, directions are tried in [`Direction::PRIORITY`] order. The first
/// complete match wins. `Ok(None)` means the word is not in the grid.
pub fn find(grid: &Grid, text: &str, bounds: BoundsCheck) -> Result<Option<Vec<Coordinate>>> {
    let search = Search::new(grid, text, bounds)?;
    Ok(search.run())
}

/// Reusable finder bound to one grid at a time.
///
/// Searches take `&self` and keep their state in a per-call context, so a
/// single finder can serve several callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFinder<'g> {
    grid: Option<&'g Grid>,
    bounds: BoundsCheck,
}

impl<'g> WordFinder<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: BoundsCheck) -> Self {
        Self { grid: None, bounds }
    }

    /// Replace the grid used by later searches.
    pub fn load_grid(&mut self, grid: &'g Grid) {
        self.grid = Some(grid);
    }

    pub fn bounds(&self) -> BoundsCheck {
        self.bounds
    }

    /// Search for `word.text` and store the outcome in `word.location`.
    /// On error the word is left untouched.
    pub fn find_word(&self, word: &mut Word) -> Result<()> {
        word.location = self.locate(&word.text)?;
        Ok(())
    }

    pub fn locate(&self, text: &str) -> Result<Option<Vec<Coordinate>>> {
        let grid = self.grid.ok_or(FinderError::NoGridLoaded)?;
        find(grid, text, self.bounds)
    }
}

struct Search<'a> {
    grid: &'a Grid,
    word: Vec<char>,
    bounds: BoundsCheck,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, text: &str, bounds: BoundsCheck) -> Result<Self> {
        let word: Vec<char> = text.chars().collect();
        if word.is_empty() {
            return Err(FinderError::EmptyWord);
        }
        Ok(Self { grid, word, bounds })
    }

    fn run(&self) -> Option<Vec<Coordinate>> {
        let first = self.word[0];

        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let start = Coordinate::new(row, column);
                if self.grid.get(start) != Some(first) {
                    continue;
                }

                for direction in Direction::PRIORITY {
                    if !direction.fits(start, self.word.len(), self.grid, self.bounds) {
                        log::trace!("{} from {} skipped by bounds check", direction, start);
                        continue;
                    }
                    if let Some(path) = self.walk(start, direction) {
                        log::debug!(
                            "found {:?} at {} heading {}",
                            self.word.iter().collect::<String>(),
                            start,
                            direction
                        );
                        return Some(path);
                    }
                }
            }
        }

        None
    }

    /// Compare the word along `direction`. Leaving the grid counts as a mismatch.
    fn walk(&self, start: Coordinate, direction: Direction) -> Option<Vec<Coordinate>> {
        let mut path = Vec::with_capacity(self.word.len());

        for (i, &expected) in self.word.iter().enumerate() {
            let at = direction.step(start, i)?;
            if self.grid.get(at)? != expected {
                return None;
            }
            path.push(at);
        }

        Some(path)
    }
}

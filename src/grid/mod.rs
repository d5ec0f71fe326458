use crate::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (row, column) cell address, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Rectangular character grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    columns: usize,
}

impl Grid {
    /// Build a grid from rows. Every row must have the same length as the first.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(FinderError::RaggedGrid {
                row,
                expected: columns,
                found,
            });
        }

        Ok(Self {
            cells: rows,
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns == 0
    }

    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<char> {
        self.cells.get(at.row)?.get(at.column).copied()
    }

    /// Same grid with every cell upper-cased. Cells whose upper-case form is
    /// more than one character are left alone.
    pub fn to_uppercase(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().map(|&c| upper_char(c)).collect())
            .collect();

        Self {
            cells,
            columns: self.columns,
        }
    }
}

/// Upper-case a single cell, leaving it alone if the result is not one character.
pub fn upper_char(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Cells of one text row; whitespace and commas between cells are dropped.
pub fn parse_row(line: &str) -> Vec<char> {
    line.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

impl FromStr for Grid {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_row)
            .collect();

        Self::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

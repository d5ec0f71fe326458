use crate::error::FinderError;
use crate::grid::{self, Grid};
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleFormat {
    /// Word list on the first line, then one comma-separated row per line.
    Csv,
    /// Grid rows only.
    Plain,
}

impl PuzzleFormat {
    /// Detect puzzle format from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => PuzzleFormat::Csv,
            _ => PuzzleFormat::Plain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub words: Vec<String>,
    pub grid: Grid,
}

/// Read and parse a puzzle file
pub fn load(path: &Path) -> Result<Puzzle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle: {}", path.display()))?;

    parse(&content, PuzzleFormat::from_path(path))
        .with_context(|| format!("Failed to parse puzzle: {}", path.display()))
}

pub fn parse(content: &str, format: PuzzleFormat) -> Result<Puzzle> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let words = match format {
        PuzzleFormat::Csv => match lines.next() {
            Some((_, header)) => split_csv(header)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
            None => bail!("Puzzle is empty"),
        },
        PuzzleFormat::Plain => Vec::new(),
    };

    let mut rows = Vec::new();
    let mut line_nums = Vec::new();
    for (line_num, line) in lines {
        let row = match format {
            PuzzleFormat::Csv => parse_csv_row(line, line_num)?,
            PuzzleFormat::Plain => grid::parse_row(line),
        };
        rows.push(row);
        line_nums.push(line_num);
    }

    if rows.is_empty() {
        bail!("Puzzle has no grid rows");
    }

    let grid = Grid::new(rows).map_err(|e| match e {
        FinderError::RaggedGrid {
            row,
            expected,
            found,
        } => anyhow!(
            "Line {}: row has {} cells, expected {}",
            line_nums.get(row).copied().unwrap_or(row + 1),
            found,
            expected
        ),
        other => other.into(),
    })?;

    Ok(Puzzle { words, grid })
}

fn split_csv(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}

fn parse_csv_row(line: &str, line_num: usize) -> Result<Vec<char>> {
    split_csv(line)
        .map(|cell| {
            let mut chars = cell.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(anyhow!(
                    "Line {}: cell {:?} is not a single character",
                    line_num,
                    cell
                )),
            }
        })
        .collect()
}

use crate::grid::{Coordinate, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a direction decides up front whether the word can fit from a start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsCheck {
    /// Down is checked against the row count, forward against the column count.
    #[default]
    Strict,
    /// Down is checked against the column count and forward against the row
    /// count. Matches older solvers on square grids; on other shapes a walk can
    /// leave the grid, which counts as a mismatch.
    Legacy,
}

impl FromStr for BoundsCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(BoundsCheck::Strict),
            "legacy" => Ok(BoundsCheck::Legacy),
            _ => Err(format!("Unknown bounds check: {}", s)),
        }
    }
}

impl fmt::Display for BoundsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsCheck::Strict => write!(f, "strict"),
            BoundsCheck::Legacy => write!(f, "legacy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Backward,
    Forward,
    DownForward,
    UpBackward,
    DownBackward,
    UpForward,
}

impl Direction {
    /// Search order tried at every start cell. The first direction that matches wins.
    pub const PRIORITY: [Direction; 8] = [
        Direction::Down,
        Direction::Up,
        Direction::Backward,
        Direction::Forward,
        Direction::DownForward,
        Direction::UpBackward,
        Direction::DownBackward,
        Direction::UpForward,
    ];

    /// Unit step as (d_row, d_column).
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Backward => (0, -1),
            Direction::Forward => (0, 1),
            Direction::DownForward => (1, 1),
            Direction::UpBackward => (-1, -1),
            Direction::DownBackward => (1, -1),
            Direction::UpForward => (-1, 1),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_delta(d_row: isize, d_column: isize) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|d| d.delta() == (d_row, d_column))
    }

    /// Bounds pre-check: can a word of `len` characters starting at `start`
    /// stay inside the grid along this direction? Diagonals fail if either
    /// axis fails.
    pub fn fits(self, start: Coordinate, len: usize, grid: &Grid, bounds: BoundsCheck) -> bool {
        let (d_row, d_column) = self.delta();
        let (row_limit, column_limit) = match bounds {
            BoundsCheck::Strict => (grid.rows(), grid.columns()),
            BoundsCheck::Legacy => (grid.columns(), grid.rows()),
        };

        let row_ok = match d_row {
            1 => start.row + len <= row_limit,
            -1 => start.row + 1 >= len,
            _ => true,
        };
        let column_ok = match d_column {
            1 => start.column + len <= column_limit,
            -1 => start.column + 1 >= len,
            _ => true,
        };

        row_ok && column_ok
    }

    /// Cell reached after `steps` unit steps from `start`, or `None` when the
    /// walk would go above or left of the grid.
    #[inline]
    pub fn step(self, start: Coordinate, steps: usize) -> Option<Coordinate> {
        let (d_row, d_column) = self.delta();
        let row = offset(start.row, d_row, steps)?;
        let column = offset(start.column, d_column, steps)?;
        Some(Coordinate::new(row, column))
    }
}

fn offset(base: usize, delta: isize, steps: usize) -> Option<usize> {
    match delta {
        1 => base.checked_add(steps),
        -1 => base.checked_sub(steps),
        _ => Some(base),
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Backward => "backward",
            Direction::Forward => "forward",
            Direction::DownForward => "down-forward",
            Direction::UpBackward => "up-backward",
            Direction::DownBackward => "down-backward",
            Direction::UpForward => "up-forward",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(vec![vec!['X'; columns]; rows]).unwrap()
    }

    #[test]
    fn test_priority_deltas_are_distinct_units() {
        let mut seen = std::collections::HashSet::new();
        for d in Direction::PRIORITY {
            let (dr, dc) = d.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!((dr, dc) != (0, 0));
            assert!(seen.insert((dr, dc)));
            assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_strict_fits_edges() {
        let g = grid(3, 5);
        let origin = Coordinate::new(0, 0);

        assert!(Direction::Down.fits(origin, 3, &g, BoundsCheck::Strict));
        assert!(!Direction::Down.fits(origin, 4, &g, BoundsCheck::Strict));
        assert!(Direction::Forward.fits(origin, 5, &g, BoundsCheck::Strict));
        assert!(!Direction::Forward.fits(origin, 6, &g, BoundsCheck::Strict));
        assert!(!Direction::Up.fits(origin, 2, &g, BoundsCheck::Strict));
        assert!(Direction::Up.fits(origin, 1, &g, BoundsCheck::Strict));
        assert!(Direction::Backward.fits(Coordinate::new(0, 4), 5, &g, BoundsCheck::Strict));
        assert!(!Direction::Backward.fits(Coordinate::new(0, 3), 5, &g, BoundsCheck::Strict));
    }

    #[test]
    fn test_diagonal_needs_both_axes() {
        let g = grid(3, 5);
        // Fits forward (5 columns) but not down (3 rows).
        assert!(!Direction::DownForward.fits(Coordinate::new(0, 0), 4, &g, BoundsCheck::Strict));
        assert!(Direction::DownForward.fits(Coordinate::new(0, 0), 3, &g, BoundsCheck::Strict));
        assert!(Direction::UpBackward.fits(Coordinate::new(2, 2), 3, &g, BoundsCheck::Strict));
        assert!(!Direction::UpBackward.fits(Coordinate::new(2, 1), 3, &g, BoundsCheck::Strict));
    }

    #[test]
    fn test_legacy_swaps_limits() {
        let g = grid(3, 5);
        let origin = Coordinate::new(0, 0);

        // Down is measured against 5 columns, forward against 3 rows.
        assert!(Direction::Down.fits(origin, 5, &g, BoundsCheck::Legacy));
        assert!(!Direction::Forward.fits(origin, 4, &g, BoundsCheck::Legacy));
        assert!(Direction::Forward.fits(origin, 3, &g, BoundsCheck::Legacy));
    }

    #[test]
    fn test_step() {
        let start = Coordinate::new(2, 2);
        assert_eq!(Direction::UpBackward.step(start, 2), Some(Coordinate::new(0, 0)));
        assert_eq!(Direction::UpBackward.step(start, 3), None);
        assert_eq!(Direction::DownBackward.step(start, 1), Some(Coordinate::new(3, 1)));
        assert_eq!(Direction::Forward.step(start, 0), Some(start));
    }

    #[test]
    fn test_bounds_check_from_str() {
        assert_eq!("Legacy".parse::<BoundsCheck>(), Ok(BoundsCheck::Legacy));
        assert_eq!("strict".parse::<BoundsCheck>(), Ok(BoundsCheck::Strict));
        assert!("loose".parse::<BoundsCheck>().is_err());
        assert_eq!(BoundsCheck::default(), BoundsCheck::Strict);
    }
}

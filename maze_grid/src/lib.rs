//! # maze_grid
//!
//! A fixed 2D wall/path grid and the navigation state machine that walks
//! it one cell at a time.
//!
//! The grid is immutable after construction. All movement goes through
//! [`Navigator::apply`], which checks bounds and walls and silently
//! rejects anything else — no event distinguishes "hit wall" from "hit
//! grid edge"; the position simply stays put.
//!
//! ## Quick start
//!
//! ```rust
//! use maze_grid::{Maze, Navigator, Command, Pos};
//!
//! let maze = Maze::default_layout();
//! let mut nav = Navigator::new(maze, Pos::new(0, 0)).unwrap();
//!
//! nav.apply(Command::Right);   // rejected: (1,0) is a wall
//! nav.apply(Command::Down);    // accepted
//! assert_eq!(nav.position(), Pos::new(0, 1));
//! ```

use thiserror::Error;

pub mod navigator;

pub use navigator::{Command, Navigator};

// ════════════════════════════════════════════════════════════════════════════
// Cell / Pos
// ════════════════════════════════════════════════════════════════════════════

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// A 0-indexed grid position, top-left origin (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

/// Construction-time invariant violations. The only fatal path in the
/// core — everything after construction is a silent no-op at worst.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    #[error("start cell ({x}, {y}) is outside the {width}x{height} grid")]
    StartOutOfBounds { x: usize, y: usize, width: usize, height: usize },

    #[error("start cell ({x}, {y}) is a wall")]
    StartOnWall { x: usize, y: usize },
}

// ════════════════════════════════════════════════════════════════════════════
// Maze
// ════════════════════════════════════════════════════════════════════════════

/// The 10×10 layout shipped with the original game. `0` = path, `1` = wall,
/// rows top-to-bottom, columns left-to-right.
pub const DEFAULT_ROWS: [[u8; 10]; 10] = [
    [0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 1, 0, 1, 1, 0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 1, 0],
    [1, 1, 0, 1, 0, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 0, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];

/// An immutable wall/path grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Build a maze from byte rows: `0` = open, anything else = wall.
    /// Rows are top-to-bottom. Fails on an empty grid or ragged rows.
    pub fn parse<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let first = rows.first().ok_or(MazeError::Empty)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(MazeError::RaggedRow { row, got: r.len(), expected: width });
            }
            cells.extend(r.iter().map(|&b| if b == 0 { Cell::Open } else { Cell::Wall }));
        }

        Ok(Maze { cells, width, height: rows.len() })
    }

    /// The original 10×10 layout ([`DEFAULT_ROWS`]).
    pub fn default_layout() -> Self {
        // DEFAULT_ROWS is rectangular, parse cannot fail on it.
        Maze::parse(&DEFAULT_ROWS).unwrap()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at `(x, y)`. Out-of-bounds lookups count as `Wall` so callers
    /// never step outside the grid through this accessor.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x]
        } else {
            Cell::Wall
        }
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) == Cell::Open
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_layout() {
        let m = Maze::default_layout();
        assert_eq!(m.width(), 10);
        assert_eq!(m.height(), 10);
        assert_eq!(m.cell(0, 0), Cell::Open);
        assert_eq!(m.cell(1, 0), Cell::Wall);
        assert_eq!(m.cell(9, 9), Cell::Open);
    }

    #[test]
    fn parse_rejects_empty() {
        let rows: [[u8; 3]; 0] = [];
        assert_eq!(Maze::parse(&rows), Err(MazeError::Empty));

        let rows: [&[u8]; 1] = [&[]];
        assert_eq!(Maze::parse(&rows), Err(MazeError::Empty));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let rows: [&[u8]; 2] = [&[0, 0, 0], &[0, 0]];
        assert_eq!(
            Maze::parse(&rows),
            Err(MazeError::RaggedRow { row: 1, got: 2, expected: 3 })
        );
    }

    #[test]
    fn nonzero_bytes_are_walls() {
        let rows: [&[u8]; 1] = [&[0, 1, 2, 9]];
        let m = Maze::parse(&rows).unwrap();
        assert_eq!(m.cell(0, 0), Cell::Open);
        assert_eq!(m.cell(1, 0), Cell::Wall);
        assert_eq!(m.cell(2, 0), Cell::Wall);
        assert_eq!(m.cell(3, 0), Cell::Wall);
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let m = Maze::default_layout();
        assert_eq!(m.cell(10, 0), Cell::Wall);
        assert_eq!(m.cell(0, 10), Cell::Wall);
        assert!(!m.in_bounds(10, 10));
    }
}

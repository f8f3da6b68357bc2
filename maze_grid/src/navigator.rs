//! The navigation state machine: one validated position walking the grid.
//!
//! The position itself is the whole state — there is no "in transit"
//! mode and no terminal cell. Invalid moves (wall or grid edge) are
//! rejected silently; a counter records them for observability but the
//! default behavior is unchanged.

use crate::{Maze, MazeError, Pos};

// ════════════════════════════════════════════════════════════════════════════
// Command
// ════════════════════════════════════════════════════════════════════════════

/// The discrete navigation action for one processed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Command {
    /// Unit step in a top-left-origin grid; `None` has no step.
    pub fn delta(self) -> Option<(i64, i64)> {
        match self {
            Command::Up => Some((0, -1)),
            Command::Down => Some((0, 1)),
            Command::Left => Some((-1, 0)),
            Command::Right => Some((1, 0)),
            Command::None => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Navigator
// ════════════════════════════════════════════════════════════════════════════

/// Owns the maze and the current position; the only writer of either.
#[derive(Debug)]
pub struct Navigator {
    maze: Maze,
    pos: Pos,
    rejected: u64,
}

impl Navigator {
    /// Fails fast if `start` is outside the grid or on a wall — this must
    /// be caught before any frame is processed.
    pub fn new(maze: Maze, start: Pos) -> Result<Self, MazeError> {
        if !maze.in_bounds(start.x, start.y) {
            return Err(MazeError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width: maze.width(),
                height: maze.height(),
            });
        }
        if !maze.is_open(start.x, start.y) {
            return Err(MazeError::StartOnWall { x: start.x, y: start.y });
        }
        Ok(Navigator { maze, pos: start, rejected: 0 })
    }

    /// Apply one command. Returns `true` iff the position moved.
    ///
    /// A move is taken only when the candidate cell is inside the grid
    /// AND open; otherwise the command is dropped with no other effect.
    /// `Command::None` is always a no-op and is not counted as rejected.
    pub fn apply(&mut self, cmd: Command) -> bool {
        let (dx, dy) = match cmd.delta() {
            Some(d) => d,
            None => return false,
        };

        let cx = self.pos.x as i64 + dx;
        let cy = self.pos.y as i64 + dy;

        // The grid-edge check fires independently of the wall check: a
        // negative candidate never reaches the cell lookup.
        if cx < 0 || cy < 0 {
            self.rejected += 1;
            return false;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        if !self.maze.in_bounds(cx, cy) || !self.maze.is_open(cx, cy) {
            self.rejected += 1;
            return false;
        }

        self.pos = Pos::new(cx, cy);
        true
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// How many non-`None` commands have been rejected so far.
    pub fn rejected_moves(&self) -> u64 {
        self.rejected
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_at(x: usize, y: usize) -> Navigator {
        Navigator::new(Maze::default_layout(), Pos::new(x, y)).unwrap()
    }

    // 3×3 all-open grid for pure geometry tests.
    fn open_nav() -> Navigator {
        let rows: [[u8; 3]; 3] = [[0, 0, 0], [0, 0, 0], [0, 0, 0]];
        Navigator::new(Maze::parse(&rows).unwrap(), Pos::new(1, 1)).unwrap()
    }

    #[test]
    fn moves_are_exactly_one_cell() {
        let mut nav = open_nav();
        assert!(nav.apply(Command::Up));
        assert_eq!(nav.position(), Pos::new(1, 0));
        assert!(nav.apply(Command::Down));
        assert!(nav.apply(Command::Down));
        assert_eq!(nav.position(), Pos::new(1, 2));
        assert!(nav.apply(Command::Left));
        assert_eq!(nav.position(), Pos::new(0, 2));
        assert!(nav.apply(Command::Right));
        assert_eq!(nav.position(), Pos::new(1, 2));
    }

    #[test]
    fn none_is_idempotent() {
        let mut nav = open_nav();
        for _ in 0..100 {
            assert!(!nav.apply(Command::None));
        }
        assert_eq!(nav.position(), Pos::new(1, 1));
        assert_eq!(nav.rejected_moves(), 0);
    }

    #[test]
    fn origin_rejects_up_and_left_regardless_of_maze() {
        // All-open grid: only the edge check can fire.
        let rows: [[u8; 2]; 2] = [[0, 0], [0, 0]];
        let mut nav = Navigator::new(Maze::parse(&rows).unwrap(), Pos::new(0, 0)).unwrap();
        assert!(!nav.apply(Command::Up));
        assert!(!nav.apply(Command::Left));
        assert_eq!(nav.position(), Pos::new(0, 0));
        assert_eq!(nav.rejected_moves(), 2);
    }

    #[test]
    fn far_edges_reject_down_and_right() {
        let rows: [[u8; 2]; 2] = [[0, 0], [0, 0]];
        let mut nav = Navigator::new(Maze::parse(&rows).unwrap(), Pos::new(1, 1)).unwrap();
        assert!(!nav.apply(Command::Down));
        assert!(!nav.apply(Command::Right));
        assert_eq!(nav.position(), Pos::new(1, 1));
    }

    #[test]
    fn wall_rejects_silently() {
        // Default layout: (1,0) is a wall.
        let mut nav = nav_at(0, 0);
        assert!(!nav.apply(Command::Right));
        assert_eq!(nav.position(), Pos::new(0, 0));
        assert_eq!(nav.rejected_moves(), 1);
    }

    #[test]
    fn original_opening_moves() {
        // From (0,0): Right is blocked by the wall at (1,0), Down is open.
        let mut nav = nav_at(0, 0);
        assert!(!nav.apply(Command::Right));
        assert_eq!(nav.position(), Pos::new(0, 0));
        assert!(nav.apply(Command::Down));
        assert_eq!(nav.position(), Pos::new(0, 1));
    }

    #[test]
    fn start_on_wall_fails_construction() {
        let err = Navigator::new(Maze::default_layout(), Pos::new(1, 0)).unwrap_err();
        assert_eq!(err, MazeError::StartOnWall { x: 1, y: 0 });
    }

    #[test]
    fn start_out_of_bounds_fails_construction() {
        let err = Navigator::new(Maze::default_layout(), Pos::new(10, 0)).unwrap_err();
        assert!(matches!(err, MazeError::StartOutOfBounds { .. }));
    }

    #[test]
    fn rejected_counter_accumulates() {
        let mut nav = nav_at(0, 0);
        nav.apply(Command::Up);    // edge
        nav.apply(Command::Left);  // edge
        nav.apply(Command::Right); // wall
        nav.apply(Command::None);  // no-op, not counted
        assert_eq!(nav.rejected_moves(), 3);
    }

    #[test]
    fn walk_a_known_corridor() {
        // Column 0 of the default layout is open for rows 0..=2.
        let mut nav = nav_at(0, 0);
        assert!(nav.apply(Command::Down));
        assert!(nav.apply(Command::Down));
        assert_eq!(nav.position(), Pos::new(0, 2));
        // (0,3) is a wall.
        assert!(!nav.apply(Command::Down));
        assert_eq!(nav.position(), Pos::new(0, 2));
    }
}

//! Fixed finger-count → command lookup.
//!
//! `{1: Up, 2: Right, 3: Down, 4: Left}`, everything else `None` — a
//! closed fist and an open palm both mean "hold still".

use maze_grid::Command;

use crate::classify::FingerState;

/// Map an extended-finger count to a command.
pub fn command_for_count(count: usize) -> Command {
    match count {
        1 => Command::Up,
        2 => Command::Right,
        3 => Command::Down,
        4 => Command::Left,
        _ => Command::None,
    }
}

/// Map a classified finger state to a command.
pub fn command_for(state: FingerState) -> Command {
    command_for_count(state.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::HandLandmarks;
    use crate::classify::fingers_up;

    #[test]
    fn table_is_exact() {
        assert_eq!(command_for_count(0), Command::None);
        assert_eq!(command_for_count(1), Command::Up);
        assert_eq!(command_for_count(2), Command::Right);
        assert_eq!(command_for_count(3), Command::Down);
        assert_eq!(command_for_count(4), Command::Left);
        assert_eq!(command_for_count(5), Command::None);
    }

    #[test]
    fn counts_above_five_are_none() {
        // Cannot happen from a FingerState, but the table's default holds.
        assert_eq!(command_for_count(6), Command::None);
        assert_eq!(command_for_count(usize::MAX), Command::None);
    }

    #[test]
    fn full_pipeline_per_count() {
        let expect = [
            Command::None,
            Command::Up,
            Command::Right,
            Command::Down,
            Command::Left,
            Command::None,
        ];
        for (count, &cmd) in expect.iter().enumerate() {
            let hand = HandLandmarks::synthetic_count(count);
            assert_eq!(command_for(fingers_up(&hand)), cmd, "count {}", count);
        }
    }
}

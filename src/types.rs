//! shared types for the snake engine
use serde::Serialize;
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    /// row delta, positive is downward
    pub row: i64,
    /// column delta, positive is rightward
    pub col: i64,
}

/// A row/column coordinate. Row 0 is the top row and rows grow downward,
/// matching the row-major cell numbering of the board. Signed so that
/// coordinates one step off the board are representable during bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// row index
    pub row: i32,
    /// column index
    pub col: i32,
}

impl Position {
    /// adds a vector to this position
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            row: (self.row as i64 + v.row) as i32,
            col: (self.col as i64 + v.col) as i32,
        }
    }

    /// subtracts a vector from this position
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            row: (self.row as i64 - v.row) as i32,
            col: (self.col as i64 - v.col) as i32,
        }
    }
}

/// Represents a heading for the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Right => write!(f, "RIGHT"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Left => write!(f, "LEFT"),
        }
    }
}

impl Direction {
    /// convert this direction to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Up => Vector { row: -1, col: 0 },
            Direction::Right => Vector { row: 0, col: 1 },
            Direction::Down => Vector { row: 1, col: 0 },
            Direction::Left => Vector { row: 0, col: -1 },
        }
    }

    /// returns the direction that would undo this one. Up is opposite to Down,
    /// Left is opposite to Right
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// returns a vec of all directions
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }

    /// maps a keyboard key name to a direction. Only the four arrow keys map
    /// to anything; every other key is not a direction change and yields None
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }

    /// maps a wire direction name ("UP", "RIGHT", "DOWN", "LEFT") to a
    /// direction, yielding None for anything unrecognized
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "UP" => Some(Direction::Up),
            "RIGHT" => Some(Direction::Right),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            _ => None,
        }
    }

    /// the direction travelled stepping from one position to an adjacent one.
    /// None if the positions are not exactly one orthogonal step apart
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        match (to.row - from.row, to.col - from.col) {
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Whether a game is still accepting ticks. `GameOver` is terminal: there are
/// no transitions out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    #[allow(missing_docs)]
    Running,
    #[allow(missing_docs)]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_vector_round_trip() {
        let pos = Position { row: 3, col: 3 };
        for dir in Direction::all() {
            let stepped = pos.add_vec(dir.to_vector());
            assert_eq!(stepped.sub_vec(dir.to_vector()), pos);
            assert_eq!(Direction::between(pos, stepped), Some(dir));
        }
    }

    #[test]
    fn test_from_key_maps_arrows_only() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("w"), None);
        assert_eq!(Direction::from_key("Enter"), None);
        assert_eq!(Direction::from_key(""), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("LEFT"), Some(Direction::Left));
        assert_eq!(Direction::from_name("up"), None);
        assert_eq!(Direction::from_name("NORTH"), None);
    }

    #[test]
    fn test_between_rejects_non_adjacent() {
        let pos = Position { row: 3, col: 3 };
        assert_eq!(Direction::between(pos, pos), None);
        assert_eq!(Direction::between(pos, Position { row: 4, col: 4 }), None);
        assert_eq!(Direction::between(pos, Position { row: 3, col: 5 }), None);
    }

    #[test]
    fn test_direction_serializes_as_wire_name() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"UP\"");
    }
}

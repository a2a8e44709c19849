#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! The movement-and-rules engine of a grid based snake game.
//! The engine owns the board, the snake's body, direction handling, food
//! placement and consumption, growth, collision detection and the rare
//! reverse-direction food effect; it has no opinion about rendering or input
//! devices. A driver calls [`GameEngine::tick`] on whatever cadence it likes
//! and [`GameEngine::set_direction`] whenever input arrives, then re-renders
//! from the returned [`Snapshot`].
//!
//! ```
//! use gridsnake::{Direction, GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::with_seed(10, 10, 1).unwrap();
//! engine.set_direction(Direction::Down);
//! let snapshot = engine.tick();
//! assert_eq!(snapshot.status, GameStatus::Running);
//! assert!(snapshot.occupied_cells.contains(&snapshot.head_cell));
//! ```

pub mod board;
pub mod engine;
pub mod food;
pub mod snake;
pub mod types;

pub use board::{Board, CellId};
pub use engine::{GameEngine, Snapshot};
pub use food::{Food, REVERSAL_CHANCE};
pub use snake::SnakeBody;
pub use types::{Direction, GameStatus, Position, Vector};

//! the tick state machine that drives a single game
use crate::board::{Board, CellId};
use crate::food::{place_food, Food};
use crate::snake::SnakeBody;
use crate::types::{Direction, GameStatus};
use fxhash::FxHashSet;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Immutable view of a game, emitted after every tick. Everything the
/// presentation layer renders comes from here; membership tests run against
/// `occupied_cells`, which is recomputed from the body each tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// board height
    pub rows: u8,
    /// board width
    pub cols: u8,
    /// every cell the snake occupies
    pub occupied_cells: FxHashSet<CellId>,
    /// the cell the head occupies
    pub head_cell: CellId,
    /// where the food is. None only when no free cell was left for it
    pub food_cell: Option<CellId>,
    /// food eaten so far this game
    pub score: u32,
    /// whether the game still accepts ticks
    pub status: GameStatus,
}

/// One running game. Owns the board, the body, the heading and the food
/// exclusively; the driver serializes `tick` and `set_direction` calls and
/// otherwise the engine is passive.
///
/// Direction changes are buffered and take effect at the start of the next
/// tick, latest request wins.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    body: SnakeBody,
    direction: Direction,
    next_direction: Direction,
    food: Option<Food>,
    score: u32,
    status: GameStatus,
    rng: SmallRng,
}

impl GameEngine {
    /// starts a new game on a `rows x cols` board, seeding the food RNG from
    /// entropy. The snake starts as a single segment about a third of the way
    /// into each axis, heading right
    pub fn new(rows: u8, cols: u8) -> Result<Self, Box<dyn Error>> {
        Self::with_rng(rows, cols, SmallRng::from_entropy())
    }

    /// starts a new game with a fixed RNG seed, so food placement and the
    /// reversal coin replay identically. Meant for tests and replays
    pub fn with_seed(rows: u8, cols: u8, seed: u64) -> Result<Self, Box<dyn Error>> {
        Self::with_rng(rows, cols, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rows: u8, cols: u8, mut rng: SmallRng) -> Result<Self, Box<dyn Error>> {
        let board = Board::new(rows, cols)?;
        let start = board
            .cell_at(board.starting_position())
            .expect("the starting position is on the board");
        let body = SnakeBody::new(&board, start);
        // a 1x1 board has no free cell for food; the game still starts and
        // ends on the first wall hit instead
        let food = place_food(&board, &body, &mut rng);

        Ok(GameEngine {
            board,
            body,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food,
            score: 0,
            status: GameStatus::Running,
            rng,
        })
    }

    /// the board this game is played on
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// the direction the snake travelled on the most recent tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// requests a heading change for the next tick. The request is swallowed
    /// when it is the exact opposite of the current heading and the body is
    /// longer than one segment, since that would fold the snake into its own
    /// neck. Repeating the current heading is a no-op
    pub fn set_direction(&mut self, candidate: Direction) {
        if self.body.len() > 1 && candidate == self.direction.opposite() {
            trace!(%candidate, "ignoring reversal into the neck");
            return;
        }
        self.next_direction = candidate;
    }

    /// requests a heading change by its wire name ("UP", "RIGHT", "DOWN",
    /// "LEFT"). Unrecognized names are swallowed
    pub fn set_direction_by_name(&mut self, name: &str) {
        if let Some(direction) = Direction::from_name(name) {
            self.set_direction(direction);
        }
    }

    /// advances the game by one discrete step and returns the new snapshot.
    /// Once the game is over this is a no-op that keeps returning the
    /// terminal snapshot.
    ///
    /// A tick either commits fully or, when the move runs off the board or
    /// into the body, flips to `GameOver` with the body untouched
    #[instrument(level = "trace", skip_all)]
    pub fn tick(&mut self) -> Snapshot {
        if self.status == GameStatus::GameOver {
            return self.snapshot();
        }

        self.direction = self.next_direction;
        let next = self
            .body
            .head_position(&self.board)
            .add_vec(self.direction.to_vector());

        let next_cell = match self.board.cell_at(next) {
            Some(cell) => cell,
            None => {
                debug!(row = next.row, col = next.col, "head ran off the board");
                self.status = GameStatus::GameOver;
                return self.snapshot();
            }
        };
        if self.body.occupies(next_cell) {
            debug!(cell = next_cell.0, "head ran into the body");
            self.status = GameStatus::GameOver;
            return self.snapshot();
        }

        self.body.advance_head(next_cell);
        let _freed = self.body.retract_tail();

        if let Some(eaten) = self.food.filter(|f| f.cell == next_cell) {
            self.score += 1;
            // growth is best effort; the edge policy in grow_tail may skip it
            let _grown = self.body.grow_tail(self.direction, &self.board);
            if eaten.reverses_direction {
                if let Some(direction) = self.body.reverse(&self.board) {
                    self.direction = direction;
                    self.next_direction = direction;
                }
            }
            debug!(score = self.score, reversed = eaten.reverses_direction, "food consumed");

            self.food = place_food(&self.board, &self.body, &mut self.rng);
            if self.food.is_none() {
                // board full: nowhere left to put food, the snake won
                debug!("board full, game won");
                self.status = GameStatus::GameOver;
            }
        }

        self.snapshot()
    }

    /// the current state of the game as an immutable snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            occupied_cells: self.body.cells().into_iter().collect(),
            head_cell: self.body.head(),
            food_cell: self.food.map(|f| f.cell),
            score: self.score,
            status: self.status,
        }
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..self.board.rows() as i32 {
            for col in 0..self.board.cols() as i32 {
                let cell = self
                    .board
                    .cell_at(crate::types::Position { row, col })
                    .expect("row and col are on the board");
                if cell == self.body.head() {
                    write!(f, "H")?;
                } else if self.body.occupies(cell) {
                    write!(f, "s")?;
                } else if self.food.map(|food| food.cell) == Some(cell) {
                    write!(f, "f")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! food placement and the reversal coin
use crate::board::{Board, CellId};
use crate::snake::SnakeBody;
use rand::prelude::IteratorRandom;
use rand::Rng;

/// probability that a freshly placed food reverses the snake when eaten
pub const REVERSAL_CHANCE: f64 = 0.3;

/// One piece of food on the board. The reversal flag is decided once, when
/// the food is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// the cell the food sits on
    pub cell: CellId,
    /// whether eating this food flips the snake's head and tail roles
    pub reverses_direction: bool,
}

/// places food on a cell chosen uniformly at random among the cells the body
/// does not occupy, and flips the reversal coin for it. Returns None when
/// every cell is occupied, which the engine treats as the board-full win
/// rather than an error
pub fn place_food(board: &Board, body: &SnakeBody, rng: &mut impl Rng) -> Option<Food> {
    let cell = board.cells().filter(|c| !body.occupies(*c)).choose(rng)?;

    Some(Food {
        cell,
        reverses_direction: rng.gen_bool(REVERSAL_CHANCE),
    })
}

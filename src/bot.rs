//! Column selection for bot players

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Board;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BotAlgorithm {
    Random,
}

/// Picks the column a bot drops its chip in
pub trait BotStrategy {
    /// Returns `None` only when every column is full
    fn next_drop_column(&mut self, board: &Board) -> Option<usize>;
}

/// Picks uniformly among the columns that are not full
pub struct RandomBot<R: Rng = StdRng> {
    rng: R,
}

impl RandomBot<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A bot whose choices are the same on every run
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomBot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BotStrategy for RandomBot<R> {
    fn next_drop_column(&mut self, board: &Board) -> Option<usize> {
        let columns: Vec<usize> = board.playable_columns().collect();
        columns.choose(&mut self.rng).copied()
    }
}

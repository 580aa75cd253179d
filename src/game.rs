use crate::board::{Board, Position};
use crate::limits::ConnectXLimits;
use crate::new_game::{NewGameError, NewGameInformation};
use crate::player::Player;

/// The outcome of the game so far
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Resolution {
    InProgress,
    Won(Player),
    Tie,
}

impl Resolution {
    pub fn is_over(&self) -> bool {
        *self != Resolution::InProgress
    }
}

/// Everything a game command may mutate
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) in_a_row: usize,
    // in drop order
    pub(crate) taken_positions: Vec<Position>,
    pub(crate) active: usize,
    pub(crate) resolution: Resolution,
}

impl GameState {
    /// Starts a game from a configuration, validating it first
    pub fn new(info: &NewGameInformation, limits: &dyn ConnectXLimits) -> Result<Self, NewGameError> {
        info.validate(limits)?;
        let board = Board::new(info.grid_height, info.grid_width, limits)?;
        Ok(Self {
            board,
            players: info.players.clone(),
            in_a_row: info.in_a_row,
            taken_positions: Vec::new(),
            active: 0,
            resolution: Resolution::InProgress,
        })
    }

    /// The same game, back at its first move
    pub fn reinitialized(&self) -> Self {
        Self {
            board: self.board.emptied(),
            players: self.players.clone(),
            in_a_row: self.in_a_row,
            taken_positions: Vec::new(),
            active: 0,
            resolution: Resolution::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn in_a_row(&self) -> usize {
        self.in_a_row
    }

    pub fn taken_positions(&self) -> &[Position] {
        &self.taken_positions
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn next_player(&self) -> &Player {
        &self.players[(self.active + 1) % self.players.len()]
    }
}

//! Bounds on grid size, player count and in-a-row value

use static_assertions::*;

/// Standard minimum grid height
pub const MIN_HEIGHT: usize = 6;
/// Standard maximum grid height
pub const MAX_HEIGHT: usize = 64;
/// Standard minimum grid width
pub const MIN_WIDTH: usize = 7;
/// Standard maximum grid width
pub const MAX_WIDTH: usize = 64;
/// Standard minimum in-a-row value
pub const MIN_IN_A_ROW: usize = 3;
/// Standard maximum in-a-row value
pub const MAX_IN_A_ROW: usize = 8;
/// Standard minimum number of players
pub const MIN_PLAYERS: usize = 2;
/// Standard maximum number of players
pub const MAX_PLAYERS: usize = 10;

const_assert!(MIN_HEIGHT <= MAX_HEIGHT);
const_assert!(MIN_WIDTH <= MAX_WIDTH);
const_assert!(MIN_PLAYERS <= MAX_PLAYERS);
// resolution counts runs in a u8
const_assert!(MAX_IN_A_ROW <= u8::MAX as usize);
const_assert!(MIN_IN_A_ROW >= 2);
const_assert!(MAX_IN_A_ROW <= MAX_WIDTH);

/// Limits applied to new games and boards
pub trait ConnectXLimits {
    fn min_grid_height(&self) -> usize;
    fn max_grid_height(&self) -> usize;
    fn min_grid_width(&self) -> usize;
    fn max_grid_width(&self) -> usize;
    fn min_in_a_row(&self) -> usize;
    fn max_in_a_row(&self) -> usize;
    fn min_players(&self) -> usize;
    fn max_players(&self) -> usize;
}

/// The limits used by the console game
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardLimits;

impl ConnectXLimits for StandardLimits {
    fn min_grid_height(&self) -> usize {
        MIN_HEIGHT
    }
    fn max_grid_height(&self) -> usize {
        MAX_HEIGHT
    }
    fn min_grid_width(&self) -> usize {
        MIN_WIDTH
    }
    fn max_grid_width(&self) -> usize {
        MAX_WIDTH
    }
    fn min_in_a_row(&self) -> usize {
        MIN_IN_A_ROW
    }
    fn max_in_a_row(&self) -> usize {
        MAX_IN_A_ROW
    }
    fn min_players(&self) -> usize {
        MIN_PLAYERS
    }
    fn max_players(&self) -> usize {
        MAX_PLAYERS
    }
}

/// Limits with every bound chosen by the caller
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CustomLimits {
    pub min_height: usize,
    pub max_height: usize,
    pub min_width: usize,
    pub max_width: usize,
    pub min_in_a_row: usize,
    pub max_in_a_row: usize,
    pub min_players: usize,
    pub max_players: usize,
}

impl CustomLimits {
    /// Limits accepting any grid from 1x1 up to `max_side` x `max_side`,
    /// any in-a-row value from 2 to `u8::MAX` and 2 to 16 players
    pub fn permissive(max_side: usize) -> Self {
        Self {
            min_height: 1,
            max_height: max_side,
            min_width: 1,
            max_width: max_side,
            min_in_a_row: 2,
            max_in_a_row: u8::MAX as usize,
            min_players: 2,
            max_players: 16,
        }
    }
}

impl From<StandardLimits> for CustomLimits {
    fn from(limits: StandardLimits) -> Self {
        Self {
            min_height: limits.min_grid_height(),
            max_height: limits.max_grid_height(),
            min_width: limits.min_grid_width(),
            max_width: limits.max_grid_width(),
            min_in_a_row: limits.min_in_a_row(),
            max_in_a_row: limits.max_in_a_row(),
            min_players: limits.min_players(),
            max_players: limits.max_players(),
        }
    }
}

impl ConnectXLimits for CustomLimits {
    fn min_grid_height(&self) -> usize {
        self.min_height
    }
    fn max_grid_height(&self) -> usize {
        self.max_height
    }
    fn min_grid_width(&self) -> usize {
        self.min_width
    }
    fn max_grid_width(&self) -> usize {
        self.max_width
    }
    fn min_in_a_row(&self) -> usize {
        self.min_in_a_row
    }
    fn max_in_a_row(&self) -> usize {
        self.max_in_a_row
    }
    fn min_players(&self) -> usize {
        self.min_players
    }
    fn max_players(&self) -> usize {
        self.max_players
    }
}

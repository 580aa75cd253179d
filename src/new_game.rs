//! New game configuration and its validation

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::board::BoardError;
use crate::chip::Chip;
use crate::limits::ConnectXLimits;
use crate::player::{Player, PlayerType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NewGameError {
    #[error("in-a-row value {value} out of range, must be between {min} and {max}")]
    InARowOutOfRange { value: usize, min: usize, max: usize },
    #[error(transparent)]
    Grid(#[from] BoardError),
    #[error("{count} players given, must be between {min} and {max}")]
    PlayerCountOutOfRange { count: usize, min: usize, max: usize },
    #[error("player names can't be empty")]
    EmptyPlayerName,
    #[error("player name '{0}' is used more than once")]
    DuplicatePlayerName(String),
    #[error("player '{0}' has no chip colour")]
    TransparentChip(String),
    #[error("chip colour {0} is used by more than one player")]
    DuplicateChip(String),
    #[error("at least one player must be human")]
    NoHumanPlayer,
    #[error(
        "a {in_a_row} in a row can't be won on a {height}x{width} grid with {players} players"
    )]
    Unwinnable {
        in_a_row: usize,
        height: usize,
        width: usize,
        players: usize,
    },
    #[error("'{text}' is not a valid {field}")]
    MalformedNumber { text: String, field: &'static str },
}

/// Everything needed to start a game
#[derive(Clone, Debug)]
pub struct NewGameInformation {
    pub grid_height: usize,
    pub grid_width: usize,
    pub in_a_row: usize,
    pub players: Vec<Player>,
}

impl NewGameInformation {
    pub fn new(grid_height: usize, grid_width: usize, in_a_row: usize, players: Vec<Player>) -> Self {
        Self {
            grid_height,
            grid_width,
            in_a_row,
            players,
        }
    }

    /// Checks the configuration, stopping at the first problem
    ///
    /// The checks run in order: in-a-row value, grid dimensions, player
    /// names, chip colours, player types and finally winnability.
    pub fn validate(&self, limits: &dyn ConnectXLimits) -> Result<(), NewGameError> {
        self.validate_in_a_row(limits)?;
        self.validate_grid(limits)?;
        self.validate_player_names(limits)?;
        self.validate_player_chips()?;
        self.validate_player_types()?;
        self.validate_winnable()?;
        debug!(
            height = self.grid_height,
            width = self.grid_width,
            in_a_row = self.in_a_row,
            players = self.players.len(),
            "new game configuration accepted"
        );
        Ok(())
    }

    /// Whether the first player can possibly line up `in_a_row` chips
    ///
    /// The run must fit along the longest grid axis, and the first player
    /// must get at least `in_a_row` chips before the grid fills.
    pub fn is_winnable(&self) -> bool {
        let players = self.players.len().max(1);
        let cells = self.grid_height.saturating_mul(self.grid_width);
        let first_player_chips = cells / players + (cells % players != 0) as usize;
        self.in_a_row <= self.grid_height.max(self.grid_width) && first_player_chips >= self.in_a_row
    }

    fn validate_in_a_row(&self, limits: &dyn ConnectXLimits) -> Result<(), NewGameError> {
        let (min, max) = (limits.min_in_a_row(), limits.max_in_a_row());
        if self.in_a_row < min || self.in_a_row > max {
            return Err(NewGameError::InARowOutOfRange {
                value: self.in_a_row,
                min,
                max,
            });
        }
        Ok(())
    }

    fn validate_grid(&self, limits: &dyn ConnectXLimits) -> Result<(), NewGameError> {
        let (min, max) = (limits.min_grid_height(), limits.max_grid_height());
        if self.grid_height < min || self.grid_height > max {
            return Err(BoardError::HeightOutOfRange {
                height: self.grid_height,
                min,
                max,
            }
            .into());
        }
        let (min, max) = (limits.min_grid_width(), limits.max_grid_width());
        if self.grid_width < min || self.grid_width > max {
            return Err(BoardError::WidthOutOfRange {
                width: self.grid_width,
                min,
                max,
            }
            .into());
        }
        Ok(())
    }

    fn validate_player_names(&self, limits: &dyn ConnectXLimits) -> Result<(), NewGameError> {
        let (min, max) = (limits.min_players(), limits.max_players());
        let count = self.players.len();
        if count < min || count > max {
            return Err(NewGameError::PlayerCountOutOfRange { count, min, max });
        }

        let mut names = HashSet::new();
        for player in &self.players {
            let name = player.name().trim();
            if name.is_empty() {
                return Err(NewGameError::EmptyPlayerName);
            }
            if !names.insert(name) {
                return Err(NewGameError::DuplicatePlayerName(name.to_owned()));
            }
        }
        Ok(())
    }

    fn validate_player_chips(&self) -> Result<(), NewGameError> {
        let mut chips: HashSet<Chip> = HashSet::new();
        for player in &self.players {
            let chip = player.chip();
            if chip.is_empty() {
                return Err(NewGameError::TransparentChip(player.name().to_owned()));
            }
            if !chips.insert(chip) {
                return Err(NewGameError::DuplicateChip(chip.color().to_string()));
            }
        }
        Ok(())
    }

    fn validate_player_types(&self) -> Result<(), NewGameError> {
        if !self
            .players
            .iter()
            .any(|player| player.player_type() == PlayerType::Human)
        {
            return Err(NewGameError::NoHumanPlayer);
        }
        Ok(())
    }

    fn validate_winnable(&self) -> Result<(), NewGameError> {
        if !self.is_winnable() {
            return Err(NewGameError::Unwinnable {
                in_a_row: self.in_a_row,
                height: self.grid_height,
                width: self.grid_width,
                players: self.players.len(),
            });
        }
        Ok(())
    }
}

/// Parses an unsigned value typed by a user
pub fn parse_number(text: &str, field: &'static str) -> Result<usize, NewGameError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| NewGameError::MalformedNumber {
            text: text.trim().to_owned(),
            field,
        })
}

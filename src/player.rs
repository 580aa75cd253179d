use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chip::Chip;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PlayerType {
    Human,
    Bot,
}

/// A participant in a game
///
/// # Equality
/// Players are equal when their chips are equal, whatever their names or
/// types. Chip colours are unique within a game, so the chip identifies the
/// player.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    chip: Chip,
    player_type: PlayerType,
}

impl Player {
    pub fn new<S: Into<String>>(name: S, chip: Chip, player_type: PlayerType) -> Self {
        Self {
            name: name.into(),
            chip,
            player_type,
        }
    }

    pub fn human<S: Into<String>>(name: S, chip: Chip) -> Self {
        Self::new(name, chip, PlayerType::Human)
    }

    pub fn bot<S: Into<String>>(name: S, chip: Chip) -> Self {
        Self::new(name, chip, PlayerType::Bot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    pub fn is_bot(&self) -> bool {
        self.player_type == PlayerType::Bot
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.chip == other.chip
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chip.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

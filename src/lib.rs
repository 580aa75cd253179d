//! A rules engine for 'Connect X', Connect 4 generalised to any grid size,
//! any number of chips in a row and any number of players
//!
//! Every move goes through an undoable command. After each drop the engine
//! scans the grid around the new chip to decide whether the game was won or
//! tied.
//!
//! # Basic Usage
//!
//! ```
//! use connectx::{Chip, Color, GameActions, GameInformation, Model, NewGameInformation};
//! use connectx::{Player, StandardLimits, UndoRedo};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let red = Chip::new(Color::RED);
//! let yellow = Chip::new(Color::YELLOW);
//!
//! let mut model = Model::new(StandardLimits);
//! model.create_new_game(NewGameInformation::new(
//!     6,
//!     7,
//!     4,
//!     vec![Player::human("Red", red), Player::human("Yellow", yellow)],
//! ))?;
//!
//! for column in 0..3 {
//!     model.drop_chip(red, column)?;
//!     model.drop_chip(yellow, column)?;
//! }
//! model.drop_chip(red, 3)?;
//! assert!(model.is_won());
//!
//! model.undo();
//! assert!(!model.is_won());
//!# Ok(())
//!# }
//! ```

pub use anyhow;

pub mod limits;

pub mod chip;

pub mod player;

pub mod board;

pub mod command;

pub mod command_stack;

pub mod resolution;

pub mod new_game;

pub mod game;

pub mod game_commands;

pub mod notification;

pub mod bot;

pub mod model;


pub use board::{Board, BoardError, Position};
pub use bot::{BotAlgorithm, BotStrategy, RandomBot};
pub use chip::{Chip, Color};
pub use command::{Command, CommandStatus, CompositeCommand, UndoOrder};
pub use command_stack::CommandStack;
pub use game::{GameState, Resolution};
pub use limits::{ConnectXLimits, CustomLimits, StandardLimits};
pub use model::{GameActions, GameError, GameInformation, Model, UndoRedo};
pub use new_game::{parse_number, NewGameError, NewGameInformation};
pub use notification::{NotificationContext, Observer, ObserverId};
pub use player::{Player, PlayerType};
pub use resolution::{GameResolutionStrategy, ResolutionKind};

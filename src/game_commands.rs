//! The commands that mutate a game

use tracing::debug;

use crate::chip::Chip;
use crate::command::{Command, CommandStatus};
use crate::game::{GameState, Resolution};
use crate::resolution::{self, ResolutionKind};

/// Drops the active player's chip and passes the turn
pub struct DropChipCommand {
    chip: Chip,
    column: usize,
    previous_active: usize,
}

impl DropChipCommand {
    pub fn new(chip: Chip, column: usize) -> Self {
        Self {
            chip,
            column,
            previous_active: 0,
        }
    }
}

impl Command<GameState> for DropChipCommand {
    fn execute(&mut self, game: &mut GameState) -> CommandStatus {
        if self.column >= game.board.nb_columns() || self.chip != game.active_player().chip() {
            return CommandStatus::FailedUnexpected;
        }
        if game.resolution.is_over() {
            return CommandStatus::FailedExpected;
        }

        match game.board.drop_chip(self.column, self.chip) {
            Some(position) => {
                game.taken_positions.push(position);
                self.previous_active = game.active;
                game.active = (game.active + 1) % game.players.len();
                CommandStatus::Success
            }
            None => {
                debug!(column = self.column, "column full");
                CommandStatus::FailedExpected
            }
        }
    }

    fn undo(&mut self, game: &mut GameState) {
        let lifted = game.board.lift_chip(self.column);
        debug_assert_eq!(lifted.map(|(_, chip)| chip), Some(self.chip));
        let position = game.taken_positions.pop();
        debug_assert_eq!(position, lifted.map(|(position, _)| position));
        game.active = self.previous_active;
    }
}

/// Checks the last move of a player for a win, then for a tie
pub struct ResolveCommand {
    player: usize,
    previous: Resolution,
}

impl ResolveCommand {
    pub fn new(player: usize) -> Self {
        Self {
            player,
            previous: Resolution::InProgress,
        }
    }
}

impl Command<GameState> for ResolveCommand {
    fn execute(&mut self, game: &mut GameState) -> CommandStatus {
        let player = match game.players.get(self.player) {
            Some(player) => player,
            None => return CommandStatus::FailedUnexpected,
        };

        let strategy = |kind| {
            resolution::make(
                &game.board,
                game.in_a_row,
                &game.players,
                &game.taken_positions,
                kind,
            )
        };
        // a win on the last cell is not a tie
        let resolution = if strategy(ResolutionKind::Win).handle(player) {
            Resolution::Won(player.clone())
        } else if strategy(ResolutionKind::Tie).handle(player) {
            Resolution::Tie
        } else {
            Resolution::InProgress
        };

        self.previous = std::mem::replace(&mut game.resolution, resolution);
        CommandStatus::Success
    }

    fn undo(&mut self, game: &mut GameState) {
        game.resolution = self.previous.clone();
    }
}

/// Replaces the current game, if any, with a new one
pub struct CreateNewGameCommand {
    game: GameState,
    previous: Option<GameState>,
}

impl CreateNewGameCommand {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            previous: None,
        }
    }
}

impl Command<Option<GameState>> for CreateNewGameCommand {
    fn execute(&mut self, current: &mut Option<GameState>) -> CommandStatus {
        self.previous = current.replace(self.game.clone());
        CommandStatus::Success
    }

    fn undo(&mut self, current: &mut Option<GameState>) {
        *current = self.previous.take();
    }
}

/// Restarts the current game with the same configuration
#[derive(Default)]
pub struct ReinitializeCommand {
    previous: Option<GameState>,
}

impl ReinitializeCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command<Option<GameState>> for ReinitializeCommand {
    fn execute(&mut self, current: &mut Option<GameState>) -> CommandStatus {
        match current {
            Some(game) => {
                let fresh = game.reinitialized();
                self.previous = Some(std::mem::replace(game, fresh));
                CommandStatus::Success
            }
            None => CommandStatus::FailedExpected,
        }
    }

    fn undo(&mut self, current: &mut Option<GameState>) {
        if let Some(previous) = self.previous.take() {
            *current = Some(previous);
        }
    }
}

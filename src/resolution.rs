//! Win and tie detection around the last dropped chip

use tracing::{instrument, warn};

use crate::board::{Board, Position};
use crate::chip::Chip;
use crate::player::Player;

/// Decides whether the game ended on the last move
pub trait GameResolutionStrategy {
    /// Returns `true` if the game is over for `active_player`, the player who
    /// dropped the last chip
    fn handle(&self, active_player: &Player) -> bool;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ResolutionKind {
    Win,
    Tie,
}

// the four axes, each scanned in both directions
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal /
    (1, -1), // diagonal \
];

/// Reports a win when the last chip completes a run of `in_a_row` chips
pub struct WinStrategy<'a> {
    board: &'a Board,
    in_a_row: u8,
    taken_positions: &'a [Position],
}

impl<'a> WinStrategy<'a> {
    pub fn new(board: &'a Board, in_a_row: u8, taken_positions: &'a [Position]) -> Self {
        Self {
            board,
            in_a_row,
            taken_positions,
        }
    }

    /// Counts consecutive `chip`s from `from` (excluded) stepping by `step`,
    /// stopping at the board edge or after `limit` chips
    fn run(&self, from: Position, step: (isize, isize), chip: Chip, limit: u8) -> u8 {
        let mut count = 0;
        let mut row = from.row as isize + step.0;
        let mut column = from.column as isize + step.1;
        while count < limit
            && row >= 0
            && column >= 0
            && (row as usize) < self.board.nb_rows()
            && (column as usize) < self.board.nb_columns()
            && self.board.chip(Position::new(row as usize, column as usize)) == chip
        {
            count += 1;
            row += step.0;
            column += step.1;
        }
        count
    }
}

impl GameResolutionStrategy for WinStrategy<'_> {
    #[instrument(level = "debug", skip_all, fields(player = %active_player))]
    fn handle(&self, active_player: &Player) -> bool {
        let last = match self.taken_positions.last() {
            Some(&position) => position,
            None => return false,
        };
        let chip = active_player.chip();
        if chip.is_empty() || self.board.chip(last) != chip {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            let needed = self.in_a_row - 1;
            let forward = self.run(last, (dr, dc), chip, needed);
            let backward = self.run(last, (-dr, -dc), chip, needed - forward);
            forward + backward >= needed
        })
    }
}

/// Reports a tie when the board is full and the last move did not win
pub struct TieStrategy<'a> {
    board: &'a Board,
    win: WinStrategy<'a>,
}

impl<'a> TieStrategy<'a> {
    pub fn new(board: &'a Board, in_a_row: u8, taken_positions: &'a [Position]) -> Self {
        Self {
            board,
            win: WinStrategy::new(board, in_a_row, taken_positions),
        }
    }
}

impl GameResolutionStrategy for TieStrategy<'_> {
    #[instrument(level = "debug", skip_all, fields(player = %active_player))]
    fn handle(&self, active_player: &Player) -> bool {
        self.board.is_full() && !self.win.handle(active_player)
    }
}

/// Never reports the end of a game
pub struct NoOpStrategy;

impl GameResolutionStrategy for NoOpStrategy {
    fn handle(&self, _active_player: &Player) -> bool {
        false
    }
}

/// Builds the strategy for `kind`
///
/// `in_a_row` must be at least 2 and fit in a `u8`, and there must be at least
/// two players. Otherwise the returned strategy always reports `false`.
pub fn make<'a>(
    board: &'a Board,
    in_a_row: usize,
    players: &[Player],
    taken_positions: &'a [Position],
    kind: ResolutionKind,
) -> Box<dyn GameResolutionStrategy + 'a> {
    let in_a_row = match u8::try_from(in_a_row) {
        Ok(value) if value >= 2 => value,
        _ => {
            debug_assert!(false, "invalid in-a-row value {}", in_a_row);
            warn!(in_a_row, "invalid in-a-row value, resolution disabled");
            return Box::new(NoOpStrategy);
        }
    };
    if players.len() < 2 {
        debug_assert!(false, "resolution needs at least two players");
        warn!(players = players.len(), "not enough players, resolution disabled");
        return Box::new(NoOpStrategy);
    }

    match kind {
        ResolutionKind::Win => Box::new(WinStrategy::new(board, in_a_row, taken_positions)),
        ResolutionKind::Tie => Box::new(TieStrategy::new(board, in_a_row, taken_positions)),
    }
}

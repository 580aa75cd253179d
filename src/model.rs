//! The game façade: actions, information queries and undo/redo

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::board::Position;
use crate::bot::{BotAlgorithm, BotStrategy, RandomBot};
use crate::chip::Chip;
use crate::command::{Command, CommandStatus, CompositeCommand};
use crate::command_stack::CommandStack;
use crate::game::{GameState, Resolution};
use crate::game_commands::{CreateNewGameCommand, DropChipCommand, ReinitializeCommand, ResolveCommand};
use crate::limits::ConnectXLimits;
use crate::new_game::{NewGameError, NewGameInformation};
use crate::notification::{NotificationContext, Observer, ObserverId, Subject};
use crate::player::Player;

/// Number of moves kept for undo unless chosen otherwise
pub const DEFAULT_UNDO_CAPACITY: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no game in progress")]
    NoGameInProgress,
    #[error("the game is over")]
    GameOver,
    #[error("column {column} out of range, columns must be between 0 and {max}")]
    ColumnOutOfRange { column: usize, max: usize },
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("it is not this chip's turn")]
    NotActiveChip,
    #[error("the active player is not a bot")]
    NotBotTurn,
}

/// Actions that change the game
pub trait GameActions {
    fn create_new_game(&mut self, info: NewGameInformation) -> Result<(), NewGameError>;

    /// Drops `chip`, which must belong to the active player, into `column`
    fn drop_chip(&mut self, chip: Chip, column: usize) -> Result<Position, GameError>;

    fn end_current_game(&mut self);

    fn reinitialize_current_game(&mut self) -> Result<(), GameError>;

    /// Moves the active player's hovering chip one column left
    fn move_chip_left(&mut self) -> bool;

    /// Moves the active player's hovering chip one column right
    fn move_chip_right(&mut self) -> bool;
}

/// Read access to the current game
///
/// Dimension queries return 0 and chip queries return [`Chip::NONE`] when no
/// game is in progress.
pub trait GameInformation {
    fn current_grid_height(&self) -> usize;
    fn current_grid_width(&self) -> usize;
    fn current_in_a_row_value(&self) -> usize;
    fn active_player(&self) -> Option<&Player>;
    fn next_player(&self) -> Option<&Player>;
    fn chip(&self, row: usize, column: usize) -> Chip;
    fn is_won(&self) -> bool;
    fn is_tie(&self) -> bool;
    fn winner(&self) -> Option<&Player>;
    /// The column the active player's chip hovers over
    fn chip_column(&self) -> usize;
    fn current_bot_target(&self) -> Option<usize>;
}

pub trait UndoRedo {
    /// Returns `false` if there was nothing to undo
    fn undo(&mut self) -> bool;

    /// Returns `false` if there was nothing to redo
    fn redo(&mut self) -> bool;
}

/// Owns the game and its history
///
/// Every action runs to completion on the calling thread, notifying observers
/// along the way.
pub struct Model {
    limits: Box<dyn ConnectXLimits>,
    game: Option<GameState>,
    history: CommandStack<GameState>,
    observers: Subject<NotificationContext, dyn GameInformation>,
    bot: Box<dyn BotStrategy>,
    bot_target: Option<usize>,
    chip_column: usize,
}

impl Model {
    pub fn new<L: ConnectXLimits + 'static>(limits: L) -> Self {
        Self::with_capacity(limits, DEFAULT_UNDO_CAPACITY)
    }

    /// A model keeping at most `undo_capacity` moves for undo, none if 0
    pub fn with_capacity<L: ConnectXLimits + 'static>(limits: L, undo_capacity: usize) -> Self {
        Self {
            limits: Box::new(limits),
            game: None,
            history: CommandStack::new(undo_capacity),
            observers: Subject::new(),
            bot: Box::new(RandomBot::new()),
            bot_target: None,
            chip_column: 0,
        }
    }

    /// Replaces the strategy used by [`BotAlgorithm::Random`]
    pub fn with_bot(mut self, bot: Box<dyn BotStrategy>) -> Self {
        self.bot = bot;
        self
    }

    pub fn attach<O: Observer<NotificationContext, dyn GameInformation> + 'static>(
        &mut self,
        observer: &Rc<RefCell<O>>,
    ) -> ObserverId {
        self.observers.attach(observer)
    }

    pub fn detach(&mut self, id: ObserverId) -> bool {
        self.observers.detach(id)
    }

    pub fn limits(&self) -> &dyn ConnectXLimits {
        &*self.limits
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.game.is_some() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.game.is_some() && self.history.can_redo()
    }

    /// Drops the active player's chip in the column it hovers over
    pub fn drop_chip_at_cursor(&mut self) -> Result<Position, GameError> {
        let chip = self
            .game
            .as_ref()
            .ok_or(GameError::NoGameInProgress)?
            .active_player()
            .chip();
        self.drop_chip(chip, self.chip_column)
    }

    /// Asks the bot strategy for the column to play next
    pub fn compute_bot_target(&mut self, algorithm: BotAlgorithm) -> Option<usize> {
        let game = self.game.as_ref()?;
        if game.resolution().is_over() {
            return None;
        }
        self.bot_target = match algorithm {
            BotAlgorithm::Random => self.bot.next_drop_column(game.board()),
        };
        debug!(column = ?self.bot_target, "bot target computed");
        self.bot_target
    }

    /// Plays the turn of a bot active player
    pub fn play_bot_turn(&mut self) -> Result<Position, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NoGameInProgress)?;
        if game.resolution().is_over() {
            return Err(GameError::GameOver);
        }
        let player = game.active_player();
        if !player.is_bot() {
            return Err(GameError::NotBotTurn);
        }
        let chip = player.chip();

        match self.compute_bot_target(BotAlgorithm::Random) {
            Some(column) => self.drop_chip(chip, column),
            // a full board always resolved as a win or a tie
            None => Err(GameError::GameOver),
        }
    }

    fn notify(&self, context: NotificationContext) {
        self.observers.notify(context, self);
    }

    fn notify_resolution(&self) {
        match self.game.as_ref().map(GameState::resolution) {
            Some(Resolution::Won(player)) => {
                info!(winner = %player, "game won");
                self.notify(NotificationContext::GameWon);
            }
            Some(Resolution::Tie) => {
                info!("game tied");
                self.notify(NotificationContext::GameTied);
            }
            _ => (),
        }
    }

    fn reset_turn(&mut self) {
        self.chip_column = 0;
        self.bot_target = None;
    }
}

impl GameActions for Model {
    #[instrument(skip_all, fields(height = info.grid_height, width = info.grid_width, in_a_row = info.in_a_row))]
    fn create_new_game(&mut self, info: NewGameInformation) -> Result<(), NewGameError> {
        let game = GameState::new(&info, &*self.limits)?;

        self.history.clear();
        let status = CreateNewGameCommand::new(game).execute(&mut self.game);
        debug_assert!(status.is_success());
        self.reset_turn();

        info!(players = info.players.len(), "new game created");
        self.notify(NotificationContext::CreateNewGame);
        Ok(())
    }

    #[instrument(skip(self))]
    fn drop_chip(&mut self, chip: Chip, column: usize) -> Result<Position, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NoGameInProgress)?;
        if game.resolution().is_over() {
            return Err(GameError::GameOver);
        }
        let width = game.board().nb_columns();
        if column >= width {
            return Err(GameError::ColumnOutOfRange {
                column,
                max: width - 1,
            });
        }
        if chip != game.active_player().chip() {
            return Err(GameError::NotActiveChip);
        }

        let mut command: CompositeCommand<GameState> = CompositeCommand::new();
        command.add(Box::new(DropChipCommand::new(chip, column)));
        command.add(Box::new(ResolveCommand::new(game.active_index())));

        match self.history.execute(Box::new(command), game) {
            CommandStatus::Success => (),
            _ => {
                self.notify(NotificationContext::ChipDroppedFailed);
                return Err(GameError::ColumnFull(column));
            }
        }
        let position = game.taken_positions().last().copied();
        debug_assert!(position.is_some());

        self.reset_turn();
        self.notify(NotificationContext::ChipDropped);
        self.notify_resolution();
        position.ok_or(GameError::ColumnFull(column))
    }

    fn end_current_game(&mut self) {
        self.game = None;
        self.history.clear();
        self.reset_turn();
        info!("game ended");
        self.notify(NotificationContext::GameEnded);
    }

    fn reinitialize_current_game(&mut self) -> Result<(), GameError> {
        match ReinitializeCommand::new().execute(&mut self.game) {
            CommandStatus::Success => (),
            _ => return Err(GameError::NoGameInProgress),
        }
        self.history.clear();
        self.reset_turn();
        info!("game reinitialized");
        self.notify(NotificationContext::GameReinitialized);
        Ok(())
    }

    fn move_chip_left(&mut self) -> bool {
        match &self.game {
            Some(game) if !game.resolution().is_over() && self.chip_column > 0 => {
                self.chip_column -= 1;
                self.notify(NotificationContext::ChipMovedLeft);
                true
            }
            _ => false,
        }
    }

    fn move_chip_right(&mut self) -> bool {
        match &self.game {
            Some(game)
                if !game.resolution().is_over()
                    && self.chip_column + 1 < game.board().nb_columns() =>
            {
                self.chip_column += 1;
                self.notify(NotificationContext::ChipMovedRight);
                true
            }
            _ => false,
        }
    }
}

impl GameInformation for Model {
    fn current_grid_height(&self) -> usize {
        self.game.as_ref().map_or(0, |game| game.board().nb_rows())
    }

    fn current_grid_width(&self) -> usize {
        self.game.as_ref().map_or(0, |game| game.board().nb_columns())
    }

    fn current_in_a_row_value(&self) -> usize {
        self.game.as_ref().map_or(0, GameState::in_a_row)
    }

    fn active_player(&self) -> Option<&Player> {
        self.game.as_ref().map(GameState::active_player)
    }

    fn next_player(&self) -> Option<&Player> {
        self.game.as_ref().map(GameState::next_player)
    }

    fn chip(&self, row: usize, column: usize) -> Chip {
        self.game
            .as_ref()
            .map_or(Chip::NONE, |game| game.board().chip(Position::new(row, column)))
    }

    fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    fn is_tie(&self) -> bool {
        matches!(self.game.as_ref().map(GameState::resolution), Some(Resolution::Tie))
    }

    fn winner(&self) -> Option<&Player> {
        match self.game.as_ref().map(GameState::resolution) {
            Some(Resolution::Won(player)) => Some(player),
            _ => None,
        }
    }

    fn chip_column(&self) -> usize {
        self.chip_column
    }

    fn current_bot_target(&self) -> Option<usize> {
        self.bot_target
    }
}

impl UndoRedo for Model {
    fn undo(&mut self) -> bool {
        let game = match self.game.as_mut() {
            Some(game) => game,
            None => return false,
        };
        if !self.history.undo(game) {
            return false;
        }
        self.reset_turn();
        debug!(depth = self.history.undo_depth(), "move undone");
        self.notify(NotificationContext::UndoChipDropped);
        true
    }

    fn redo(&mut self) -> bool {
        let game = match self.game.as_mut() {
            Some(game) => game,
            None => return false,
        };
        if !self.history.redo(game) {
            return false;
        }
        self.reset_turn();
        debug!(depth = self.history.undo_depth(), "move redone");
        self.notify(NotificationContext::RedoChipDropped);
        self.notify_resolution();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::Color;
    use crate::limits::{CustomLimits, StandardLimits};

    #[derive(Default)]
    struct Recorder {
        contexts: Vec<NotificationContext>,
        active: Vec<Option<String>>,
    }

    impl Observer<NotificationContext, dyn GameInformation> for Recorder {
        fn update(&mut self, context: NotificationContext, model: &dyn GameInformation) {
            self.contexts.push(context);
            self.active
                .push(model.active_player().map(|player| player.name().to_owned()));
        }
    }

    fn red() -> Chip {
        Chip::new(Color::RED)
    }

    fn yellow() -> Chip {
        Chip::new(Color::YELLOW)
    }

    fn standard_game() -> NewGameInformation {
        NewGameInformation::new(
            6,
            7,
            4,
            vec![Player::human("Red", red()), Player::human("Yellow", yellow())],
        )
    }

    fn model_with_recorder() -> (Model, Rc<RefCell<Recorder>>) {
        let mut model = Model::new(StandardLimits);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        model.attach(&recorder);
        (model, recorder)
    }

    #[test]
    fn actions_need_a_game() {
        let mut model = Model::new(StandardLimits);
        assert_eq!(model.drop_chip(red(), 0), Err(GameError::NoGameInProgress));
        assert_eq!(model.reinitialize_current_game(), Err(GameError::NoGameInProgress));
        assert!(!model.undo());
        assert!(!model.redo());
        assert!(!model.move_chip_right());
        assert_eq!(model.current_grid_height(), 0);
        assert_eq!(model.chip(0, 0), Chip::NONE);
        assert!(model.active_player().is_none());
    }

    #[test]
    fn create_new_game_notifies_and_sets_up() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();

        assert_eq!(model.current_grid_height(), 6);
        assert_eq!(model.current_grid_width(), 7);
        assert_eq!(model.current_in_a_row_value(), 4);
        assert_eq!(model.active_player().map(Player::name), Some("Red"));
        assert_eq!(model.next_player().map(Player::name), Some("Yellow"));
        assert_eq!(recorder.borrow().contexts, vec![NotificationContext::CreateNewGame]);
    }

    #[test]
    fn invalid_game_keeps_the_current_one() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        model.drop_chip(red(), 3).unwrap();

        let mut info = standard_game();
        info.in_a_row = 9;
        assert!(model.create_new_game(info).is_err());
        assert_eq!(model.chip(0, 3), red());
        assert_eq!(recorder.borrow().contexts.len(), 2);
    }

    #[test]
    fn drops_alternate_players() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();

        assert_eq!(model.drop_chip(red(), 3), Ok(Position::new(0, 3)));
        assert_eq!(model.drop_chip(yellow(), 3), Ok(Position::new(1, 3)));
        assert_eq!(model.drop_chip(yellow(), 3), Err(GameError::NotActiveChip));
        assert_eq!(
            model.drop_chip(red(), 7),
            Err(GameError::ColumnOutOfRange { column: 7, max: 6 })
        );

        assert_eq!(model.chip(0, 3), red());
        assert_eq!(model.chip(1, 3), yellow());
        let recorder = recorder.borrow();
        assert_eq!(
            recorder.contexts,
            vec![
                NotificationContext::CreateNewGame,
                NotificationContext::ChipDropped,
                NotificationContext::ChipDropped
            ]
        );
        // observers see the state after the action
        assert_eq!(
            recorder.active,
            vec![
                Some("Red".to_owned()),
                Some("Yellow".to_owned()),
                Some("Red".to_owned())
            ]
        );
    }

    #[test]
    fn full_column_is_reported_and_not_recorded() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        // alternate colours up column 0 so nobody lines up four
        for _ in 0..3 {
            model.drop_chip(red(), 0).unwrap();
            model.drop_chip(yellow(), 0).unwrap();
        }

        assert_eq!(model.drop_chip(red(), 0), Err(GameError::ColumnFull(0)));
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::ChipDroppedFailed)
        );
        assert_eq!(model.active_player().map(Player::name), Some("Red"));
        assert_eq!(model.game().map(|game| game.taken_positions().len()), Some(6));
    }

    #[test]
    fn win_is_notified_and_ends_the_game() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        for column in 0..3 {
            model.drop_chip(red(), column).unwrap();
            model.drop_chip(yellow(), column).unwrap();
        }
        model.drop_chip(red(), 3).unwrap();

        assert!(model.is_won());
        assert!(!model.is_tie());
        assert_eq!(model.winner().map(Player::name), Some("Red"));
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::GameWon)
        );
        assert_eq!(model.drop_chip(yellow(), 4), Err(GameError::GameOver));
        assert!(!model.move_chip_right());
    }

    #[test]
    fn undo_and_redo_a_win() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        for column in 0..3 {
            model.drop_chip(red(), column).unwrap();
            model.drop_chip(yellow(), column).unwrap();
        }
        let before = model.game().cloned();
        model.drop_chip(red(), 3).unwrap();

        assert!(model.undo());
        assert!(!model.is_won());
        assert_eq!(model.game().cloned(), before);
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::UndoChipDropped)
        );

        assert!(model.redo());
        assert!(model.is_won());
        let contexts = recorder.borrow().contexts.clone();
        assert_eq!(
            &contexts[contexts.len() - 2..],
            &[NotificationContext::RedoChipDropped, NotificationContext::GameWon]
        );
        assert!(!model.redo());
    }

    #[test]
    fn undo_walks_back_to_an_empty_board() {
        let mut model = Model::new(StandardLimits);
        model.create_new_game(standard_game()).unwrap();
        let empty = model.game().cloned();
        model.drop_chip(red(), 1).unwrap();
        model.drop_chip(yellow(), 2).unwrap();

        assert!(model.can_undo());
        assert!(model.undo());
        assert!(model.undo());
        assert!(!model.undo());
        assert_eq!(model.game().cloned(), empty);
        assert!(model.can_redo());
    }

    #[test]
    fn undo_history_is_bounded() {
        let mut model = Model::with_capacity(StandardLimits, 2);
        model.create_new_game(standard_game()).unwrap();
        model.drop_chip(red(), 0).unwrap();
        model.drop_chip(yellow(), 1).unwrap();
        model.drop_chip(red(), 2).unwrap();

        assert!(model.undo());
        assert!(model.undo());
        assert!(!model.undo());
        assert_eq!(model.chip(0, 0), red());
        assert_eq!(model.active_player().map(Player::name), Some("Yellow"));
    }

    #[test]
    fn zero_undo_capacity_plays_without_history() {
        let mut model = Model::with_capacity(StandardLimits, 0);
        model.create_new_game(standard_game()).unwrap();
        model.drop_chip(red(), 0).unwrap();

        assert!(!model.can_undo());
        assert!(!model.undo());
        assert_eq!(model.chip(0, 0), red());
    }

    #[test]
    fn tie_is_notified_and_ends_the_game() {
        let mut model = Model::new(CustomLimits::permissive(8));
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        model.attach(&recorder);
        let info = NewGameInformation::new(
            2,
            3,
            3,
            vec![Player::human("Red", red()), Player::human("Yellow", yellow())],
        );
        model.create_new_game(info).unwrap();

        for (chip, column) in [(red(), 0), (yellow(), 1), (red(), 2), (yellow(), 0), (red(), 1)] {
            model.drop_chip(chip, column).unwrap();
            assert!(!model.is_tie());
        }
        model.drop_chip(yellow(), 2).unwrap();

        assert!(model.is_tie());
        assert!(!model.is_won());
        assert_eq!(model.winner(), None);
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::GameTied)
        );
        assert_eq!(model.drop_chip(red(), 0), Err(GameError::GameOver));

        assert!(model.undo());
        assert!(!model.is_tie());
        assert_eq!(model.active_player().map(Player::name), Some("Yellow"));

        assert!(model.redo());
        assert!(model.is_tie());
        let contexts = recorder.borrow().contexts.clone();
        assert_eq!(
            &contexts[contexts.len() - 2..],
            &[NotificationContext::RedoChipDropped, NotificationContext::GameTied]
        );
    }

    #[test]
    fn new_game_and_reinitialize_clear_history() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        model.drop_chip(red(), 0).unwrap();
        model.drop_chip(yellow(), 0).unwrap();
        model.undo();

        model.reinitialize_current_game().unwrap();
        assert_eq!(model.chip(0, 0), Chip::NONE);
        assert_eq!(model.active_player().map(Player::name), Some("Red"));
        assert!(!model.can_undo());
        assert!(!model.can_redo());
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::GameReinitialized)
        );

        model.drop_chip(red(), 4).unwrap();
        model.create_new_game(standard_game()).unwrap();
        assert!(!model.undo());
        assert_eq!(model.chip(0, 4), Chip::NONE);
    }

    #[test]
    fn end_game_tears_down() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();
        model.drop_chip(red(), 0).unwrap();

        model.end_current_game();
        assert!(model.game().is_none());
        assert!(!model.undo());
        assert_eq!(
            recorder.borrow().contexts.last(),
            Some(&NotificationContext::GameEnded)
        );
        assert_eq!(recorder.borrow().active.last(), Some(&None));
    }

    #[test]
    fn hovering_chip_moves_within_the_grid() {
        let (mut model, recorder) = model_with_recorder();
        model.create_new_game(standard_game()).unwrap();

        assert!(!model.move_chip_left());
        for column in 1..7 {
            assert!(model.move_chip_right());
            assert_eq!(model.chip_column(), column);
        }
        assert!(!model.move_chip_right());
        assert!(model.move_chip_left());
        assert_eq!(model.drop_chip_at_cursor(), Ok(Position::new(0, 5)));
        // the next player starts from the left
        assert_eq!(model.chip_column(), 0);

        let contexts = recorder.borrow().contexts.clone();
        assert_eq!(contexts.iter().filter(|&&c| c == NotificationContext::ChipMovedRight).count(), 6);
        assert_eq!(contexts.iter().filter(|&&c| c == NotificationContext::ChipMovedLeft).count(), 1);
    }

    #[test]
    fn bot_turns() {
        let mut model = Model::new(StandardLimits).with_bot(Box::new(RandomBot::seeded(5)));
        let info = NewGameInformation::new(
            6,
            7,
            4,
            vec![Player::human("Red", red()), Player::bot("Yellow", yellow())],
        );
        model.create_new_game(info).unwrap();

        assert_eq!(model.play_bot_turn(), Err(GameError::NotBotTurn));
        model.drop_chip(red(), 3).unwrap();

        let position = model.play_bot_turn().unwrap();
        assert_eq!(model.chip(position.row, position.column), yellow());
        assert_eq!(model.current_bot_target(), None);
        assert_eq!(model.active_player().map(Player::name), Some("Red"));

        let target = model.compute_bot_target(BotAlgorithm::Random);
        assert!(target.map_or(false, |column| column < 7));
        assert_eq!(model.current_bot_target(), target);
    }

    #[test]
    fn bots_play_out_a_game() {
        let mut model = Model::with_capacity(CustomLimits::permissive(8), 64)
            .with_bot(Box::new(RandomBot::seeded(11)));
        let info = NewGameInformation::new(
            4,
            4,
            3,
            vec![
                Player::human("Red", red()),
                Player::bot("Yellow", yellow()),
                Player::bot("Green", Chip::new(Color::GREEN)),
            ],
        );
        model.create_new_game(info).unwrap();

        let mut moves = 0;
        while !model.is_won() && !model.is_tie() {
            let is_bot = model.active_player().map_or(false, Player::is_bot);
            if is_bot {
                model.play_bot_turn().unwrap();
            } else {
                let column = model
                    .game()
                    .and_then(|game| game.board().playable_columns().next())
                    .unwrap();
                let chip = red();
                model.drop_chip(chip, column).unwrap();
            }
            moves += 1;
            assert!(moves <= 16);
        }

        // undo everything back to the empty grid
        while model.undo() {}
        assert_eq!(model.game().map(|game| game.taken_positions().len()), Some(0));
        assert!(!model.is_won() && !model.is_tie());
    }
}

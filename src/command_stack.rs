//! Bounded linear undo/redo history

use std::collections::VecDeque;

use tracing::debug;

use crate::command::{Command, CommandStatus};

/// A bounded history of executed commands
///
/// # Cursor
/// Commands before the cursor are done and can be undone, commands after it
/// were undone and can be redone. Executing a new command discards every
/// command after the cursor.
///
/// # Eviction
/// At most `capacity` commands are kept. When a command is pushed onto a full
/// history, the oldest command is dropped first and can no longer be undone.
pub struct CommandStack<T> {
    commands: VecDeque<Box<dyn Command<T>>>,
    capacity: usize,
    cursor: usize,
}

impl<T> CommandStack<T> {
    /// A history of at most `capacity` commands; 0 keeps no history at all
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: VecDeque::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Executes `command` on `target` and records it if it succeeded
    ///
    /// Failed commands are not recorded and leave the history untouched.
    pub fn execute(&mut self, mut command: Box<dyn Command<T>>, target: &mut T) -> CommandStatus {
        let status = command.execute(target);
        debug_assert!(
            status != CommandStatus::FailedUnexpected,
            "command failed unexpectedly"
        );
        if !status.is_success() {
            return status;
        }

        self.commands.truncate(self.cursor);
        if self.capacity == 0 {
            return status;
        }
        if self.commands.len() == self.capacity {
            self.commands.pop_front();
            debug!(capacity = self.capacity, "oldest command evicted from history");
        }
        self.commands.push_back(command);
        self.cursor = self.commands.len();
        status
    }

    /// Undoes the command before the cursor, returns `false` if there is none
    pub fn undo(&mut self, target: &mut T) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.commands[self.cursor].undo(target);
        true
    }

    /// Re-executes the command after the cursor, returns `false` if there is none
    pub fn redo(&mut self, target: &mut T) -> bool {
        if self.cursor == self.commands.len() {
            return false;
        }
        let status = self.commands[self.cursor].execute(target);
        debug_assert!(status.is_success(), "redo of a recorded command failed");
        if !status.is_success() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Number of commands that can currently be undone
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of commands that can currently be redone
    pub fn redo_depth(&self) -> usize {
        self.commands.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

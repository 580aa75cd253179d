//! Reversible mutations of a target value

use tracing::warn;

/// The result of executing a command
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CommandStatus {
    Success,
    /// The action could not happen (e.g. the column is full); the target is unchanged
    FailedExpected,
    /// A programmer error; the target is unchanged
    FailedUnexpected,
}

impl CommandStatus {
    pub fn is_success(&self) -> bool {
        *self == CommandStatus::Success
    }
}

/// A reversible unit of mutation of a `T`
///
/// `undo` must exactly reverse a successful `execute`, and both must touch
/// nothing but the target. Executing again after an undo re-applies the
/// effect.
pub trait Command<T> {
    fn execute(&mut self, target: &mut T) -> CommandStatus;

    fn undo(&mut self, target: &mut T);
}

/// The order a [`CompositeCommand`] undoes its children in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UndoOrder {
    /// Undo children in the order they were added
    Insertion,
    /// Undo children last-added first
    Reverse,
}

impl Default for UndoOrder {
    fn default() -> Self {
        UndoOrder::Insertion
    }
}

/// An ordered group of commands executed and undone as one
pub struct CompositeCommand<T> {
    commands: Vec<Box<dyn Command<T>>>,
    undo_order: UndoOrder,
    // number of children applied by the last execute
    executed: usize,
}

impl<T> CompositeCommand<T> {
    pub fn new() -> Self {
        Self::with_undo_order(UndoOrder::default())
    }

    pub fn with_undo_order(undo_order: UndoOrder) -> Self {
        Self {
            commands: Vec::new(),
            undo_order,
            executed: 0,
        }
    }

    pub fn add(&mut self, command: Box<dyn Command<T>>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn undo_order(&self) -> UndoOrder {
        self.undo_order
    }

    fn undo_first(&mut self, count: usize, target: &mut T) {
        match self.undo_order {
            UndoOrder::Insertion => {
                for command in self.commands.iter_mut().take(count) {
                    command.undo(target);
                }
            }
            UndoOrder::Reverse => {
                for command in self.commands.iter_mut().take(count).rev() {
                    command.undo(target);
                }
            }
        }
    }
}

impl<T> Default for CompositeCommand<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Command<T> for CompositeCommand<T> {
    /// Executes the children in order
    ///
    /// An expected failure of any child rolls back the children already
    /// executed, so the group either fully applies or leaves the target
    /// unchanged.
    fn execute(&mut self, target: &mut T) -> CommandStatus {
        self.executed = 0;
        for index in 0..self.commands.len() {
            let status = self.commands[index].execute(target);
            match status {
                CommandStatus::Success => self.executed += 1,
                CommandStatus::FailedExpected | CommandStatus::FailedUnexpected => {
                    debug_assert!(
                        status != CommandStatus::FailedUnexpected,
                        "child command {} failed unexpectedly",
                        index
                    );
                    if status == CommandStatus::FailedUnexpected {
                        warn!(index, "child command failed unexpectedly");
                    }
                    let executed = self.executed;
                    self.undo_first(executed, target);
                    self.executed = 0;
                    return status;
                }
            }
        }
        CommandStatus::Success
    }

    fn undo(&mut self, target: &mut T) {
        let executed = self.executed;
        self.undo_first(executed, target);
        self.executed = 0;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Appends a value, failing when the log already holds `limit` values
    pub(crate) struct Append {
        pub value: i32,
        pub limit: usize,
    }

    impl Command<Vec<i32>> for Append {
        fn execute(&mut self, target: &mut Vec<i32>) -> CommandStatus {
            if target.len() >= self.limit {
                return CommandStatus::FailedExpected;
            }
            target.push(self.value);
            CommandStatus::Success
        }

        fn undo(&mut self, target: &mut Vec<i32>) {
            target.pop();
        }
    }

    pub(crate) fn append(value: i32) -> Box<dyn Command<Vec<i32>>> {
        Box::new(Append { value, limit: usize::MAX })
    }

    /// Doubles the last value; undo halves it back
    struct DoubleLast;

    impl Command<Vec<i32>> for DoubleLast {
        fn execute(&mut self, target: &mut Vec<i32>) -> CommandStatus {
            match target.last_mut() {
                Some(last) => {
                    *last *= 2;
                    CommandStatus::Success
                }
                None => CommandStatus::FailedExpected,
            }
        }

        fn undo(&mut self, target: &mut Vec<i32>) {
            if let Some(last) = target.last_mut() {
                *last /= 2;
            }
        }
    }

    struct Increment(usize);

    impl Command<Vec<i32>> for Increment {
        fn execute(&mut self, target: &mut Vec<i32>) -> CommandStatus {
            target[self.0] += 1;
            CommandStatus::Success
        }

        fn undo(&mut self, target: &mut Vec<i32>) {
            target[self.0] -= 1;
        }
    }

    #[test]
    fn composite_executes_in_order() {
        let mut log = vec![];
        let mut composite: CompositeCommand<Vec<i32>> = CompositeCommand::new();
        composite.add(append(1));
        composite.add(append(2));
        composite.add(append(3));

        assert_eq!(composite.execute(&mut log), CommandStatus::Success);
        assert_eq!(log, vec![1, 2, 3]);
        assert_eq!(composite.undo_order(), UndoOrder::Insertion);
    }

    #[test]
    fn independent_children_undo_in_either_order() {
        for order in [UndoOrder::Insertion, UndoOrder::Reverse] {
            let mut counters = vec![0, 0];
            let mut composite: CompositeCommand<Vec<i32>> = CompositeCommand::with_undo_order(order);
            composite.add(Box::new(Increment(0)));
            composite.add(Box::new(Increment(1)));

            composite.execute(&mut counters);
            assert_eq!(counters, vec![1, 1]);
            composite.undo(&mut counters);
            assert_eq!(counters, vec![0, 0]);
        }
    }

    #[test]
    fn dependent_children_only_undo_cleanly_in_reverse() {
        let mut reverse: CompositeCommand<Vec<i32>> = CompositeCommand::with_undo_order(UndoOrder::Reverse);
        reverse.add(append(3));
        reverse.add(Box::new(DoubleLast));
        let mut log = vec![5];
        reverse.execute(&mut log);
        assert_eq!(log, vec![5, 6]);
        reverse.undo(&mut log);
        assert_eq!(log, vec![5]);

        // popping first leaves the halving to land on the 5
        let mut insertion: CompositeCommand<Vec<i32>> = CompositeCommand::with_undo_order(UndoOrder::Insertion);
        insertion.add(append(3));
        insertion.add(Box::new(DoubleLast));
        let mut log = vec![5];
        insertion.execute(&mut log);
        assert_eq!(log, vec![5, 6]);
        insertion.undo(&mut log);
        assert_eq!(log, vec![2]);
    }

    #[test]
    fn expected_failure_rolls_back() {
        let mut log = vec![];
        let mut composite: CompositeCommand<Vec<i32>> = CompositeCommand::new();
        composite.add(append(1));
        composite.add(Box::new(Append { value: 2, limit: 1 }));
        composite.add(append(3));

        assert_eq!(composite.execute(&mut log), CommandStatus::FailedExpected);
        assert!(log.is_empty());
    }

    #[test]
    fn execute_after_undo_reapplies() {
        let mut log = vec![];
        let mut composite: CompositeCommand<Vec<i32>> = CompositeCommand::new();
        composite.add(append(4));
        composite.add(append(5));

        composite.execute(&mut log);
        composite.undo(&mut log);
        assert!(log.is_empty());
        composite.execute(&mut log);
        assert_eq!(log, vec![4, 5]);
    }
}

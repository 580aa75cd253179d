//! Synchronous observer notification

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What changed in the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NotificationContext {
    CreateNewGame,
    ChipDropped,
    ChipDroppedFailed,
    UndoChipDropped,
    RedoChipDropped,
    GameWon,
    GameTied,
    GameEnded,
    GameReinitialized,
    ChipMovedLeft,
    ChipMovedRight,
}

/// Receives notifications from a [`Subject`]
///
/// Observers are called while the subject is in the middle of an action and
/// must not call back into it, only read the state they are handed.
pub trait Observer<C, S: ?Sized> {
    fn update(&mut self, context: C, subject: &S);
}

/// Handle returned by [`Subject::attach`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObserverId(usize);

/// An ordered list of observers
///
/// The subject only keeps weak references: dropping the last `Rc` to an
/// observer detaches it.
pub struct Subject<C, S: ?Sized> {
    observers: Vec<(ObserverId, Weak<RefCell<dyn Observer<C, S>>>)>,
    next_id: usize,
}

impl<C: Copy, S: ?Sized> Subject<C, S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn attach<O: Observer<C, S> + 'static>(&mut self, observer: &Rc<RefCell<O>>) -> ObserverId {
        self.observers.retain(|(_, weak)| weak.strong_count() > 0);

        let observer: Rc<RefCell<dyn Observer<C, S>>> = observer.clone();
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Rc::downgrade(&observer)));
        id
    }

    /// Returns `false` if `id` was not attached
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let count = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != count
    }

    /// Number of attached observers still alive
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every live observer, in attachment order
    pub fn notify(&self, context: C, subject: &S) {
        for (_, weak) in &self.observers {
            if let Some(observer) = weak.upgrade() {
                observer.borrow_mut().update(context, subject);
            }
        }
    }
}

impl<C: Copy, S: ?Sized> Default for Subject<C, S> {
    fn default() -> Self {
        Self::new()
    }
}

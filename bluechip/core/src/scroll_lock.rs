//! Page scroll lock shared by overlays.
//!
//! The lock is held through [`ScrollLockGuard`]s. The page stays locked while
//! at least one guard is alive and is unlocked when the last one is dropped,
//! whichever way its owner goes away.
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Whatever actually suppresses page scrolling (the document body on the web).
#[cfg_attr(test, mockall::automock)]
pub trait ScrollLockTarget {
    fn set_scroll_locked(&self, locked: bool);
}

struct LockState {
    holders: Cell<usize>,
    target: Rc<dyn ScrollLockTarget>,
}

/// Reference-counted handle to the page scroll lock. Clones share the count.
#[derive(Clone)]
pub struct ScrollLock {
    state: Rc<LockState>,
}

impl ScrollLock {
    /// Unlocked handle driving `target`.
    pub fn new(target: Rc<dyn ScrollLockTarget>) -> Self {
        ScrollLock {
            state: Rc::new(LockState {
                holders: Cell::new(0),
                target,
            }),
        }
    }

    /// Takes a hold on the lock. The first holder locks the target; the lock
    /// lasts until every returned guard has dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.state.holders.get() + 1;
        self.state.holders.set(holders);
        if holders == 1 {
            debug!("locking page scroll");
            self.state.target.set_scroll_locked(true);
        }
        ScrollLockGuard {
            state: Rc::clone(&self.state),
        }
    }

    /// Whether at least one guard is alive.
    pub fn is_locked(&self) -> bool {
        self.state.holders.get() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.state.holders.get()
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.state.holders.get())
            .finish()
    }
}

/// Keeps the page locked until dropped.
pub struct ScrollLockGuard {
    state: Rc<LockState>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.state.holders.get().saturating_sub(1);
        self.state.holders.set(holders);
        if holders == 0 {
            debug!("unlocking page scroll");
            self.state.target.set_scroll_locked(false);
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

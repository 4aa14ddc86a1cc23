//! Per-thread state of an in-progress deep copy.
//!
//! Two pieces of state live here:
//!
//! - the addresses of the shared pointers currently being copied, so that
//!   a pointer met again on the same path is reported as a cycle instead of
//!   recursing forever
//! - whether locks may be waited on, which is only the case while a
//!   sequence copies elements it already owns
//!
//! Both are restored by guards, so early returns and panics leave the
//! thread clean for the next copy.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::error::CopyError;

thread_local! {
    /// Addresses of the `Rc`/`Arc` pointees whose copy is in progress.
    static PATH: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());

    /// Whether `Mutex`/`RwLock` copies may block.
    static WAIT_FOR_LOCKS: Cell<bool> = const { Cell::new(false) };
}

/// Marks a shared pointer as being copied until dropped.
pub(crate) struct PathGuard {
    address: usize,
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        PATH.with(|path| {
            path.borrow_mut().remove(&self.address);
        });
    }
}

/// Enters the pointee at `address`.
///
/// Fails with [`CopyError::Unsupported`] when `address` is already on the
/// current path, which means the value refers back to itself.
pub(crate) fn enter<T: ?Sized>(address: usize) -> Result<PathGuard, CopyError> {
    let inserted = PATH.with(|path| path.borrow_mut().insert(address));
    if inserted {
        Ok(PathGuard { address })
    } else {
        tracing::debug!(address, "cyclic reference met during deep copy");
        Err(CopyError::unsupported::<T>("cyclic reference"))
    }
}

/// Allows lock acquisition to block until dropped.
pub(crate) struct LockWaitGuard {
    previous: bool,
}

impl Drop for LockWaitGuard {
    fn drop(&mut self) {
        WAIT_FOR_LOCKS.with(|wait| wait.set(self.previous));
    }
}

/// Lets `Mutex` and `RwLock` copies wait for the lock.
///
/// Only values the caller can no longer reach may be copied under this
/// guard. A lock the caller holds on the same thread would never be
/// released.
pub(crate) fn wait_for_locks() -> LockWaitGuard {
    let previous = WAIT_FOR_LOCKS.with(|wait| wait.replace(true));
    LockWaitGuard { previous }
}

pub(crate) fn waits_for_locks() -> bool {
    WAIT_FOR_LOCKS.with(Cell::get)
}

//! Scroll-lock ownership for modal surfaces.
//!
//! While a modal is open the host document must not scroll. Rather than
//! imperative engage/release calls scattered across the UI layer, the lock
//! is held through [`ScrollGuard`]: engaged when the guard is created,
//! released exactly once when it drops. An editor owns its guard for the
//! open interval, so release is guaranteed on every teardown path.

use tracing::debug;

/// A host surface whose scrolling can be suspended while a modal is open.
pub trait ScrollLock {
    fn engage(&self);
    fn release(&self);
}

/// RAII handle over an engaged [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.engage();
        debug!("scroll lock engaged");
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.release();
        debug!("scroll lock released");
    }
}

/// Lock for headless hosts; engaging and releasing are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLock;

impl ScrollLock for NoopLock {
    fn engage(&self) {}

    fn release(&self) {}
}

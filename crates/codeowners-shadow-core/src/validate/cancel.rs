//! Cooperative cancellation for long-running checks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A signal that checks poll to find out whether they should stop early.
pub trait CancellationToken: Send + Sync {
    /// Returns true once cancellation has been requested.
    fn is_cancelled(&self) -> bool;
}

impl CancellationToken for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

impl<T: CancellationToken + ?Sized> CancellationToken for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancellationToken + ?Sized> CancellationToken for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// A token that is never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancellationToken for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

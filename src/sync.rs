//! Poison-recovering lock helpers.
//!
//! The process-wide unit-width cache and the [`GridLogger`](crate::logging::GridLogger)
//! writer live behind mutexes. A thread that panics while holding one of them
//! leaves the data in a usable state (a cache can serve stale widths, a writer
//! can take another line), so callers recover the guard instead of failing.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use framegrid::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Cancellable timer tasks.
//!
//! Every delayed step in the layer (flash dismissal, toast timeline, copy
//! confirmation reset) runs through [`ScheduledTask`], so an embedder
//! tearing enhancers down can drop pending work deterministically instead
//! of racing bare timeouts.

use gloo_timers::callback::Timeout;
use std::time::Duration;

/// A single pending timer callback.
///
/// Dropping the task cancels the callback. The page's own lifecycle is
/// fire-and-forget, so the enhancers call [`ScheduledTask::forget`]; the
/// cancel path exists for embedders that unmount.
pub struct ScheduledTask {
    timeout: Option<Timeout>,
}

impl ScheduledTask {
    /// Schedule `callback` to run once after `delay`.
    pub fn after(delay: Duration, callback: impl FnOnce() + 'static) -> Self {
        Self {
            timeout: Some(Timeout::new(delay.as_millis() as u32, callback)),
        }
    }

    /// Cancel the pending callback.
    pub fn cancel(mut self) {
        if let Some(timeout) = self.timeout.take() {
            drop(timeout.cancel());
        }
    }

    /// Detach: let the callback fire without keeping the handle.
    pub fn forget(mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.forget();
        }
    }
}

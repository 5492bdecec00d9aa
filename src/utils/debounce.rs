//! Trailing-edge debounce on the tokio timer.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Wraps a callback so that only the last of a burst of calls runs.
///
/// Each [`call`](Self::call) cancels the pending invocation, if any, and
/// schedules a new one `delay` from now. Dropping the debouncer cancels the
/// pending invocation too.
///
/// # Example
///
/// ```rust
/// use httpzen_site::Debouncer;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let search = Debouncer::new(Duration::from_millis(250), |query: String| {
///     println!("searching for {query}");
/// });
/// search.call("h".into());
/// search.call("http".into());
/// assert!(search.is_pending());
/// # }
/// ```
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedules `args` for delivery after the delay, replacing any pending
    /// call.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn call(&self, args: A) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(args);
        });

        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
        }
    }
}

impl<A> Debouncer<A> {
    /// Drops the pending call. Returns `true` if one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether a call is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

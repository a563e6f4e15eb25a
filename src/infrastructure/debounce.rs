//! Debounced value holder.
//!
//! A [`Debouncer`] owns a pending-value slot and at most one timer task. Each
//! [`observe`](Debouncer::observe) replaces the pending value and restarts the
//! timer; when the timer fires it sends its generation number on a channel.
//! The owner feeds that number back into [`settle`](Debouncer::settle), which
//! promotes the pending value only if no newer value was observed meanwhile.
//!
//! ```text
//! observe("t")   observe("te")   observe("tech")        300ms quiet
//!   gen 1  ──x     gen 2  ──x      gen 3  ─────────────────▶ tick(3) ─▶ settle → "tech"
//! ```
//!
//! Only the most recent value survives; nothing is queued.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use company_directory::infrastructure::Debouncer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> company_directory::Result<()> {
//! let (mut search, mut ticks) = Debouncer::new(String::new(), Duration::from_millis(10))?;
//!
//! search.observe("te".to_string());
//! search.observe("tech".to_string());
//!
//! let tick = ticks.recv().await.unwrap_or_default();
//! assert_eq!(search.settle(tick).map(String::as_str), Some("tech"));
//! # Ok(())
//! # }
//! ```

use crate::domain::error::{DirectoryError, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Emits a value only after it has stopped changing for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    stable: T,
    pending: Option<T>,
    delay: Duration,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    ticks: mpsc::UnboundedSender<u64>,
    runtime: Handle,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer holding `initial` as its stable value, plus the
    /// receiver on which timer ticks arrive.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Worker`] when called outside a tokio runtime.
    pub fn new(initial: T, delay: Duration) -> Result<(Self, mpsc::UnboundedReceiver<u64>)> {
        let runtime = Handle::try_current()
            .map_err(|e| DirectoryError::Worker(format!("debouncer needs a tokio runtime: {e}")))?;
        Ok(Self::with_handle(initial, delay, runtime))
    }

    /// Like [`new`](Self::new), spawning timers on the given runtime.
    #[must_use]
    pub fn with_handle(initial: T, delay: Duration, runtime: Handle) -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (ticks, receiver) = mpsc::unbounded_channel();
        let debouncer = Self {
            stable: initial,
            pending: None,
            delay,
            generation: 0,
            timer: None,
            ticks,
            runtime,
        };
        (debouncer, receiver)
    }

    /// Stores `value` as pending and restarts the wait.
    pub fn observe(&mut self, value: T) {
        self.abort_timer();
        self.pending = Some(value);
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let ticks = self.ticks.clone();

        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner was torn down.
            let _ = ticks.send(generation);
        }));

        tracing::trace!(generation, delay = ?delay, "debounce timer restarted");
    }

    /// Promotes the pending value if `tick` comes from the latest timer.
    ///
    /// Returns the new stable value, or `None` for a stale tick or when
    /// nothing is pending.
    pub fn settle(&mut self, tick: u64) -> Option<&T> {
        if tick != self.generation {
            tracing::trace!(tick, generation = self.generation, "stale debounce tick");
            return None;
        }

        let value = self.pending.take()?;
        self.stable = value;
        self.timer = None;
        Some(&self.stable)
    }

    /// Last value that survived the debounce window.
    pub const fn current_stable(&self) -> &T {
        &self.stable
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value and stops the timer. The stable value is kept.
    pub fn cancel(&mut self) {
        self.abort_timer();
        self.pending = None;
        // A tick already queued by the aborted timer must not settle anything.
        self.generation += 1;
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.abort_timer();
    }
}

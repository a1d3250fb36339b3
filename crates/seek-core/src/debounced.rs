//! Tokio-driven debounced callbacks
//!
//! [`debounce`] wraps a target callback so that bursts of calls collapse into
//! one delivery of the latest value once the quiet period has passed. Each
//! call (re)arms a single timer task; timers belonging to superseded calls are
//! aborted, and a timer that still wakes finds a newer generation and does
//! nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::debounce::Debouncer;

type Target<T> = Arc<dyn Fn(T) + Send + Sync>;

struct Slot<T> {
    debouncer: Debouncer<T>,
    timer: Option<JoinHandle<()>>,
}

struct Inner<T> {
    slot: Mutex<Slot<T>>,
    target: Target<T>,
}

impl<T> Inner<T> {
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn deliver(&self, value: T) {
        (self.target)(value);
    }

    fn expire(&self, generation: u64) {
        let value = {
            let mut slot = self.lock();
            let value = slot.debouncer.fire(generation, Instant::now().into_std());
            if value.is_some() {
                slot.timer = None;
            }
            value
        };

        if let Some(value) = value {
            tracing::debug!(generation, "Delivering debounced value");
            self.deliver(value);
        }
    }
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let slot = self.slot.get_mut().unwrap_or_else(PoisonError::into_inner);
        slot.debouncer.cancel();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
    }
}

/// A debounced wrapper around a target callback.
///
/// Clones share the same pending slot, so handing a clone to another owner
/// keeps the calls coordinated. Dropping the last clone cancels any pending
/// delivery.
pub struct Debounced<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Wrap `target` so it only runs once calls have paused for `delay`.
///
/// Must be called from within a tokio runtime; every [`Debounced::call`]
/// spawns its timer onto the current runtime.
pub fn debounce<T, F>(delay: Duration, target: F) -> Debounced<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debounced {
        inner: Arc::new(Inner {
            slot: Mutex::new(Slot {
                debouncer: Debouncer::new(delay),
                timer: None,
            }),
            target: Arc::new(target),
        }),
    }
}

impl<T: Send + 'static> Debounced<T> {
    /// Record `value` and restart the quiet period. Returns immediately.
    pub fn call(&self, value: T) {
        let now = Instant::now();
        let flushed = {
            let mut slot = self.inner.lock();
            let scheduled = slot.debouncer.call(value, now.into_std());
            if let Some(previous) = slot.timer.take() {
                previous.abort();
            }

            let generation = scheduled.generation;
            let deadline = Instant::from_std(scheduled.deadline);
            let inner: Weak<Inner<T>> = Arc::downgrade(&self.inner);
            slot.timer = Some(tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                if let Some(inner) = inner.upgrade() {
                    inner.expire(generation);
                }
            }));
            tracing::trace!(generation, "Debounce timer armed");

            scheduled.flushed
        };

        if let Some((generation, value)) = flushed {
            tracing::debug!(
                generation,
                "Delivering value that was due before the latest call"
            );
            self.inner.deliver(value);
        }
    }

    /// Deliver the pending value right away, if there is one.
    ///
    /// Returns `true` if a value was delivered.
    pub fn flush(&self) -> bool {
        let value = {
            let mut slot = self.inner.lock();
            if let Some(timer) = slot.timer.take() {
                timer.abort();
            }
            slot.debouncer.flush()
        };

        if let Some(value) = value {
            self.inner.deliver(value);
            true
        } else {
            false
        }
    }
}

impl<T> Debounced<T> {
    /// Drop the pending value without delivering it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&self) -> bool {
        let mut slot = self.inner.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        let cancelled = slot.debouncer.cancel();
        if cancelled {
            tracing::debug!("Cancelled pending debounced value");
        }
        cancelled
    }

    /// Whether a value is waiting for the quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.inner.lock().debouncer.is_pending()
    }

    /// Quiet period of this wrapper.
    pub fn delay(&self) -> Duration {
        self.inner.lock().debouncer.delay()
    }
}

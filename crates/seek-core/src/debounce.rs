//! Debounce state machine
//!
//! `Debouncer` holds at most one pending value and the deadline at which it
//! becomes due. It owns no timer: callers pass the current instant in, which
//! keeps the collapse rules independent of any runtime. The tokio driver lives
//! in [`crate::debounced`].

use std::time::{Duration, Instant};

/// Default quiet period before a pending value is delivered.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Longest quiet period a debouncer accepts; longer delays are clamped.
pub const MAX_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Result of recording a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<T> {
    /// Generation the new pending value was stored under.
    pub generation: u64,
    /// Instant at which the new pending value becomes due.
    pub deadline: Instant,
    /// A previously pending value, with its generation, that was already due
    /// when this call arrived.
    pub flushed: Option<(u64, T)>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
    generation: u64,
}

/// Collapses bursts of calls into a single delivery of the latest value.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period, clamped to
    /// [`MAX_DELAY`] so deadlines always stay representable.
    pub const fn new(delay: Duration) -> Self {
        let delay = if delay.as_secs() >= MAX_DELAY.as_secs() {
            MAX_DELAY
        } else {
            delay
        };
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    /// Quiet period required before a pending value is delivered.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a value is waiting for its deadline.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Record a call made at `now`.
    ///
    /// Replaces any pending value that is not yet due. A pending value whose
    /// deadline is at or before `now` counts as already elapsed and is handed
    /// back in [`Scheduled::flushed`] so the caller can deliver it before the
    /// new window starts.
    pub fn call(&mut self, value: T, now: Instant) -> Scheduled<T> {
        let flushed = self.take_due(now);

        self.generation = self.generation.wrapping_add(1);
        let deadline = now + self.delay;
        if self.pending.is_some() {
            tracing::trace!(generation = self.generation, "Dropping superseded call");
        }
        self.pending = Some(Pending {
            value,
            deadline,
            generation: self.generation,
        });

        Scheduled {
            generation: self.generation,
            deadline,
            flushed,
        }
    }

    /// Timer expiry for `generation`.
    ///
    /// Returns the pending value only if it still belongs to `generation` and
    /// its deadline has been reached. Timers of superseded or cancelled calls
    /// get `None`.
    pub fn fire(&mut self, generation: u64, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.generation == generation && pending.deadline <= now => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        self.take_due(now).map(|(_, value)| value)
    }

    fn take_due(&mut self, now: Instant) -> Option<(u64, T)> {
        let generation = self.pending.as_ref()?.generation;
        self.fire(generation, now).map(|value| (generation, value))
    }

    /// Take the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop the pending value without delivering it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

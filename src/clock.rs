//! Wall-clock abstraction so time-driven projections stay testable.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Production code uses [`SystemClock`]; tests inject [`ManualClock`] to
/// drive the expiry projection deterministically.
pub trait Clock: Send + Sync + 'static {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can hold one clone
/// and hand another to a tracker.
#[cfg(any(test, feature = "fixtures"))]
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: std::sync::Arc<std::sync::atomic::AtomicI64>,
}

#[cfg(any(test, feature = "fixtures"))]
impl ManualClock {
    /// Creates a clock pinned to `start`.
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            millis: std::sync::Arc::new(std::sync::atomic::AtomicI64::new(
                start.timestamp_millis(),
            )),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: chrono::Duration) {
        self.millis.fetch_add(
            by.num_milliseconds(),
            std::sync::atomic::Ordering::SeqCst,
        );
    }

    /// Pins the clock to an exact instant.
    pub fn set(&self, to: DateTime<Utc>) {
        self.millis
            .store(to.timestamp_millis(), std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(any(test, feature = "fixtures"))]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(std::sync::atomic::Ordering::SeqCst);
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}

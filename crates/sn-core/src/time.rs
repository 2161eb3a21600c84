//! Game time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `Timestamp`,
//! measured from an arbitrary origin (usually scene start).  All attention
//! arithmetic is integer milliseconds, so comparisons are exact and tests can
//! drive the state machine with hand-picked timestamps.
//!
//! Where the timestamp comes from is abstracted by [`Clock`]:
//!
//! - [`MonotonicClock`] reads `std::time::Instant` (live play).
//! - [`ManualClock`] is advanced explicitly (tests, replays).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Milliseconds since the clock's origin.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to 0 if `earlier` is later than `self`, so a clock that is
    /// read slightly out of order never produces a huge elapsed value.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// A source of monotonic [`Timestamp`]s.
///
/// `Send + Sync` because the attention ticker thread and the input path both
/// read the same clock.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time since construction, backed by `Instant`.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed().as_millis() as u64)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying counter, so a test can keep one handle
/// and give another to a `Session`.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self { ms: Arc::new(AtomicU64::new(start.0)) }
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jump to an absolute timestamp.  Moving backwards is allowed; consumers
    /// treat negative elapsed time as zero.
    pub fn set(&self, now: Timestamp) {
        self.ms.store(now.0, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp(self.ms.load(Ordering::SeqCst))
    }
}

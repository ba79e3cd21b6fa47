//! Clock abstraction.
//!
//! The only ambient input a transition needs is "now" (to stamp the start
//! of a connect attempt). Abstracting it behind a trait keeps
//! [`transition_with_clock`](crate::transition_with_clock) a pure function
//! of its inputs, so tests can pin time and assert exact snapshots.

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    /// Current time in milliseconds since epoch.
    fn now_ms(&self) -> i64;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

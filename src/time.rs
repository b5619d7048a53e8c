//! Logical Time
//!
//! Generated histories carry a logical clock rather than wall-clock time. A
//! `TimePoint` is an offset from the start of a run, a `TimeSpan` is the
//! distance the clock advances between insertions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::time::Duration;

/// A reading of the logical clock, measured from the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TimePoint(Duration);

/// A non-negative span of logical time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSpan(Duration);

impl TimePoint {
    /// The clock reading every run starts from.
    pub const ZERO: TimePoint = TimePoint(Duration::ZERO);

    pub fn from_millis(millis: u64) -> Self {
        TimePoint(Duration::from_millis(millis))
    }

    pub fn from_secs(secs: u64) -> Self {
        TimePoint(Duration::from_secs(secs))
    }

    /// Offset from the start of the run.
    pub fn since_start(&self) -> Duration {
        self.0
    }

    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl TimeSpan {
    /// Default clock increment applied after each timed insertion.
    pub const DEFAULT: TimeSpan = TimeSpan(Duration::from_secs(1));

    pub const ZERO: TimeSpan = TimeSpan(Duration::ZERO);

    pub fn from_millis(millis: u64) -> Self {
        TimeSpan(Duration::from_millis(millis))
    }

    pub fn from_secs(secs: u64) -> Self {
        TimeSpan(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl Default for TimeSpan {
    fn default() -> Self {
        TimeSpan::DEFAULT
    }
}

impl From<Duration> for TimeSpan {
    fn from(duration: Duration) -> Self {
        TimeSpan(duration)
    }
}

impl From<Duration> for TimePoint {
    fn from(duration: Duration) -> Self {
        TimePoint(duration)
    }
}

// Clock arithmetic saturates at `Duration::MAX`; advancing time never panics.
impl Add<TimeSpan> for TimePoint {
    type Output = TimePoint;

    fn add(self, span: TimeSpan) -> TimePoint {
        TimePoint(self.0.saturating_add(span.0))
    }
}

impl AddAssign<TimeSpan> for TimePoint {
    fn add_assign(&mut self, span: TimeSpan) {
        *self = *self + span;
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, other: TimeSpan) -> TimeSpan {
        TimeSpan(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}ms", self.0.as_millis())
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.as_millis())
    }
}

/// A payload paired with the logical time at which it was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timed<T> {
    pub value: T,
    pub time: TimePoint,
}

impl<T> Timed<T> {
    pub fn new(value: T, time: TimePoint) -> Self {
        Self { value, time }
    }
}

impl<T: fmt::Display> fmt::Display for Timed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.time)
    }
}

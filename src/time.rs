//! Time abstraction traits for platform-agnostic timing.
//!
//! The interface never reads a hardware clock itself. It asks a [`TimeSource`]
//! for the current [`TimeInstant`] and measures press durations and inactivity
//! with [`TimeInstant::duration_since`], so a wrapping counter works as long as
//! its `duration_since` is wraparound-safe.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Returns true for the zero duration.
    #[inline]
    fn is_zero(&self) -> bool {
        self.as_millis() == 0
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration matching [`MillisInstant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    /// Saturates at `u32::MAX` milliseconds (about 49.7 days).
    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// A free-running 32-bit millisecond counter value.
///
/// This is the shape of the usual `millis()` tick counter found on small
/// microcontrollers. It wraps after roughly 49.7 days; [`duration_since`]
/// uses wrapping subtraction so intervals spanning the wrap stay correct.
///
/// [`duration_since`]: TimeInstant::duration_since
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl MillisInstant {
    /// Returns the raw counter value.
    #[inline]
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for MillisInstant {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

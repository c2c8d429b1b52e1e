//! Round countdown and wall-time pacing

/// Countdown driving round cadence
///
/// Owns the single "ticks remaining" value. Decrements saturate at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundClock {
    remaining: u32,
}

impl RoundClock {
    /// Create a clock armed with `seconds`
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Count down by the elapsed whole seconds, stopping at zero
    pub fn tick(&mut self, elapsed_seconds: u32) {
        self.remaining = self.remaining.saturating_sub(elapsed_seconds);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Start a new countdown. Zero is not a valid countdown and is ignored.
    pub fn arm(&mut self, seconds: u32) {
        if seconds > 0 {
            self.remaining = seconds;
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Converts irregular elapsed milliseconds into whole seconds
///
/// The sub-second remainder is carried across calls, so a driver that polls
/// every 16ms or every 700ms still advances the countdown once per wall second
/// on average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondPacer {
    carry_ms: u32,
}

impl SecondPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and return how many whole seconds completed
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.carry_ms as u64 + elapsed_ms as u64;
        self.carry_ms = (total % 1000) as u32;
        (total / 1000) as u32
    }

    /// Drop the carried remainder (e.g. when a new game starts)
    pub fn clear(&mut self) {
        self.carry_ms = 0;
    }

    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }
}

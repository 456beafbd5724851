//! Round Countdown
//!
//! A cancellation token for the per-round timer. The session owns one and
//! drives it from an external once-per-second tick; the token itself never
//! schedules anything and never blocks.
//!
//! Expiry is single-fire: `tick()` disarms the token when it reaches zero,
//! so a countdown can time out at most once per arming, and cancelling
//! before the next tick guarantees it never fires at all.

/// What a 1 Hz tick did to the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    /// No countdown armed; the tick was a no-op
    Idle,
    /// Still counting; this many whole seconds remain
    Running(u32),
    /// Just hit zero; the token has disarmed itself
    Expired,
}

/// Session-owned countdown state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    armed: bool,
}

impl Countdown {
    /// New, disarmed countdown.
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            armed: false,
        }
    }

    /// Arm for `seconds` whole seconds. Zero means no timer: the token
    /// stays disarmed and every tick is a no-op.
    pub fn arm(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.armed = seconds > 0;
    }

    /// Cancel without firing. Idempotent.
    pub fn cancel(&mut self) {
        self.remaining = 0;
        self.armed = false;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.armed {
            return CountdownTick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    /// Seconds left, or `None` when disarmed.
    pub fn remaining(&self) -> Option<u32> {
        if self.armed {
            Some(self.remaining)
        } else {
            None
        }
    }

    /// Is a countdown currently running?
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

// =============================================================================
// TESTS
// =============================================================================

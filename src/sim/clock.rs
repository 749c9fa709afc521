//! Frame clock: the simulation's only notion of time
//!
//! A monotonic tick counter advanced exactly once per simulated frame. The
//! pipe spawn timer reads this counter, so spawn cadence is a function of
//! ticks elapsed, not wall time.

use serde::{Deserialize, Serialize};

/// Monotonic per-frame tick counter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameClock {
    ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Advance by one frame
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Current tick count
    pub fn now(&self) -> u64 {
        self.ticks
    }
}

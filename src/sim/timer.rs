//! Tick-driven countdowns
//!
//! Timed effects (dash, attack window, recharge, coin respawn, wave pause) are
//! plain countdown fields advanced by the simulation step, never background
//! threads.

use serde::{Deserialize, Serialize};

/// A countdown that fires exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Ticks left before firing (0 = idle or already fired)
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Advance one tick. Returns true on the tick the countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
    }
}

/// Advance a list of one-shot countdowns, dropping the ones that fired.
/// Returns how many fired this tick.
pub fn tick_all(timers: &mut Vec<Countdown>) -> usize {
    let mut fired = 0;
    timers.retain_mut(|t| {
        if t.tick() {
            fired += 1;
            false
        } else {
            true
        }
    });
    fired
}

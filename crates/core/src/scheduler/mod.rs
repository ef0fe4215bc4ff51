//! Tick counter and per-class cadence decisions
//!
//! The scheduler owns the monotone tick counter and answers one question per
//! frame class: is this class due on the current tick? A class with interval
//! N is due iff `tick % N == 0`, so every class fires on tick 0.
//!
//! The counter increments by exactly 1 per tick, unconditionally, after frame
//! emission. There is no rollback on downstream failure; cadence is anchored
//! to loop iterations, not to delivery.

use crate::params::CadenceConfig;

/// Per-tick cadence scheduler
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    tick: u64,
    cadence: CadenceConfig,
}

impl TickScheduler {
    /// Create a scheduler at tick 0
    pub fn new(cadence: CadenceConfig) -> Self {
        Self { tick: 0, cadence }
    }

    /// Current tick number
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Button class due this tick
    #[inline]
    pub fn buttons_due(&self) -> bool {
        self.tick % self.cadence.buttons == 0
    }

    /// Steering class due this tick
    #[inline]
    pub fn steering_due(&self) -> bool {
        self.tick % self.cadence.steering == 0
    }

    /// Fast UI class due this tick
    #[inline]
    pub fn ui_fast_due(&self) -> bool {
        self.tick % self.cadence.ui_fast == 0
    }

    /// Slow UI class due this tick
    #[inline]
    pub fn ui_slow_due(&self) -> bool {
        self.tick % self.cadence.ui_slow == 0
    }

    /// Monotone command epoch for the extended steering frame
    ///
    /// Increments once per steering interval; never resets within a session.
    #[inline]
    pub fn steering_epoch(&self) -> u64 {
        self.tick / self.cadence.steering
    }

    /// Advance to the next tick
    #[inline]
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

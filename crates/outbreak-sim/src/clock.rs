//! Time sources for the simulation engine.
//!
//! The engine samples its clock exactly once per running tick; every timer in
//! that tick reads the same value.

use std::time::Instant;

use outbreak_core::constants::DT;

/// A monotonic time source, in seconds.
pub trait Clock: Send {
    /// Sample the clock. Successive samples never decrease.
    fn sample(&mut self) -> f64;
}

/// Advances exactly one tick per sample. Deterministic; used by default and in tests.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    now: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(DT)
    }
}

impl Clock for FixedStepClock {
    fn sample(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }
}

/// Wall-clock time since construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn sample(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

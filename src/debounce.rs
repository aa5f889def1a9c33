//! Settle-delay handling for interactive recalculation.
//!
//! Input edits arrive in bursts. A [`Debouncer`] holds the newest value until
//! no edit has arrived for `delay`; only then is it released. Time is passed
//! in by the caller, so the state machine has no clock or thread of its own.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::config::CoemapConfig;
use crate::core::{RoiCalculation, RoiMetrics};
use crate::roi::RoiCalculator;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Latest-value debouncer driven by explicit timestamps.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    last_submit: Option<Instant>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_submit: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any pending value and restarts the settle window.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.last_submit = Some(now);
    }

    /// The pending value, once `delay` has passed since the last submit.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let settled = self
            .last_submit
            .is_some_and(|at| now.saturating_duration_since(at) >= self.delay);
        if settled {
            self.flush()
        } else {
            None
        }
    }

    /// The pending value regardless of the settle window.
    pub fn flush(&mut self) -> Option<T> {
        self.last_submit = None;
        self.pending.take()
    }
}

/// Recomputes ROI metrics only for inputs that have settled.
#[derive(Debug, Clone, Default)]
pub struct RoiRecalculator {
    debouncer: Debouncer<RoiCalculation>,
    calculator: RoiCalculator,
    computations: u64,
    latest: Option<RoiMetrics>,
}

impl RoiRecalculator {
    pub fn new(calculator: RoiCalculator, delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            calculator,
            computations: 0,
            latest: None,
        }
    }

    /// Calculator settings and settle delay from `.coemap.toml`.
    pub fn from_config(config: &CoemapConfig) -> Self {
        Self::new(
            RoiCalculator::new(config.roi_settings()),
            Duration::from_millis(config.debounce_delay_ms()),
        )
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn edit(&mut self, calculation: RoiCalculation, now: Instant) {
        trace!(id = %calculation.id, "ROI input edited");
        self.debouncer.submit(calculation, now);
    }

    /// Metrics for the settled input, if a new one settled since the last tick.
    pub fn tick(&mut self, now: Instant) -> Option<RoiMetrics> {
        let calculation = self.debouncer.poll(now)?;
        Some(self.compute(&calculation))
    }

    /// Computes immediately for whatever input is pending.
    pub fn flush(&mut self) -> Option<RoiMetrics> {
        let calculation = self.debouncer.flush()?;
        Some(self.compute(&calculation))
    }

    fn compute(&mut self, calculation: &RoiCalculation) -> RoiMetrics {
        let metrics = self.calculator.calculate(calculation);
        self.computations += 1;
        self.latest = Some(metrics);
        metrics
    }

    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn latest(&self) -> Option<&RoiMetrics> {
        self.latest.as_ref()
    }
}

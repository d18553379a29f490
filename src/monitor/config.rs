//! Monitor Configuration
//!
//! Run parameters for the tick loop. Out-of-range values are clamped with a
//! warning rather than rejected, matching how the operator-facing controls
//! bound their sliders.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALERT_THRESHOLD, DEFAULT_ITERATIONS, DEFAULT_RATE_HZ, MAX_RATE_HZ, MIN_RATE_HZ,
};

/// Configuration for one monitoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Ticks to execute
    pub iterations: u32,
    /// Packet rate (packets/sec), valid range [0.1, 2.0]
    pub rate_hz: f32,
    /// Display annotation for the chart threshold line, (0, 1]
    pub alert_threshold: f32,
    /// Start from fresh counters (reference behavior). When false, counters,
    /// history, and the alert journal carry over and sequence ids continue.
    pub reset_state: bool,
    /// Treat a sink failure as fatal instead of logging and continuing
    pub halt_on_render_failure: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rate_hz: DEFAULT_RATE_HZ,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            reset_state: true,
            halt_on_render_failure: false,
        }
    }
}

impl MonitorConfig {
    pub fn new(iterations: u32, rate_hz: f32) -> Self {
        Self {
            iterations,
            rate_hz,
            ..Default::default()
        }
    }

    /// Clamp every field into its valid range, warning on adjustments
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();

        if !(MIN_RATE_HZ..=MAX_RATE_HZ).contains(&config.rate_hz) {
            let clamped = config.rate_hz.clamp(MIN_RATE_HZ, MAX_RATE_HZ);
            log::warn!(
                "rate_hz {} outside [{}, {}], clamped to {}",
                config.rate_hz,
                MIN_RATE_HZ,
                MAX_RATE_HZ,
                clamped
            );
            config.rate_hz = clamped;
        }

        if config.alert_threshold <= 0.0 || config.alert_threshold > 1.0 {
            let clamped = config.alert_threshold.clamp(f32::EPSILON, 1.0);
            log::warn!(
                "alert_threshold {} outside (0, 1], clamped to {}",
                config.alert_threshold,
                clamped
            );
            config.alert_threshold = clamped;
        }

        config
    }

    /// Interval between ticks at the configured rate
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.rate_hz)
    }
}

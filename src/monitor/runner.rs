//! Streaming Monitor - the tick loop
//!
//! Drives the packet-by-packet pipeline: pace, generate, normalize,
//! classify, update state, emit. Strictly sequential; no tick is ever
//! partially applied, and cancellation takes effect only at tick
//! boundaries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::MonitorConfig;
use super::error::MonitorError;
use super::event::{AlertRecord, MonitorEvent};
use super::state::MonitorState;
use crate::classifier::Classifier;
use crate::clock::Clock;
use crate::constants::SEQUENCE_BASE;
use crate::sink::EventSink;
use crate::source::FeatureSource;

// ============================================================================
// RUN STATE & SUMMARY
// ============================================================================

/// Lifecycle of one run invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    Completed,
}

/// Terminal report of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed: u64,
    pub attacks: u64,
    pub cancelled: bool,
}

/// Handle for stopping a run from outside the loop
///
/// Checked only at tick boundaries; the current tick always finishes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Re-arm the token for a new run
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

// ============================================================================
// MONITOR
// ============================================================================

/// Owns monitor state and drives the pipeline over injected collaborators
pub struct Monitor<'a> {
    classifier: &'a dyn Classifier,
    source: &'a mut dyn FeatureSource,
    clock: &'a mut dyn Clock,
    state: MonitorState,
    run_state: RunState,
    cancel: CancelToken,
}

impl<'a> Monitor<'a> {
    pub fn new(
        classifier: &'a dyn Classifier,
        source: &'a mut dyn FeatureSource,
        clock: &'a mut dyn Clock,
    ) -> Self {
        Self {
            classifier,
            source,
            clock,
            state: MonitorState::new(),
            run_state: RunState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Install an externally held cancel token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Execute one monitoring run
    ///
    /// Refuses to consume any tick if the classifier is not ready. Feature
    /// shape mismatches and classifier failures abort the run (fail-fast);
    /// sink failures are logged and skipped unless the config says halt.
    pub fn run(
        &mut self,
        config: &MonitorConfig,
        sink: &mut dyn EventSink,
    ) -> Result<RunSummary, MonitorError> {
        if !self.classifier.is_ready() {
            log::error!("Refusing to start: classifier not ready");
            return Err(MonitorError::ModelUnavailable);
        }

        let config = config.normalized();
        if config.reset_state {
            self.state.reset();
        }

        self.run_state = RunState::Running;
        let interval = config.tick_interval();
        let expected_dim = self.classifier.input_dim();
        let mut cancelled = false;

        log::info!(
            "Surveillance run started: {} ticks at {} pkt/s (threshold {:.0}%)",
            config.iterations,
            config.rate_hz,
            config.alert_threshold * 100.0
        );

        for tick in 0..config.iterations {
            if self.cancel.is_cancelled() {
                log::info!("Run cancelled at tick boundary {}", tick);
                cancelled = true;
                break;
            }

            self.clock.pace(interval);

            let vector = self.source.next_vector();
            if vector.len() != expected_dim {
                self.run_state = RunState::Idle;
                return Err(MonitorError::FeatureShape {
                    tick,
                    expected: expected_dim,
                    actual: vector.len(),
                });
            }

            let normalized = self.classifier.normalize(&vector);
            let result = self.classifier.classify(&normalized).map_err(|e| {
                self.run_state = RunState::Idle;
                MonitorError::Classifier {
                    tick,
                    message: e.to_string(),
                }
            })?;

            // One state update per tick, applied as a unit.
            let timestamp = self.clock.timestamp();
            let sequence_id = format!("PKT-{}", SEQUENCE_BASE + self.state.processed());

            let alert = result.is_attack.then(|| {
                log::warn!(
                    "[INTRUSION] {} score {:.2}% -> blocked",
                    sequence_id,
                    result.probability * 100.0
                );
                AlertRecord::new(sequence_id.clone(), timestamp.clone(), result.probability)
            });

            self.state.record_tick(result.probability, alert.clone());

            let event = MonitorEvent {
                sequence_id,
                timestamp,
                processed_count: self.state.processed(),
                normal_count: self.state.normal(),
                attack_count: self.state.attacks(),
                anomaly_score: result.probability,
                threshold: config.alert_threshold,
                score_history: self.state.history().snapshot(),
                alert,
            };

            if let Err(e) = sink.emit(&event) {
                log::warn!("Render failure at tick {}: {}", tick, e);
                if config.halt_on_render_failure {
                    self.run_state = RunState::Idle;
                    return Err(MonitorError::Render {
                        tick,
                        message: e.to_string(),
                    });
                }
            }
        }

        self.run_state = RunState::Completed;
        let summary = RunSummary {
            processed: self.state.processed(),
            attacks: self.state.attacks(),
            cancelled,
        };

        log::info!(
            "Simulation complete: {} packets analyzed, {} intrusions detected{}",
            summary.processed,
            summary.attacks,
            if cancelled { " (cancelled)" } else { "" }
        );

        Ok(summary)
    }
}

// ============================================================================
// TESTS
// ============================================================================

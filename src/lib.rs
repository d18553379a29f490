//! Streaming IDS Monitor - SOC dashboard simulation core
//!
//! Simulates network packets, scores them with a pre-trained binary
//! classifier, and emits one immutable [`monitor::MonitorEvent`] per tick
//! carrying rolling KPIs, a bounded anomaly-score history, and the alert
//! that tick produced (if any).
//!
//! ## Structure
//! - `features` - fixed-dimension feature vectors
//! - `classifier/` - scoring adapters (ONNX model + scaler, heuristic fallback)
//! - `source/` - synthetic packet generation
//! - `clock` - wall-clock timestamps + cooperative pacing
//! - `sink/` - event consumers (console renderer, in-memory collector)
//! - `monitor/` - the tick loop, state, events, and alert policy

pub mod constants;
pub mod features;

pub mod classifier;
pub mod clock;
pub mod monitor;
pub mod sink;
pub mod source;

//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default artifact path or loop parameter, only edit this file.

/// Default number of ticks per run
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Default packet rate (packets/sec)
pub const DEFAULT_RATE_HZ: f32 = 1.0;

/// Minimum accepted packet rate
pub const MIN_RATE_HZ: f32 = 0.1;

/// Maximum accepted packet rate
pub const MAX_RATE_HZ: f32 = 2.0;

/// Default alert threshold (display annotation, matches the model boundary)
pub const DEFAULT_ALERT_THRESHOLD: f32 = 0.5;

/// Capacity of the rolling anomaly-score history
pub const HISTORY_CAPACITY: usize = 50;

/// Base offset for packet sequence ids (PKT-1000, PKT-1001, ...)
pub const SEQUENCE_BASE: u64 = 1000;

/// How many alert rows display sinks show
pub const ALERT_DISPLAY_ROWS: usize = 10;

/// Default ONNX model artifact
pub const DEFAULT_MODEL_PATH: &str = "IDS_RandomForest_v1.onnx";

/// Default fitted scaler artifact
pub const DEFAULT_SCALER_PATH: &str = "IDS_Scaler_v1.json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "ids-monitor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("IDS_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get scaler artifact path from environment or use default
pub fn get_scaler_path() -> String {
    std::env::var("IDS_SCALER_PATH").unwrap_or_else(|_| DEFAULT_SCALER_PATH.to_string())
}

/// Get iteration count from environment or use default
pub fn get_iterations() -> u32 {
    std::env::var("IDS_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
}

/// Get packet rate from environment or use default
pub fn get_rate_hz() -> f32 {
    std::env::var("IDS_RATE_HZ")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RATE_HZ)
}

//! Classifier Adapters - normalize-then-score contract
//!
//! The monitor never interprets model internals: it hands a raw
//! [`FeatureVector`] to an adapter and trusts the returned label. The
//! decision threshold lives inside the adapter; the monitor only forwards
//! it for display annotation.
//!
//! ## Structure
//! - `scaler.rs` - fitted min/max feature scaler (JSON artifact)
//! - `onnx.rs` - ONNX Runtime backed adapter (model + scaler artifacts)
//! - `heuristic.rs` - artifact-free fallback adapter

pub mod heuristic;
pub mod onnx;
pub mod scaler;

pub use heuristic::HeuristicClassifier;
pub use onnx::OnnxClassifier;
pub use scaler::{FeatureScaler, ScalerError};

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

// ============================================================================
// RESULT & STATUS
// ============================================================================

/// Output of one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Model decision: malicious traffic
    pub is_attack: bool,
    /// Attack probability in [0, 1]
    pub probability: f32,
    /// Decision boundary the label was derived from (display annotation)
    pub threshold: f32,
}

/// Engine status surface for operator display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct ClassifierError(pub String);

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClassifierError: {}", self.0)
    }
}

impl std::error::Error for ClassifierError {}

// ============================================================================
// ADAPTER TRAIT
// ============================================================================

/// Contract every scoring adapter implements
///
/// `normalize` and `classify` are deterministic given the loaded artifacts
/// and have no side effects beyond internal latency counters.
pub trait Classifier {
    /// Feature dimension the adapter expects
    fn input_dim(&self) -> usize;

    /// Whether artifacts are loaded and scoring can run
    fn is_ready(&self) -> bool;

    /// Apply the fitted scaling; same dimensionality in and out
    fn normalize(&self, features: &FeatureVector) -> Vec<f32>;

    /// Score a normalized vector
    fn classify(&self, normalized: &[f32]) -> Result<ClassificationResult, ClassifierError>;

    /// Operator-facing status snapshot
    fn status(&self) -> EngineStatus;
}

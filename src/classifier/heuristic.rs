//! Heuristic Fallback Adapter
//!
//! Artifact-free scoring for demos and environments without the trained
//! model. Burst traffic in the simulator multiplies every feature by 5, so
//! the unit-scaled mean magnitude separates the two populations cleanly.

use std::sync::atomic::{AtomicU64, Ordering};

use super::scaler::FeatureScaler;
use super::{ClassificationResult, Classifier, ClassifierError, EngineStatus};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Mean magnitude at which the heuristic starts assigning attack probability
const BASELINE_MEAN: f32 = 0.55;

/// Slope mapping mean magnitude above baseline to probability
const MEAN_GAIN: f32 = 3.0;

/// Deterministic, artifact-free classifier
pub struct HeuristicClassifier {
    scaler: FeatureScaler,
    threshold: f32,
    inference_count: AtomicU64,
}

impl HeuristicClassifier {
    pub fn new(threshold: f32) -> Self {
        Self {
            scaler: FeatureScaler::unit(FEATURE_COUNT),
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            inference_count: AtomicU64::new(0),
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_ALERT_THRESHOLD)
    }
}

impl Classifier for HeuristicClassifier {
    fn input_dim(&self) -> usize {
        FEATURE_COUNT
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn normalize(&self, features: &FeatureVector) -> Vec<f32> {
        self.scaler.transform(features.as_slice())
    }

    fn classify(&self, normalized: &[f32]) -> Result<ClassificationResult, ClassifierError> {
        if normalized.is_empty() {
            return Err(ClassifierError("Empty feature vector".to_string()));
        }

        let mean = normalized.iter().sum::<f32>() / normalized.len() as f32;
        let probability = ((mean - BASELINE_MEAN) * MEAN_GAIN).clamp(0.0, 1.0);

        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(ClassificationResult {
            is_attack: probability >= self.threshold,
            probability,
            threshold: self.threshold,
        })
    }

    fn status(&self) -> EngineStatus {
        EngineStatus {
            model_loaded: false,
            model_name: "heuristic".to_string(),
            inference_device: "CPU (heuristic)".to_string(),
            avg_latency_ms: 0.0,
            inference_count: self.inference_count.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_traffic_scores_low() {
        let classifier = HeuristicClassifier::default();
        // Uniform [0,1) traffic has mean ~0.5, below the heuristic baseline.
        let normalized = vec![0.5; FEATURE_COUNT];
        let result = classifier.classify(&normalized).unwrap();
        assert!(!result.is_attack);
        assert_eq!(result.probability, 0.0);
    }

    #[test]
    fn test_burst_traffic_scores_high() {
        let classifier = HeuristicClassifier::default();
        // Burst vectors clamp to 1.0 after unit scaling.
        let normalized = vec![1.0; FEATURE_COUNT];
        let result = classifier.classify(&normalized).unwrap();
        assert!(result.is_attack);
        assert_eq!(result.probability, 1.0);
    }

    #[test]
    fn test_empty_vector_is_an_error() {
        let classifier = HeuristicClassifier::default();
        assert!(classifier.classify(&[]).is_err());
    }

    #[test]
    fn test_deterministic_given_same_input() {
        let classifier = HeuristicClassifier::default();
        let normalized = vec![0.8; FEATURE_COUNT];
        let a = classifier.classify(&normalized).unwrap();
        let b = classifier.classify(&normalized).unwrap();
        assert_eq!(a, b);
    }
}

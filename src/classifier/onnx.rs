//! ONNX Runtime Adapter
//!
//! Loads the trained model and its fitted scaler once, then scores packets
//! through the normalize-then-classify contract. Latency counters live on
//! the instance so two adapters never share state.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::scaler::FeatureScaler;
use super::{ClassificationResult, Classifier, ClassifierError, EngineStatus};
use crate::features::FeatureVector;

/// Adapter over an ONNX binary classifier and its fitted scaler
pub struct OnnxClassifier {
    session: Mutex<Session>,
    scaler: FeatureScaler,
    threshold: f32,
    model_name: String,
    loaded_at: DateTime<Utc>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl OnnxClassifier {
    /// Load both named artifacts; either missing is a load failure
    pub fn load(
        model_path: &Path,
        scaler_path: &Path,
        threshold: f32,
    ) -> Result<Self, ClassifierError> {
        log::info!("Loading ONNX model from: {:?}", model_path);

        if !model_path.exists() {
            return Err(ClassifierError(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| ClassifierError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ClassifierError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ClassifierError(format!("Failed to load model: {}", e)))?;

        let scaler = FeatureScaler::load(scaler_path)
            .map_err(|e| ClassifierError(format!("Failed to load scaler: {}", e)))?;

        log::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            scaler,
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            model_name: model_path.display().to_string(),
            loaded_at: Utc::now(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    /// When the artifacts were loaded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    fn track(&self, elapsed_us: u64) {
        self.latency_sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Classifier for OnnxClassifier {
    fn input_dim(&self) -> usize {
        self.scaler.dim()
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn normalize(&self, features: &FeatureVector) -> Vec<f32> {
        self.scaler.transform(features.as_slice())
    }

    fn classify(&self, normalized: &[f32]) -> Result<ClassificationResult, ClassifierError> {
        let start_time = std::time::Instant::now();

        let input_array = Array2::<f32>::from_shape_vec((1, normalized.len()), normalized.to_vec())
            .map_err(|e| ClassifierError(format!("Array error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| ClassifierError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ClassifierError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ClassifierError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ClassifierError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        // Binary classifier export: [p(normal), p(attack)] or a single score.
        let probability = match data.len() {
            0 => return Err(ClassifierError("Empty output tensor".to_string())),
            1 => data[0],
            _ => data[1],
        }
        .clamp(0.0, 1.0);

        self.track(start_time.elapsed().as_micros() as u64);

        Ok(ClassificationResult {
            is_attack: probability >= self.threshold,
            probability,
            threshold: self.threshold,
        })
    }

    fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_loaded: true,
            model_name: self.model_name.clone(),
            inference_device: "ONNX Runtime (CPU)".to_string(),
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_model_fails() {
        let result = OnnxClassifier::load(
            Path::new("/nonexistent/model.onnx"),
            Path::new("/nonexistent/scaler.json"),
            0.5,
        );
        let err = result.err().expect("load must fail without artifacts");
        assert!(err.0.contains("Model not found"));
    }

    #[test]
    fn test_load_missing_scaler_fails() {
        // Model path must exist to get past the first check.
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.onnx");
        std::fs::write(&model_path, b"not a real model").unwrap();

        let result = OnnxClassifier::load(&model_path, Path::new("/nonexistent/scaler.json"), 0.5);
        assert!(result.is_err());
    }
}

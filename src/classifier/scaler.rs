//! Fitted Feature Scaler
//!
//! Min/max scaling parameters learned during training, shipped as a JSON
//! artifact next to the model. Transform output is clamped to [0, 1].

use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub enum ScalerError {
    /// Artifact missing or unreadable
    Io(std::io::Error),
    /// Artifact exists but is not a valid scaler
    Parse(String),
    /// min/max vectors disagree on dimensionality
    DimensionMismatch { min_len: usize, max_len: usize },
}

impl std::fmt::Display for ScalerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalerError::Io(e) => write!(f, "scaler artifact unreadable: {}", e),
            ScalerError::Parse(msg) => write!(f, "scaler artifact invalid: {}", msg),
            ScalerError::DimensionMismatch { min_len, max_len } => write!(
                f,
                "scaler dimension mismatch: {} min values vs {} max values",
                min_len, max_len
            ),
        }
    }
}

impl std::error::Error for ScalerError {}

// ============================================================================
// SCALER
// ============================================================================

/// Min/max normalization parameters from training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub min_vals: Vec<f32>,
    pub max_vals: Vec<f32>,
}

impl FeatureScaler {
    /// Unit scaler (identity on already-[0,1] features)
    pub fn unit(dim: usize) -> Self {
        Self {
            min_vals: vec![0.0; dim],
            max_vals: vec![1.0; dim],
        }
    }

    /// Load a fitted scaler from a JSON artifact
    pub fn load(path: &Path) -> Result<Self, ScalerError> {
        let contents = std::fs::read_to_string(path).map_err(ScalerError::Io)?;
        let scaler: FeatureScaler =
            serde_json::from_str(&contents).map_err(|e| ScalerError::Parse(e.to_string()))?;
        scaler.validate()?;
        log::info!("Loaded scaler from {:?} ({} features)", path, scaler.dim());
        Ok(scaler)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ScalerError> {
        if self.min_vals.len() != self.max_vals.len() {
            return Err(ScalerError::DimensionMismatch {
                min_len: self.min_vals.len(),
                max_len: self.max_vals.len(),
            });
        }
        Ok(())
    }

    /// Feature dimension this scaler was fitted on
    pub fn dim(&self) -> usize {
        self.min_vals.len()
    }

    /// Scale one vector into [0, 1]
    pub fn transform(&self, features: &[f32]) -> Vec<f32> {
        features
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let min_val = self.min_vals.get(i).copied().unwrap_or(0.0);
                let max_val = self.max_vals.get(i).copied().unwrap_or(1.0);
                let range = (max_val - min_val).max(1e-8);
                ((value - min_val) / range).clamp(0.0, 1.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_scaler_is_identity_within_range() {
        let scaler = FeatureScaler::unit(4);
        let out = scaler.transform(&[0.0, 0.25, 0.5, 1.0]);
        assert_eq!(out, vec![0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_transform_clamps_out_of_range() {
        let scaler = FeatureScaler::unit(3);
        let out = scaler.transform(&[-1.0, 2.5, 5.0]);
        assert_eq!(out, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_transform_applies_fitted_range() {
        let scaler = FeatureScaler {
            min_vals: vec![10.0, 0.0],
            max_vals: vec![20.0, 100.0],
        };
        let out = scaler.transform(&[15.0, 50.0]);
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_dimension_mismatch() {
        let scaler = FeatureScaler {
            min_vals: vec![0.0; 3],
            max_vals: vec![1.0; 2],
        };
        match scaler.validate() {
            Err(ScalerError::DimensionMismatch { min_len, max_len }) => {
                assert_eq!(min_len, 3);
                assert_eq!(max_len, 2);
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");

        let original = FeatureScaler {
            min_vals: vec![0.0, 1.0],
            max_vals: vec![2.0, 3.0],
        };
        std::fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

        let loaded = FeatureScaler::load(&path).unwrap();
        assert_eq!(loaded.min_vals, original.min_vals);
        assert_eq!(loaded.max_vals, original.max_vals);
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = FeatureScaler::load(Path::new("/nonexistent/scaler.json"));
        assert!(matches!(result, Err(ScalerError::Io(_))));
    }
}

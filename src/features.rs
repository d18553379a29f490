//! Feature Vector - Core data structure for classifier input
//!
//! One vector per simulated packet. Dimensionality is fixed by the trained
//! model; the monitor checks every vector against the adapter's expected
//! dimension before scoring.

use serde::{Deserialize, Serialize};

/// Number of features the trained model expects per packet
pub const FEATURE_COUNT: usize = 196;

/// Ordered, fixed-dimension feature vector
///
/// Immutable once produced; consumed exactly once by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// Create from raw values
    pub fn from_values(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Create a zeroed vector of the model dimension
    pub fn zeroed() -> Self {
        Self {
            values: vec![0.0; FEATURE_COUNT],
        }
    }

    /// Number of features in this vector
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_values(values)
    }
}

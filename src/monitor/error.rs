//! Monitor Errors
//!
//! Everything that can stop a run. Tick-scoped failures carry the tick
//! index at which they occurred so the operator can line them up against
//! the emitted events.

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug)]
pub enum MonitorError {
    /// Classifier artifacts missing or corrupt; no tick was consumed
    ModelUnavailable,
    /// Source produced a vector of the wrong dimensionality (fail-fast)
    FeatureShape {
        tick: u32,
        expected: usize,
        actual: usize,
    },
    /// Adapter failed while scoring (fail-fast)
    Classifier { tick: u32, message: String },
    /// Sink failed and the run is configured to halt on render failures
    Render { tick: u32, message: String },
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorError::ModelUnavailable => {
                write!(f, "classifier unavailable: model artifacts not loaded")
            }
            MonitorError::FeatureShape {
                tick,
                expected,
                actual,
            } => write!(
                f,
                "malformed feature vector at tick {}: expected {} features, got {}",
                tick, expected, actual
            ),
            MonitorError::Classifier { tick, message } => {
                write!(f, "classifier failed at tick {}: {}", tick, message)
            }
            MonitorError::Render { tick, message } => {
                write!(f, "sink failed at tick {}: {}", tick, message)
            }
        }
    }
}

impl std::error::Error for MonitorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_shape_message_carries_tick() {
        let err = MonitorError::FeatureShape {
            tick: 7,
            expected: 196,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("tick 7"));
        assert!(msg.contains("196"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_model_unavailable_message() {
        assert!(MonitorError::ModelUnavailable
            .to_string()
            .contains("unavailable"));
    }
}

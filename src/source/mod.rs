//! Feature Sources - where simulated packets come from
//!
//! The monitor pulls exactly one vector per tick. Sources own their RNG so a
//! seeded source replays the same traffic stream run after run.

pub mod synthetic;

pub use synthetic::SyntheticSource;

use crate::features::FeatureVector;

/// Producer of one feature vector per tick
pub trait FeatureSource {
    fn next_vector(&mut self) -> FeatureVector;
}

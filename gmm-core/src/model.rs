//! The model evaluation contract.
//!
//! A [`GroundMotionModel`] maps one [`GmmInput`] to a [`ScalarGroundMotion`].
//! Concrete equations and the decorating transformations (magnitude
//! conversion, regional correction, scale adjustment, spectral interpolation)
//! all implement the same trait and compose by explicit wrapping at
//! construction. Models are immutable after construction and shared as
//! `Arc<dyn GroundMotionModel>`, so evaluation is pure and safe to call from
//! any number of threads without locking.

use crate::constraints::Constraints;
use crate::errors::GmmResult;
use crate::input::GmmInput;
use serde::{Deserialize, Serialize};

/// The mean and standard deviation of natural-log ground motion.
///
/// Together these describe a lognormal distribution of the predicted
/// intensity measure. Value-equality, immutable, per-call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarGroundMotion {
    /// Mean of ln ground motion
    pub mean: f64,
    /// Standard deviation of ln ground motion, non-negative
    pub sigma: f64,
}

impl ScalarGroundMotion {
    pub fn new(mean: f64, sigma: f64) -> Self {
        Self { mean, sigma }
    }
}

/// A ground-motion model: one published equation, or a transformation of one.
///
/// Implementations validate the input they actually compute on against their
/// [`Constraints`] before evaluating; decorators delegate and therefore
/// inherit the inner model's validation of the rewritten input. No
/// implementation may compute on out-of-range input silently.
#[typetag::serde]
pub trait GroundMotionModel: std::fmt::Debug + Send + Sync {
    /// Human-readable model name, unique per composed variant.
    fn name(&self) -> &str;

    /// The permissible input ranges for this model.
    fn constraints(&self) -> &Constraints;

    /// Evaluates the model for one rupture/site description.
    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion>;
}

/// Serde support for shared trait-object model references.
///
/// Decorators hold their delegates as `Arc<dyn GroundMotionModel>` so a
/// factory-cached instance is shared rather than rebuilt. Serialization goes
/// through the trait object; deserialization rebuilds a boxed instance and
/// re-shares it.
pub mod serde_arc {
    use super::GroundMotionModel;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::sync::Arc;

    pub fn serialize<S>(model: &Arc<dyn GroundMotionModel>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        model.as_ref().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Arc<dyn GroundMotionModel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let boxed: Box<dyn GroundMotionModel> = Deserialize::deserialize(deserializer)?;
        Ok(Arc::from(boxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ground_motion_value_equality() {
        let a = ScalarGroundMotion::new(-2.0, 0.3);
        let b = ScalarGroundMotion::new(-2.0, 0.3);
        assert_eq!(a, b);
        assert_ne!(a, ScalarGroundMotion::new(-2.0, 0.4));
    }

    #[test]
    fn test_scalar_ground_motion_serialization() {
        let gm = ScalarGroundMotion::new(-1.7697, 0.3);
        let json = serde_json::to_string(&gm).unwrap();
        let back: ScalarGroundMotion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gm);
    }
}

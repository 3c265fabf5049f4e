//! Fixed per-measure scale adjustment.
//!
//! Specialized sub-populations of events (a particular rupture style, for
//! example) sometimes need a uniform shift on top of a general model without
//! re-deriving the whole equation. [`ScaledGmm`] adds a constant natural-log
//! term to the delegate's mean; the term is fixed per intensity measure at
//! construction and is never input-dependent.

use crate::constraints::Constraints;
use crate::errors::GmmResult;
use crate::input::GmmInput;
use crate::model::{serde_arc, GroundMotionModel, ScalarGroundMotion};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Decorates a model with a fixed additive mean adjustment.
///
/// Sigma is unchanged by this composition.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaledGmm {
    name: String,
    #[serde(with = "serde_arc")]
    delegate: Arc<dyn GroundMotionModel>,
    /// Natural-log additive term
    scale: f64,
}

impl ScaledGmm {
    pub fn new(name: impl Into<String>, delegate: Arc<dyn GroundMotionModel>, scale: f64) -> Self {
        Self {
            name: name.into(),
            delegate,
            scale,
        }
    }
}

#[typetag::serde]
impl GroundMotionModel for ScaledGmm {
    fn name(&self) -> &str {
        &self.name
    }

    fn constraints(&self) -> &Constraints {
        self.delegate.constraints()
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        let inner = self.delegate.evaluate(input)?;
        Ok(ScalarGroundMotion::new(inner.mean + self.scale, inner.sigma))
    }
}

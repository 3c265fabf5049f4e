#![allow(dead_code)]

//! Synthetic models used by the framework's own tests.

use crate::constraints::Constraints;
use crate::errors::GmmResult;
use crate::input::GmmInput;
use crate::model::{GroundMotionModel, ScalarGroundMotion};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A model returning a fixed ground motion for any in-range input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ConstantGmm {
    name: String,
    gm: ScalarGroundMotion,
    constraints: Constraints,
}

impl ConstantGmm {
    pub fn new(name: impl Into<String>, mean: f64, sigma: f64) -> Self {
        Self {
            name: name.into(),
            gm: ScalarGroundMotion::new(mean, sigma),
            constraints: Constraints::defaults(),
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

#[typetag::serde]
impl GroundMotionModel for ConstantGmm {
    fn name(&self) -> &str {
        &self.name
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        self.constraints.validate(input)?;
        Ok(self.gm)
    }
}

/// A model recording the input it is actually evaluated with, so decorator
/// tests can observe what reaches the delegate.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CapturingGmm {
    name: String,
    mean: f64,
    sigma: f64,
    constraints: Constraints,
    #[serde(skip)]
    seen: Mutex<Option<GmmInput>>,
}

impl CapturingGmm {
    pub fn new(mean: f64, sigma: f64) -> Self {
        Self {
            name: "capturing".to_string(),
            mean,
            sigma,
            constraints: Constraints::defaults(),
            seen: Mutex::new(None),
        }
    }

    /// The input seen by the most recent `evaluate` call.
    pub fn last_input(&self) -> Option<GmmInput> {
        *self.seen.lock().expect("capture lock poisoned")
    }
}

#[typetag::serde]
impl GroundMotionModel for CapturingGmm {
    fn name(&self) -> &str {
        &self.name
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        self.constraints.validate(input)?;
        *self.seen.lock().expect("capture lock poisoned") = Some(*input);
        Ok(ScalarGroundMotion::new(self.mean, self.sigma))
    }
}

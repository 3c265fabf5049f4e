//! Regional transport of a calibrated model via an empirical correction.
//!
//! A well-constrained equation from one tectonic region is reused in another
//! by evaluating it mechanism-independent and adding a region-specific,
//! frequency-dependent correction term. [`DepthCorrection`] holds the
//! published piecewise constants; [`CorrectedGmm`] applies them on top of an
//! arbitrary delegate.

use crate::constraints::Constraints;
use crate::errors::GmmResult;
use crate::input::GmmInput;
use crate::model::{serde_arc, GroundMotionModel, ScalarGroundMotion};
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_10;
use std::sync::Arc;

/// The additive correction term `Δ(rJB, zTop)` for one intensity measure.
///
/// The term is computed in log10 units and converted to natural log:
///
/// `Δ = (x0 + x1 · log10(max(1, rJB))) · ln 10`
///
/// where the distance slope `x1 = min(sa + sb·log10 f, s_cap)` and the
/// intercept `x0` is selected by rupture-top depth: the shallow branch
/// (`zTop < shallow_depth_limit`) is floored, the deep branch
/// (`zTop > deep_depth_limit`) is capped, and mid-depth events use a fixed
/// constant. The floor on one branch and cap on the other are empirically
/// tuned published constants; the asymmetry is intentional and must not be
/// made symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthCorrection {
    /// log10 of the measure's representative frequency (Hz)
    pub log10_freq: f64,
    pub slope_intercept: f64,
    pub slope_gradient: f64,
    pub slope_cap: f64,
    pub shallow_intercept: f64,
    pub shallow_gradient: f64,
    pub shallow_floor: f64,
    pub deep_intercept: f64,
    pub deep_gradient: f64,
    pub deep_cap: f64,
    pub mid_intercept: f64,
    /// Depth below which the shallow branch applies (km)
    pub shallow_depth_limit: f64,
    /// Depth above which the deep branch applies (km)
    pub deep_depth_limit: f64,
}

impl DepthCorrection {
    /// The natural-log correction term for one rupture.
    pub fn term(&self, r_jb: f64, z_top: f64) -> f64 {
        let x1 = (self.slope_intercept + self.slope_gradient * self.log10_freq).min(self.slope_cap);
        let x0 = if z_top < self.shallow_depth_limit {
            (self.shallow_intercept + self.shallow_gradient * self.log10_freq)
                .max(self.shallow_floor)
        } else if z_top > self.deep_depth_limit {
            (self.deep_intercept + self.deep_gradient * self.log10_freq).min(self.deep_cap)
        } else {
            self.mid_intercept
        };
        let log_a = x0 + x1 * r_jb.max(1.0).log10();
        log_a * LN_10
    }
}

/// Decorates a model with a regional correction.
///
/// The delegate is always evaluated with the mechanism forced to unknown,
/// reflecting that the transported equation is applied mechanism-independent
/// in the target region. The correction term is added to the delegate's
/// mean; when the model family specifies a frequency-independent sigma, that
/// value fully replaces the delegate's sigma.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectedGmm {
    name: String,
    #[serde(with = "serde_arc")]
    delegate: Arc<dyn GroundMotionModel>,
    correction: DepthCorrection,
    sigma: Option<f64>,
    constraints: Constraints,
}

impl CorrectedGmm {
    pub fn new(
        name: impl Into<String>,
        delegate: Arc<dyn GroundMotionModel>,
        correction: DepthCorrection,
        sigma: Option<f64>,
        constraints: Constraints,
    ) -> Self {
        Self {
            name: name.into(),
            delegate,
            correction,
            sigma,
            constraints,
        }
    }
}

#[typetag::serde]
impl GroundMotionModel for CorrectedGmm {
    fn name(&self) -> &str {
        &self.name
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        self.constraints.validate(input)?;
        let inner = self.delegate.evaluate(&input.with_unknown_rake())?;
        let mean = inner.mean + self.correction.term(input.r_jb, input.z_top);
        let sigma = self.sigma.unwrap_or(inner.sigma);
        Ok(ScalarGroundMotion::new(mean, sigma))
    }
}

//! Interpolation between spectral periods.
//!
//! A target period without its own coefficient row is served by evaluating
//! the two bracketing spectral models and interpolating, linear in log
//! period and linear in the interpolated value. The law is applied to mean
//! and sigma independently.

use crate::constraints::Constraints;
use crate::errors::{GmmError, GmmResult};
use crate::imt::Imt;
use crate::input::GmmInput;
use crate::model::{serde_arc, GroundMotionModel, ScalarGroundMotion};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Two-point interpolation, linear in `ln t`.
///
/// Evaluating at `t = t_lo` or `t = t_hi` reproduces the corresponding
/// endpoint value exactly (up to floating-point rounding).
pub fn interpolate(t_lo: f64, v_lo: f64, t_hi: f64, v_hi: f64, t: f64) -> f64 {
    let fraction = (t.ln() - t_lo.ln()) / (t_hi.ln() - t_lo.ln());
    v_lo + (v_hi - v_lo) * fraction
}

/// Composes two already-resolved spectral models bracketing a target period.
///
/// Construction requires both bracketing measures to be spectral
/// accelerations with `t_lo < t_target < t_hi`; anything else is an
/// [`GmmError::InvalidComposition`].
#[derive(Debug, Serialize, Deserialize)]
pub struct InterpolatedGmm {
    name: String,
    t_lo: f64,
    t_hi: f64,
    t_target: f64,
    #[serde(with = "serde_arc")]
    lo: Arc<dyn GroundMotionModel>,
    #[serde(with = "serde_arc")]
    hi: Arc<dyn GroundMotionModel>,
}

impl InterpolatedGmm {
    pub fn new(
        name: impl Into<String>,
        imt_lo: Imt,
        lo: Arc<dyn GroundMotionModel>,
        imt_hi: Imt,
        hi: Arc<dyn GroundMotionModel>,
        target: Imt,
    ) -> GmmResult<Self> {
        let t_lo = require_sa(imt_lo)?;
        let t_hi = require_sa(imt_hi)?;
        let t_target = require_sa(target)?;
        if t_lo >= t_hi {
            return Err(GmmError::InvalidComposition(format!(
                "bracketing periods must be ordered, got {t_lo} s >= {t_hi} s"
            )));
        }
        if t_target <= t_lo || t_target >= t_hi {
            return Err(GmmError::InvalidComposition(format!(
                "target period {t_target} s is not strictly inside ({t_lo} s, {t_hi} s)"
            )));
        }
        Ok(Self {
            name: name.into(),
            t_lo,
            t_hi,
            t_target,
            lo,
            hi,
        })
    }
}

fn require_sa(imt: Imt) -> GmmResult<f64> {
    imt.period().ok_or_else(|| {
        GmmError::InvalidComposition(format!(
            "interpolation requires spectral-acceleration measures, got {imt}"
        ))
    })
}

#[typetag::serde]
impl GroundMotionModel for InterpolatedGmm {
    fn name(&self) -> &str {
        &self.name
    }

    fn constraints(&self) -> &Constraints {
        self.lo.constraints()
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        let lo = self.lo.evaluate(input)?;
        let hi = self.hi.evaluate(input)?;
        let mean = interpolate(self.t_lo, lo.mean, self.t_hi, hi.mean, self.t_target);
        let sigma = interpolate(self.t_lo, lo.sigma, self.t_hi, hi.sigma, self.t_target);
        Ok(ScalarGroundMotion::new(mean, sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example_models::ConstantGmm;
    use is_close::is_close;

    fn bracket() -> (Arc<dyn GroundMotionModel>, Arc<dyn GroundMotionModel>) {
        (
            Arc::new(ConstantGmm::new("lo", -2.0, 0.5)),
            Arc::new(ConstantGmm::new("hi", -3.0, 0.7)),
        )
    }

    #[test]
    fn test_interpolation_is_linear_in_log_period() {
        // The log-period midpoint of [0.1, 1.0] is 10^-0.5, not 0.55
        let mid = interpolate(0.1, -2.0, 1.0, -3.0, 0.1_f64.sqrt());
        assert!(is_close!(mid, -2.5));
    }

    #[test]
    fn test_endpoints_reproduce_bracketing_values() {
        assert!(is_close!(interpolate(0.1, -2.0, 1.0, -3.0, 0.1), -2.0));
        assert!(is_close!(interpolate(0.1, -2.0, 1.0, -3.0, 1.0), -3.0));
    }

    #[test]
    fn test_endpoint_identity_of_composed_model() {
        // Bypasses the strict-bracket construction check so the target can
        // sit exactly on an endpoint.
        let (lo, hi) = bracket();
        let at_lo = InterpolatedGmm {
            name: "at lo".to_string(),
            t_lo: 0.1,
            t_hi: 1.0,
            t_target: 0.1,
            lo: lo.clone(),
            hi: hi.clone(),
        };
        let at_hi = InterpolatedGmm {
            name: "at hi".to_string(),
            t_lo: 0.1,
            t_hi: 1.0,
            t_target: 1.0,
            lo,
            hi,
        };

        let input = GmmInput::builder().build();
        let gm_lo = at_lo.evaluate(&input).unwrap();
        assert!(is_close!(gm_lo.mean, -2.0));
        assert!(is_close!(gm_lo.sigma, 0.5));

        let gm_hi = at_hi.evaluate(&input).unwrap();
        assert!(is_close!(gm_hi.mean, -3.0));
        assert!(is_close!(gm_hi.sigma, 0.7));
    }

    #[test]
    fn test_mean_and_sigma_interpolate_independently() {
        let (lo, hi) = bracket();
        let model = InterpolatedGmm::new(
            "interp",
            Imt::sa(0.1).unwrap(),
            lo,
            Imt::sa(1.0).unwrap(),
            hi,
            Imt::sa(0.5).unwrap(),
        )
        .unwrap();

        let gm = model.evaluate(&GmmInput::builder().build()).unwrap();
        assert!(is_close!(gm.mean, interpolate(0.1, -2.0, 1.0, -3.0, 0.5)));
        assert!(is_close!(gm.sigma, interpolate(0.1, 0.5, 1.0, 0.7, 0.5)));
    }

    #[test]
    fn test_construction_rejects_invalid_brackets() {
        let sa = |t: f64| Imt::sa(t).unwrap();

        // non-spectral bracketing measure
        let (lo, hi) = bracket();
        assert!(matches!(
            InterpolatedGmm::new("x", Imt::Pga, lo, sa(1.0), hi, sa(0.5)),
            Err(GmmError::InvalidComposition(_))
        ));

        // out-of-order periods
        let (lo, hi) = bracket();
        assert!(matches!(
            InterpolatedGmm::new("x", sa(1.0), lo, sa(0.1), hi, sa(0.5)),
            Err(GmmError::InvalidComposition(_))
        ));

        // target on an endpoint
        let (lo, hi) = bracket();
        assert!(matches!(
            InterpolatedGmm::new("x", sa(0.1), lo, sa(1.0), hi, sa(0.1)),
            Err(GmmError::InvalidComposition(_))
        ));

        // target outside the bracket
        let (lo, hi) = bracket();
        assert!(matches!(
            InterpolatedGmm::new("x", sa(0.1), lo, sa(1.0), hi, sa(2.0)),
            Err(GmmError::InvalidComposition(_))
        ));
    }
}

//! The rupture and site description supplied to a model evaluation.
//!
//! A [`GmmInput`] is an immutable per-call value: decorating models rewrite a
//! copy of it (magnitude conversion, mechanism forcing) and the caller's
//! value is never touched. The focal mechanism is carried as an explicit
//! optional rake angle rather than a numeric not-a-value marker, so an
//! "unknown" mechanism cannot leak into arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the input fields, used in constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Mw,
    Rjb,
    ZTop,
    Dip,
    Width,
    Rake,
    Vs30,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Mw => write!(f, "Mw"),
            Field::Rjb => write!(f, "rJB"),
            Field::ZTop => write!(f, "zTop"),
            Field::Dip => write!(f, "dip"),
            Field::Width => write!(f, "width"),
            Field::Rake => write!(f, "rake"),
            Field::Vs30 => write!(f, "vs30"),
        }
    }
}

/// Style of faulting derived from the rake angle.
///
/// Rakes within 30° of horizontal are strike-slip; positive rakes steeper
/// than that are reverse, negative ones normal. An absent rake maps to
/// [`FaultStyle::Unspecified`], which selects the mechanism-independent
/// branch of equations that carry mechanism dummies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultStyle {
    StrikeSlip,
    Normal,
    Reverse,
    Unspecified,
}

impl FaultStyle {
    pub fn from_rake(rake: Option<f64>) -> Self {
        match rake {
            None => FaultStyle::Unspecified,
            Some(r) if r > 30.0 && r < 150.0 => FaultStyle::Reverse,
            Some(r) if r < -30.0 && r > -150.0 => FaultStyle::Normal,
            Some(_) => FaultStyle::StrikeSlip,
        }
    }
}

/// One ground-motion evaluation request.
///
/// Distances are in km, the dip and rake in degrees, and vs30 in m/s. A
/// `rake` of `None` is the first-class "unknown mechanism" sentinel and is
/// distinct from any numeric rake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GmmInput {
    /// Moment magnitude
    pub mw: f64,
    /// Joyner-Boore distance: shortest horizontal distance to the surface
    /// projection of the rupture (km)
    pub r_jb: f64,
    /// Depth to the top of the rupture (km)
    pub z_top: f64,
    /// Fault dip (degrees)
    pub dip: f64,
    /// Down-dip rupture width (km)
    pub width: f64,
    /// Rake angle (degrees), or `None` for an unknown mechanism
    pub rake: Option<f64>,
    /// Average shear-wave velocity in the upper 30 m (m/s)
    pub vs30: f64,
}

impl GmmInput {
    /// A builder seeded with the reference event: an M 6.5 vertical
    /// strike-slip-sized rupture 10 km from a firm-rock site.
    pub fn builder() -> GmmInputBuilder {
        GmmInputBuilder {
            input: GmmInput {
                mw: 6.5,
                r_jb: 10.0,
                z_top: 0.5,
                dip: 90.0,
                width: 14.0,
                rake: None,
                vs30: 760.0,
            },
        }
    }

    pub fn fault_style(&self) -> FaultStyle {
        FaultStyle::from_rake(self.rake)
    }

    /// A copy with the magnitude replaced; every other field is untouched.
    pub fn with_mw(self, mw: f64) -> Self {
        Self { mw, ..self }
    }

    /// A copy with the mechanism forced to unknown; every other field is
    /// untouched.
    pub fn with_unknown_rake(self) -> Self {
        Self { rake: None, ..self }
    }
}

/// Builder for [`GmmInput`], seeded with reference-event defaults.
#[derive(Debug, Clone)]
pub struct GmmInputBuilder {
    input: GmmInput,
}

impl GmmInputBuilder {
    pub fn mw(mut self, mw: f64) -> Self {
        self.input.mw = mw;
        self
    }

    pub fn r_jb(mut self, r_jb: f64) -> Self {
        self.input.r_jb = r_jb;
        self
    }

    pub fn z_top(mut self, z_top: f64) -> Self {
        self.input.z_top = z_top;
        self
    }

    pub fn dip(mut self, dip: f64) -> Self {
        self.input.dip = dip;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.input.width = width;
        self
    }

    pub fn rake(mut self, rake: f64) -> Self {
        self.input.rake = Some(rake);
        self
    }

    pub fn unknown_rake(mut self) -> Self {
        self.input.rake = None;
        self
    }

    pub fn vs30(mut self, vs30: f64) -> Self {
        self.input.vs30 = vs30;
        self
    }

    pub fn build(self) -> GmmInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let input = GmmInput::builder().build();
        assert_eq!(input.mw, 6.5);
        assert_eq!(input.r_jb, 10.0);
        assert_eq!(input.z_top, 0.5);
        assert_eq!(input.dip, 90.0);
        assert_eq!(input.width, 14.0);
        assert_eq!(input.rake, None);
        assert_eq!(input.vs30, 760.0);
    }

    #[test]
    fn test_fault_style_classification() {
        assert_eq!(FaultStyle::from_rake(None), FaultStyle::Unspecified);
        assert_eq!(FaultStyle::from_rake(Some(0.0)), FaultStyle::StrikeSlip);
        assert_eq!(FaultStyle::from_rake(Some(180.0)), FaultStyle::StrikeSlip);
        assert_eq!(FaultStyle::from_rake(Some(-175.0)), FaultStyle::StrikeSlip);
        assert_eq!(FaultStyle::from_rake(Some(90.0)), FaultStyle::Reverse);
        assert_eq!(FaultStyle::from_rake(Some(-90.0)), FaultStyle::Normal);
        // 30° of horizontal is still strike-slip
        assert_eq!(FaultStyle::from_rake(Some(30.0)), FaultStyle::StrikeSlip);
        assert_eq!(FaultStyle::from_rake(Some(150.0)), FaultStyle::StrikeSlip);
    }

    #[test]
    fn test_with_mw_changes_only_magnitude() {
        let input = GmmInput::builder().rake(45.0).build();
        let converted = input.with_mw(5.0);
        assert_eq!(converted.mw, 5.0);
        assert_eq!(
            GmmInput { mw: input.mw, ..converted },
            input,
            "no field other than magnitude may change"
        );
    }

    #[test]
    fn test_with_unknown_rake_changes_only_rake() {
        let input = GmmInput::builder().rake(45.0).build();
        let forced = input.with_unknown_rake();
        assert_eq!(forced.rake, None);
        assert_eq!(
            GmmInput { rake: input.rake, ..forced },
            input,
            "no field other than rake may change"
        );
    }
}

//! Boore & Atkinson (2008) shallow-crustal ground-motion model.
//!
//! Predicts the geometric-mean horizontal component from an event term with
//! mechanism dummies and a hinged magnitude scaling, a path term in
//! `R = √(rJB² + h²)`, and a linear vs30 site term:
//!
//! $$\ln Y = F_M(M) + F_D(M, r_{JB}) + F_S(v_{s30})$$
//!
//! The Atkinson (2010) Hawaii model delegates to this equation.
//!
//! **Reference:** Boore, D.M., and Atkinson, G.M., 2008, Ground-motion
//! prediction equations for the average horizontal component of PGA, PGV,
//! and 5%-damped PSA at spectral periods between 0.01 s and 10.0 s:
//! Earthquake Spectra, v. 24, n. 1, p. 99-138.

use gmm_core::coefficients::{CoefficientRow, CoefficientTable};
use gmm_core::constraints::Constraints;
use gmm_core::errors::GmmResult;
use gmm_core::factory::{GmmFactory, GmmFamily};
use gmm_core::imt::Imt;
use gmm_core::input::{FaultStyle, GmmInput};
use gmm_core::model::{GroundMotionModel, ScalarGroundMotion};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Family identifier used for factory resolution.
pub const ID: &str = "BA08";

static COEFFS: LazyLock<CoefficientTable> = LazyLock::new(|| {
    CoefficientTable::from_toml_str(ID, include_str!("../resources/boore_atkinson_2008.toml"))
        .expect("bundled BA08 coefficient resource is well-formed")
});

/// The measures with direct coefficient rows.
pub fn supported_imts() -> Vec<Imt> {
    COEFFS.supported_imts()
}

const M_REF: f64 = 4.5;
const R_REF: f64 = 1.0;
const V_REF: f64 = 760.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Coefficients {
    e1: f64,
    e2: f64,
    e3: f64,
    e4: f64,
    e5: f64,
    e6: f64,
    e7: f64,
    mh: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    h: f64,
    blin: f64,
    sigma: f64,
}

impl Coefficients {
    fn from_row(imt: Imt, row: &CoefficientRow) -> GmmResult<Self> {
        Ok(Self {
            e1: row.require(imt, "e1")?,
            e2: row.require(imt, "e2")?,
            e3: row.require(imt, "e3")?,
            e4: row.require(imt, "e4")?,
            e5: row.require(imt, "e5")?,
            e6: row.require(imt, "e6")?,
            e7: row.require(imt, "e7")?,
            mh: row.require(imt, "mh")?,
            c1: row.require(imt, "c1")?,
            c2: row.require(imt, "c2")?,
            c3: row.require(imt, "c3")?,
            h: row.require(imt, "h")?,
            blin: row.require(imt, "blin")?,
            sigma: row.require(imt, "sigma")?,
        })
    }
}

/// Boore & Atkinson (2008) for one intensity measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooreAtkinson2008 {
    imt: Imt,
    coeffs: Coefficients,
    constraints: Constraints,
}

impl BooreAtkinson2008 {
    pub const NAME: &'static str = "Boore & Atkinson (2008)";

    pub fn new(imt: Imt) -> GmmResult<Self> {
        let coeffs = Coefficients::from_row(imt, COEFFS.row(imt)?)?;
        Ok(Self {
            imt,
            coeffs,
            constraints: Constraints::defaults(),
        })
    }

    /// Event term: mechanism dummy plus hinged magnitude scaling.
    fn magnitude_term(&self, mw: f64, style: FaultStyle) -> f64 {
        let c = &self.coeffs;
        let mech = match style {
            FaultStyle::Unspecified => c.e1,
            FaultStyle::StrikeSlip => c.e2,
            FaultStyle::Normal => c.e3,
            FaultStyle::Reverse => c.e4,
        };
        let dm = mw - c.mh;
        if mw <= c.mh {
            mech + c.e5 * dm + c.e6 * dm * dm
        } else {
            mech + c.e7 * dm
        }
    }

    /// Path term with magnitude-dependent geometric spreading and anelastic
    /// attenuation.
    fn distance_term(&self, mw: f64, r_jb: f64) -> f64 {
        let c = &self.coeffs;
        let r = (r_jb * r_jb + c.h * c.h).sqrt();
        (c.c1 + c.c2 * (mw - M_REF)) * (r / R_REF).ln() + c.c3 * (r - R_REF)
    }

    /// Linear site response relative to the reference velocity.
    fn site_term(&self, vs30: f64) -> f64 {
        self.coeffs.blin * (vs30 / V_REF).ln()
    }
}

#[typetag::serde]
impl GroundMotionModel for BooreAtkinson2008 {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn evaluate(&self, input: &GmmInput) -> GmmResult<ScalarGroundMotion> {
        self.constraints.validate(input)?;
        let mean = self.magnitude_term(input.mw, input.fault_style())
            + self.distance_term(input.mw, input.r_jb)
            + self.site_term(input.vs30);
        Ok(ScalarGroundMotion::new(mean, self.coeffs.sigma))
    }
}

#[derive(Debug)]
pub struct BooreAtkinson2008Family;

impl GmmFamily for BooreAtkinson2008Family {
    fn id(&self) -> &str {
        ID
    }

    fn supported_imts(&self) -> Vec<Imt> {
        supported_imts()
    }

    fn build(&self, imt: Imt, _factory: &GmmFactory) -> GmmResult<Arc<dyn GroundMotionModel>> {
        Ok(Arc::new(BooreAtkinson2008::new(imt)?))
    }
}

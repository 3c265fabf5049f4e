//! Atkinson (2010) ground-motion model for shallow and deep earthquakes in
//! Hawaii.
//!
//! A referenced-empirical model: the Boore & Atkinson (2008) equation is
//! evaluated mechanism-independent and a Hawaii-specific, frequency- and
//! depth-dependent correction factor is added to the mean. Sigma is the
//! frequency-independent value recommended by the author. A caldera-collapse
//! variant applies an additional period-dependent scale factor on top.
//!
//! **Reference:** Atkinson, G.M., 2010, Ground-motion prediction equations
//! for Hawaii from a referenced empirical approach: Bulletin of the
//! Seismological Society of America, v. 100, n. 2, p. 751-761.
//!
//! **Component:** geometric mean of two horizontal components

use crate::boore_atkinson;
use gmm_core::coefficients::CoefficientTable;
use gmm_core::constraints::{Bounds, Constraints};
use gmm_core::correction::{CorrectedGmm, DepthCorrection};
use gmm_core::errors::GmmResult;
use gmm_core::factory::{GmmFactory, GmmFamily};
use gmm_core::imt::Imt;
use gmm_core::model::GroundMotionModel;
use gmm_core::scale::ScaledGmm;
use std::f64::consts::LN_10;
use std::sync::{Arc, LazyLock};

/// Family identifier used for factory resolution.
pub const ID: &str = "ATKINSON_10";
/// Identifier of the caldera-collapse variant.
pub const CALDERA_ID: &str = "ATKINSON_10_CALDERA";

pub const NAME: &str = "Atkinson (2010) : Hawaii";
pub const CALDERA_NAME: &str = "Atkinson (2010) : Hawaii : Caldera";

/* contains only supported periods; drops PGV relative to the delegate */
static COEFFS: LazyLock<CoefficientTable> = LazyLock::new(|| {
    CoefficientTable::from_toml_str(ID, include_str!("../resources/atkinson_2010.toml"))
        .expect("bundled Atkinson (2010) coefficient resource is well-formed")
});

/* Gail recommends use of frequency-independent sigma */
const SIGMA: f64 = 0.26 * LN_10;

fn depth_correction(imt: Imt) -> DepthCorrection {
    DepthCorrection {
        log10_freq: imt.frequency().log10(),
        slope_intercept: -0.18,
        slope_gradient: 0.17,
        slope_cap: 0.0,
        shallow_intercept: 0.217,
        shallow_gradient: -0.321,
        shallow_floor: 0.0,
        deep_intercept: 0.263,
        deep_gradient: 0.0924,
        deep_cap: 0.35,
        mid_intercept: 0.2,
        shallow_depth_limit: 20.0,
        deep_depth_limit: 35.0,
    }
}

fn constraints() -> Constraints {
    Constraints::builder()
        .mw(Bounds::closed(5.0, 8.0))
        .r_jb(Bounds::closed(0.0, 200.0))
        .dip(Bounds::closed(0.0, 90.0))
        .width(Bounds::open_closed(0.0, 60.0))
        .rake(Bounds::closed(-180.0, 180.0))
        .vs30(Bounds::closed_open(180.0, 1300.0))
        .build()
}

#[derive(Debug)]
pub struct Atkinson2010Family;

impl GmmFamily for Atkinson2010Family {
    fn id(&self) -> &str {
        ID
    }

    fn supported_imts(&self) -> Vec<Imt> {
        COEFFS.supported_imts()
    }

    fn build(&self, imt: Imt, factory: &GmmFactory) -> GmmResult<Arc<dyn GroundMotionModel>> {
        let delegate = factory.resolve(boore_atkinson::ID, imt)?;
        Ok(Arc::new(CorrectedGmm::new(
            NAME,
            delegate,
            depth_correction(imt),
            Some(SIGMA),
            constraints(),
        )))
    }
}

#[derive(Debug)]
pub struct Atkinson2010CalderaFamily;

impl GmmFamily for Atkinson2010CalderaFamily {
    fn id(&self) -> &str {
        CALDERA_ID
    }

    fn supported_imts(&self) -> Vec<Imt> {
        COEFFS.supported_imts()
    }

    fn build(&self, imt: Imt, factory: &GmmFactory) -> GmmResult<Arc<dyn GroundMotionModel>> {
        let inner = factory.resolve(ID, imt)?;
        let scale = COEFFS.row(imt)?.require(imt, "scale")?;
        Ok(Arc::new(ScaledGmm::new(CALDERA_NAME, inner, scale * LN_10)))
    }
}

//! Magnitude-basis variants for grid sources cataloged in mb.
//!
//! Each variant is a distinct named sibling family that converts the input
//! magnitude to the moment basis before delegating to its base family. One
//! variant exists per published conversion relation.

use crate::boore_atkinson;
use gmm_core::convert::{ConvertedGmm, MagConverter};
use gmm_core::errors::GmmResult;
use gmm_core::factory::{GmmFactory, GmmFamily};
use gmm_core::imt::Imt;
use gmm_core::model::GroundMotionModel;
use std::sync::Arc;

/// Johnston (1996) variant of the crustal base family.
pub const BA08_J_ID: &str = "BA08_MB_J";
/// Atkinson & Boore (1995) variant of the crustal base family.
pub const BA08_AB_ID: &str = "BA08_MB_AB";

/// A family delegating to `base` with the input magnitude converted.
#[derive(Debug)]
pub struct MbVariantFamily {
    id: &'static str,
    base: &'static str,
    converter: MagConverter,
}

impl MbVariantFamily {
    pub fn new(id: &'static str, base: &'static str, converter: MagConverter) -> Self {
        Self {
            id,
            base,
            converter,
        }
    }

    /// The two mb variants of the crustal base family.
    pub fn crustal_variants() -> [Self; 2] {
        [
            Self::new(BA08_J_ID, boore_atkinson::ID, MagConverter::MbToMwJohnston),
            Self::new(
                BA08_AB_ID,
                boore_atkinson::ID,
                MagConverter::MbToMwAtkinsonBoore,
            ),
        ]
    }
}

impl GmmFamily for MbVariantFamily {
    fn id(&self) -> &str {
        self.id
    }

    fn supported_imts(&self) -> Vec<Imt> {
        boore_atkinson::supported_imts()
    }

    fn build(&self, imt: Imt, factory: &GmmFactory) -> GmmResult<Arc<dyn GroundMotionModel>> {
        let delegate = factory.resolve(self.base, imt)?;
        let name = format!("{} : {}", delegate.name(), self.converter);
        Ok(Arc::new(ConvertedGmm::new(name, self.converter, delegate)))
    }
}

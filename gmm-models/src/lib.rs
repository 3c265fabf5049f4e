//! Published ground-motion model families.
//!
//! Each module implements one family (or a set of closely related variants)
//! against the `gmm-core` evaluation contract, with its coefficients in an
//! embedded TOML resource and a [`gmm_core::factory::GmmFamily`]
//! registration.
//!
//! # Module organisation
//!
//! - `boore_atkinson`: the shallow-crustal reference equation
//! - `atkinson`: the Hawaii referenced-empirical model and its
//!   caldera-collapse variant
//! - `ceus_mb`: magnitude-basis sibling variants for mb-cataloged sources

pub mod atkinson;
pub mod boore_atkinson;
pub mod ceus_mb;

use gmm_core::factory::GmmFactory;
use std::sync::Arc;

/// A factory with every family in this crate registered.
pub fn default_factory() -> GmmFactory {
    let mut factory = GmmFactory::new();
    factory.register(Arc::new(boore_atkinson::BooreAtkinson2008Family));
    factory.register(Arc::new(atkinson::Atkinson2010Family));
    factory.register(Arc::new(atkinson::Atkinson2010CalderaFamily));
    for variant in ceus_mb::MbVariantFamily::crustal_variants() {
        factory.register(Arc::new(variant));
    }
    factory
}

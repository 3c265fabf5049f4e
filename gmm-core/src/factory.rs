//! Model resolution and instance caching.
//!
//! A [`GmmFactory`] holds the registered model families and memoizes every
//! resolved `(family, intensity measure)` pair. Repeated resolution of the
//! same pair yields the same shared instance, and the underlying coefficient
//! state is constructed at most once even under concurrent resolution:
//! each cache key owns a once-cell, so racing resolvers block on the single
//! in-flight construction instead of building and overwriting each other.
//!
//! The factory is an explicit collaborator passed to the code that needs it,
//! which keeps the framework testable against synthetic families; nothing
//! here is process-global.

use crate::errors::{GmmError, GmmResult};
use crate::imt::{sa_bracket, Imt};
use crate::interpolate::InterpolatedGmm;
use crate::model::GroundMotionModel;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

/// A registered model family: everything the factory needs to construct the
/// family's model for a requested intensity measure.
///
/// `build` receives the factory back so families composed from other
/// families (regional corrections, magnitude-basis variants) resolve their
/// delegates through the shared cache instead of constructing private
/// copies.
pub trait GmmFamily: fmt::Debug + Send + Sync {
    /// Stable identifier used as the resolution key.
    fn id(&self) -> &str;

    /// The measures this family has direct coefficient rows for. Spectral
    /// measures between two supported rows are served by interpolation.
    fn supported_imts(&self) -> Vec<Imt>;

    /// Constructs the family's model for a directly supported measure.
    fn build(&self, imt: Imt, factory: &GmmFactory) -> GmmResult<Arc<dyn GroundMotionModel>>;
}

type ModelCell = Arc<OnceLock<GmmResult<Arc<dyn GroundMotionModel>>>>;

/// Resolves `(family, intensity measure)` pairs to cached, immutable model
/// instances.
#[derive(Debug, Default)]
pub struct GmmFactory {
    families: HashMap<String, Arc<dyn GmmFamily>>,
    cache: Mutex<HashMap<(String, Imt), ModelCell>>,
}

impl GmmFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a family, replacing any previous registration of the same
    /// id.
    pub fn register(&mut self, family: Arc<dyn GmmFamily>) {
        self.families.insert(family.id().to_string(), family);
    }

    /// The registered family ids, sorted for stable output.
    pub fn family_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.families.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolves a model instance, constructing and caching it on first use.
    ///
    /// A spectral measure without a direct coefficient row is served by an
    /// [`InterpolatedGmm`] over the cached bracketing instances; a measure
    /// with neither a row nor a bracket is an
    /// [`GmmError::UnsupportedImt`].
    pub fn resolve(&self, family: &str, imt: Imt) -> GmmResult<Arc<dyn GroundMotionModel>> {
        let family = self
            .families
            .get(family)
            .ok_or_else(|| GmmError::UnknownFamily(family.to_string()))?
            .clone();

        let cell = {
            let mut cache = self.cache.lock().expect("model cache lock poisoned");
            cache
                .entry((family.id().to_string(), imt))
                .or_default()
                .clone()
        };

        // First resolver constructs; concurrent resolvers for the same key
        // block here until the one authoritative result is available.
        // Construction runs outside the cache lock, so families are free to
        // resolve their delegates reentrantly.
        cell.get_or_init(|| {
            debug!("constructing {} for {}", family.id(), imt);
            self.construct(family.as_ref(), imt)
        })
        .clone()
    }

    fn construct(
        &self,
        family: &dyn GmmFamily,
        imt: Imt,
    ) -> GmmResult<Arc<dyn GroundMotionModel>> {
        let supported = family.supported_imts();
        if supported.contains(&imt) {
            return family.build(imt, self);
        }
        if let Some(period) = imt.period() {
            if let Some((lo, hi)) = sa_bracket(&supported, period) {
                let lo_model = self.resolve(family.id(), lo)?;
                let hi_model = self.resolve(family.id(), hi)?;
                let name = format!("{} : interpolated {}", family.id(), imt);
                let model = InterpolatedGmm::new(name, lo, lo_model, hi, hi_model, imt)?;
                return Ok(Arc::new(model));
            }
        }
        Err(GmmError::UnsupportedImt {
            family: family.id().to_string(),
            imt,
        })
    }
}

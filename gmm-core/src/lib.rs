//! Core traits and value types for evaluating empirical ground-motion
//! models.
//!
//! The crate fixes the evaluation contract (one immutable
//! [`input::GmmInput`] in, one [`model::ScalarGroundMotion`] out) and the
//! composition machinery that lets independently published equations and
//! their transformations (magnitude-basis conversion, regional correction,
//! scale adjustment, spectral-period interpolation) stack behind the single
//! [`model::GroundMotionModel`] trait. Concrete published equations live in
//! companion crates and register themselves as [`factory::GmmFamily`]
//! implementations.

pub mod coefficients;
pub mod constraints;
pub mod convert;
pub mod correction;
mod example_models;
pub mod factory;
pub mod imt;
pub mod input;
pub mod interpolate;
pub mod model;
pub mod scale;

pub mod errors;

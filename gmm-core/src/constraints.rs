//! Permissible input ranges attached to a model.
//!
//! Every field a model's formula reads must carry a range, and inputs outside
//! a range are rejected with a [`GmmError::ConstraintViolation`] rather than
//! clamped. An unknown rake always passes the rake bound: it is a first-class
//! sentinel selecting mechanism-independent evaluation, not a missing value.

use crate::errors::{GmmError, GmmResult};
use crate::input::{Field, GmmInput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A real interval with independently open or closed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: f64,
    max: f64,
    min_inclusive: bool,
    max_inclusive: bool,
}

impl Bounds {
    /// `[min, max]`
    pub fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    /// `[min, max)`
    pub fn closed_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: false,
        }
    }

    /// `(min, max]`
    pub fn open_closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
            max_inclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        let below = if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        };
        above && below
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.min, self.max, close)
    }
}

/// Per-field permissible ranges for one model.
///
/// Immutable once built. Fields without a bound are unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    mw: Option<Bounds>,
    r_jb: Option<Bounds>,
    z_top: Option<Bounds>,
    dip: Option<Bounds>,
    width: Option<Bounds>,
    rake: Option<Bounds>,
    vs30: Option<Bounds>,
}

impl Constraints {
    pub fn builder() -> ConstraintsBuilder {
        ConstraintsBuilder {
            constraints: Constraints {
                mw: None,
                r_jb: None,
                z_top: None,
                dip: None,
                width: None,
                rake: None,
                vs30: None,
            },
        }
    }

    /// The framework-wide default ranges, used by models that do not declare
    /// tighter ones.
    pub fn defaults() -> Self {
        Self::builder()
            .mw(Bounds::closed(4.0, 9.5))
            .r_jb(Bounds::closed(0.0, 300.0))
            .z_top(Bounds::closed(0.0, 700.0))
            .dip(Bounds::closed(0.0, 90.0))
            .width(Bounds::open_closed(0.0, 60.0))
            .rake(Bounds::closed(-180.0, 180.0))
            .vs30(Bounds::closed(150.0, 2000.0))
            .build()
    }

    /// Checks `input` against the declared ranges, reporting the first
    /// offending field. Never clamps.
    pub fn validate(&self, input: &GmmInput) -> GmmResult<()> {
        check(self.mw, Field::Mw, input.mw)?;
        check(self.r_jb, Field::Rjb, input.r_jb)?;
        check(self.z_top, Field::ZTop, input.z_top)?;
        check(self.dip, Field::Dip, input.dip)?;
        check(self.width, Field::Width, input.width)?;
        if let Some(rake) = input.rake {
            check(self.rake, Field::Rake, rake)?;
        }
        check(self.vs30, Field::Vs30, input.vs30)?;
        Ok(())
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::defaults()
    }
}

fn check(bounds: Option<Bounds>, field: Field, value: f64) -> GmmResult<()> {
    match bounds {
        Some(bounds) if !bounds.contains(value) => Err(GmmError::ConstraintViolation {
            field,
            value,
            bounds,
        }),
        _ => Ok(()),
    }
}

/// Builder for [`Constraints`].
#[derive(Debug, Clone)]
pub struct ConstraintsBuilder {
    constraints: Constraints,
}

impl ConstraintsBuilder {
    pub fn mw(mut self, bounds: Bounds) -> Self {
        self.constraints.mw = Some(bounds);
        self
    }

    pub fn r_jb(mut self, bounds: Bounds) -> Self {
        self.constraints.r_jb = Some(bounds);
        self
    }

    pub fn z_top(mut self, bounds: Bounds) -> Self {
        self.constraints.z_top = Some(bounds);
        self
    }

    pub fn dip(mut self, bounds: Bounds) -> Self {
        self.constraints.dip = Some(bounds);
        self
    }

    pub fn width(mut self, bounds: Bounds) -> Self {
        self.constraints.width = Some(bounds);
        self
    }

    pub fn rake(mut self, bounds: Bounds) -> Self {
        self.constraints.rake = Some(bounds);
        self
    }

    pub fn vs30(mut self, bounds: Bounds) -> Self {
        self.constraints.vs30 = Some(bounds);
        self
    }

    pub fn build(self) -> Constraints {
        self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_endpoints() {
        let closed = Bounds::closed(5.0, 8.0);
        assert!(closed.contains(5.0));
        assert!(closed.contains(8.0));
        assert!(!closed.contains(4.9));
        assert!(!closed.contains(8.1));

        let half = Bounds::closed_open(180.0, 1300.0);
        assert!(half.contains(180.0));
        assert!(!half.contains(1300.0));

        let width = Bounds::open_closed(0.0, 60.0);
        assert!(!width.contains(0.0));
        assert!(width.contains(60.0));
    }

    #[test]
    fn test_bounds_display() {
        assert_eq!(Bounds::closed(5.0, 8.0).to_string(), "[5, 8]");
        assert_eq!(Bounds::closed_open(180.0, 1300.0).to_string(), "[180, 1300)");
        assert_eq!(Bounds::open_closed(0.0, 60.0).to_string(), "(0, 60]");
    }

    #[test]
    fn test_closed_magnitude_bounds_are_enforced() {
        let constraints = Constraints::builder().mw(Bounds::closed(5.0, 8.0)).build();

        for mw in [5.0, 6.5, 8.0] {
            let input = GmmInput::builder().mw(mw).build();
            assert!(
                constraints.validate(&input).is_ok(),
                "magnitude {} lies on or inside the closed bounds",
                mw
            );
        }

        for mw in [4.9, 8.1] {
            let input = GmmInput::builder().mw(mw).build();
            let err = constraints.validate(&input).unwrap_err();
            match err {
                GmmError::ConstraintViolation { field, value, .. } => {
                    assert_eq!(field, Field::Mw);
                    assert_eq!(value, mw);
                }
                other => panic!("expected a constraint violation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_rake_passes_rake_bound() {
        let constraints = Constraints::defaults();
        let unknown = GmmInput::builder().unknown_rake().build();
        assert!(constraints.validate(&unknown).is_ok());

        let out_of_range = GmmInput::builder().rake(200.0).build();
        assert!(matches!(
            constraints.validate(&out_of_range),
            Err(GmmError::ConstraintViolation {
                field: Field::Rake,
                ..
            })
        ));
    }

    #[test]
    fn test_defaults_accept_reference_event() {
        assert!(Constraints::defaults()
            .validate(&GmmInput::builder().build())
            .is_ok());
    }

    #[test]
    fn test_violation_message_names_field_and_range() {
        let constraints = Constraints::builder().mw(Bounds::closed(5.0, 8.0)).build();
        let err = constraints
            .validate(&GmmInput::builder().mw(4.9).build())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Mw"), "got '{message}'");
        assert!(message.contains("[5, 8]"), "got '{message}'");
    }
}

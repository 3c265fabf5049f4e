//! Intensity measure identifiers.
//!
//! An [`Imt`] names the ground-motion quantity a model predicts: peak ground
//! acceleration, peak ground velocity, or spectral acceleration at a response
//! period. Spectral periods carry a total ordering so coefficient tables can
//! be keyed by measure and interpolation brackets can be validated.

use crate::errors::{GmmError, GmmResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A spectral-acceleration response period, in seconds.
///
/// Finite and strictly positive by construction, which makes the wrapped
/// value totally ordered and usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SaPeriod(f64);

impl SaPeriod {
    pub fn new(period: f64) -> GmmResult<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(GmmError::InvalidPeriod(period));
        }
        Ok(Self(period))
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}

impl Eq for SaPeriod {}

impl Ord for SaPeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        // Finite by construction, so a total order exists.
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl PartialOrd for SaPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for SaPeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Positive finite values have a unique bit pattern.
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for SaPeriod {
    type Error = GmmError;

    fn try_from(period: f64) -> GmmResult<Self> {
        Self::new(period)
    }
}

impl From<SaPeriod> for f64 {
    fn from(period: SaPeriod) -> f64 {
        period.0
    }
}

/// Identifier for the intensity measure predicted by a model.
///
/// Ordering places the named measures first and sorts spectral measures by
/// period, mirroring how coefficient resources list their columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Imt {
    /// Peak ground acceleration (g)
    Pga,
    /// Peak ground velocity (cm/s)
    Pgv,
    /// Spectral acceleration (g) at a response period
    Sa(SaPeriod),
}

impl Imt {
    /// Spectral acceleration at the supplied period in seconds.
    pub fn sa(period: f64) -> GmmResult<Self> {
        Ok(Imt::Sa(SaPeriod::new(period)?))
    }

    /// The response period in seconds, for spectral measures only.
    pub fn period(&self) -> Option<f64> {
        match self {
            Imt::Sa(p) => Some(p.seconds()),
            _ => None,
        }
    }

    /// The representative frequency of this measure in Hz.
    ///
    /// PGA maps to 100 Hz and PGV to 1 Hz, the conventions used by the
    /// published frequency-dependent correction terms.
    pub fn frequency(&self) -> f64 {
        match self {
            Imt::Pga => 100.0,
            Imt::Pgv => 1.0,
            Imt::Sa(p) => 1.0 / p.seconds(),
        }
    }

    pub fn is_sa(&self) -> bool {
        matches!(self, Imt::Sa(_))
    }
}

impl fmt::Display for Imt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imt::Pga => write!(f, "pga"),
            Imt::Pgv => write!(f, "pgv"),
            Imt::Sa(p) => write!(f, "sa({})", p.seconds()),
        }
    }
}

impl FromStr for Imt {
    type Err = GmmError;

    fn from_str(s: &str) -> GmmResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pga") {
            return Ok(Imt::Pga);
        }
        if s.eq_ignore_ascii_case("pgv") {
            return Ok(Imt::Pgv);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(inner) = lower.strip_prefix("sa(").and_then(|r| r.strip_suffix(')')) {
            let period: f64 = inner.parse().map_err(|_| {
                GmmError::InvalidResource(format!("unparseable spectral period '{inner}'"))
            })?;
            return Imt::sa(period);
        }
        Err(GmmError::InvalidResource(format!(
            "unrecognized intensity measure '{s}'"
        )))
    }
}

/// Finds the spectral measures in `imts` that bracket `period`.
///
/// Returns the closest measure strictly below and strictly above the target,
/// or `None` when either side is missing. Non-spectral measures are ignored.
pub fn sa_bracket(imts: &[Imt], period: f64) -> Option<(Imt, Imt)> {
    let mut lo: Option<(f64, Imt)> = None;
    let mut hi: Option<(f64, Imt)> = None;
    for imt in imts {
        let t = match imt.period() {
            Some(t) => t,
            None => continue,
        };
        if t < period && lo.map_or(true, |(best, _)| t > best) {
            lo = Some((t, *imt));
        }
        if t > period && hi.map_or(true, |(best, _)| t < best) {
            hi = Some((t, *imt));
        }
    }
    match (lo, hi) {
        (Some((_, lo)), Some((_, hi))) => Some((lo, hi)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_must_be_finite_and_positive() {
        assert!(SaPeriod::new(0.2).is_ok());
        assert!(matches!(
            SaPeriod::new(0.0),
            Err(GmmError::InvalidPeriod(_))
        ));
        assert!(matches!(
            SaPeriod::new(-1.0),
            Err(GmmError::InvalidPeriod(_))
        ));
        assert!(matches!(
            SaPeriod::new(f64::NAN),
            Err(GmmError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_ordering_sorts_spectral_periods() {
        let mut imts = vec![
            Imt::sa(1.0).unwrap(),
            Imt::Pga,
            Imt::sa(0.1).unwrap(),
            Imt::Pgv,
        ];
        imts.sort();
        assert_eq!(
            imts,
            vec![
                Imt::Pga,
                Imt::Pgv,
                Imt::sa(0.1).unwrap(),
                Imt::sa(1.0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_frequency_conventions() {
        assert_eq!(Imt::Pga.frequency(), 100.0);
        assert_eq!(Imt::Pgv.frequency(), 1.0);
        assert_eq!(Imt::sa(0.2).unwrap().frequency(), 5.0);
    }

    #[test]
    fn test_display_round_trip() {
        for imt in [Imt::Pga, Imt::Pgv, Imt::sa(0.25).unwrap()] {
            let parsed: Imt = imt.to_string().parse().unwrap();
            assert_eq!(parsed, imt);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_measure() {
        assert!("pgd".parse::<Imt>().is_err());
        assert!("sa(abc)".parse::<Imt>().is_err());
        assert!("sa(-0.5)".parse::<Imt>().is_err());
    }

    #[test]
    fn test_sa_bracket() {
        let imts = vec![
            Imt::Pga,
            Imt::sa(0.1).unwrap(),
            Imt::sa(0.3).unwrap(),
            Imt::sa(1.0).unwrap(),
        ];
        let (lo, hi) = sa_bracket(&imts, 0.5).unwrap();
        assert_eq!(lo, Imt::sa(0.3).unwrap());
        assert_eq!(hi, Imt::sa(1.0).unwrap());

        // No bracket above the largest or below the smallest period
        assert!(sa_bracket(&imts, 2.0).is_none());
        assert!(sa_bracket(&imts, 0.05).is_none());
    }

    #[test]
    fn test_serialization() {
        let imt = Imt::sa(0.2).unwrap();
        let json = serde_json::to_string(&imt).unwrap();
        let back: Imt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, imt);
    }
}

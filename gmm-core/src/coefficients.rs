//! Coefficient tables for one model family.
//!
//! A [`CoefficientTable`] maps each supported intensity measure to a row of
//! named regression coefficients. Tables are deserialized from a TOML
//! resource once, at model construction, and never mutated afterwards; models
//! read rows into typed per-family coefficient structs and keep no reference
//! to the table itself.
//!
//! Resource format: one TOML table per measure, keyed by the measure's
//! display form.
//!
//! ```toml
//! [pga]
//! scale = 0.25
//!
//! ["sa(0.2)"]
//! scale = 0.10
//! ```

use crate::errors::{GmmError, GmmResult};
use crate::imt::{sa_bracket, Imt};
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One row of named coefficients for a single intensity measure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CoefficientRow {
    values: BTreeMap<String, f64>,
}

impl CoefficientRow {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Reads a coefficient that the family's formula requires.
    pub fn require(&self, imt: Imt, name: &str) -> GmmResult<f64> {
        self.get(name).ok_or_else(|| GmmError::MissingCoefficient {
            imt,
            name: name.to_string(),
        })
    }
}

/// Immutable mapping from intensity measure to coefficient row for one model
/// family.
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    family: String,
    rows: BTreeMap<Imt, CoefficientRow>,
}

impl CoefficientTable {
    /// Parses a TOML coefficient resource. `family` is used in error
    /// messages and [`GmmError::UnsupportedImt`].
    pub fn from_toml_str(family: &str, source: &str) -> GmmResult<Self> {
        let raw: BTreeMap<String, CoefficientRow> = toml::from_str(source)
            .map_err(|e| GmmError::InvalidResource(format!("{family}: {e}")))?;
        if raw.is_empty() {
            return Err(GmmError::InvalidResource(format!(
                "{family}: coefficient resource has no rows"
            )));
        }
        let mut rows = BTreeMap::new();
        for (key, row) in raw {
            let imt: Imt = key.parse()?;
            if row.values.is_empty() {
                warn!("{family}: coefficient row for {imt} is empty");
            }
            rows.insert(imt, row);
        }
        Ok(Self {
            family: family.to_string(),
            rows,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn contains(&self, imt: Imt) -> bool {
        self.rows.contains_key(&imt)
    }

    pub fn row(&self, imt: Imt) -> GmmResult<&CoefficientRow> {
        self.rows.get(&imt).ok_or_else(|| GmmError::UnsupportedImt {
            family: self.family.clone(),
            imt,
        })
    }

    /// The measures this table carries, in ascending [`Imt`] order.
    pub fn supported_imts(&self) -> Vec<Imt> {
        self.rows.keys().copied().collect()
    }

    /// The spectral rows bracketing `period`, if both sides exist.
    pub fn sa_bracket(&self, period: f64) -> Option<(Imt, Imt)> {
        sa_bracket(&self.supported_imts(), period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[pga]
scale = 0.25
sigma = 0.6

["sa(0.2)"]
scale = 0.10
sigma = 0.65

["sa(1.0)"]
scale = -0.05
sigma = 0.7
"#;

    #[test]
    fn test_parse_and_read() {
        let table = CoefficientTable::from_toml_str("TEST", TABLE).unwrap();
        assert_eq!(table.family(), "TEST");

        let row = table.row(Imt::sa(0.2).unwrap()).unwrap();
        assert_eq!(row.get("scale"), Some(0.10));
        assert_eq!(row.require(Imt::sa(0.2).unwrap(), "sigma").unwrap(), 0.65);
    }

    #[test]
    fn test_supported_imts_are_sorted() {
        let table = CoefficientTable::from_toml_str("TEST", TABLE).unwrap();
        assert_eq!(
            table.supported_imts(),
            vec![
                Imt::Pga,
                Imt::sa(0.2).unwrap(),
                Imt::sa(1.0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_missing_row_is_unsupported_imt() {
        let table = CoefficientTable::from_toml_str("TEST", TABLE).unwrap();
        assert_eq!(
            table.row(Imt::Pgv).unwrap_err(),
            GmmError::UnsupportedImt {
                family: "TEST".to_string(),
                imt: Imt::Pgv,
            }
        );
    }

    #[test]
    fn test_missing_coefficient_names_itself() {
        let table = CoefficientTable::from_toml_str("TEST", TABLE).unwrap();
        let row = table.row(Imt::Pga).unwrap();
        assert_eq!(
            row.require(Imt::Pga, "h").unwrap_err(),
            GmmError::MissingCoefficient {
                imt: Imt::Pga,
                name: "h".to_string(),
            }
        );
    }

    #[test]
    fn test_sa_bracket() {
        let table = CoefficientTable::from_toml_str("TEST", TABLE).unwrap();
        let (lo, hi) = table.sa_bracket(0.5).unwrap();
        assert_eq!(lo, Imt::sa(0.2).unwrap());
        assert_eq!(hi, Imt::sa(1.0).unwrap());
        assert!(table.sa_bracket(2.0).is_none());
    }

    #[test]
    fn test_rejects_empty_and_malformed_resources() {
        assert!(matches!(
            CoefficientTable::from_toml_str("TEST", ""),
            Err(GmmError::InvalidResource(_))
        ));
        assert!(matches!(
            CoefficientTable::from_toml_str("TEST", "[pga]\nscale = \"x\""),
            Err(GmmError::InvalidResource(_))
        ));
        assert!(matches!(
            CoefficientTable::from_toml_str("TEST", "[pgd]\nscale = 1.0"),
            Err(GmmError::InvalidResource(_))
        ));
    }
}

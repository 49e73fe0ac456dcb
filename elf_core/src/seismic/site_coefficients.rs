//! # Site Coefficients
//!
//! Soil amplification factors Fa (short period) and Fv (1-second period) per
//! DPT 1301/1302, interpolated from the tabulated values by site class.
//!
//! ## Site Class Fallback
//!
//! An unrecognized site class label resolves to class D. This is a defined
//! policy of the procedure, not an error; the substitution is logged at
//! `warn` level. Labels are trimmed and matched case-insensitively first,
//! so `"e"` is class E rather than a fallback.
//!
//! ## Example
//!
//! ```rust
//! use elf_core::seismic::site_coefficients::{SiteClass, SiteCoefficients};
//!
//! let coeffs = SiteCoefficients::lookup(SiteClass::D, 0.5, 0.2).unwrap();
//! assert!((coeffs.fa - 1.4).abs() < 1e-12);
//! assert!((coeffs.fv - 2.0).abs() < 1e-12);
//! ```

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::interpolation::interpolate;
use crate::errors::CalcResult;

/// Ss breakpoints for the Fa table (g)
pub const FA_BREAKPOINTS: [f64; 5] = [0.25, 0.50, 0.75, 1.00, 1.25];

/// S1 breakpoints for the Fv table (g)
pub const FV_BREAKPOINTS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Fa rows in site class order A through F
const FA_TABLE: [[f64; 5]; 6] = [
    [0.8, 0.8, 0.8, 0.8, 0.8],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.2, 1.2, 1.1, 1.0, 1.0],
    [1.6, 1.4, 1.2, 1.1, 1.0],
    [2.5, 1.7, 1.2, 0.9, 0.9],
    [1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Fv rows in site class order A through F
const FV_TABLE: [[f64; 5]; 6] = [
    [0.8, 0.8, 0.8, 0.8, 0.8],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.7, 1.6, 1.5, 1.4, 1.3],
    [2.4, 2.0, 1.8, 1.6, 1.5],
    [3.5, 3.2, 2.8, 2.4, 2.4],
    [1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Soil profile category, A (hard rock) through F (special soils).
///
/// Serializes as its letter. Deserializing an unknown label yields class D,
/// matching [`SiteClass::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteClass {
    /// Hard rock
    A,
    /// Rock
    B,
    /// Very dense soil and soft rock
    C,
    /// Stiff soil
    #[default]
    D,
    /// Soft clay soil
    E,
    /// Soils requiring site-specific evaluation
    F,
}

impl SiteClass {
    /// All site classes in table order
    pub const ALL: [SiteClass; 6] = [
        SiteClass::A,
        SiteClass::B,
        SiteClass::C,
        SiteClass::D,
        SiteClass::E,
        SiteClass::F,
    ];

    /// Parse a site class letter, returning `None` for anything unrecognized.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "A" => Some(SiteClass::A),
            "B" => Some(SiteClass::B),
            "C" => Some(SiteClass::C),
            "D" => Some(SiteClass::D),
            "E" => Some(SiteClass::E),
            "F" => Some(SiteClass::F),
            _ => None,
        }
    }

    /// Resolve a site class label, falling back to class D when unrecognized.
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            warn!("Unrecognized site class '{}', using site class D", label);
            SiteClass::D
        })
    }

    /// Single-letter code
    pub fn letter(&self) -> &'static str {
        match self {
            SiteClass::A => "A",
            SiteClass::B => "B",
            SiteClass::C => "C",
            SiteClass::D => "D",
            SiteClass::E => "E",
            SiteClass::F => "F",
        }
    }

    /// Short soil description for reports
    pub fn description(&self) -> &'static str {
        match self {
            SiteClass::A => "Hard rock",
            SiteClass::B => "Rock",
            SiteClass::C => "Very dense soil / soft rock",
            SiteClass::D => "Stiff soil",
            SiteClass::E => "Soft clay soil",
            SiteClass::F => "Special soils",
        }
    }

    fn row(&self) -> usize {
        match self {
            SiteClass::A => 0,
            SiteClass::B => 1,
            SiteClass::C => 2,
            SiteClass::D => 3,
            SiteClass::E => 4,
            SiteClass::F => 5,
        }
    }

    /// Tabulated Fa values at [`FA_BREAKPOINTS`]
    pub fn fa_row(&self) -> &'static [f64; 5] {
        &FA_TABLE[self.row()]
    }

    /// Tabulated Fv values at [`FV_BREAKPOINTS`]
    pub fn fv_row(&self) -> &'static [f64; 5] {
        &FV_TABLE[self.row()]
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<String> for SiteClass {
    fn from(label: String) -> Self {
        SiteClass::from_label(&label)
    }
}

impl From<SiteClass> for String {
    fn from(class: SiteClass) -> Self {
        class.letter().to_string()
    }
}

/// Site amplification factors for one hazard/site combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteCoefficients {
    /// Short-period site coefficient Fa
    pub fa: f64,
    /// 1-second site coefficient Fv
    pub fv: f64,
}

impl SiteCoefficients {
    /// Interpolate Fa at `ss` and Fv at `s1` for the given site class.
    pub fn lookup(site_class: SiteClass, ss: f64, s1: f64) -> CalcResult<Self> {
        Ok(SiteCoefficients {
            fa: fa(site_class, ss)?,
            fv: fv(site_class, s1)?,
        })
    }
}

/// Short-period site coefficient Fa at spectral acceleration `ss`.
pub fn fa(site_class: SiteClass, ss: f64) -> CalcResult<f64> {
    interpolate(ss, &FA_BREAKPOINTS, site_class.fa_row())
}

/// 1-second site coefficient Fv at spectral acceleration `s1`.
pub fn fv(site_class: SiteClass, s1: f64) -> CalcResult<f64> {
    interpolate(s1, &FV_BREAKPOINTS, site_class.fv_row())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_bounds(row: &[f64; 5]) -> (f64, f64) {
        let min = row.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    #[test]
    fn test_class_d_exact_breakpoints() {
        let coeffs = SiteCoefficients::lookup(SiteClass::D, 0.5, 0.2).unwrap();
        assert!((coeffs.fa - 1.4).abs() < 1e-12);
        assert!((coeffs.fv - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_class_e_interpolates() {
        // Ss = 0.375 is halfway between 2.5 and 1.7
        assert!((fa(SiteClass::E, 0.375).unwrap() - 2.1).abs() < 1e-12);
        // S1 = 0.35 is halfway between 2.8 and 2.4
        assert!((fv(SiteClass::E, 0.35).unwrap() - 2.6).abs() < 1e-12);
    }

    #[test]
    fn test_clamping_at_table_extremes() {
        assert_eq!(fa(SiteClass::C, 0.05).unwrap(), 1.2);
        assert_eq!(fa(SiteClass::C, 2.0).unwrap(), 1.0);
        assert_eq!(fv(SiteClass::D, 0.0).unwrap(), 2.4);
        assert_eq!(fv(SiteClass::D, 1.5).unwrap(), 1.5);
    }

    #[test]
    fn test_results_stay_within_row_bounds() {
        for class in SiteClass::ALL {
            let (fa_min, fa_max) = row_bounds(class.fa_row());
            let (fv_min, fv_max) = row_bounds(class.fv_row());
            for step in 0..=30 {
                let x = step as f64 * 0.05;
                let a = fa(class, x).unwrap();
                let v = fv(class, x).unwrap();
                assert!(a >= fa_min - 1e-12 && a <= fa_max + 1e-12, "Fa {} for {}", a, class);
                assert!(v >= fv_min - 1e-12 && v <= fv_max + 1e-12, "Fv {} for {}", v, class);
            }
        }
    }

    #[test]
    fn test_lowercase_label_keeps_its_class() {
        let class = SiteClass::from_label("e");
        assert_eq!(class, SiteClass::E);
        assert_eq!(fa(class, 0.25).unwrap(), 2.5);
        assert_ne!(fa(class, 0.25).unwrap(), fa(SiteClass::D, 0.25).unwrap());
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_d() {
        assert_eq!(SiteClass::from_label("Z"), SiteClass::D);
        assert_eq!(SiteClass::from_label(""), SiteClass::D);
        assert_eq!(SiteClass::from_label(" e "), SiteClass::E);
        assert_eq!(SiteClass::parse("Z"), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SiteClass::C).unwrap();
        assert_eq!(json, "\"C\"");

        let fallback: SiteClass = serde_json::from_str("\"Z\"").unwrap();
        assert_eq!(fallback, SiteClass::D);
    }
}

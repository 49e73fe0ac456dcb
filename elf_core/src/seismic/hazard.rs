//! # Hazard Parameters
//!
//! Ground-motion and structural-system inputs for one ELF analysis.

use serde::{Deserialize, Serialize};

use super::site_coefficients::SiteClass;
use crate::errors::{CalcError, CalcResult};

/// Seismic hazard and system parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ss": 0.5,
///   "s1": 0.2,
///   "site_class": "D",
///   "importance_factor": 1.0,
///   "response_modification": 8.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardParameters {
    /// Short-period mapped spectral acceleration Ss (g)
    pub ss: f64,

    /// 1-second mapped spectral acceleration S1 (g)
    pub s1: f64,

    /// Soil profile category
    pub site_class: SiteClass,

    /// Importance factor Ie
    pub importance_factor: f64,

    /// Response modification coefficient R
    pub response_modification: f64,
}

impl HazardParameters {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("ss", self.ss), ("s1", self.s1)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Spectral acceleration must be a finite, non-negative number",
                ));
            }
        }
        if !self.importance_factor.is_finite() || self.importance_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "importance_factor",
                self.importance_factor.to_string(),
                "Importance factor must be positive",
            ));
        }
        if !self.response_modification.is_finite() || self.response_modification <= 0.0 {
            return Err(CalcError::invalid_input(
                "response_modification",
                self.response_modification.to_string(),
                "Response modification coefficient must be positive",
            ));
        }
        Ok(())
    }

    /// Ratio R/Ie that divides the spectral demand
    pub fn reduction_ratio(&self) -> f64 {
        self.response_modification / self.importance_factor
    }
}

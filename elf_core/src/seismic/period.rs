//! # Period and Response Coefficient
//!
//! Approximate fundamental period, vertical distribution exponent k, and the
//! bounded seismic response coefficient Cs.
//!
//! ## Formulas
//!
//! - T = 0.0466 · hn^0.9 (hn = total height in m)
//! - k = 1 for T ≤ 0.5 s, 2 for T ≥ 2.5 s, linear in between
//! - Cs = SDS / (R/Ie), capped at SD1 / (T·R/Ie), then raised to at least 0.01

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::hazard::HazardParameters;
use super::spectrum::DesignSpectrum;
use crate::errors::{CalcError, CalcResult};

/// Period coefficient Ct
pub const PERIOD_COEFFICIENT: f64 = 0.0466;

/// Height exponent x in T = Ct·hn^x
pub const PERIOD_EXPONENT: f64 = 0.9;

/// Lower bound on Cs
pub const CS_MIN: f64 = 0.01;

/// Approximate fundamental period T (s) from total height (m).
///
/// # Errors
///
/// `DegenerateGeometry` when the height is zero, negative, or not finite:
/// the period would be zero and the Cs upper bound would divide by it.
pub fn approximate_period(total_height_m: f64) -> CalcResult<f64> {
    if !total_height_m.is_finite() || total_height_m <= 0.0 {
        return Err(CalcError::degenerate_geometry(format!(
            "total height {} m gives no fundamental period; at least one story of positive height is required",
            total_height_m
        )));
    }
    Ok(PERIOD_COEFFICIENT * total_height_m.powf(PERIOD_EXPONENT))
}

/// Distribution exponent k for period `t` (s).
pub fn distribution_exponent(t: f64) -> f64 {
    if t <= 0.5 {
        1.0
    } else if t >= 2.5 {
        2.0
    } else {
        1.0 + (t - 0.5) / 2.0
    }
}

/// Which limit set the final Cs value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsGoverning {
    /// SDS / (R/Ie) within both limits
    Spectral,
    /// Capped by SD1 / (T·R/Ie)
    UpperBound,
    /// Raised to the 0.01 floor
    LowerBound,
}

impl fmt::Display for CsGoverning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CsGoverning::Spectral => "Cs = SDS / (R/Ie)",
            CsGoverning::UpperBound => "Cs,max = SD1 / (T * R/Ie)",
            CsGoverning::LowerBound => "Cs,min = 0.01",
        };
        write!(f, "{}", text)
    }
}

/// Seismic response coefficient with the bounds that were checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseCoefficient {
    /// Unbounded SDS / (R/Ie)
    pub cs_raw: f64,
    /// SD1 / (T·R/Ie)
    pub cs_max: f64,
    /// Fixed floor
    pub cs_min: f64,
    /// Final bounded value
    pub cs: f64,
    /// Limit that produced `cs`
    pub governs: CsGoverning,
}

/// Compute Cs for period `t`.
///
/// The upper cap is applied first and the 0.01 floor second, so a raw value
/// below the floor is raised even when the cap was never reached.
pub fn response_coefficient(
    spectrum: &DesignSpectrum,
    hazard: &HazardParameters,
    t: f64,
) -> ResponseCoefficient {
    let ratio = hazard.reduction_ratio();
    let cs_raw = spectrum.sds / ratio;
    let cs_max = spectrum.sd1 / (t * ratio);

    let mut cs = cs_raw;
    let mut governs = CsGoverning::Spectral;
    if cs > cs_max {
        cs = cs_max;
        governs = CsGoverning::UpperBound;
    }
    if cs < CS_MIN {
        warn!("Cs = {:.5} is below the minimum, using Cs = {}", cs, CS_MIN);
        cs = CS_MIN;
        governs = CsGoverning::LowerBound;
    }

    debug!(
        "Cs raw={:.5} max={:.5} final={:.5} ({:?})",
        cs_raw, cs_max, cs, governs
    );

    ResponseCoefficient {
        cs_raw,
        cs_max,
        cs_min: CS_MIN,
        cs,
        governs,
    }
}

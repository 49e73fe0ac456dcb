//! # Equivalent Lateral Force Analysis
//!
//! Runs the full ELF pipeline for one building and assembles the result:
//!
//! ```text
//! HazardParameters ──► SiteCoefficients ──► DesignSpectrum ─┐
//! StructureGeometry ─► period T, exponent k ─► Cs ──────────┴─► distribute ─► ElfResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use elf_core::seismic::elf::{calculate, ElfInput};
//! use elf_core::seismic::geometry::StructureGeometry;
//! use elf_core::seismic::hazard::HazardParameters;
//! use elf_core::seismic::site_coefficients::SiteClass;
//!
//! let input = ElfInput {
//!     label: "Two-story frame".to_string(),
//!     hazard: HazardParameters {
//!         ss: 0.5,
//!         s1: 0.2,
//!         site_class: SiteClass::D,
//!         importance_factor: 1.0,
//!         response_modification: 8.0,
//!     },
//!     geometry: StructureGeometry {
//!         span_lengths_m: vec![4.0, 4.0, 4.0],
//!         story_heights_m: vec![3.5, 3.5],
//!         level_loads_tpm: vec![1.0, 1.0, 1.0],
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.parameters.w_effective, 24.0);
//! println!("V = {:.3} tf", result.parameters.base_shear);
//! println!("Fx (base to roof): {}", result.point_loads_csv());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::distribution::{distribute, Level, VerticalDistribution};
use super::geometry::StructureGeometry;
use super::hazard::HazardParameters;
use super::period::{approximate_period, distribution_exponent, response_coefficient, CsGoverning, ResponseCoefficient};
use super::site_coefficients::{SiteClass, SiteCoefficients};
use super::spectrum::DesignSpectrum;
use crate::errors::CalcResult;

/// Input for one ELF analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Office block",
///   "hazard": {
///     "ss": 0.5, "s1": 0.2, "site_class": "D",
///     "importance_factor": 1.0, "response_modification": 8.0
///   },
///   "geometry": {
///     "span_lengths_m": [4.0, 4.0, 4.0],
///     "story_heights_m": [3.5, 3.5],
///     "level_loads_tpm": [1.5, 2.0, 1.0]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElfInput {
    /// User label for this analysis
    pub label: String,

    /// Ground motion and system parameters
    pub hazard: HazardParameters,

    /// Elevation geometry and level loads
    pub geometry: StructureGeometry,
}

impl ElfInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.hazard.validate()?;
        self.geometry.validate()
    }
}

/// Scalar results and echoed inputs of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElfParameters {
    // === Echoed Inputs ===
    /// Ss (g)
    pub ss: f64,
    /// S1 (g)
    pub s1: f64,
    /// Resolved site class
    pub site_class: SiteClass,
    /// Importance factor Ie
    pub importance_factor: f64,
    /// Response modification coefficient R
    pub response_modification: f64,

    // === Site and Spectrum ===
    /// Site coefficient Fa
    pub fa: f64,
    /// Site coefficient Fv
    pub fv: f64,
    /// SMS (g)
    pub sms: f64,
    /// SM1 (g)
    pub sm1: f64,
    /// SDS (g)
    pub sds: f64,
    /// SD1 (g)
    pub sd1: f64,

    // === Period and Response ===
    /// Total height hn (m)
    pub total_height_m: f64,
    /// Approximate fundamental period T (s)
    pub period_s: f64,
    /// Distribution exponent k
    pub k: f64,
    /// Seismic response coefficient Cs (bounded)
    pub cs: f64,
    /// SDS / (R/Ie) before bounding
    pub cs_raw: f64,
    /// Upper bound SD1 / (T·R/Ie)
    pub cs_max: f64,
    /// Lower bound
    pub cs_min: f64,
    /// Limit that produced Cs
    pub cs_governs: CsGoverning,

    // === Base Shear ===
    /// Effective seismic weight W (tf), base level excluded
    pub w_effective: f64,
    /// Design base shear V = Cs·W (tf)
    pub base_shear: f64,
    /// Σwx·hx^k
    pub sum_w_h_k: f64,
}

/// Complete result of an ELF analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElfResult {
    /// Label copied from the input
    pub label: String,

    /// Global parameters
    pub parameters: ElfParameters,

    /// Levels, base first
    pub levels: Vec<Level>,
}

impl ElfResult {
    /// Lateral forces Fx, base to roof, three decimals, comma-joined.
    ///
    /// This string is what the elevation renderer maps back onto levels
    /// positionally; the base entry is always `0.000`.
    pub fn point_loads_csv(&self) -> String {
        join_fixed3(self.levels.iter().map(|l| l.fx))
    }

    /// Story shears Vx, base to roof, three decimals, comma-joined.
    pub fn story_shears_csv(&self) -> String {
        join_fixed3(self.levels.iter().map(|l| l.vx))
    }

    /// Levels from the roof down, the order used in reports
    pub fn levels_roof_first(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter().rev()
    }

    /// Sum of Cvx over all levels (1.0 whenever any level carries weight)
    pub fn cvx_sum(&self) -> f64 {
        self.levels.iter().map(|l| l.cvx).sum()
    }
}

fn join_fixed3(values: impl Iterator<Item = f64>) -> String {
    values
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Package the intermediate values of an analysis into an [`ElfResult`].
///
/// No computation happens here beyond copying fields.
pub fn assemble(
    input: &ElfInput,
    coeffs: SiteCoefficients,
    spectrum: DesignSpectrum,
    period_s: f64,
    k: f64,
    response: ResponseCoefficient,
    distribution: VerticalDistribution,
) -> ElfResult {
    let hazard = &input.hazard;
    ElfResult {
        label: input.label.clone(),
        parameters: ElfParameters {
            ss: hazard.ss,
            s1: hazard.s1,
            site_class: hazard.site_class,
            importance_factor: hazard.importance_factor,
            response_modification: hazard.response_modification,
            fa: coeffs.fa,
            fv: coeffs.fv,
            sms: spectrum.sms,
            sm1: spectrum.sm1,
            sds: spectrum.sds,
            sd1: spectrum.sd1,
            total_height_m: input.geometry.total_height().value(),
            period_s,
            k,
            cs: response.cs,
            cs_raw: response.cs_raw,
            cs_max: response.cs_max,
            cs_min: response.cs_min,
            cs_governs: response.governs,
            w_effective: distribution.w_effective,
            base_shear: distribution.base_shear,
            sum_w_h_k: distribution.sum_w_h_k,
        },
        levels: distribution.levels,
    }
}

/// Run the ELF procedure.
///
/// This is a pure function: no I/O, no shared state.
///
/// # Returns
///
/// * `Ok(ElfResult)` - Scalar parameters and populated levels
/// * `Err(CalcError::InvalidInput)` - Malformed hazard or geometry values
/// * `Err(CalcError::DegenerateGeometry)` - No stories / zero total height
pub fn calculate(input: &ElfInput) -> CalcResult<ElfResult> {
    input.validate()?;

    let hazard = &input.hazard;
    let coeffs = SiteCoefficients::lookup(hazard.site_class, hazard.ss, hazard.s1)?;
    let spectrum = DesignSpectrum::from_coefficients(&coeffs, hazard);
    debug!(
        "[{}] site {}: Fa={:.3} Fv={:.3} SDS={:.4} SD1={:.4}",
        input.label, hazard.site_class, coeffs.fa, coeffs.fv, spectrum.sds, spectrum.sd1
    );

    let total_height = input.geometry.total_height().value();
    let period_s = approximate_period(total_height)?;
    let k = distribution_exponent(period_s);
    let response = response_coefficient(&spectrum, hazard, period_s);
    debug!(
        "[{}] hn={:.2} m T={:.4} s k={:.3} Cs={:.5}",
        input.label, total_height, period_s, k, response.cs
    );

    let distribution = distribute(input.geometry.build_levels(), response.cs, k);

    Ok(assemble(input, coeffs, spectrum, period_s, k, response, distribution))
}

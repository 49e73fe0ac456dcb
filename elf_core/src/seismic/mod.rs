//! # Seismic Analysis (Equivalent Lateral Force)
//!
//! The ELF engine, split by stage. Each stage is a pure function over plain
//! data; [`elf::calculate`] chains them:
//!
//! - [`interpolation`] - Piecewise-linear table lookup
//! - [`site_coefficients`] - Site class and Fa/Fv tables
//! - [`hazard`] - Hazard and system input parameters
//! - [`spectrum`] - SMS, SM1, SDS, SD1
//! - [`period`] - Period T, exponent k, bounded Cs
//! - [`geometry`] - Story heights, loads and spans in base-to-roof order
//! - [`distribution`] - Vertical force distribution and story shear
//! - [`elf`] - Full pipeline and result assembly
//!
//! Following the crate pattern, every analysis has an `*Input`, an
//! `*Result` and a `calculate(input) -> CalcResult<*Result>` function.

pub mod distribution;
pub mod elf;
pub mod geometry;
pub mod hazard;
pub mod interpolation;
pub mod period;
pub mod site_coefficients;
pub mod spectrum;

// Re-export commonly used types
pub use distribution::{Level, VerticalDistribution};
pub use elf::{calculate, ElfInput, ElfParameters, ElfResult};
pub use geometry::StructureGeometry;
pub use hazard::HazardParameters;
pub use period::{CsGoverning, ResponseCoefficient};
pub use site_coefficients::{SiteClass, SiteCoefficients};
pub use spectrum::DesignSpectrum;

//! # elf_core - Seismic Base Shear Engine
//!
//! `elf_core` computes design base shear and its vertical distribution for
//! low-rise frames by the Equivalent Lateral Force (ELF) procedure of
//! DPT 1301/1302. All inputs and outputs are JSON-serializable so results
//! can be stored in project files or handed to other tools unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use elf_core::seismic::{calculate, ElfInput, HazardParameters, SiteClass, StructureGeometry};
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
//!         level_loads_tpm: vec![1.5, 2.0, 1.0],
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! // W = (2.0 + 1.0) x 12 m = 36 tf, Cs = 0.4667 / 8
//! assert!((result.parameters.base_shear - 2.1).abs() < 1e-9);
//! println!("Fx: {}", result.point_loads_csv());
//! ```
//!
//! ## Modules
//!
//! - [`seismic`] - The ELF pipeline (site coefficients through story shear)
//! - [`input`] - Text form adapter (comma-separated fields, story order)
//! - [`hazard_db`] - Province/district hazard table
//! - [`report`] - Plain-text calculation reports
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - Atomic saves and versioned loads
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod file_io;
pub mod hazard_db;
pub mod input;
pub mod project;
pub mod report;
pub mod seismic;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_hazard_database, load_project, save_project};
pub use hazard_db::{HazardDatabase, HazardSite};
pub use input::{FormInput, StoryOrder};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use report::{render_report, ForceUnit, ReportOptions};
pub use seismic::{calculate, ElfInput, ElfResult};

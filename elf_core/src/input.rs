//! # Form Input Adapter
//!
//! Converts the textual form fields (comma-separated lists, numeric strings,
//! a site class letter) into typed engine inputs. All parsing and ordering
//! happen here, once; the engine only ever sees validated numeric sequences
//! in base-to-roof order.
//!
//! ## Example
//!
//! ```rust
//! use elf_core::input::{FormInput, StoryOrder};
//!
//! let form = FormInput {
//!     label: "Shophouse".to_string(),
//!     span_lengths: "4,4,4".to_string(),
//!     story_heights: "3.5, 3.5".to_string(),
//!     level_loads: "1.5, 2.0, 1.0".to_string(),
//!     ss: "0.5".to_string(),
//!     s1: "0.2".to_string(),
//!     site_class: "D".to_string(),
//!     importance_factor: "1.0".to_string(),
//!     response_modification: "8".to_string(),
//!     story_order: StoryOrder::BaseFirst,
//! };
//!
//! let input = form.to_elf_input().unwrap().expect("hazard fields are filled in");
//! assert_eq!(input.geometry.story_heights_m, vec![3.5, 3.5]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::seismic::elf::ElfInput;
use crate::seismic::geometry::StructureGeometry;
use crate::seismic::hazard::HazardParameters;
use crate::seismic::site_coefficients::SiteClass;

/// Placeholder the form uses for "no hazard data selected"
const NO_HAZARD_MARKER: &str = "-";

/// Order in which story heights and level loads are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StoryOrder {
    /// Ground story first (loads start with the base)
    #[default]
    BaseFirst,
    /// Top story first (loads start with the roof and end with the base)
    RoofFirst,
}

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    /// Analysis label
    pub label: String,
    /// Bay spans (m), comma-separated
    pub span_lengths: String,
    /// Story heights (m), comma-separated
    pub story_heights: String,
    /// Level line loads (tf/m), comma-separated, one more than the stories
    pub level_loads: String,
    /// Ss (g), or blank / "-" when no hazard is selected
    pub ss: String,
    /// S1 (g)
    pub s1: String,
    /// Site class letter
    pub site_class: String,
    /// Importance factor Ie
    pub importance_factor: String,
    /// Response modification coefficient R
    pub response_modification: String,
    /// Listing order of heights and loads
    #[serde(default)]
    pub story_order: StoryOrder,
}

impl FormInput {
    /// True when the hazard fields ask for a seismic analysis.
    pub fn hazard_requested(&self) -> bool {
        let ss = self.ss.trim();
        !ss.is_empty() && ss != NO_HAZARD_MARKER
    }

    /// Parse the elevation fields into canonical base-to-roof geometry.
    pub fn to_geometry(&self) -> CalcResult<StructureGeometry> {
        let span_lengths_m = parse_csv_list("span_lengths", &self.span_lengths)?;
        let mut story_heights_m = parse_csv_list("story_heights", &self.story_heights)?;
        let mut level_loads_tpm = parse_csv_list("level_loads", &self.level_loads)?;

        if self.story_order == StoryOrder::RoofFirst {
            story_heights_m.reverse();
            level_loads_tpm.reverse();
        }

        let geometry = StructureGeometry {
            span_lengths_m,
            story_heights_m,
            level_loads_tpm,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Parse the hazard fields.
    pub fn to_hazard(&self) -> CalcResult<HazardParameters> {
        let hazard = HazardParameters {
            ss: parse_number("ss", &self.ss)?,
            s1: parse_number("s1", &self.s1)?,
            site_class: SiteClass::from_label(&self.site_class),
            importance_factor: parse_number("importance_factor", &self.importance_factor)?,
            response_modification: parse_number("response_modification", &self.response_modification)?,
        };
        hazard.validate()?;
        Ok(hazard)
    }

    /// Build the analysis input, or `Ok(None)` when no hazard was selected.
    pub fn to_elf_input(&self) -> CalcResult<Option<ElfInput>> {
        if !self.hazard_requested() {
            return Ok(None);
        }
        Ok(Some(ElfInput {
            label: self.label.clone(),
            hazard: self.to_hazard()?,
            geometry: self.to_geometry()?,
        }))
    }
}

/// Parse a comma-separated list of numbers.
///
/// Tokens are trimmed. A blank field is `MissingField`; an empty token,
/// a non-numeric token, or a non-finite value is `InvalidInput`.
pub fn parse_csv_list(field: &str, text: &str) -> CalcResult<Vec<f64>> {
    if text.trim().is_empty() {
        return Err(CalcError::missing_field(field));
    }
    text.split(',')
        .enumerate()
        .map(|(index, token)| {
            parse_number(field, token).map_err(|err| match err {
                CalcError::MissingField { .. } => CalcError::invalid_input(
                    field,
                    text.trim(),
                    format!("Entry {} is empty", index + 1),
                ),
                other => other,
            })
        })
        .collect()
}

/// Parse a single finite number.
pub fn parse_number(field: &str, text: &str) -> CalcResult<f64> {
    let token = text.trim();
    if token.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let value: f64 = token
        .parse()
        .map_err(|_| CalcError::invalid_input(field, token, "Not a number"))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, token, "Value must be finite"));
    }
    Ok(value)
}

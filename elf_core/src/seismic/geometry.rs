//! # Structure Geometry
//!
//! Story heights, per-level line loads and bay spans, always held in
//! base-to-roof order. Converts the line loads into level weights and builds
//! the level records the distribution engine works on.

use serde::{Deserialize, Serialize};

use super::distribution::Level;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, TonneForce, TonnesPerMeter};

/// Label of the ground level
pub const BASE_LEVEL_NAME: &str = "Base/FL1";

/// Label of the topmost level
pub const ROOF_LEVEL_NAME: &str = "Roof";

/// Building elevation data in canonical base-to-roof order.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_lengths_m": [4.0, 4.0, 4.0],
///   "story_heights_m": [3.5, 3.5],
///   "level_loads_tpm": [1.5, 2.0, 1.0]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureGeometry {
    /// Bay spans along the analysis direction (m); only their sum is used
    pub span_lengths_m: Vec<f64>,

    /// Story heights from the ground story up (m)
    pub story_heights_m: Vec<f64>,

    /// Line load per level (tf/m); index 0 is the base, index i the top of story i
    pub level_loads_tpm: Vec<f64>,
}

impl StructureGeometry {
    /// Validate geometry and load arrays.
    pub fn validate(&self) -> CalcResult<()> {
        if self.span_lengths_m.is_empty() {
            return Err(CalcError::missing_field("span_lengths_m"));
        }
        if let Some(span) = self.span_lengths_m.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(CalcError::invalid_input(
                "span_lengths_m",
                span.to_string(),
                "Span lengths must be finite and non-negative",
            ));
        }
        if self.story_heights_m.is_empty() {
            return Err(CalcError::degenerate_geometry(
                "no stories given; at least one story height is required",
            ));
        }
        if let Some(h) = self.story_heights_m.iter().find(|h| !h.is_finite() || **h <= 0.0) {
            return Err(CalcError::invalid_input(
                "story_heights_m",
                h.to_string(),
                "Story heights must be positive",
            ));
        }
        if self.level_loads_tpm.len() != self.story_heights_m.len() + 1 {
            return Err(CalcError::invalid_input(
                "level_loads_tpm",
                format!(
                    "{} loads for {} stories",
                    self.level_loads_tpm.len(),
                    self.story_heights_m.len()
                ),
                "Expected one load per story plus one for the base",
            ));
        }
        if let Some(w) = self.level_loads_tpm.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(CalcError::invalid_input(
                "level_loads_tpm",
                w.to_string(),
                "Level loads must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Number of stories above the base
    pub fn story_count(&self) -> usize {
        self.story_heights_m.len()
    }

    /// Total building height hn
    pub fn total_height(&self) -> Meters {
        self.story_heights_m.iter().map(|h| Meters(*h)).sum()
    }

    /// Total span length used as the tributary length of every level
    pub fn total_span(&self) -> Meters {
        self.span_lengths_m.iter().map(|s| Meters(*s)).sum()
    }

    /// Weight of every level, base first
    pub fn level_weights(&self) -> Vec<TonneForce> {
        let span = self.total_span();
        self.level_loads_tpm
            .iter()
            .map(|load| TonnesPerMeter(*load) * span)
            .collect()
    }

    /// Build one [`Level`] per story plus the base, with cumulative heights
    /// and weights filled in; force and shear fields start at zero.
    ///
    /// Works on unvalidated arrays: a level without a load entry weighs
    /// nothing and surplus load entries are ignored.
    pub fn build_levels(&self) -> Vec<Level> {
        let stories = self.story_count();
        let weights = self.level_weights();
        let elevations = std::iter::once(0.0).chain(self.story_heights_m.iter().scan(0.0, |hx, h| {
            *hx += h;
            Some(*hx)
        }));

        elevations
            .enumerate()
            .map(|(index, hx)| {
                let wx = weights.get(index).map_or(0.0, |w| w.value());
                Level::new(level_name(index, stories), hx, wx)
            })
            .collect()
    }
}

/// Display name of level `index` (0 = base) in a building of `stories` stories.
pub fn level_name(index: usize, stories: usize) -> String {
    if index == 0 {
        BASE_LEVEL_NAME.to_string()
    } else if index == stories {
        ROOF_LEVEL_NAME.to_string()
    } else {
        format!("FL {}", index + 1)
    }
}

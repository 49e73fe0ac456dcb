//! # Project Data Structures
//!
//! A `Project` groups the ELF analyses of one job. Projects serialize to
//! `.elf.json` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (code reference, report units, defaults)
//! └── analyses: HashMap<Uuid, ElfInput>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use elf_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("DPT 1301/1302-61"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CalcResult;
use crate::input::FormInput;
use crate::report::{ForceUnit, ReportOptions, DEFAULT_CODE_REFERENCE};
use crate::seismic::elf::{calculate, ElfInput, ElfResult};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings
    pub settings: GlobalSettings,

    /// All analyses, keyed by UUID
    pub analyses: HashMap<Uuid, ElfInput>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            analyses: HashMap::new(),
        }
    }

    /// Add an analysis and return its UUID.
    pub fn add_analysis(&mut self, input: ElfInput) -> Uuid {
        let id = Uuid::new_v4();
        self.analyses.insert(id, input);
        self.touch();
        id
    }

    /// Add an analysis from raw form fields.
    ///
    /// Blank Ie and R fields take the project defaults. Returns `Ok(None)`
    /// when the form requests no seismic analysis.
    pub fn add_form(&mut self, mut form: FormInput) -> CalcResult<Option<Uuid>> {
        if form.importance_factor.trim().is_empty() {
            form.importance_factor = self.settings.default_importance_factor.to_string();
        }
        if form.response_modification.trim().is_empty() {
            form.response_modification = self.settings.default_response_modification.to_string();
        }
        Ok(form.to_elf_input()?.map(|input| self.add_analysis(input)))
    }

    /// Remove an analysis by UUID.
    pub fn remove_analysis(&mut self, id: &Uuid) -> Option<ElfInput> {
        let removed = self.analyses.remove(id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Get an analysis by UUID.
    pub fn get_analysis(&self, id: &Uuid) -> Option<&ElfInput> {
        self.analyses.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of stored analyses
    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }

    /// Compute every analysis, ordered by label.
    pub fn run_all(&self) -> CalcResult<Vec<(Uuid, ElfResult)>> {
        let mut entries: Vec<(&Uuid, &ElfInput)> = self.analyses.iter().collect();
        entries.sort_by(|a, b| a.1.label.cmp(&b.1.label).then(a.0.cmp(b.0)));
        entries
            .into_iter()
            .map(|(id, input)| calculate(input).map(|result| (*id, result)))
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design code reference printed on reports
    pub code: String,

    /// Unit for forces in reports
    #[serde(default)]
    pub force_unit: ForceUnit,

    /// Ie used when a form leaves it blank
    pub default_importance_factor: f64,

    /// R used when a form leaves it blank
    pub default_response_modification: f64,
}

impl GlobalSettings {
    /// Report options derived from these settings
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            code_reference: self.code.clone(),
            force_unit: self.force_unit,
        }
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: DEFAULT_CODE_REFERENCE.to_string(),
            force_unit: ForceUnit::TonneForce,
            default_importance_factor: 1.0,
            default_response_modification: 8.0,
        }
    }
}

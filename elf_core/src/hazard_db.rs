//! # Hazard Parameter Database
//!
//! Mapped spectral accelerations Ss and S1 by province and district. The
//! table is produced elsewhere and loaded here as plain JSON (see
//! [`crate::file_io::load_hazard_database`]); this module only holds and
//! queries it.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "sites": [
//!     { "province": "Chiang Mai", "district": "Mueang", "ss": 0.6, "s1": 0.2 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One row of the hazard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardSite {
    /// Province name
    pub province: String,
    /// District (amphoe) name
    pub district: String,
    /// Short-period spectral acceleration Ss (g)
    pub ss: f64,
    /// 1-second spectral acceleration S1 (g)
    pub s1: f64,
}

/// Location-keyed hazard table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardDatabase {
    /// All rows in file order
    pub sites: Vec<HazardSite>,
}

impl HazardDatabase {
    /// Database with the single placeholder row a fresh data sheet starts with.
    pub fn sample() -> Self {
        HazardDatabase {
            sites: vec![HazardSite {
                province: "SampleProv".to_string(),
                district: "SampleDist".to_string(),
                ss: 0.5,
                s1: 0.2,
            }],
        }
    }

    /// Reject rows with negative or non-finite accelerations or blank names.
    pub fn validate(&self) -> CalcResult<()> {
        for (index, site) in self.sites.iter().enumerate() {
            if site.province.trim().is_empty() || site.district.trim().is_empty() {
                return Err(CalcError::invalid_input(
                    format!("sites[{}]", index),
                    format!("{} / {}", site.province, site.district),
                    "Province and district are required",
                ));
            }
            for (name, value) in [("ss", site.ss), ("s1", site.s1)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CalcError::invalid_input(
                        format!("sites[{}].{}", index, name),
                        value.to_string(),
                        "Spectral acceleration must be a finite, non-negative number",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Find the row for a location. Names match case-insensitively after trimming.
    pub fn lookup(&self, province: &str, district: &str) -> CalcResult<&HazardSite> {
        self.sites
            .iter()
            .find(|site| names_match(&site.province, province) && names_match(&site.district, district))
            .ok_or_else(|| CalcError::hazard_site_not_found(province.trim(), district.trim()))
    }

    /// Distinct province names in first-seen order
    pub fn provinces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for site in &self.sites {
            if !names.iter().any(|n| names_match(n, &site.province)) {
                names.push(site.province.as_str());
            }
        }
        names
    }

    /// Districts listed under a province
    pub fn districts(&self, province: &str) -> Vec<&str> {
        self.sites
            .iter()
            .filter(|site| names_match(&site.province, province))
            .map(|site| site.district.as_str())
            .collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// True when there are no rows
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

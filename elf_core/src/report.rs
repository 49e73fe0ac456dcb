//! # Calculation Report
//!
//! Plain-text seismic analysis report: a parameter table followed by the
//! vertical distribution table, listed roof to base.
//!
//! ## Example
//!
//! ```rust,no_run
//! use elf_core::report::{render_report, ReportOptions};
//! # use elf_core::seismic::ElfResult;
//! # fn show(result: &ElfResult) {
//! let text = render_report(result, &ReportOptions::default());
//! println!("{}", text);
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::project::Project;
use crate::seismic::elf::ElfResult;
use crate::units::{Kilonewtons, TonneForce};

/// Code reference printed in report titles
pub const DEFAULT_CODE_REFERENCE: &str = "DPT 1301/1302-61";

/// Force unit used when printing weights, forces and shears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Tonne-force (the unit of the input loads)
    #[default]
    TonneForce,
    /// Kilonewtons
    Kilonewtons,
}

impl ForceUnit {
    /// Unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::TonneForce => "T",
            ForceUnit::Kilonewtons => "kN",
        }
    }

    /// Convert a value in tonne-force to this unit
    pub fn convert(&self, tonne_force: f64) -> f64 {
        match self {
            ForceUnit::TonneForce => tonne_force,
            ForceUnit::Kilonewtons => Kilonewtons::from(TonneForce(tonne_force)).value(),
        }
    }
}

/// Presentation options for a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Code reference shown in the title
    pub code_reference: String,
    /// Unit for forces and weights
    pub force_unit: ForceUnit,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            code_reference: DEFAULT_CODE_REFERENCE.to_string(),
            force_unit: ForceUnit::TonneForce,
        }
    }
}

/// Render one analysis as a text report.
pub fn render_report(result: &ElfResult, options: &ReportOptions) -> String {
    let p = &result.parameters;
    let unit = options.force_unit;
    let f = |v: f64| unit.convert(v);
    let mut out = String::new();

    out.push_str(&format!("SEISMIC ANALYSIS REPORT ({})\n", options.code_reference));
    if !result.label.is_empty() {
        out.push_str(&format!("{}\n", result.label));
    }
    out.push('\n');

    let rows: Vec<(&str, String, &str)> = vec![
        ("Ss", format!("{}", p.ss), "Spectral Acceleration (Short Period)"),
        ("S1", format!("{}", p.s1), "Spectral Acceleration (1.0s)"),
        ("Site Class", p.site_class.to_string(), "Soil Type"),
        ("Fa", format!("{:.2}", p.fa), "Site Coefficient (Short)"),
        ("Fv", format!("{:.2}", p.fv), "Site Coefficient (Long)"),
        ("SMS", format!("{:.3}", p.sms), "Adjusted Spectral Acc. (Short)"),
        ("SM1", format!("{:.3}", p.sm1), "Adjusted Spectral Acc. (1.0s)"),
        ("SDS", format!("{:.3}", p.sds), "Design Spectral Acc. (Short)"),
        ("SD1", format!("{:.3}", p.sd1), "Design Spectral Acc. (1.0s)"),
        ("R", format!("{}", p.response_modification), "Response Modification Coefficient"),
        ("Ie", format!("{}", p.importance_factor), "Importance Factor"),
        ("T (Period)", format!("{:.3} s", p.period_s), "Approximate Fundamental Period"),
        ("k", format!("{:.2}", p.k), "Distribution Exponent"),
        ("W (Weight)", format!("{:.2} {}", f(p.w_effective), unit.symbol()), "Total Seismic Weight"),
        ("Cs", format!("{:.4}", p.cs), "Seismic Response Coefficient"),
        ("V (Base Shear)", format!("{:.2} {}", f(p.base_shear), unit.symbol()), "Design Base Shear (V = Cs * W)"),
    ];

    out.push_str(&format!("{:<16} {:<14} {}\n", "Parameter", "Value", "Description"));
    out.push_str(&format!("{}\n", "-".repeat(68)));
    for (name, value, description) in rows {
        out.push_str(&format!("{:<16} {:<14} {}\n", name, value, description));
    }
    out.push('\n');
    out.push_str(&format!(
        "Cs governed by {} (raw {:.4}, max {:.4}, min {:.2})\n",
        p.cs_governs, p.cs_raw, p.cs_max, p.cs_min
    ));
    out.push('\n');

    out.push_str("VERTICAL DISTRIBUTION OF SEISMIC FORCES\n");
    out.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12} {:>8} {:>12} {:>12}\n",
        "Level",
        "hx (m)",
        format!("wx ({})", unit.symbol()),
        "wx * hx^k",
        "Cvx",
        format!("Fx ({})", unit.symbol()),
        format!("Vx ({})", unit.symbol()),
    ));
    out.push_str(&format!("{}\n", "-".repeat(84)));
    for level in result.levels_roof_first() {
        let shear = if level.vx != 0.0 {
            format!("{:.3}", f(level.vx))
        } else {
            "-".to_string()
        };
        out.push_str(&format!(
            "{:<10} {:>12.2} {:>12.2} {:>12.1} {:>8.4} {:>12.3} {:>12}\n",
            level.name,
            level.hx,
            f(level.wx),
            f(level.wx_hx_k),
            level.cvx,
            f(level.fx),
            shear,
        ));
    }

    out
}

/// Render every analysis in a project under a common header.
///
/// Analyses are listed by label. Fails on the first analysis that cannot be
/// computed.
pub fn render_project_report(project: &Project) -> CalcResult<String> {
    let options = project.settings.report_options();
    let mut out = String::new();

    out.push_str(&format!("Engineer: {}\n", project.meta.engineer));
    out.push_str(&format!("Job ID:   {}\n", project.meta.job_id));
    out.push_str(&format!("Client:   {}\n", project.meta.client));
    out.push_str(&format!("Date:     {}\n", project.meta.modified.format("%Y-%m-%d")));

    for (_, result) in project.run_all()? {
        out.push('\n');
        out.push_str(&format!("{}\n", "=".repeat(84)));
        out.push_str(&render_report(&result, &options));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seismic::elf::{calculate, ElfInput};
    use crate::seismic::geometry::StructureGeometry;
    use crate::seismic::hazard::HazardParameters;
    use crate::seismic::site_coefficients::SiteClass;

    fn result() -> ElfResult {
        calculate(&input()).unwrap()
    }

    fn input() -> ElfInput {
        ElfInput {
            label: "Report Test".to_string(),
            hazard: HazardParameters {
                ss: 0.5,
                s1: 0.2,
                site_class: SiteClass::D,
                importance_factor: 1.0,
                response_modification: 8.0,
            },
            geometry: StructureGeometry {
                span_lengths_m: vec![4.0, 4.0, 4.0],
                story_heights_m: vec![3.5, 3.5],
                level_loads_tpm: vec![1.5, 2.0, 1.0],
            },
        }
    }

    #[test]
    fn test_report_contains_sections() {
        let text = render_report(&result(), &ReportOptions::default());
        assert!(text.starts_with("SEISMIC ANALYSIS REPORT (DPT 1301/1302-61)"));
        assert!(text.contains("Report Test"));
        assert!(text.contains("Design Base Shear (V = Cs * W)"));
        assert!(text.contains("VERTICAL DISTRIBUTION OF SEISMIC FORCES"));
        assert!(text.contains("Cs governed by"));
    }

    #[test]
    fn test_levels_listed_roof_first() {
        let text = render_report(&result(), &ReportOptions::default());
        let roof = text.find("Roof").unwrap();
        let floor = text.find("FL 2").unwrap();
        let base = text.find("Base/FL1").unwrap();
        assert!(roof < floor && floor < base);
    }

    #[test]
    fn test_kilonewton_conversion() {
        let options = ReportOptions {
            force_unit: ForceUnit::Kilonewtons,
            ..ReportOptions::default()
        };
        let r = result();
        let text = render_report(&r, &options);
        let expected = format!("{:.2} kN", r.parameters.base_shear * 9.80665);
        assert!(text.contains(&expected));
        assert!(text.contains("Fx (kN)"));
    }

    #[test]
    fn test_report_has_one_row_per_level() {
        let text = render_report(&result(), &ReportOptions::default());
        assert!(text.ends_with('\n'));
        let table = text.split("VERTICAL DISTRIBUTION OF SEISMIC FORCES\n").nth(1).unwrap();
        // Header, rule, then three levels
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_project_report_header_and_sections() {
        let mut project = Project::new("Jane Engineer", "25-042", "Client");
        project.add_analysis(ElfInput { label: "B".to_string(), ..input() });
        project.add_analysis(ElfInput { label: "A".to_string(), ..input() });

        let text = render_project_report(&project).unwrap();
        assert!(text.starts_with("Engineer: Jane Engineer\n"));
        assert_eq!(text.matches("SEISMIC ANALYSIS REPORT").count(), 2);
        assert!(text.find("\nA\n").unwrap() < text.find("\nB\n").unwrap());
    }

    #[test]
    fn test_force_unit_convert() {
        assert_eq!(ForceUnit::TonneForce.convert(3.0), 3.0);
        assert!((ForceUnit::Kilonewtons.convert(1.0) - 9.80665).abs() < 1e-12);
    }
}

//! # ELF CLI
//!
//! Command-line front end for the seismic base shear engine.
//!
//! ```text
//! elf analyze --spans 4,4,4 --heights 3.5,3.5 --loads 1.5,2,1 --ss 0.5 --s1 0.2
//! elf analyze --spans 6 --heights 3 --loads 0,1 --province "Chiang Mai" --district Fang
//! elf project job.elf.json
//! elf sites --province "Chiang Mai"
//! ```
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG` or pass
//! `--verbose` to see the intermediate values.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use elf_core::file_io::{load_hazard_database, load_project};
use elf_core::hazard_db::HazardDatabase;
use elf_core::input::{FormInput, StoryOrder};
use elf_core::report::{render_project_report, render_report, ForceUnit, ReportOptions};
use elf_core::seismic::{ElfResult, SiteClass};
use elf_core::CalcError;

/// Seismic base shear by the Equivalent Lateral Force procedure
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one building from command-line fields
    Analyze(AnalyzeArgs),
    /// Report every analysis stored in a project file
    Project {
        /// Path to the .elf.json project file
        file: PathBuf,

        /// Print results as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// List the sites in a hazard table
    Sites {
        /// Only list districts of this province
        #[arg(long)]
        province: Option<String>,

        /// Hazard table (JSON); the sample table is used when omitted
        #[arg(long, env = "ELF_HAZARD_DB")]
        hazard_db: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Analysis label
    #[arg(long, default_value = "")]
    label: String,

    /// Bay spans in m, comma-separated
    #[arg(long)]
    spans: String,

    /// Story heights in m, comma-separated
    #[arg(long)]
    heights: String,

    /// Level line loads in tf/m, comma-separated (one more than the stories)
    #[arg(long)]
    loads: String,

    /// Heights and loads are listed from the roof down
    #[arg(long)]
    roof_first: bool,

    /// Ss in g; overrides the hazard table
    #[arg(long)]
    ss: Option<String>,

    /// S1 in g; overrides the hazard table
    #[arg(long)]
    s1: Option<String>,

    /// Province to look up in the hazard table
    #[arg(long, requires = "district")]
    province: Option<String>,

    /// District to look up in the hazard table
    #[arg(long, requires = "province")]
    district: Option<String>,

    /// Hazard table (JSON); the sample table is used when omitted
    #[arg(long, env = "ELF_HAZARD_DB")]
    hazard_db: Option<PathBuf>,

    /// Site class A-F (unknown letters fall back to D)
    #[arg(long, default_value = "D")]
    site_class: String,

    /// Importance factor Ie
    #[arg(long, default_value = "1.0")]
    ie: String,

    /// Response modification coefficient R
    #[arg(long, default_value = "8")]
    r: String,

    /// Print forces in kN instead of tf
    #[arg(long)]
    kn: bool,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

/// JSON payload of `elf analyze --json`
#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    point_loads: String,
    story_shears: String,
    result: &'a ElfResult,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            match err.downcast_ref::<CalcError>() {
                Some(calc_err) => {
                    if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                        eprintln!();
                        eprintln!("Error JSON:");
                        eprintln!("{}", json);
                    }
                    ExitCode::from(exit_status(calc_err))
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

/// Exit status 2 for rejected input, 1 for everything else
fn exit_status(err: &CalcError) -> u8 {
    if err.is_input_error() {
        2
    } else {
        1
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze(args),
        Command::Project { file, json } => project(&file, json),
        Command::Sites { province, hazard_db } => sites(province.as_deref(), hazard_db.as_deref()),
    }
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let (ss, s1) = resolve_hazard(&args)?;

    let form = FormInput {
        label: args.label,
        span_lengths: args.spans,
        story_heights: args.heights,
        level_loads: args.loads,
        ss,
        s1,
        site_class: args.site_class,
        importance_factor: args.ie,
        response_modification: args.r,
        story_order: if args.roof_first {
            StoryOrder::RoofFirst
        } else {
            StoryOrder::BaseFirst
        },
    };

    let Some(input) = form.to_elf_input()? else {
        info!("no hazard selected, skipping analysis");
        println!("No seismic hazard selected; nothing to analyze.");
        return Ok(());
    };

    let result = elf_core::calculate(&input)?;

    if args.json {
        let output = AnalyzeOutput {
            point_loads: result.point_loads_csv(),
            story_shears: result.story_shears_csv(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let options = ReportOptions {
            force_unit: if args.kn { ForceUnit::Kilonewtons } else { ForceUnit::TonneForce },
            ..ReportOptions::default()
        };
        print!("{}", render_report(&result, &options));
        println!();
        println!("Point loads (base to roof): {}", result.point_loads_csv());
    }
    Ok(())
}

/// Ss/S1 strings for the form: explicit flags win over the hazard table.
fn resolve_hazard(args: &AnalyzeArgs) -> Result<(String, String)> {
    let (mut ss, mut s1) = (String::new(), String::new());

    if let (Some(province), Some(district)) = (&args.province, &args.district) {
        let db = hazard_database(args.hazard_db.as_deref())?;
        let site = db.lookup(province, district)?;
        debug!("hazard site {}/{}: Ss={} S1={}", site.province, site.district, site.ss, site.s1);
        ss = site.ss.to_string();
        s1 = site.s1.to_string();
    }
    if let Some(value) = &args.ss {
        ss = value.clone();
    }
    if let Some(value) = &args.s1 {
        s1 = value.clone();
    }
    Ok((ss, s1))
}

fn hazard_database(path: Option<&Path>) -> Result<HazardDatabase> {
    match path {
        Some(path) => load_hazard_database(path)
            .with_context(|| format!("loading hazard table {}", path.display())),
        None => Ok(HazardDatabase::sample()),
    }
}

fn project(file: &Path, json: bool) -> Result<()> {
    let project = load_project(file).with_context(|| format!("opening project {}", file.display()))?;

    if json {
        let results: Vec<ElfResult> = project.run_all()?.into_iter().map(|(_, r)| r).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_project_report(&project)?);
    }
    Ok(())
}

fn sites(province: Option<&str>, hazard_db: Option<&Path>) -> Result<()> {
    let db = hazard_database(hazard_db)?;

    match province {
        Some(province) => {
            let districts = db.districts(province);
            if districts.is_empty() {
                anyhow::bail!("no districts listed for province '{}'", province);
            }
            for district in districts {
                let site = db.lookup(province, district)?;
                println!("{:<24} Ss={:<6} S1={}", district, site.ss, site.s1);
            }
        }
        None => {
            for province in db.provinces() {
                println!("{} ({} districts)", province, db.districts(province).len());
            }
        }
    }

    println!();
    println!("Site classes:");
    for class in SiteClass::ALL {
        println!("  {}  {}", class, class.description());
    }
    Ok(())
}

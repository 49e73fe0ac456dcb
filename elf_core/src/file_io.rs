//! # File I/O Module
//!
//! Project files and hazard tables on disk:
//! - **Atomic saves**: Write to .tmp, sync, rename so a crash never leaves a half-written file
//! - **Version validation**: Refuse project files written by an incompatible schema
//!
//! ## File Format
//!
//! Projects are saved as `.elf.json` files. Hazard tables are plain JSON in
//! the format described in [`crate::hazard_db`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use elf_core::file_io::{save_project, load_project};
//! use elf_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("myproject.elf.json");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.job_id, "25-001");
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use semver::Version;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::hazard_db::HazardDatabase;
use crate::project::{Project, SCHEMA_VERSION};

/// Serialize a value as pretty JSON and write it atomically.
///
/// The value is written to a sibling `.tmp` file, synced, then renamed over
/// `path`. The temp file is removed if any step after its creation fails.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = tmp_path_for(path);

    let written = write_synced(&tmp_path, json.as_bytes()).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written?;

    debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

fn write_synced(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Save a project with atomic write semantics.
///
/// # Example
///
/// ```rust,no_run
/// use elf_core::file_io::save_project;
/// use elf_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Engineer", "25-001", "Client");
/// save_project(&project, Path::new("myproject.elf.json"))?;
/// # Ok::<(), elf_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    write_json_atomic(project, path)?;
    info!(
        "saved project {} ({} analyses) to {}",
        project.meta.job_id,
        project.analysis_count(),
        path.display()
    );
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let project: Project = read_json(path)?;
    validate_version(&project.meta.version)?;
    info!(
        "loaded project {} ({} analyses) from {}",
        project.meta.job_id,
        project.analysis_count(),
        path.display()
    );
    Ok(project)
}

/// Load and validate a hazard table.
pub fn load_hazard_database(path: &Path) -> CalcResult<HazardDatabase> {
    let database: HazardDatabase = read_json(path)?;
    database.validate()?;
    info!("loaded {} hazard sites from {}", database.len(), path.display());
    Ok(database)
}

/// Check that a file's schema version can be read by this build.
///
/// The major version must match. While the schema is 0.x, a file with a
/// newer minor version is rejected as well.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file = Version::parse(file_version.trim()).map_err(|_| mismatch())?;
    let current = Version::parse(SCHEMA_VERSION).map_err(|_| mismatch())?;

    if file.major != current.major {
        return Err(mismatch());
    }
    if current.major == 0 && file.minor > current.minor {
        return Err(mismatch());
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard_db::HazardSite;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("elf_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");

        let project = Project::new("Test Engineer", "TEST-001", "Test Client");
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.meta.client, "Test Client");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");

        save_project(&Project::default(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_tmp_path_keeps_full_name() {
        let tmp = tmp_path_for(Path::new("/data/job.elf.json"));
        assert_eq!(tmp, Path::new("/data/job.elf.json.tmp"));
    }

    #[test]
    fn test_failed_save_leaves_no_tmp_file() {
        // Renaming a file over a directory fails after the temp file is written
        let dir = temp_dir().join(format!("elf_test_dir_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let err = save_project(&Project::default(), &dir).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&dir).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer");

        let mut project = Project::default();
        project.meta.version = "0.9.0".to_string();
        write_json_atomic(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(Path::new("/definitely/not/here.elf.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("garbage");
        fs::write(&path, "{ not json").unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("not a version").is_err());
    }

    #[test]
    fn test_hazard_database_roundtrip() {
        let path = temp_path("hazard");
        let mut db = HazardDatabase::sample();
        db.sites.push(HazardSite {
            province: "Chiang Rai".to_string(),
            district: "Mae Sai".to_string(),
            ss: 1.1,
            s1: 0.35,
        });
        write_json_atomic(&db, &path).unwrap();

        let loaded = load_hazard_database(&path).unwrap();
        assert_eq!(loaded, db);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_hazard_database_validates_rows() {
        let path = temp_path("hazard_bad");
        fs::write(
            &path,
            r#"{"sites":[{"province":"P","district":"D","ss":-1.0,"s1":0.2}]}"#,
        )
        .unwrap();

        assert!(load_hazard_database(&path).is_err());

        let _ = fs::remove_file(&path);
    }
}

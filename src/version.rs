use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::{Config, VersionSource, VersionSourceConfig};
use crate::error::{ReleaseGateError, Result};

/// The `[package]` table of a Cargo.toml-style manifest.
#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    package: ManifestPackage,
}

fn read_manifest(path: &Path) -> Result<Manifest> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ReleaseGateError::version(format!("Cannot read manifest '{}': {}", path.display(), e))
    })?;

    toml::from_str(&contents).map_err(|e| {
        ReleaseGateError::version(format!("Cannot parse manifest '{}': {}", path.display(), e))
    })
}

/// Reads the current version identifier from the configured source.
///
/// Supports two sources:
/// - `manifest`: the `[package].version` field of a TOML manifest
/// - `file`: a plain-text file whose trimmed contents are the version
///
/// The value must be a valid semantic version; anything else fails loudly.
/// Never mutates state.
pub fn read_version(config: &VersionSourceConfig) -> Result<String> {
    let path = Path::new(config.effective_path());

    let raw = match config.source {
        VersionSource::Manifest => read_manifest(path)?.package.version,
        VersionSource::File => fs::read_to_string(path)
            .map_err(|e| {
                ReleaseGateError::version(format!(
                    "Cannot read version file '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .trim()
            .to_string(),
    };

    if raw.is_empty() {
        return Err(ReleaseGateError::version(format!(
            "Version source '{}' is empty",
            path.display()
        )));
    }

    semver::Version::parse(&raw).map_err(|e| {
        ReleaseGateError::version(format!("Invalid version '{}': {}", raw, e))
    })?;

    Ok(raw)
}

/// Resolves the project name used in diagnostics.
///
/// Resolution order:
/// 1. `project` key in the configuration
/// 2. `[package].name` of a manifest in the working directory
/// 3. The working directory's file name
pub fn resolve_project_name(config: &Config) -> Result<String> {
    if let Some(project) = &config.project {
        return Ok(project.clone());
    }

    let manifest_path = Path::new("Cargo.toml");
    if manifest_path.exists() {
        if let Ok(manifest) = read_manifest(manifest_path) {
            return Ok(manifest.package.name);
        }
    }

    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .ok_or_else(|| ReleaseGateError::config("Cannot resolve a project name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source(source: VersionSource, path: &Path) -> VersionSourceConfig {
        VersionSourceConfig {
            source,
            path: Some(path.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn test_read_version_from_manifest() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[package]\nname = \"demo\"\nversion = \"1.2.0\"").unwrap();
        file.flush().unwrap();

        let version = read_version(&source(VersionSource::Manifest, file.path())).unwrap();
        assert_eq!(version, "1.2.0");
    }

    #[test]
    fn test_read_version_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2.0.0-rc.1").unwrap();
        file.flush().unwrap();

        let version = read_version(&source(VersionSource::File, file.path())).unwrap();
        assert_eq!(version, "2.0.0-rc.1");
    }

    #[test]
    fn test_read_version_trims_whitespace() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  1.0.0\n").unwrap();
        file.flush().unwrap();

        let version = read_version(&source(VersionSource::File, file.path())).unwrap();
        assert_eq!(version, "1.0.0");
    }

    #[test]
    fn test_read_version_rejects_non_semver() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not-a-version").unwrap();
        file.flush().unwrap();

        let err = read_version(&source(VersionSource::File, file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid version"));
    }

    #[test]
    fn test_read_version_missing_source_fails() {
        let cfg = VersionSourceConfig {
            source: VersionSource::File,
            path: Some("/nonexistent/VERSION".to_string()),
        };
        assert!(read_version(&cfg).is_err());
    }

    #[test]
    fn test_read_version_empty_file_fails() {
        let file = NamedTempFile::new().unwrap();
        let err = read_version(&source(VersionSource::File, file.path())).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_project_name_from_config_override() {
        let config = Config {
            project: Some("pyonepassword".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_project_name(&config).unwrap(), "pyonepassword");
    }
}

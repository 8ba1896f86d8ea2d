use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseGateError, Result};

/// Represents the complete configuration for release-gate.
///
/// Contains the release branch, tag naming pattern, version source, and the
/// external tagging helper command.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Optional project name override used in diagnostics. When absent, the
    /// name is resolved from the package manifest or the working directory.
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default)]
    pub version: VersionSourceConfig,

    #[serde(default)]
    pub helper: HelperConfig,
}

fn default_release_branch() -> String {
    "master".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Where the current version identifier is read from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// `[package].version` of a Cargo.toml-style manifest
    #[default]
    Manifest,
    /// A plain-text file holding the version string
    File,
}

/// Configuration for version resolution.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct VersionSourceConfig {
    #[serde(default)]
    pub source: VersionSource,

    /// Path to the version source. Defaults to `Cargo.toml` for the manifest
    /// source and `VERSION` for the file source.
    #[serde(default)]
    pub path: Option<String>,
}

impl VersionSourceConfig {
    /// The effective path for this source, applying per-source defaults.
    pub fn effective_path(&self) -> &str {
        match &self.path {
            Some(path) => path.as_str(),
            None => match self.source {
                VersionSource::Manifest => "Cargo.toml",
                VersionSource::File => "VERSION",
            },
        }
    }
}

/// Configuration for the external tag-creation helper.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HelperConfig {
    #[serde(default = "default_helper_command")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

fn default_helper_command() -> String {
    "scripts/tag-release".to_string()
}

impl Default for HelperConfig {
    fn default() -> Self {
        HelperConfig {
            command: default_helper_command(),
            args: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: None,
            release_branch: default_release_branch(),
            tag_pattern: default_tag_pattern(),
            version: VersionSourceConfig::default(),
            helper: HelperConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasegate.toml` in current directory
/// 3. `~/.config/.releasegate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is a fatal error.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ReleaseGateError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new("./releasegate.toml").exists() {
        fs::read_to_string("./releasegate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasegate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseGateError::config(format!("Invalid config file: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.release_branch, "master");
        assert_eq!(config.tag_pattern, "v{version}");
        assert_eq!(config.version.source, VersionSource::Manifest);
        assert_eq!(config.helper.command, "scripts/tag-release");
        assert!(config.helper.args.is_empty());
        assert!(config.project.is_none());
    }

    #[test]
    fn test_effective_path_defaults() {
        let manifest = VersionSourceConfig {
            source: VersionSource::Manifest,
            path: None,
        };
        assert_eq!(manifest.effective_path(), "Cargo.toml");

        let file = VersionSourceConfig {
            source: VersionSource::File,
            path: None,
        };
        assert_eq!(file.effective_path(), "VERSION");
    }

    #[test]
    fn test_effective_path_explicit() {
        let cfg = VersionSourceConfig {
            source: VersionSource::File,
            path: Some("pkg/version.txt".to_string()),
        };
        assert_eq!(cfg.effective_path(), "pkg/version.txt");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
project = "pyonepassword"
release_branch = "main"
tag_pattern = "release-{version}"

[version]
source = "file"
path = "VERSION"

[helper]
command = "scripts/do-tag.sh"
args = ["--sign"]
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.project.as_deref(), Some("pyonepassword"));
        assert_eq!(config.release_branch, "main");
        assert_eq!(config.tag_pattern, "release-{version}");
        assert_eq!(config.version.source, VersionSource::File);
        assert_eq!(config.helper.command, "scripts/do-tag.sh");
        assert_eq!(config.helper.args, vec!["--sign".to_string()]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("release_branch = \"develop\"").unwrap();
        assert_eq!(config.release_branch, "develop");
        assert_eq!(config.tag_pattern, "v{version}");
        assert_eq!(config.version.source, VersionSource::Manifest);
    }
}

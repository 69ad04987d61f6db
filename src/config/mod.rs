//! Configuration management for `iss`.
//!
//! Configuration is layered, later layers winning:
//! - Workspace config (`.issues/config.yaml`)
//! - Environment variable overrides (`ISSUES_SOURCE`, `ISSUES_DATA_DIR`, `ISSUES_SLOT`)
//! - Command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use issues_core::DEFAULT_SLOT;

/// Workspace directory holding config and the persisted slot.
pub const WORKSPACE_DIR: &str = ".issues";
/// Config file name inside the workspace directory.
pub const CONFIG_FILE: &str = "config.yaml";
/// Default flat-file issue source, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "issues.dat";

pub const ENV_SOURCE: &str = "ISSUES_SOURCE";
pub const ENV_DATA_DIR: &str = "ISSUES_DATA_DIR";
pub const ENV_SLOT: &str = "ISSUES_SLOT";

/// On-disk shape of `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Flat-file issue source.
    pub source: Option<PathBuf>,
    /// Directory for persisted slots.
    pub data_dir: Option<PathBuf>,
    /// Slot name for the working collection.
    pub slot: Option<String>,
}

/// Overrides taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub source: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub slot: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the real environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            source: get(ENV_SOURCE).map(PathBuf::from),
            data_dir: get(ENV_DATA_DIR).map(PathBuf::from),
            slot: get(ENV_SLOT),
        }
    }
}

/// Overrides from global CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub source: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub data_dir: PathBuf,
    pub slot: String,
}

impl Config {
    /// Load `<root>/.issues/config.yaml` (if present) and apply overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` if the config file is not valid, or `Io` if it
    /// exists but cannot be read.
    pub fn load(root: &Path, cli: &CliOverrides) -> Result<Self> {
        let file = read_config_file(&root.join(WORKSPACE_DIR).join(CONFIG_FILE))?;
        let config = Self::resolve(root, file, &EnvOverrides::from_env(), cli);
        tracing::debug!(
            source = %dunce::simplified(&config.source).display(),
            data_dir = %dunce::simplified(&config.data_dir).display(),
            slot = %config.slot,
            "Resolved configuration"
        );
        Ok(config)
    }

    /// Layer file, environment and CLI settings over the defaults.
    ///
    /// Relative paths resolve against `root`.
    #[must_use]
    pub fn resolve(root: &Path, file: ConfigFile, env: &EnvOverrides, cli: &CliOverrides) -> Self {
        let source = cli
            .source
            .clone()
            .or_else(|| env.source.clone())
            .or(file.source)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| env.data_dir.clone())
            .or(file.data_dir)
            .unwrap_or_else(|| PathBuf::from(WORKSPACE_DIR));
        let slot = env
            .slot
            .clone()
            .or(file.slot)
            .unwrap_or_else(|| DEFAULT_SLOT.to_string());

        Self {
            source: root.join(source),
            data_dir: root.join(data_dir),
            slot,
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => return Err(AppError::Io(e)),
    };

    // A file of only comments/blank lines is an empty document.
    let has_content = content
        .lines()
        .any(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));
    if !has_content {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Template written by `iss init`.
pub const CONFIG_TEMPLATE: &str = "\
# Issue tracker configuration
# source: issues.dat
# data_dir: .issues
# slot: issue-tracker-issues
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let root = Path::new("/work");
        let config = Config::resolve(
            root,
            ConfigFile::default(),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        );
        assert_eq!(config.source, PathBuf::from("/work/issues.dat"));
        assert_eq!(config.data_dir, PathBuf::from("/work/.issues"));
        assert_eq!(config.slot, "issue-tracker-issues");
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let root = Path::new("/work");
        let file = ConfigFile {
            source: Some("file.dat".into()),
            data_dir: Some("file-data".into()),
            slot: Some("file-slot".into()),
        };
        let env = EnvOverrides::from_lookup(|key| match key {
            ENV_SOURCE => Some("env.dat".into()),
            ENV_SLOT => Some("env-slot".into()),
            _ => None,
        });
        let cli = CliOverrides {
            source: Some("/abs/cli.dat".into()),
            data_dir: None,
        };

        let config = Config::resolve(root, file, &env, &cli);
        assert_eq!(config.source, PathBuf::from("/abs/cli.dat"));
        assert_eq!(config.data_dir, PathBuf::from("/work/file-data"));
        assert_eq!(config.slot, "env-slot");
    }

    #[test]
    fn blank_env_values_ignored() {
        let env = EnvOverrides::from_lookup(|_| Some("  ".into()));
        assert_eq!(env, EnvOverrides::default());
    }

    #[test]
    fn reads_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "source: data/issues.dat\nslot: mine\n").unwrap();

        let file = read_config_file(&path).unwrap();
        assert_eq!(file.source, Some(PathBuf::from("data/issues.dat")));
        assert_eq!(file.slot.as_deref(), Some("mine"));
        assert_eq!(file.data_dir, None);
    }

    #[test]
    fn template_is_an_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, CONFIG_TEMPLATE).unwrap();
        assert_eq!(read_config_file(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn missing_config_is_default() {
        let file = read_config_file(Path::new("/nonexistent/config.yaml")).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "sauce: typo.dat\n").unwrap();
        assert!(matches!(
            read_config_file(&path),
            Err(AppError::ConfigParse { .. })
        ));
    }
}

//! Optional TOML settings file.
//!
//! Holds per-user defaults for the profile, region and output format. Command
//! line flags win over the file, and the file wins over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::app::output::OutputFormat;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// AWS credential profile name
    pub profile: Option<String>,
    /// Region override; the profile's region is used when unset
    pub region: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Settings {
    /// `<config_dir>/config.toml` for this application
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "", "cwlogs-fetch").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load settings from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Load the explicitly requested file, or the default file when it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default file
    /// yields empty settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log_debug!("Loading settings from {}", path.display());
                Self::load_from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "profile = \"prod\"\nregion = \"ap-northeast-1\"\noutput = \"lines\"").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.profile.as_deref(), Some("prod"));
        assert_eq!(settings.region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(settings.output, Some(OutputFormat::Lines));
    }

    #[test]
    fn test_partial_file_leaves_rest_unset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region = \"eu-west-1\"").unwrap();

        let settings = Settings::load_from_file(file.path()).unwrap();

        assert!(settings.profile.is_none());
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "profil = \"typo\"").unwrap();

        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(Settings::load(Some(&missing)).is_err());
    }
}

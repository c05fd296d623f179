//! Navigator configuration file
//!
//! An optional TOML file supplying defaults for the binary:
//!
//! ```toml
//! graph = "demos/space-highway.graph"
//! format = "json"
//! banner = false
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;

/// Defaults for the navigator binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Route file loaded when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the loaded graph when an interactive session starts
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_banner() -> bool {
    true
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            graph: None,
            format: OutputFormat::default(),
            banner: default_banner(),
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NavigatorConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravelError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert!(config.graph.is_none());
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.banner);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("navigator.toml");
        fs::write(
            &path,
            "graph = \"routes.graph\"\nformat = \"json\"\nbanner = false\n",
        )
        .unwrap();

        let config = NavigatorConfig::load(&path).unwrap();
        assert_eq!(config.graph, Some(PathBuf::from("routes.graph")));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.banner);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("navigator.toml");
        fs::write(&path, "format = \"json\"\n").unwrap();

        let config = NavigatorConfig::load(&path).unwrap();
        assert!(config.graph.is_none());
        assert!(config.banner);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("navigator.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();

        let err = NavigatorConfig::load(&path).unwrap_err();
        assert!(matches!(err, TravelError::Toml(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            NavigatorConfig::load_or_default(None).unwrap(),
            NavigatorConfig::default()
        );
    }
}

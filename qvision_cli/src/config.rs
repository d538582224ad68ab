//! Configuration file support for the `qvision` CLI.
//!
//! Loads an optional `qvision.toml` (or the file given with `--config`).

use std::path::{Path, PathBuf};

use qvision_report::ReportOptions;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "qvision.toml";
pub const DEFAULT_OUTPUT: &str = "qvision-report.html";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QvisionConfig {
    /// Default output path for `render` when `-o` is not given
    pub output: PathBuf,
    pub report: ReportOptions,
}

impl Default for QvisionConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: ReportOptions::default(),
        }
    }
}

impl QvisionConfig {
    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = QvisionConfig::default();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.report.include_heatmap);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = QvisionConfig::load_from_path(&temp.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(config, QvisionConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file =
            std::fs::File::create(temp.path().join(DEFAULT_CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
output = "out/report.html"

[report]
title = "Clinic Export"
include_heatmap = false
"#
        )
        .expect("write config");

        let config = QvisionConfig::load_from_path(&temp.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(config.output, PathBuf::from("out/report.html"));
        assert_eq!(config.report.title, "Clinic Export");
        assert!(!config.report.include_heatmap);
    }

    #[test]
    fn test_partial_report_table_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[report]\ninclude_heatmap = false\n").expect("write config");

        let config = QvisionConfig::load_from_path(&path);
        assert_eq!(config.report.title, ReportOptions::default().title);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "report = [not toml")
            .expect("write config");

        let config = QvisionConfig::load_from_path(&temp.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(config, QvisionConfig::default());
    }
}

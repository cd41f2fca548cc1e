//! Configuration for the reduction pipeline
//!
//! Artifact names, the oracle command, and the output format are explicit
//! configuration values passed into the oracle boundary, never process-wide
//! constants; the encoders and decoders stay free of I/O concerns.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub oracle: OracleConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub backend: OracleBackend,
    /// Solver command for the process backend.
    pub command: String,
    pub args: Vec<String>,
    /// Where the DIMACS input artifact is written.
    pub cnf_file: PathBuf,
    /// Where the solver leaves its result artifact.
    pub solution_file: PathBuf,
    /// Optional bound on one oracle invocation, process backend only.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleBackend {
    /// In-process CaDiCaL solver.
    Cadical,
    /// External solver process speaking the artifact formats.
    Process,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            oracle: OracleConfig {
                backend: OracleBackend::Cadical,
                command: String::from("sat_oracle"),
                args: Vec::new(),
                cnf_file: PathBuf::from("sat.cnf"),
                solution_file: PathBuf::from("sat.sol"),
                timeout_seconds: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file.
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<()> {
        if self.oracle.backend == OracleBackend::Process && self.oracle.command.is_empty() {
            anyhow::bail!("The process oracle backend requires a solver command");
        }
        if self.oracle.timeout_seconds == Some(0) {
            anyhow::bail!("Oracle timeout must be positive when set");
        }
        Ok(())
    }

    /// Merge settings with command line overrides.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(backend) = cli_overrides.backend {
            self.oracle.backend = backend;
        }
        if let Some(ref command) = cli_overrides.oracle_command {
            self.oracle.command = command.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backend: Option<OracleBackend>,
    pub oracle_command: Option<String>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.oracle.backend, OracleBackend::Cadical);
        assert_eq!(settings.oracle.cnf_file, PathBuf::from("sat.cnf"));
        assert_eq!(settings.oracle.solution_file, PathBuf::from("sat.sol"));
    }

    #[test]
    fn test_process_backend_requires_command() {
        let mut settings = Settings::default();
        settings.oracle.backend = OracleBackend::Process;
        settings.oracle.command = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut settings = Settings::default();
        settings.oracle.timeout_seconds = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.oracle.backend = OracleBackend::Process;
        settings.oracle.command = String::from("minisat");
        settings.output.format = OutputFormat::Json;

        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();

        assert_eq!(loaded.oracle.backend, OracleBackend::Process);
        assert_eq!(loaded.oracle.command, "minisat");
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            backend: Some(OracleBackend::Process),
            oracle_command: Some(String::from("kissat")),
            format: Some(OutputFormat::Json),
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.oracle.backend, OracleBackend::Process);
        assert_eq!(settings.oracle.command, "kissat");
        assert_eq!(settings.output.format, OutputFormat::Json);
    }
}

//! Configuration management

pub mod settings;

pub use settings::{
    CliOverrides, OracleBackend, OracleConfig, OutputConfig, OutputFormat, Settings,
};

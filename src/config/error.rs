//! Configuration errors.

use thiserror::Error;

/// A configuration value outside its valid range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct ConfigError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub reason: &'static str,
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// File could not be read.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid YAML for this schema.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// File parsed but a value is out of range.
    #[error("config validation error: {0}")]
    Validation(#[from] ConfigError),
}

//! Configuration loading for ganita.
//!
//! Loads all configuration from a single YAML file. Every field has a
//! default, so a partial file (or none at all) is valid.

pub(crate) mod defaults;
mod error;
mod ganita;
mod plot;

pub use error::{ConfigError, ConfigLoadError};
pub use ganita::GanitaConfig;
pub use plot::PlotSection;

//! Configuration loading errors.

use thiserror::Error;

/// Failure to read or parse a configuration file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("cannot read config: {0}")]
    Io(String),
    /// YAML did not match the configuration schema
    #[error("invalid config YAML: {0}")]
    Parse(String),
}

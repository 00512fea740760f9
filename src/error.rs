//! Error types for the portal search crate
//!
//! The search core itself never fails; these errors only surface at the
//! edges where configuration files and content snapshots are read.

use thiserror::Error;

/// Errors that can occur while loading or saving search resources
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Content snapshot decoding errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type alias for portal search operations
pub type PortalResult<T> = Result<T, PortalError>;

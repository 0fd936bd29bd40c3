//! # Glitter Error Types
//!
//! The particle loop itself cannot fail. Errors only come from loading
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up the glitter effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlitterError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The configuration text is not valid TOML for [`GlitterConfig`](crate::GlitterConfig).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for glitter operations.
pub type GlitterResult<T> = Result<T, GlitterError>;

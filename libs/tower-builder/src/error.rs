//! # Build Errors
//!
//! Fatal input errors for tower construction. All of them are raised before
//! any geometry is built. Zero-length spans are not represented here; they
//! surface as `None` parts and are filtered by the scene assembler.

use crate::params::Sector;
use std::path::PathBuf;
use thiserror::Error;
use tower_mesh::MeshError;

/// Errors that can occur while loading a configuration or building a tower.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, missing fields or values of the wrong type
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric parameter is out of range
    #[error("Invalid parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An antenna key that is not A, B or C
    #[error("Unknown sector label: {0:?}")]
    UnknownSector(String),

    /// The same sector given twice (keys are case-insensitive)
    #[error("Sector {sector} listed more than once")]
    DuplicateSector { sector: Sector },

    /// An antenna count below zero
    #[error("Negative antenna count for sector {sector}: {count}")]
    NegativeCount { sector: Sector, count: i64 },

    /// A detection label line that cannot be parsed
    #[error("Invalid label at line {line}: {message}")]
    Label { line: usize, message: String },

    /// Primitive construction failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl BuildError {
    /// Creates an I/O error tagged with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an out-of-range parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result type alias for tower construction.
pub type BuildResult<T> = Result<T, BuildError>;

//! # Export Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding or writing a GLB file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Mesh without triangles
    #[error("Cannot export an empty mesh")]
    Empty,

    /// Buffer exceeds the 32-bit GLB length field
    #[error("GLB too large: {0} bytes")]
    TooLarge(usize),

    /// The glTF document failed to serialize
    #[error("Failed to serialize glTF JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

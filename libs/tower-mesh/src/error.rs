//! # Mesh Errors
//!
//! Error types for primitive construction.
//!
//! Zero-length tube and beam spans are not errors; they yield `None` from
//! the primitive constructors. The variants here cover parameters no
//! primitive can be built from.

use thiserror::Error;

/// Errors that can occur during primitive construction.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Degenerate parameters (non-positive radius, height or extents)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too few radial sections to form a polygon
    #[error("Too few sections: {count} (min: {min})")]
    TooFewSections { count: u32, min: u32 },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("radius must be positive");
        assert!(err.to_string().contains("Degenerate geometry"));
        assert!(err.to_string().contains("radius"));

        let err = MeshError::TooFewSections { count: 2, min: 3 };
        assert_eq!(err.to_string(), "Too few sections: 2 (min: 3)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

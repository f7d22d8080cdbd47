//! # Mesh Errors
//!
//! Error types for mesh generation and export.
//!
//! ## Error Policy
//!
//! - Configuration is validated before any grid is built
//! - A partially-built mesh is never returned
//! - Export failures carry the underlying I/O or serde error

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while generating or exporting a mesh.
///
/// ## Example
///
/// ```rust
/// use mobius_mesh::{generate_mobius_mesh, MeshError};
///
/// match generate_mobius_mesh(1, 4, false) {
///     Err(MeshError::InvalidConfig(err)) => assert!(err.to_string().contains("u_steps")),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// Rejected grid resolution.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Writing serialized output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

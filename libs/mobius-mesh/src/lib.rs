//! # Möbius Mesh
//!
//! Samples the Möbius strip on a regular `(u, v)` grid and stitches the
//! samples into a polygon mesh whose faces close the band across its
//! half-twisted seam.
//!
//! ## Architecture
//!
//! ```text
//! GridConfig ──▶ grid (ParameterGrid)
//!                   ├──▶ topology::stitch (dims only) ──▶ faces
//!                   └──▶ surface::evaluate_grid       ──▶ vertices
//!                                                          │
//!                                          Mesh ◀──────────┘
//!                                            │
//!                                            ▼
//!                                   export (PLY / JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::generate_mobius_mesh;
//!
//! let mesh = generate_mobius_mesh(4, 2, false).unwrap();
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.face_count(), 8);
//!
//! let triangles = generate_mobius_mesh(4, 2, true).unwrap();
//! assert_eq!(triangles.face_count(), 16);
//! ```

pub mod error;
pub mod export;
pub mod grid;
pub mod mesh;
pub mod surface;
pub mod topology;

pub use config::constants::GridConfig;
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use topology::{Face, FaceShape};

use grid::ParameterGrid;

/// Generates the Möbius strip mesh for the given resolution.
///
/// # Arguments
///
/// * `u_steps` - samples around the loop, at least 2
/// * `v_steps` - subdivisions across the strip, at least 1
/// * `triangulate` - emit triangle pairs instead of quads
///
/// # Errors
///
/// Returns [`MeshError::InvalidConfig`] before any work is done when the
/// step counts are out of range.
pub fn generate_mobius_mesh(u_steps: u32, v_steps: u32, triangulate: bool) -> MeshResult<Mesh> {
    generate(&GridConfig {
        u_steps,
        v_steps,
        triangulate,
    })
}

/// Generates the mesh for `config`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidConfig`] when `config` was assembled by hand
/// with out-of-range step counts.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::{generate, GridConfig};
///
/// let mesh = generate(&GridConfig::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 100 * 21);
/// ```
pub fn generate(config: &GridConfig) -> MeshResult<Mesh> {
    let grid = ParameterGrid::from_config(config)?;
    let faces = topology::stitch(grid.dims(), FaceShape::from_triangulate(config.triangulate));
    let vertices = surface::evaluate_grid(&grid);
    Ok(Mesh::new(vertices, faces))
}

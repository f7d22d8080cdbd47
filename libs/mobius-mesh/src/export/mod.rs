//! Mesh serializers.
//!
//! The core hands a finished [`Mesh`] to one of these writers. Only vertex
//! positions and face indices are emitted.

pub mod json;
pub mod ply;

use std::io::Write;
use std::str::FromStr;

use crate::error::MeshResult;
use crate::Mesh;

pub use json::{to_json, write_json};
pub use ply::{write_ply, PlyOptions};

/// Output format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// ASCII PLY 1.0.
    #[default]
    Ply,
    /// JSON `{ "vertices": [...], "faces": [...] }`.
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ply" => Ok(ExportFormat::Ply),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected ply or json)")),
        }
    }
}

/// Writes `mesh` to `writer` in the chosen format.
///
/// `options.include_faces` only affects PLY; JSON always carries faces.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::export::{export, ExportFormat, PlyOptions};
/// use mobius_mesh::generate_mobius_mesh;
///
/// let mesh = generate_mobius_mesh(4, 2, false).unwrap();
/// let mut out = Vec::new();
/// export(&mesh, &mut out, ExportFormat::Ply, &PlyOptions::default()).unwrap();
/// assert!(out.starts_with(b"ply\n"));
/// ```
pub fn export<W: Write>(
    mesh: &Mesh,
    writer: &mut W,
    format: ExportFormat,
    options: &PlyOptions,
) -> MeshResult<()> {
    match format {
        ExportFormat::Ply => write_ply(mesh, writer, options),
        ExportFormat::Json => write_json(mesh, writer),
    }
}

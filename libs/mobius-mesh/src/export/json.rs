//! JSON writer built on the `serde` derive of [`Mesh`].

use std::io::Write;

use crate::error::MeshResult;
use crate::Mesh;

/// Serializes `mesh` to a JSON string.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::export::to_json;
/// use mobius_mesh::generate_mobius_mesh;
///
/// let mesh = generate_mobius_mesh(3, 1, false).unwrap();
/// let json = to_json(&mesh).unwrap();
/// assert!(json.contains("\"faces\":[[0,3,4,1],[1,4,5,2],[2,5,3,0]]"));
/// ```
pub fn to_json(mesh: &Mesh) -> MeshResult<String> {
    Ok(serde_json::to_string(mesh)?)
}

/// Writes `mesh` as JSON followed by a newline.
pub fn write_json<W: Write>(mesh: &Mesh, writer: &mut W) -> MeshResult<()> {
    serde_json::to_writer(&mut *writer, mesh)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

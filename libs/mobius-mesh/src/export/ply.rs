//! ASCII PLY writer.
//!
//! ```text
//! ply
//! format ascii 1.0
//! element vertex N
//! property float x
//! property float y
//! property float z
//! element face F
//! property list uchar int vertex_indices
//! end_header
//! x y z
//! k i0 .. ik-1
//! ```

use std::io::Write;

use crate::error::MeshResult;
use crate::Mesh;

/// PLY output switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyOptions {
    /// Emit the face element. Without it the file is a point cloud.
    pub include_faces: bool,
}

impl Default for PlyOptions {
    fn default() -> Self {
        Self {
            include_faces: true,
        }
    }
}

/// Writes `mesh` as ASCII PLY. Coordinates are narrowed to f32.
pub fn write_ply<W: Write>(mesh: &Mesh, writer: &mut W, options: &PlyOptions) -> MeshResult<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    if options.include_faces {
        writeln!(writer, "element face {}", mesh.face_count())?;
        writeln!(writer, "property list uchar int vertex_indices")?;
    }
    writeln!(writer, "end_header")?;

    for v in mesh.vertices() {
        let v = v.as_vec3();
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    if options.include_faces {
        for face in mesh.faces() {
            write!(writer, "{}", face.indices().len())?;
            for index in face.indices() {
                write!(writer, " {index}")?;
            }
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

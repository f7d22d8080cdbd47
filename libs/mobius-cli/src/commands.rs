//! CLI command implementations.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use config::constants::GridConfig;
use mobius_mesh::export::{export, ExportFormat, PlyOptions};
use mobius_mesh::{generate, MeshResult};

/// Everything needed to produce one output file.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest {
    pub u_steps: u32,
    pub v_steps: u32,
    pub triangulate: bool,
    pub include_faces: bool,
    pub format: ExportFormat,
}

/// Generates the mesh and writes it to `output_path`, or stdout when `None`.
pub fn run(request: &GenerateRequest, output_path: Option<&str>) -> MeshResult<()> {
    match output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_mesh(request, &mut writer)?;
            log::info!("wrote {path}");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_mesh(request, &mut writer)
        }
    }
}

/// Validates the request, builds the mesh and serializes it.
pub fn write_mesh<W: Write>(request: &GenerateRequest, writer: &mut W) -> MeshResult<()> {
    let config = GridConfig::new(request.u_steps, request.v_steps, request.triangulate)?;
    let mesh = generate(&config)?;
    let (min, max) = mesh.bounding_box();
    log::debug!(
        "generated {} vertices, {} faces, bounds {min} .. {max}",
        mesh.vertex_count(),
        mesh.face_count()
    );

    let options = PlyOptions {
        include_faces: request.include_faces,
    };
    export(&mesh, writer, request.format, &options)
}

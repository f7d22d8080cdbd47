//! Möbius CLI: generate a Möbius strip mesh and write it as PLY or JSON.

use clap::Parser;
use config::constants::{DEFAULT_U_STEPS, DEFAULT_V_STEPS};
use mobius_mesh::export::ExportFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mobius")]
#[command(version, about = "Möbius strip mesh generator")]
struct Cli {
    /// Samples around the loop (grid columns, at least 2).
    #[arg(short, long, default_value_t = DEFAULT_U_STEPS)]
    u_steps: u32,

    /// Subdivisions across the strip (grid rows minus one, at least 1).
    #[arg(short = 'w', long, default_value_t = DEFAULT_V_STEPS)]
    v_steps: u32,

    /// Emit triangle pairs instead of quads.
    #[arg(short, long)]
    triangulate: bool,

    /// Write vertices only (PLY point cloud).
    #[arg(long)]
    no_faces: bool,

    /// Output format (ply, json).
    #[arg(short, long, default_value = "ply")]
    format: ExportFormat,

    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let request = commands::GenerateRequest {
        u_steps: cli.u_steps,
        v_steps: cli.v_steps,
        triangulate: cli.triangulate,
        include_faces: !cli.no_faces,
        format: cli.format,
    };

    if let Err(e) = commands::run(&request, cli.output.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Weft CLI - image-to-cloth-mesh command-line tool.
//!
//! Usage: weft <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `weft --help` for available commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use weft::grid::SegmentGrid;
use weft::image::AlphaImage;
use weft::io;
use weft::weave::{weave, UvMode, WeaveOptions};

#[derive(Parser)]
#[command(name = "weft")]
#[command(author, version, about = "Weave cloth meshes from image alpha", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cloth mesh from an image
    Weave {
        /// Input image file (any format with an alpha channel)
        input: PathBuf,

        /// Output mesh file (default: input with .obj extension)
        output: Option<PathBuf>,

        /// Cell edge length in pixels (one quad per cell)
        #[arg(short, long, default_value = "32")]
        cell_size: u32,

        /// World-space edge length of one quad
        #[arg(short, long, default_value = "0.1")]
        quad_size: f64,

        /// How the texture maps onto the mesh
        #[arg(short, long, value_enum, default_value = "stretch")]
        uv_mode: UvModeArg,

        /// Mesh name (default: input file stem + "_mesh")
        #[arg(short, long)]
        name: Option<String>,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Display segmentation statistics without writing a mesh
    Info {
        /// Input image file
        input: PathBuf,

        /// Cell edge length in pixels
        #[arg(short, long, default_value = "32")]
        cell_size: u32,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum UvModeArg {
    /// Stretch the texture once across the full mesh
    Stretch,
    /// Re-tile the texture so each quad samples one cell's worth
    Tile,
}

impl From<UvModeArg> for UvMode {
    fn from(arg: UvModeArg) -> Self {
        match arg {
            UvModeArg::Stretch => UvMode::StretchToFit,
            UvModeArg::Tile => UvMode::TilePerCell,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Weave {
            input,
            output,
            cell_size,
            quad_size,
            uv_mode,
            name,
            sequential,
        } => {
            cmd_weave(&input, output, cell_size, quad_size, uv_mode, name, sequential)?;
        }

        Commands::Info { input, cell_size } => {
            cmd_info(&input, cell_size)?;
        }
    }

    Ok(())
}

/// Default mesh name: input file stem with a `_mesh` suffix.
fn default_mesh_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cloth");
    format!("{}_mesh", stem)
}

fn cmd_weave(
    input: &Path,
    output: Option<PathBuf>,
    cell_size: u32,
    quad_size: f64,
    uv_mode: UvModeArg,
    name: Option<String>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = AlphaImage::open(input)?;
    log::debug!("decoded {}x{} image from {}", image.width(), image.height(), input.display());

    println!("Loaded: {} ({}x{})", input.display(), image.width(), image.height());

    let mesh_name = name.unwrap_or_else(|| default_mesh_name(input));
    let mut options = WeaveOptions::default()
        .with_cell_size(cell_size)
        .with_quad_size(quad_size)
        .with_uv_mode(uv_mode.into())
        .with_mesh_name(mesh_name);
    if sequential {
        options = options.sequential();
    }

    let mode = if sequential { "sequential" } else { "parallel" };
    println!("Weaving (cell size {} px, quad size {}, {})...", cell_size, quad_size, mode);

    let start = Instant::now();
    let weave = weave(&image, &options)?;
    let elapsed = start.elapsed();

    println!(
        "Result: {}x{} cells, {} quads, {} vertices, {} triangles",
        weave.dimensions.columns,
        weave.dimensions.rows,
        weave.mesh.num_quads(),
        weave.mesh.num_vertices(),
        weave.mesh.num_triangles()
    );

    if weave.mesh.is_empty() {
        println!("Image is fully transparent; no mesh written");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| input.with_extension("obj"));
    io::save(&weave.mesh, &output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}

fn cmd_info(input: &Path, cell_size: u32) -> Result<(), Box<dyn std::error::Error>> {
    let image = AlphaImage::open(input)?;

    if cell_size == 0 {
        return Err("cell size must be at least 1".into());
    }

    let grid = SegmentGrid::accumulate_parallel(&image, cell_size);
    let dims = grid.dimensions();
    let active = grid.active_cells();

    println!("File: {}", input.display());
    println!("Image: {}x{} px", image.width(), image.height());
    println!("Cell size: {} px", cell_size);
    println!("Grid: {}x{} cells ({} total)", dims.columns, dims.rows, dims.num_cells());
    println!(
        "Active cells: {} ({:.1}%)",
        active,
        100.0 * active as f64 / dims.num_cells().max(1) as f64
    );
    // Upper bound; shared edges reduce the real vertex count
    println!("Predicted: {} triangles, at most {} vertices", active * 2, active * 4);

    Ok(())
}

//! # Weft
//!
//! Convert a raster image's alpha channel into a cloth-like quad mesh.
//!
//! Weft partitions an image into a grid of fixed-size cells, keeps the
//! cells containing non-transparent pixels, and emits a deduplicated
//! vertex/triangle/UV mesh suitable for rendering and cloth simulation.
//! Cells that share an edge share vertices, so the result is a single
//! connected sheet rather than disconnected panels.
//!
//! ## Features
//!
//! - **Alpha-based segmentation**: only the opaque parts of the image
//!   produce geometry
//! - **Vertex deduplication**: hash-based exact-coordinate lookup, stable
//!   insertion order
//! - **Consistent winding**: normals recomputed by consumers all face the
//!   same way
//! - **Two UV modes**: stretch the texture across the mesh or re-tile it
//!   per cell
//! - **OBJ export**: positions and texture coordinates, ready for any DCC
//!   tool or engine
//!
//! ## Quick Start
//!
//! ```
//! use weft::prelude::*;
//!
//! // An opaque disc on a transparent 64x64 background
//! let image = AlphaImage::from_fn(64, 64, |x, y| {
//!     let dx = x as f64 - 32.0;
//!     let dy = y as f64 - 32.0;
//!     if dx * dx + dy * dy < 24.0 * 24.0 { 1.0 } else { 0.0 }
//! });
//!
//! let options = WeaveOptions::default()
//!     .with_cell_size(16)
//!     .with_quad_size(0.1)
//!     .with_mesh_name("disc_mesh");
//!
//! let weave = weave(&image, &options).unwrap();
//!
//! println!("grid: {}x{}", weave.dimensions.columns, weave.dimensions.rows);
//! println!("vertices: {}", weave.mesh.num_vertices());
//! println!("quads: {}", weave.mesh.num_quads());
//! ```
//!
//! ## Loading images and saving meshes
//!
//! ```no_run
//! use weft::prelude::*;
//!
//! let image = AlphaImage::open("banner.png").unwrap();
//! let weave = weave(&image, &WeaveOptions::default()).unwrap();
//! weft::io::save(&weave.mesh, "banner.obj").unwrap();
//! ```
//!
//! ## Pipeline
//!
//! The stages run strictly in order, each consuming the complete output of
//! the previous one:
//!
//! 1. Grid sizing: `ceil(width / cell_size)` columns, same for rows
//! 2. Alpha accumulation: every pixel's alpha summed into its owning cell
//! 3. Vertex generation: four corners per active cell, deduplicated
//! 4. Triangulation: two fixed-winding triangles per active cell
//! 5. UV mapping: positions normalized against the full grid extent
//!
//! The algorithm is pure and deterministic; running it twice on the same
//! input yields identical output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod grid;
pub mod image;
pub mod io;
pub mod mesh;
pub mod weave;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use weft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, WeaveError};
    pub use crate::grid::{GridDimensions, Segment, SegmentGrid};
    pub use crate::image::AlphaImage;
    pub use crate::mesh::ClothMesh;
    pub use crate::weave::{weave, UvMode, Weave, WeaveOptions};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_checkerboard_sheet() {
        // Alternating opaque cells still share corner vertices diagonally
        let image = AlphaImage::from_fn(16, 16, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                1.0
            } else {
                0.0
            }
        });

        let options = WeaveOptions::default().with_cell_size(4).with_quad_size(1.0);
        let weave = weave(&image, &options).unwrap();

        // 8 active cells of a 4x4 grid
        assert_eq!(weave.mesh.num_quads(), 8);
        assert_eq!(weave.mesh.triangles().len(), 48);
        // 32 corners, minus the shared diagonal touch points
        assert!(weave.mesh.num_vertices() < 32);
    }
}

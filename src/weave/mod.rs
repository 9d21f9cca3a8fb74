//! The image-to-mesh pipeline.
//!
//! [`weave`] runs the full conversion: grid sizing, alpha accumulation,
//! vertex generation with deduplication, triangulation, and UV mapping,
//! returning a [`ClothMesh`] together with the grid dimensions. Each stage
//! consumes the complete output of the previous one; the algorithm is pure
//! and deterministic, so identical inputs always produce identical meshes.
//!
//! # Example
//!
//! ```
//! use weft::image::AlphaImage;
//! use weft::weave::{weave, WeaveOptions};
//!
//! // 8x8 image, opaque in the left half
//! let image = AlphaImage::from_fn(8, 8, |x, _| if x < 4 { 1.0 } else { 0.0 });
//!
//! let options = WeaveOptions::default().with_cell_size(4).with_quad_size(0.5);
//! let weave = weave(&image, &options).unwrap();
//!
//! assert_eq!(weave.dimensions.columns, 2);
//! assert_eq!(weave.mesh.num_quads(), 2); // only the left column is active
//! ```

mod triangle;
mod uv;
mod vertex;

pub use uv::UvMode;

use crate::error::{Result, WeaveError};
use crate::grid::{GridDimensions, SegmentGrid};
use crate::image::AlphaImage;
use crate::mesh::ClothMesh;

/// Options for the weave pipeline.
///
/// All state the pipeline needs beyond the image itself lives here; there
/// is no state carried across invocations.
#[derive(Debug, Clone)]
pub struct WeaveOptions {
    /// Cell edge length in source-image pixels (1 to 256 is the typical
    /// range). Each cell becomes one quad when it contains any
    /// non-transparent pixel.
    pub cell_size: u32,

    /// World-space edge length of one generated quad.
    pub quad_size: f64,

    /// How UV coordinates relate the texture to the mesh.
    pub uv_mode: UvMode,

    /// Name assigned to the generated mesh.
    pub mesh_name: String,

    /// Whether to accumulate alpha in parallel (default: true).
    pub parallel: bool,
}

impl Default for WeaveOptions {
    fn default() -> Self {
        Self {
            cell_size: 32,
            quad_size: 0.1,
            uv_mode: UvMode::StretchToFit,
            mesh_name: "cloth".to_string(),
            parallel: true,
        }
    }
}

impl WeaveOptions {
    /// Create options with the specified cell size in pixels.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Create options with the specified world-space quad size.
    pub fn with_quad_size(mut self, quad_size: f64) -> Self {
        self.quad_size = quad_size;
        self
    }

    /// Create options with the specified UV mode.
    pub fn with_uv_mode(mut self, uv_mode: UvMode) -> Self {
        self.uv_mode = uv_mode;
        self
    }

    /// Create options with the specified mesh name.
    pub fn with_mesh_name(mut self, name: impl Into<String>) -> Self {
        self.mesh_name = name.into();
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(WeaveError::invalid_param(
                "cell_size",
                self.cell_size,
                "must be at least 1",
            ));
        }
        if !(self.quad_size > 0.0 && self.quad_size.is_finite()) {
            return Err(WeaveError::invalid_param(
                "quad_size",
                self.quad_size,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// The result of weaving an image: the mesh plus the segment grid
/// dimensions it was cut from.
#[derive(Debug, Clone)]
pub struct Weave {
    /// The generated cloth mesh.
    pub mesh: ClothMesh,
    /// Grid size in cells (columns x rows).
    pub dimensions: GridDimensions,
}

/// Convert an image's alpha channel into a cloth quad mesh.
///
/// Invalid options are rejected up front; given valid options the
/// algorithm is total — it always terminates and always succeeds. A fully
/// transparent image yields an empty mesh.
///
/// # Errors
///
/// Returns [`WeaveError::InvalidParameter`] for a zero cell size or a
/// non-positive or non-finite quad size.
pub fn weave(image: &AlphaImage, options: &WeaveOptions) -> Result<Weave> {
    options.validate()?;

    let mut grid = if options.parallel {
        SegmentGrid::accumulate_parallel(image, options.cell_size)
    } else {
        SegmentGrid::accumulate(image, options.cell_size)
    };

    let vertices = vertex::build_vertices(&mut grid, options.quad_size);
    let triangles = triangle::build_triangles(&grid);

    let dimensions = grid.dimensions();
    let extent = dimensions.extent(options.quad_size);
    let scale = uv::uv_scale(options.uv_mode, image, options.cell_size);
    let uvs = uv::map_uvs(&vertices, extent, scale);

    let mesh = ClothMesh::new(vertices, triangles, uvs, options.mesh_name.clone())?;

    Ok(Weave { mesh, dimensions })
}

//! Segment grid sizing and alpha accumulation.
//!
//! The image is partitioned into a grid of `cell_size x cell_size` pixel
//! cells ("segments"). Each segment accumulates the alpha of every pixel it
//! covers; a segment with any non-transparent pixel is *active* and later
//! produces one quad of geometry.
//!
//! Grid traversal throughout the crate is column-major: column index `i`
//! in the outer loop, row index `j` in the inner loop.

use rayon::prelude::*;

use crate::image::AlphaImage;

/// Grid size in cells.
///
/// Computed with ceiling division so that partial cells at the right and
/// top edges of the image are covered.
///
/// # Example
///
/// ```
/// use weft::grid::GridDimensions;
///
/// let dims = GridDimensions::of(100, 96, 32);
/// assert_eq!(dims.columns, 4); // 3 full columns + 1 partial
/// assert_eq!(dims.rows, 3);    // exact multiple, no rounding
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Number of cells along the image width.
    pub columns: usize,
    /// Number of cells along the image height.
    pub rows: usize,
}

impl GridDimensions {
    /// Compute grid dimensions for an image and cell size.
    ///
    /// `cell_size` must be positive; this is enforced at the pipeline
    /// boundary, not here.
    pub fn of(width: u32, height: u32, cell_size: u32) -> Self {
        let round_up = |pixels: u32| {
            let cells = pixels / cell_size;
            if pixels % cell_size != 0 {
                cells + 1
            } else {
                cells
            }
        };

        Self {
            columns: round_up(width) as usize,
            rows: round_up(height) as usize,
        }
    }

    /// Total number of cells in the grid.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.columns * self.rows
    }

    /// World-space extent of the full grid for a given quad size.
    ///
    /// This is the mesh bounding box assuming every cell were active,
    /// and the normalization basis for UV mapping.
    #[inline]
    pub fn extent(&self, quad_size: f64) -> (f64, f64) {
        (self.columns as f64 * quad_size, self.rows as f64 * quad_size)
    }
}

/// One grid cell.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    /// Sum of the alpha values of every pixel covered by this cell.
    pub alpha_sum: f64,
    /// Indices into the shared vertex list for this cell's corners, in
    /// order [bottom-left, top-left, bottom-right, top-right].
    ///
    /// `None` until the vertex builder has processed the cell; stays
    /// `None` for inactive cells.
    pub corners: Option<[usize; 4]>,
}

impl Segment {
    /// Whether this cell contains any non-transparent pixel.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.alpha_sum > 0.0
    }
}

/// The segment grid: per-cell alpha sums and corner-vertex annotations.
///
/// Owned by the pipeline driver and passed between stages; the accumulator
/// fills `alpha_sum`, the vertex builder fills `corners`, and later stages
/// read only.
#[derive(Debug, Clone)]
pub struct SegmentGrid {
    dims: GridDimensions,
    /// Column-major: cell (i, j) lives at `i * rows + j`.
    segments: Vec<Segment>,
}

impl SegmentGrid {
    /// Scan every pixel of `image` and accumulate alpha into its owning
    /// cell.
    ///
    /// Pixels are visited in a fixed order (x outer, y inner) so that
    /// floating-point rounding is reproducible across runs.
    pub fn accumulate(image: &AlphaImage, cell_size: u32) -> Self {
        let dims = GridDimensions::of(image.width(), image.height(), cell_size);
        let mut segments = vec![Segment::default(); dims.num_cells()];

        for x in 0..image.width() {
            let i = (x / cell_size) as usize;
            for y in 0..image.height() {
                let j = (y / cell_size) as usize;
                segments[i * dims.rows + j].alpha_sum += image.alpha(x, y);
            }
        }

        Self { dims, segments }
    }

    /// Parallel variant of [`accumulate`](Self::accumulate).
    ///
    /// Each cell's sum is an independent reduction, so cells are summed in
    /// parallel with each cell scanning its own pixel block in the same
    /// local order as the sequential scan. The result is bit-identical to
    /// the sequential version.
    pub fn accumulate_parallel(image: &AlphaImage, cell_size: u32) -> Self {
        let dims = GridDimensions::of(image.width(), image.height(), cell_size);

        let segments: Vec<Segment> = (0..dims.num_cells())
            .into_par_iter()
            .map(|idx| {
                let i = idx / dims.rows;
                let j = idx % dims.rows;
                Segment {
                    alpha_sum: cell_alpha_sum(image, cell_size, i, j),
                    corners: None,
                }
            })
            .collect();

        Self { dims, segments }
    }

    /// Grid dimensions.
    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// The segment at grid coordinate (i, j).
    #[inline]
    pub fn segment(&self, i: usize, j: usize) -> &Segment {
        &self.segments[i * self.dims.rows + j]
    }

    /// Mutable access to the segment at grid coordinate (i, j).
    #[inline]
    pub(crate) fn segment_mut(&mut self, i: usize, j: usize) -> &mut Segment {
        &mut self.segments[i * self.dims.rows + j]
    }

    /// Number of active cells.
    pub fn active_cells(&self) -> usize {
        self.segments.iter().filter(|s| s.is_active()).count()
    }
}

/// Sum the alpha of the pixel block covered by cell (i, j).
///
/// Scans x outer, y inner, matching the per-cell addition order of the
/// sequential accumulator.
fn cell_alpha_sum(image: &AlphaImage, cell_size: u32, i: usize, j: usize) -> f64 {
    let x0 = i as u32 * cell_size;
    let y0 = j as u32 * cell_size;
    let x1 = (x0 + cell_size).min(image.width());
    let y1 = (y0 + cell_size).min(image.height());

    let mut sum = 0.0;
    for x in x0..x1 {
        for y in y0..y1 {
            sum += image.alpha(x, y);
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> AlphaImage {
        AlphaImage::from_fn(width, height, |x, y| ((x + y) % 2) as f64)
    }

    #[test]
    fn test_dimensions_round_up() {
        let dims = GridDimensions::of(100, 100, 32);
        assert_eq!(dims.columns, 4);
        assert_eq!(dims.rows, 4);
    }

    #[test]
    fn test_dimensions_exact_multiple() {
        let dims = GridDimensions::of(96, 64, 32);
        assert_eq!(dims.columns, 3);
        assert_eq!(dims.rows, 2);
    }

    #[test]
    fn test_dimensions_cover_image() {
        for (w, h, c) in [(1, 1, 32), (33, 31, 16), (257, 8, 256)] {
            let dims = GridDimensions::of(w, h, c);
            assert!(dims.columns as u32 * c >= w);
            assert!(dims.rows as u32 * c >= h);
        }
    }

    #[test]
    fn test_accumulate_transparent_image() {
        let image = AlphaImage::from_fn(64, 64, |_, _| 0.0);
        let grid = SegmentGrid::accumulate(&image, 16);

        assert_eq!(grid.dimensions().num_cells(), 16);
        assert_eq!(grid.active_cells(), 0);
    }

    #[test]
    fn test_accumulate_bins_pixels() {
        // Opaque only in the lower-left 4x4 pixel corner
        let image = AlphaImage::from_fn(8, 8, |x, y| if x < 4 && y < 4 { 1.0 } else { 0.0 });
        let grid = SegmentGrid::accumulate(&image, 4);

        assert_eq!(grid.dimensions(), GridDimensions { columns: 2, rows: 2 });
        assert_eq!(grid.segment(0, 0).alpha_sum, 16.0);
        assert_eq!(grid.segment(1, 0).alpha_sum, 0.0);
        assert_eq!(grid.segment(0, 1).alpha_sum, 0.0);
        assert_eq!(grid.segment(1, 1).alpha_sum, 0.0);
        assert_eq!(grid.active_cells(), 1);
    }

    #[test]
    fn test_accumulate_partial_cells() {
        // 5x5 image, cell size 4: edge cells cover fewer pixels
        let image = AlphaImage::from_fn(5, 5, |_, _| 1.0);
        let grid = SegmentGrid::accumulate(&image, 4);

        assert_eq!(grid.segment(0, 0).alpha_sum, 16.0);
        assert_eq!(grid.segment(1, 0).alpha_sum, 4.0);
        assert_eq!(grid.segment(0, 1).alpha_sum, 4.0);
        assert_eq!(grid.segment(1, 1).alpha_sum, 1.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let image = checker(70, 45);
        let sequential = SegmentGrid::accumulate(&image, 16);
        let parallel = SegmentGrid::accumulate_parallel(&image, 16);

        assert_eq!(sequential.dimensions(), parallel.dimensions());
        for i in 0..sequential.dimensions().columns {
            for j in 0..sequential.dimensions().rows {
                assert_eq!(
                    sequential.segment(i, j).alpha_sum,
                    parallel.segment(i, j).alpha_sum,
                    "cell ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_extent() {
        let dims = GridDimensions { columns: 4, rows: 3 };
        let (w, h) = dims.extent(0.5);
        assert!((w - 2.0).abs() < 1e-10);
        assert!((h - 1.5).abs() < 1e-10);
    }
}

//! UV coordinate generation.
//!
//! Each vertex gets a 2D texture coordinate normalized against the mesh
//! extent (the bounding box of the full grid, as if every cell were
//! active). Two modes are supported:
//!
//! - [`UvMode::StretchToFit`]: the texture spans the whole mesh extent;
//!   UVs lie in `[0, 1]` whenever the far boundary cells are active.
//! - [`UvMode::TilePerCell`]: UVs are additionally scaled by the number of
//!   cells along each image axis, so each quad samples one cell's worth of
//!   texture. Values outside `[0, 1]` are expected and rely on the
//!   sampler's wrap mode; no clamping is applied.

use nalgebra::{Point2, Point3};

use crate::image::AlphaImage;

/// How UV coordinates relate the texture to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UvMode {
    /// The texture is stretched once across the full mesh extent.
    #[default]
    StretchToFit,
    /// The texture is re-tiled so each quad samples one cell's worth.
    TilePerCell,
}

/// Per-axis UV multiplier for a mode.
///
/// Stretch mode leaves the normalized coordinates untouched. Tile mode
/// scales u by `width / cell_size` and v by `height / cell_size` — the
/// image axis matching the UV axis drives its multiplier.
pub(crate) fn uv_scale(mode: UvMode, image: &AlphaImage, cell_size: u32) -> (f64, f64) {
    match mode {
        UvMode::StretchToFit => (1.0, 1.0),
        UvMode::TilePerCell => (
            f64::from(image.width()) / f64::from(cell_size),
            f64::from(image.height()) / f64::from(cell_size),
        ),
    }
}

/// Map every vertex to a UV coordinate, parallel to the vertex list.
///
/// `extent` is the full-grid extent from
/// [`GridDimensions::extent`](crate::grid::GridDimensions::extent) and
/// `scale` the per-axis multiplier from [`uv_scale`].
pub(crate) fn map_uvs(
    vertices: &[Point3<f64>],
    extent: (f64, f64),
    scale: (f64, f64),
) -> Vec<Point2<f64>> {
    vertices
        .iter()
        .map(|v| Point2::new(v.x / extent.0 * scale.0, v.y / extent.1 * scale.1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_normalizes_against_extent() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.5, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];

        let uvs = map_uvs(&vertices, (2.0, 1.0), (1.0, 1.0));

        assert_eq!(uvs[0], Point2::new(0.0, 0.0));
        assert_eq!(uvs[1], Point2::new(0.5, 0.5));
        assert_eq!(uvs[2], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_stretch_stays_in_unit_square() {
        // Corners of a 4x3-cell extent with quad size 0.25
        let extent = (1.0, 0.75);
        let vertices: Vec<Point3<f64>> = (0..=4)
            .flat_map(|i| (0..=3).map(move |j| Point3::new(i as f64 * 0.25, j as f64 * 0.25, 0.0)))
            .collect();

        let uvs = map_uvs(&vertices, extent, (1.0, 1.0));

        for uv in &uvs {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn tile_mode_multiplier_convention() {
        // 64x32 image, cell size 16: u scaled by 4 (width axis), v by 2
        // (height axis). Pins the axis-consistent tiling convention.
        let image = AlphaImage::from_fn(64, 32, |_, _| 1.0);

        let scale = uv_scale(UvMode::TilePerCell, &image, 16);
        assert_eq!(scale, (4.0, 2.0));

        let vertices = vec![Point3::new(4.0, 2.0, 0.0)];
        let uvs = map_uvs(&vertices, (4.0, 2.0), scale);
        assert_eq!(uvs[0], Point2::new(4.0, 2.0));
    }

    #[test]
    fn test_tile_mode_exceeds_unit_square() {
        let image = AlphaImage::from_fn(64, 64, |_, _| 1.0);
        let scale = uv_scale(UvMode::TilePerCell, &image, 16);

        let vertices = vec![Point3::new(1.0, 1.0, 0.0)];
        let uvs = map_uvs(&vertices, (1.0, 1.0), scale);

        // No clamping: wrap-mode sampling handles the overflow
        assert!(uvs[0].x > 1.0);
        assert!(uvs[0].y > 1.0);
    }

    #[test]
    fn test_stretch_scale_is_identity() {
        let image = AlphaImage::from_fn(100, 50, |_, _| 0.0);
        assert_eq!(uv_scale(UvMode::StretchToFit, &image, 32), (1.0, 1.0));
    }
}

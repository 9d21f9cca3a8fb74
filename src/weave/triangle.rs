//! Triangle index generation.
//!
//! Every active cell becomes two triangles built from its four corner
//! indices. The winding is the same for every quad, so face normals
//! recomputed by a consumer all point the same way.

use crate::grid::SegmentGrid;

/// Emit six triangle indices per active cell.
///
/// Cells are visited in the same column-major order as the vertex builder.
/// For corner indices `[a, b, c, d]` = [bottom-left, top-left,
/// bottom-right, top-right], the two triangles are (a, b, c) and (c, b, d).
/// Cells without recorded corners (inactive) are skipped.
pub(crate) fn build_triangles(grid: &SegmentGrid) -> Vec<usize> {
    let dims = grid.dimensions();
    let mut triangles = Vec::new();

    for i in 0..dims.columns {
        for j in 0..dims.rows {
            let Some([a, b, c, d]) = grid.segment(i, j).corners else {
                continue;
            };
            triangles.extend_from_slice(&[a, b, c, c, b, d]);
        }
    }

    triangles
}

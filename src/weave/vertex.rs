//! Vertex generation with exact-coordinate deduplication.
//!
//! Adjacent active cells that share an edge must share vertices, so the
//! resulting mesh is topologically connected and cloth simulation treats it
//! as a continuous sheet rather than disconnected panels. Corners are
//! therefore resolved through a pool that assigns each distinct position
//! exactly one index.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::grid::SegmentGrid;

/// Append-only vertex pool with exact-equality lookup.
///
/// Positions are keyed on their f64 bit patterns, which is exact-coordinate
/// equality for the non-negative grid corners produced here. Insertion
/// order is preserved so indices stay stable for triangle construction.
#[derive(Default)]
struct VertexPool {
    positions: Vec<Point3<f64>>,
    index: HashMap<(u64, u64), usize>,
}

impl VertexPool {
    /// Return the index of `p`, inserting it if not yet present.
    fn resolve(&mut self, p: Point3<f64>) -> usize {
        let Self { positions, index } = self;
        *index.entry((p.x.to_bits(), p.y.to_bits())).or_insert_with(|| {
            positions.push(p);
            positions.len() - 1
        })
    }

    fn into_positions(self) -> Vec<Point3<f64>> {
        self.positions
    }
}

/// Generate deduplicated vertices for every active cell and record each
/// cell's corner indices on its segment.
///
/// Cells are visited in column-major grid order. For the active cell at
/// (i, j) the four corners are resolved in the fixed order
/// [bottom-left, top-left, bottom-right, top-right]:
///
/// ```text
/// (i*q, (j+1)*q)  ((i+1)*q, (j+1)*q)
/// (i*q,  j*q  )   ((i+1)*q,  j*q  )
/// ```
///
/// All four corners go through the dedup lookup, so the output is correct
/// under any visiting order.
pub(crate) fn build_vertices(grid: &mut SegmentGrid, quad_size: f64) -> Vec<Point3<f64>> {
    let dims = grid.dimensions();
    let mut pool = VertexPool::default();

    for i in 0..dims.columns {
        for j in 0..dims.rows {
            if !grid.segment(i, j).is_active() {
                continue;
            }

            let x0 = i as f64 * quad_size;
            let x1 = (i + 1) as f64 * quad_size;
            let y0 = j as f64 * quad_size;
            let y1 = (j + 1) as f64 * quad_size;

            let corners = [
                Point3::new(x0, y0, 0.0), // bottom left
                Point3::new(x0, y1, 0.0), // top left
                Point3::new(x1, y0, 0.0), // bottom right
                Point3::new(x1, y1, 0.0), // top right
            ];

            let mut indices = [0usize; 4];
            for (slot, corner) in indices.iter_mut().zip(corners) {
                *slot = pool.resolve(corner);
            }

            grid.segment_mut(i, j).corners = Some(indices);
        }
    }

    pool.into_positions()
}

//! The cloth mesh artifact.
//!
//! [`ClothMesh`] is the final product of the pipeline: deduplicated vertex
//! positions, triangle indices, and a parallel UV list, packaged under a
//! name. Construction validates the invariants upstream stages are supposed
//! to guarantee; a violation is a bug in mesh construction, not a
//! user-recoverable condition.
//!
//! Normals are deliberately absent. The winding of the triangle list is
//! globally consistent, so consumers recompute smooth normals from the
//! topology.

use nalgebra::{Point2, Point3};

use crate::error::{Result, WeaveError};

/// A planar quad mesh generated from an image's alpha channel.
///
/// Immutable after construction. Triangle indices always reference valid
/// vertices, the triangle list length is a multiple of 3, and the UV list
/// parallels the vertex list.
#[derive(Debug, Clone)]
pub struct ClothMesh {
    vertices: Vec<Point3<f64>>,
    triangles: Vec<usize>,
    uvs: Vec<Point2<f64>>,
    name: String,
}

impl ClothMesh {
    /// Package vertices, triangle indices, and UVs into a mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle index is out of range, the triangle
    /// list length is not a multiple of 3, or the UV list length does not
    /// match the vertex list.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        triangles: Vec<usize>,
        uvs: Vec<Point2<f64>>,
        name: impl Into<String>,
    ) -> Result<Self> {
        if triangles.len() % 3 != 0 {
            return Err(WeaveError::RaggedTriangleList { len: triangles.len() });
        }
        if uvs.len() != vertices.len() {
            return Err(WeaveError::UvCountMismatch {
                vertices: vertices.len(),
                uvs: uvs.len(),
            });
        }
        for (pos, &vertex) in triangles.iter().enumerate() {
            if vertex >= vertices.len() {
                return Err(WeaveError::InvalidVertexIndex { triangle: pos / 3, vertex });
            }
        }

        Ok(Self {
            vertices,
            triangles,
            uvs,
            name: name.into(),
        })
    }

    /// Vertex positions, in insertion order (z = 0 for this planar mesh).
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangle indices, six per quad.
    #[inline]
    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }

    /// UV coordinates, parallel to the vertex list.
    #[inline]
    pub fn uvs(&self) -> &[Point2<f64>] {
        &self.uvs
    }

    /// Mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of quads (two triangles each).
    #[inline]
    pub fn num_quads(&self) -> usize {
        self.triangles.len() / 6
    }

    /// Whether the mesh has no geometry.
    ///
    /// A fully transparent image produces an empty mesh.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices of triangle `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= num_triangles()`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [usize; 3] {
        [
            self.triangles[3 * t],
            self.triangles[3 * t + 1],
            self.triangles[3 * t + 2],
        ]
    }

    /// Axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;

        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Some((min, max))
    }
}

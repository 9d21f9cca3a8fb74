//! Wavefront OBJ export.
//!
//! Writes `o`/`v`/`vt`/`f` records with 1-based indices. Because the UV
//! list is parallel to the vertex list, each face index references the
//! same position and texture coordinate (`f a/a b/b c/c`). Normals are
//! omitted; consumers recompute them from the consistently wound faces.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WeaveError};
use crate::mesh::ClothMesh;

/// Save a mesh to an OBJ file.
///
/// # Example
///
/// ```no_run
/// use weft::io::obj;
/// use weft::mesh::ClothMesh;
///
/// let mesh = ClothMesh::new(vec![], vec![], vec![], "cloth").unwrap();
/// obj::save(&mesh, "cloth.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &ClothMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| WeaveError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in OBJ format to any writer.
pub fn write<W: Write>(mesh: &ClothMesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# weft cloth mesh")?;
    writeln!(writer, "o {}", mesh.name())?;

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in mesh.uvs() {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }

    // OBJ indices are 1-based; position and texture indices coincide
    for t in 0..mesh.num_triangles() {
        let [a, b, c] = mesh.triangle(t);
        writeln!(
            writer,
            "f {}/{} {}/{} {}/{}",
            a + 1,
            a + 1,
            b + 1,
            b + 1,
            c + 1,
            c + 1
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    fn quad_mesh() -> ClothMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let triangles = vec![0, 1, 2, 2, 1, 3];
        let uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        ClothMesh::new(vertices, triangles, uvs, "quad").unwrap()
    }

    #[test]
    fn test_write_obj() {
        let mesh = quad_mesh();
        let mut out = Vec::new();
        write(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "\
# weft cloth mesh
o quad
v 0 0 0
v 0 1 0
v 1 0 0
v 1 1 0
vt 0 0
vt 0 1
vt 1 0
vt 1 1
f 1/1 2/2 3/3
f 3/3 2/2 4/4
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_empty_mesh() {
        let mesh = ClothMesh::new(vec![], vec![], vec![], "empty").unwrap();
        let mut out = Vec::new();
        write(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "# weft cloth mesh\no empty\n");
    }

    #[test]
    fn test_fractional_coordinates() {
        let vertices = vec![Point3::new(0.25, 0.1, 0.0)];
        let uvs = vec![Point2::new(0.5, 0.125)];
        let mesh = ClothMesh::new(vertices, vec![], uvs, "frac").unwrap();

        let mut out = Vec::new();
        write(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("v 0.25 0.1 0"));
        assert!(text.contains("vt 0.5 0.125"));
    }
}

//! Mesh persistence.
//!
//! The generated mesh is handed to external tools for rendering and
//! simulation; this module writes it to disk on the way. Wavefront OBJ is
//! the supported format — it carries positions and texture coordinates,
//! which is exactly what a [`ClothMesh`](crate::mesh::ClothMesh) holds.
//!
//! ```no_run
//! use weft::io::save;
//! use weft::mesh::ClothMesh;
//!
//! let mesh = ClothMesh::new(vec![], vec![], vec![], "empty").unwrap();
//! save(&mesh, "cloth.obj").unwrap();
//! ```

pub mod obj;

use std::path::Path;

use crate::error::{Result, WeaveError};
use crate::mesh::ClothMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &ClothMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| WeaveError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Obj => obj::save(mesh, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("obj"), Some(Format::Obj));
        assert_eq!(Format::from_extension("OBJ"), Some(Format::Obj));
        assert_eq!(Format::from_extension("stl"), None);

        assert_eq!(Format::from_path("meshes/cloth.obj"), Some(Format::Obj));
        assert_eq!(Format::from_path("cloth"), None);
    }

    #[test]
    fn test_save_unsupported_extension() {
        let mesh = ClothMesh::new(vec![], vec![], vec![], "m").unwrap();
        let result = save(&mesh, "out.fbx");
        assert!(matches!(result, Err(WeaveError::UnsupportedFormat { .. })));
    }
}

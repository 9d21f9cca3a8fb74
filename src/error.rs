//! Error types for weft.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`WeaveError`].
pub type Result<T> = std::result::Result<T, WeaveError>;

/// Errors that can occur while generating or persisting a cloth mesh.
#[derive(Error, Debug)]
pub enum WeaveError {
    /// An alpha buffer does not match the declared image dimensions.
    #[error("alpha buffer holds {samples} samples but a {width}x{height} image needs {expected}")]
    AlphaBufferSize {
        /// Declared image width in pixels.
        width: u32,
        /// Declared image height in pixels.
        height: u32,
        /// Number of samples provided.
        samples: usize,
        /// Number of samples required (width * height).
        expected: usize,
    },

    /// A triangle references a vertex index outside the vertex list.
    ///
    /// This indicates an internal invariant violation in mesh construction,
    /// not a recoverable user error.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle number (position in the triangle list).
        triangle: usize,
        /// The out-of-range vertex index.
        vertex: usize,
    },

    /// The triangle index list length is not a multiple of three.
    #[error("triangle index list length {len} is not a multiple of 3")]
    RaggedTriangleList {
        /// The offending length.
        len: usize,
    },

    /// The UV list is not parallel to the vertex list.
    #[error("mesh has {vertices} vertices but {uvs} UV coordinates")]
    UvCountMismatch {
        /// Number of vertices.
        vertices: usize,
        /// Number of UV coordinates.
        uvs: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding an image file.
    #[error("failed to decode image {path}: {message}")]
    ImageDecode {
        /// The file path.
        path: PathBuf,
        /// Error message from the decoder.
        message: String,
    },

    /// Error saving a mesh to a file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl WeaveError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        WeaveError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

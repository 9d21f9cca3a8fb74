//! Alpha raster input.
//!
//! The pipeline consumes an [`AlphaImage`]: a decoded, immutable grid of
//! per-pixel alpha values. Only the alpha channel survives decoding; color
//! channels are irrelevant to segmentation and are dropped at this boundary.
//!
//! # Coordinate convention
//!
//! Pixel (0, 0) is the image's **lower-left** corner, x increases rightward
//! and y increases upward. Image files are stored top-down, so rows are
//! flipped at decode time. This matches the coordinate convention of the
//! generated geometry, so the mesh is not mirrored against its texture.

use std::path::Path;

use crate::error::{Result, WeaveError};

/// A decoded image reduced to its alpha channel.
///
/// Alpha values are normalized to `[0.0, 1.0]` regardless of the source
/// format. The image is immutable once constructed; the pipeline only
/// reads it.
///
/// # Example
///
/// ```
/// use weft::image::AlphaImage;
///
/// // A 4x4 image whose left half is opaque
/// let image = AlphaImage::from_fn(4, 4, |x, _y| if x < 2 { 1.0 } else { 0.0 });
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.alpha(0, 0), 1.0);
/// assert_eq!(image.alpha(3, 0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AlphaImage {
    width: u32,
    height: u32,
    /// Row-major from the lower-left corner.
    alpha: Vec<f64>,
}

impl AlphaImage {
    /// Create an alpha image from raw samples.
    ///
    /// `alpha` must hold `width * height` samples in row-major order
    /// starting at the lower-left corner.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<f64>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if alpha.len() != expected {
            return Err(WeaveError::AlphaBufferSize {
                width,
                height,
                samples: alpha.len(),
                expected,
            });
        }
        Ok(Self { width, height, alpha })
    }

    /// Create an alpha image by evaluating a function at every pixel.
    ///
    /// The function receives lower-left-origin pixel coordinates.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> f64,
    {
        let mut alpha = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                alpha.push(f(x, y));
            }
        }
        Self { width, height, alpha }
    }

    /// Extract the alpha channel from a decoded image.
    ///
    /// 8-bit alpha is normalized to `[0.0, 1.0]`; formats without an alpha
    /// channel decode as fully opaque. Rows are flipped so that y = 0 is
    /// the bottom of the image.
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut alpha = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            // Image files store the top row first
            let src_y = height - 1 - y;
            for x in 0..width {
                let a = rgba.get_pixel(x, src_y)[3];
                alpha.push(f64::from(a) / 255.0);
            }
        }

        Self { width, height, alpha }
    }

    /// Load an image file and extract its alpha channel.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use weft::image::AlphaImage;
    ///
    /// let image = AlphaImage::open("cloth.png").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| WeaveError::ImageDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_image(&img))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha value at pixel (x, y), lower-left origin.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        self.alpha[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alpha_size_mismatch() {
        let result = AlphaImage::from_alpha(3, 3, vec![0.0; 8]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_fn_orientation() {
        // Alpha encodes the y coordinate so orientation is observable
        let image = AlphaImage::from_fn(2, 3, |_x, y| y as f64);

        assert_eq!(image.alpha(0, 0), 0.0);
        assert_eq!(image.alpha(1, 2), 2.0);
    }

    #[test]
    fn test_from_image_flips_rows() {
        // 1x2 RGBA image: top pixel opaque, bottom pixel transparent
        let mut rgba = image::RgbaImage::new(1, 2);
        rgba.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
        rgba.put_pixel(0, 1, image::Rgba([0, 0, 0, 0]));
        let img = image::DynamicImage::ImageRgba8(rgba);

        let alpha = AlphaImage::from_image(&img);

        // Lower-left origin: y = 1 is the file's top row
        assert_eq!(alpha.alpha(0, 1), 1.0);
        assert_eq!(alpha.alpha(0, 0), 0.0);
    }

    #[test]
    fn test_from_image_normalizes() {
        let mut rgba = image::RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([0, 0, 0, 51]));
        let img = image::DynamicImage::ImageRgba8(rgba);

        let alpha = AlphaImage::from_image(&img);
        assert!((alpha.alpha(0, 0) - 0.2).abs() < 1e-10);
    }

    #[test]
    #[should_panic]
    fn test_alpha_out_of_range() {
        let image = AlphaImage::from_fn(2, 2, |_, _| 1.0);
        image.alpha(2, 0);
    }
}

//=========================================================================
// Image
//
// Decoded RGBA pixel data that can be blitted onto a canvas.
//
// Responsibilities:
// - Load PNG/JPEG/BMP files through the `image` crate
// - Accept raw RGBA bytes from callers that decode themselves
// - Expose dimensions and a full-image `Rect`
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::path::Path;

//=== External Crates =====================================================
use log::{error, info};

//=== Internal Modules ====================================================
use crate::core::draw::{Color, Rect};
use crate::core::error::EaselError;

//=== Image ===============================================================

/// An RGBA image held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    //--- Construction -----------------------------------------------------

    /// Loads and decodes an image file.
    ///
    /// The path is passed to the decoder verbatim; the format is guessed
    /// from the file contents and extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EaselError> {
        let path = path.as_ref();

        let decoded = image::open(path)
            .map_err(|source| {
                error!(target: "easel::image", "Failed to load '{}': {}", path.display(), source);
                EaselError::ImageLoad {
                    path: path.to_path_buf(),
                    source,
                }
            })?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        info!(target: "easel::image", "Loaded '{}' ({}x{})", path.display(), width, height);

        Self::from_rgba(width, height, decoded.into_raw())
    }

    /// Builds an image from tightly packed RGBA bytes, row by row.
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, EaselError> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);

        if bytes.len() != expected {
            return Err(EaselError::InvalidImageData {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
            .collect();

        Ok(Self { width, height, pixels })
    }

    /// Builds a single-color image.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole image as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_reads_rows() {
        // Row 0: red, green. Row 1: blue, transparent.
        let bytes = vec![
            255, 0, 0, 255, 0, 255, 0, 255,
            0, 0, 255, 255, 0, 0, 0, 0,
        ];
        let image = Image::from_rgba(2, 2, bytes).expect("valid data");

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel(1, 0), Some(Color::rgb(0, 255, 0)));
        assert_eq!(image.pixel(0, 1), Some(Color::rgb(0, 0, 255)));
        assert_eq!(image.pixel(1, 1), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let result = Image::from_rgba(2, 2, vec![0; 12]);
        match result {
            Err(EaselError::InvalidImageData { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 12);
            }
            other => panic!("Expected InvalidImageData, got {:?}", other),
        }
    }

    #[test]
    fn rect_covers_image() {
        let image = Image::filled(7, 3, Color::WHITE);
        assert_eq!(image.rect(), Rect::new(0, 0, 7, 3));
    }

    #[test]
    fn open_missing_file_fails() {
        let result = Image::open("definitely/not/here.png");
        assert!(matches!(result, Err(EaselError::ImageLoad { .. })));
    }
}

//=========================================================================
// Errors
//=========================================================================
//
// Resource acquisition and drawing errors.
//
// `EaselError` covers everything that acquires an external resource
// (event loop, window, surface, image file). `DrawError` is the failure
// half of every drawing primitive's `DrawResult`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::path::PathBuf;

//=== EaselError ==========================================================

/// Failure to acquire a platform or file resource.
#[derive(Debug)]
pub enum EaselError {
    /// Event loop creation failed (already created, or not on the main thread).
    EventLoopCreation(winit::error::EventLoopError),

    /// The OS refused to create a window.
    WindowCreation(winit::error::OsError),

    /// The presentation surface could not be created, resized or presented.
    Surface(softbuffer::SoftBufferError),

    /// An image file could not be read or decoded.
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Raw pixel data does not match the stated dimensions.
    InvalidImageData { expected: usize, actual: usize },

    /// A drawing primitive failed.
    Draw(DrawError),
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for EaselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::WindowCreation(e) => write!(f, "Could not create window: {}", e),
            Self::Surface(e) => write!(f, "Window surface error: {}", e),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {}", path.display(), source)
            }
            Self::InvalidImageData { expected, actual } => write!(
                f,
                "Image data has {} bytes, dimensions need {}",
                actual, expected
            ),
            Self::Draw(e) => write!(f, "Drawing failed: {}", e),
        }
    }
}

impl std::error::Error for EaselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::ImageLoad { source, .. } => Some(source),
            Self::InvalidImageData { .. } => None,
            Self::Draw(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for EaselError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::EventLoopCreation(e)
    }
}

impl From<winit::error::OsError> for EaselError {
    fn from(e: winit::error::OsError) -> Self {
        Self::WindowCreation(e)
    }
}

impl From<softbuffer::SoftBufferError> for EaselError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        Self::Surface(e)
    }
}

impl From<DrawError> for EaselError {
    fn from(e: DrawError) -> Self {
        Self::Draw(e)
    }
}

//=== DrawError ===========================================================

/// Why a drawing primitive drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// A polyline needs 2 points, a polygon 3.
    TooFewPoints { needed: usize, got: usize },

    /// Circle or ellipse radius below zero.
    NegativeRadius(i32),

    /// Image source rectangle reaches outside the image.
    SourceOutOfBounds,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { needed, got } => {
                write!(f, "Need at least {} points, got {}", needed, got)
            }
            Self::NegativeRadius(r) => write!(f, "Negative radius: {}", r),
            Self::SourceOutOfBounds => write!(f, "Source rectangle outside image"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Result of a drawing primitive.
pub type DrawResult = Result<(), DrawError>;

//=========================================================================
// Unit Tests
//=========================================================================

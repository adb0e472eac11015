// SPDX-License-Identifier: MPL-2.0
//! Image decoding port definition.
//!
//! This module defines the [`ImageDecoder`] and [`DecodedImage`] traits.
//! Infrastructure adapters (like the `image` crate) implement them.
//!
//! # Design Notes
//!
//! - Decoding is synchronous; the viewer decodes on the UI thread
//! - Uses domain types only (`Bitmap`, `Dimensions`, `ResampleFilter`)

use crate::domain::media::{Bitmap, Dimensions, ResampleFilter};
use crate::error::Error;
use std::fmt;
use std::path::Path;

// =============================================================================
// DecodeError
// =============================================================================

/// Errors that can occur while opening or resampling an image.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The file could not be read (I/O error).
    Io(String),

    /// The file format is not recognized or not supported.
    UnsupportedFormat(String),

    /// The image data is corrupted or cannot be decoded.
    CorruptedData(String),

    /// The image dimensions are unusable (zero width or height).
    InvalidDimensions {
        /// The width that was detected.
        width: u32,
        /// The height that was detected.
        height: u32,
    },

    /// Resampling to the target size failed.
    ResizeFailed(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(msg) => write!(f, "I/O error: {msg}"),
            DecodeError::UnsupportedFormat(msg) => write!(f, "Unsupported image format: {msg}"),
            DecodeError::CorruptedData(msg) => write!(f, "Corrupted image data: {msg}"),
            DecodeError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            DecodeError::ResizeFailed(msg) => write!(f, "Resize failed: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err.to_string())
    }
}

// =============================================================================
// Traits
// =============================================================================

/// An opened image held in its native resolution.
pub trait DecodedImage {
    /// Native size in pixels.
    fn dimensions(&self) -> Dimensions;

    /// Resamples the image to exactly `target`, returning displayable RGBA.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDimensions`] when `target` has an empty
    /// edge, or [`DecodeError::ResizeFailed`] when resampling fails.
    fn resize(&self, target: Dimensions, filter: ResampleFilter) -> Result<Bitmap, DecodeError>;
}

/// Port for opening image files.
///
/// # Example
///
/// ```ignore
/// use iced_album::application::port::{DecodedImage, ImageDecoder};
/// use iced_album::domain::media::{Dimensions, ResampleFilter};
/// use std::path::Path;
///
/// fn thumbnail(decoder: &impl ImageDecoder, path: &Path) {
///     let image = decoder.open(path).expect("Failed to open");
///     let bitmap = image
///         .resize(Dimensions::new(64, 64), ResampleFilter::Triangle)
///         .expect("Failed to resize");
///     println!("{}x{}", bitmap.width(), bitmap.height());
/// }
/// ```
pub trait ImageDecoder {
    type Image: DecodedImage;

    /// Opens and decodes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the file cannot be read or decoded.
    fn open(&self, path: &Path) -> Result<Self::Image, DecodeError>;
}

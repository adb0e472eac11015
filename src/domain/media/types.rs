// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either edge is zero.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A resampled image ready to be put on screen.
///
/// Presentation converts this to a framework-specific handle
/// (e.g., `iced::widget::image::Handle`).
///
/// # Example
///
/// ```
/// use iced_album::domain::media::Bitmap;
///
/// let pixels = vec![255u8; 100 * 50 * 4]; // 100x50 RGBA
/// let bitmap = Bitmap::from_rgba(100, 50, pixels).expect("length matches");
///
/// assert_eq!(bitmap.width(), 100);
/// assert_eq!(bitmap.height(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    dimensions: Dimensions,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Vec<u8>,
}

impl Bitmap {
    /// Creates a bitmap from dimensions and owned RGBA pixel data.
    ///
    /// Returns `None` if the pixel data length doesn't match
    /// `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let dimensions = Dimensions::new(width, height);
        (rgba_bytes.len() == dimensions.pixel_count() * 4).then_some(Self {
            dimensions,
            rgba_bytes,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Consumes the bitmap, returning its pixel buffer.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.rgba_bytes
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Image decoding adapter backed by the `image` crate.
//!
//! Implements [`ImageDecoder`] by sniffing the format from file content (the
//! extension is only a fallback) and resampling with `resize_exact`.

use crate::application::port::{DecodeError, DecodedImage, ImageDecoder};
use crate::domain::media::{Bitmap, Dimensions, ResampleFilter};
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// Decoder for the raster formats enabled on the `image` dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsDecoder;

impl ImageRsDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for ImageRsDecoder {
    type Image = ImageRsImage;

    fn open(&self, path: &Path) -> Result<ImageRsImage, DecodeError> {
        let image = ImageReader::open(path)
            .map_err(|e| DecodeError::Io(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| DecodeError::Io(e.to_string()))?
            .decode()
            .map_err(map_image_error)?;

        Ok(ImageRsImage(image))
    }
}

/// A fully decoded image at native resolution.
#[derive(Debug, Clone)]
pub struct ImageRsImage(DynamicImage);

impl DecodedImage for ImageRsImage {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.0.width(), self.0.height())
    }

    fn resize(&self, target: Dimensions, filter: ResampleFilter) -> Result<Bitmap, DecodeError> {
        if target.is_empty() {
            return Err(DecodeError::InvalidDimensions {
                width: target.width,
                height: target.height,
            });
        }

        let resized = self
            .0
            .resize_exact(target.width, target.height, filter_type(filter));
        let rgba = resized.to_rgba8();
        let (width, height) = rgba.dimensions();

        Bitmap::from_rgba(width, height, rgba.into_vec()).ok_or_else(|| {
            DecodeError::ResizeFailed(format!("unexpected buffer size for {width}x{height}"))
        })
    }
}

fn filter_type(filter: ResampleFilter) -> FilterType {
    match filter {
        ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        ResampleFilter::CatmullRom => FilterType::CatmullRom,
        ResampleFilter::Gaussian => FilterType::Gaussian,
        ResampleFilter::Triangle => FilterType::Triangle,
        ResampleFilter::Nearest => FilterType::Nearest,
    }
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::IoError(e) => DecodeError::Io(e.to_string()),
        ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
        other => DecodeError::CorruptedData(other.to_string()),
    }
}

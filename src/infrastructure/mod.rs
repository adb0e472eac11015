// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that wrap external libraries.
//!
//! # Available Adapters
//!
//! - [`image_decoder`]: Image decoding and resampling via the `image` crate
//!   (implements [`ImageDecoder`])
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder

pub mod image_decoder;

pub use image_decoder::{ImageRsDecoder, ImageRsImage};

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure and
//! presentation adapters implement. These traits use only domain types,
//! ensuring the application layer remains independent of concrete
//! implementations.
//!
//! # Available Ports
//!
//! - [`decoder`]: Image opening and resampling
//! - [`display`]: The canvas, title label and fullscreen attribute
//! - [`notification`]: Modal warning and error messages
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `image` types)
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod decoder;
pub mod display;
pub mod notification;

pub use decoder::{DecodeError, DecodedImage, ImageDecoder};
pub use display::DisplaySurface;
pub use notification::Notifier;

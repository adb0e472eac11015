// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Image types ([`Bitmap`](media::Bitmap), [`Dimensions`](media::Dimensions),
//!   [`ResampleFilter`](media::ResampleFilter)) and the fit-to-canvas math
//! - [`slideshow`]: Slideshow state machine ([`Slideshow`](slideshow::Slideshow),
//!   [`SlideshowTick`](slideshow::SlideshowTick))
//! - [`ui`]: UI value objects ([`ZoomLevel`](ui::newtypes::ZoomLevel))

pub mod media;
pub mod slideshow;
pub mod ui;

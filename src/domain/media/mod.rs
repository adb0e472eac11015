// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains core media types that are independent of any
//! presentation or infrastructure concerns.

pub mod filter;
pub mod fit;
pub mod types;

pub use filter::ResampleFilter;
pub use fit::{fit_dimensions, fit_scale};
pub use types::{Bitmap, Dimensions};

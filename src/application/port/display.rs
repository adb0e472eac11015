// SPDX-License-Identifier: MPL-2.0
//! Display surface port definition.
//!
//! The viewer draws into a [`DisplaySurface`]: a canvas of known size that
//! shows at most one centered bitmap, a title label and a fullscreen flag.

use crate::domain::media::{Bitmap, Dimensions};

/// Port for the on-screen canvas.
pub trait DisplaySurface {
    /// Current drawable size of the canvas in pixels.
    fn canvas_size(&self) -> Dimensions;

    /// Shows `bitmap` centered on the canvas, replacing prior content.
    fn show(&mut self, bitmap: Bitmap);

    /// Removes any shown bitmap.
    fn clear(&mut self);

    /// Sets the title label.
    fn set_title(&mut self, title: &str);

    /// Applies the fullscreen attribute to the window.
    fn set_fullscreen(&mut self, fullscreen: bool);
}

// SPDX-License-Identifier: MPL-2.0
//! Iced-backed [`DisplaySurface`].
//!
//! The surface is plain state read by `view()`: the current image handle, the
//! title label and the canvas size last reported by the window. Fullscreen
//! changes are queued here and turned into a `window::set_mode` task by
//! `App::update`, which is the only place that can issue window tasks.

use crate::application::port::DisplaySurface;
use crate::application::viewer::canvas_size_for_window;
use crate::config;
use crate::domain::media::{Bitmap, Dimensions};
use iced::widget::image::Handle;

#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: Dimensions,
    image: Option<(Handle, Dimensions)>,
    title: String,
    pending_fullscreen: Option<bool>,
}

impl CanvasSurface {
    /// Creates a blank surface for a window of the given logical size.
    #[must_use]
    pub fn new(window: Dimensions) -> Self {
        Self {
            canvas: canvas_size_for_window(window),
            image: None,
            title: config::DEFAULT_TITLE.to_string(),
            pending_fullscreen: None,
        }
    }

    /// Records a new window size. Returns true if the canvas changed.
    pub fn set_window_size(&mut self, window: Dimensions) -> bool {
        let canvas = canvas_size_for_window(window);
        let changed = canvas != self.canvas;
        self.canvas = canvas;
        changed
    }

    /// Handle and size of the bitmap currently shown.
    #[must_use]
    pub fn image(&self) -> Option<(&Handle, Dimensions)> {
        self.image.as_ref().map(|(handle, size)| (handle, *size))
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Takes the fullscreen state requested since the last call.
    pub fn take_fullscreen_request(&mut self) -> Option<bool> {
        self.pending_fullscreen.take()
    }
}

impl DisplaySurface for CanvasSurface {
    fn canvas_size(&self) -> Dimensions {
        self.canvas
    }

    fn show(&mut self, bitmap: Bitmap) {
        let size = bitmap.dimensions();
        let handle = Handle::from_rgba(size.width, size.height, bitmap.into_rgba_bytes());
        self.image = Some((handle, size));
    }

    fn clear(&mut self) {
        self.image = None;
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.pending_fullscreen = Some(fullscreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> CanvasSurface {
        CanvasSurface::new(Dimensions::new(1000, 600))
    }

    #[test]
    fn new_surface_is_blank_with_default_title() {
        let surface = surface();
        assert_eq!(surface.canvas_size(), Dimensions::new(900, 500));
        assert!(surface.image().is_none());
        assert_eq!(surface.title(), "Image Viewer");
    }

    #[test]
    fn show_then_clear() {
        let mut surface = surface();
        let bitmap = Bitmap::from_rgba(3, 2, vec![0; 24]).expect("valid bitmap");
        surface.show(bitmap);
        assert_eq!(
            surface.image().map(|(_, size)| size),
            Some(Dimensions::new(3, 2))
        );

        surface.clear();
        assert!(surface.image().is_none());
    }

    #[test]
    fn window_resize_updates_canvas() {
        let mut surface = surface();
        assert!(surface.set_window_size(Dimensions::new(1200, 800)));
        assert_eq!(surface.canvas_size(), Dimensions::new(1100, 700));
        assert!(!surface.set_window_size(Dimensions::new(1200, 800)));
    }

    #[test]
    fn fullscreen_request_is_taken_once() {
        let mut surface = surface();
        assert_eq!(surface.take_fullscreen_request(), None);

        surface.set_fullscreen(true);
        surface.set_fullscreen(false);
        assert_eq!(surface.take_fullscreen_request(), Some(false));
        assert_eq!(surface.take_fullscreen_request(), None);
    }

    #[test]
    fn title_is_replaced() {
        let mut surface = surface();
        surface.set_title("holiday.jpg");
        assert_eq!(surface.title(), "holiday.jpg");
    }
}

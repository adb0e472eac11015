// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom multiplier and per-step factor bounds
//! - **Slideshow**: Auto-advance interval bounds
//! - **Window**: Initial window and canvas geometry
//! - **Rendering**: Resampling filter and bitmap size limits

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Factor applied by a single zoom in (multiply) or zoom out (divide).
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.25;

/// Smallest accepted zoom factor; anything at or below 1.0 would not zoom.
pub const MIN_ZOOM_FACTOR: f64 = 1.01;

/// Largest accepted zoom factor.
pub const MAX_ZOOM_FACTOR: f64 = 4.0;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Delay between two automatic advances (in milliseconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 2000;

/// Minimum slideshow interval (in milliseconds).
pub const MIN_SLIDESHOW_INTERVAL_MS: u64 = 250;

/// Maximum slideshow interval (in milliseconds).
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Horizontal space taken by the window chrome around the canvas.
pub const CANVAS_MARGIN_WIDTH: u32 = 100;

/// Vertical space taken by the title label and the button row.
pub const CANVAS_MARGIN_HEIGHT: u32 = 100;

/// Default title shown when no image is displayed.
pub const DEFAULT_TITLE: &str = "Image Viewer";

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Preferred resampling filter name.
pub const DEFAULT_RESAMPLE_FILTER: &str = "lanczos3";

/// Upper bound for either edge of a rendered bitmap (in pixels).
pub const MAX_BITMAP_EDGE: u32 = 16_384;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_FACTOR > 1.0);
    assert!(MAX_ZOOM_FACTOR > MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR <= MAX_ZOOM_FACTOR);

    assert!(MIN_SLIDESHOW_INTERVAL_MS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_SLIDESHOW_INTERVAL_MS);

    assert!(DEFAULT_WINDOW_WIDTH > CANVAS_MARGIN_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT > CANVAS_MARGIN_HEIGHT);

    assert!(MAX_BITMAP_EDGE > 0);
};

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::slideshow::SlideshowTick;
use iced::{event, window};
use std::path::PathBuf;

/// Messages consumed by `App::update`. Button presses and keyboard shortcuts
/// map to the same variants.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the folder picker.
    OpenFolder,
    /// Result from the folder picker (`None` when cancelled).
    FolderPicked(Option<PathBuf>),
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    StartSlideshow,
    StopSlideshow,
    ToggleSlideshow,
    /// A scheduled slideshow advance came due.
    SlideshowTick(SlideshowTick),
    ToggleFullscreen,
    ExitFullscreen,
    Exit,
    /// A native window or keyboard event, with the window it came from.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ALBUM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

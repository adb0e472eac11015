// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for walking an album circularly.
//!
//! `ImageNavigator` owns the current [`Album`] and the index of the image on
//! screen. Moving past either end wraps around.

use crate::directory_scanner::Album;
use std::path::Path;

/// Manages the current position inside an album.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageNavigator {
    album: Album,
    /// Always `Some` and in bounds while the album is non-empty.
    current_index: Option<usize>,
}

impl ImageNavigator {
    /// Creates a new empty ImageNavigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the album and moves to its first image.
    pub fn set_album(&mut self, album: Album) {
        self.current_index = (!album.is_empty()).then_some(0);
        self.album = album;
    }

    /// Drops the album.
    pub fn clear(&mut self) {
        self.set_album(Album::new());
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    /// Returns the path to the current image, if any.
    pub fn current_image_path(&self) -> Option<&Path> {
        self.current_index.and_then(|idx| self.album.get(idx))
    }

    /// Navigates to the next image and returns its path.
    ///
    /// Returns `None` if there are no images in the album.
    /// Wraps around to the first image when at the last image.
    pub fn navigate_next(&mut self) -> Option<&Path> {
        let idx = self.current_index?;
        self.current_index = Some((idx + 1) % self.album.len());
        self.current_image_path()
    }

    /// Navigates to the previous image and returns its path.
    ///
    /// Returns `None` if there are no images in the album.
    /// Wraps around to the last image when at the first image.
    pub fn navigate_previous(&mut self) -> Option<&Path> {
        let idx = self.current_index?;
        let len = self.album.len();
        self.current_index = Some((idx + len - 1) % len);
        self.current_image_path()
    }

    /// Returns the total number of images in the album.
    pub fn len(&self) -> usize {
        self.album.len()
    }

    /// Checks if the album is empty.
    pub fn is_empty(&self) -> bool {
        self.album.is_empty()
    }

    /// Returns the current index in the album, if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for building an album from a folder.
//!
//! This module lists the regular files directly inside a directory, keeps the
//! ones with a supported image extension and sorts them by path.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name suffixes accepted as images, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".bmp", ".gif"];

/// Ordered, immutable list of the images found in one folder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Album {
    images: Vec<PathBuf>,
}

impl Album {
    /// Creates an empty album.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an album from already collected paths, sorting them ascending.
    pub fn from_paths(mut images: Vec<PathBuf>) -> Self {
        images.sort();
        Self { images }
    }

    /// Scans `directory` (non-recursively) for supported image files.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path) -> Result<Self> {
        let mut images = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        tracing::debug!(
            directory = %directory.display(),
            count = images.len(),
            "scanned folder"
        );

        Ok(Self::from_paths(images))
    }

    /// Returns the path at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }

    /// Returns the total number of images in the album.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the album is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterates over the album in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.images.iter().map(PathBuf::as_path)
    }
}

/// Checks if a file name ends with one of [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|extension| name.ends_with(extension))
        })
}

// SPDX-License-Identifier: MPL-2.0
//! `iced_album` is a folder slideshow image viewer built with the Iced GUI
//! framework.
//!
//! Pick a folder, step through its images in sorted order (wrapping at both
//! ends), zoom, run a timed slideshow and toggle fullscreen. The viewer state
//! lives in [`application::viewer::ViewerController`], which talks to the
//! window, the image decoder and the message dialogs through the traits in
//! [`application::port`].

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod image_navigation;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;

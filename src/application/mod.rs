// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`viewer`]: The viewer controller that owns all viewer state
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure and presentation layers implement application layer ports
//! - The `app` module drives [`viewer::ViewerController`] from Iced messages
//!
//! # Example
//!
//! ```ignore
//! use iced_album::application::viewer::{ViewerController, ViewerSettings};
//! use iced_album::infrastructure::ImageRsDecoder;
//!
//! let mut viewer = ViewerController::new(surface, ImageRsDecoder::new(), notifier, ViewerSettings::default());
//! viewer.open_folder(Some("/photos".into()));
//! viewer.next();
//! ```

pub mod port;
pub mod viewer;

// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! The `App` struct owns the [`ViewerController`] wired to Iced-backed
//! collaborators and translates messages into controller calls plus the
//! window and timer tasks they imply.

mod dialogs;
mod message;
pub mod paths;
mod subscription;
mod surface;
mod update;
mod view;

pub use dialogs::RfdNotifier;
pub use message::{Flags, Message};
pub use surface::CanvasSurface;

use crate::application::port::Notifier;
use crate::application::viewer::{ViewerController, ViewerSettings};
use crate::config::{self, Config};
use crate::domain::media::Dimensions;
use crate::infrastructure::ImageRsDecoder;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Controller type driven by the GUI.
pub type Viewer = ViewerController<CanvasSurface, ImageRsDecoder, Box<dyn Notifier>>;

/// Root Iced application state.
pub struct App {
    viewer: Viewer,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("album_len", &self.viewer.album().len())
            .field("current_index", &self.viewer.current_index())
            .field("slideshow", &self.viewer.slideshow_state())
            .field("fullscreen", &self.viewer.is_fullscreen())
            .finish()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            (config::CANVAS_MARGIN_WIDTH * 2) as f32,
            (config::CANVAS_MARGIN_HEIGHT * 2) as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir);

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }
    let window = window_settings(&config);

    // iced requires `Fn` for boot; the config is consumed on the first call.
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(&config, Box::new(RfdNotifier)), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the app in the empty-album state with the given notifier.
    pub fn new(config: &Config, notifier: Box<dyn Notifier>) -> Self {
        let (width, height) = config.window_size();
        let surface = CanvasSurface::new(Dimensions::new(width, height));
        let viewer = ViewerController::new(
            surface,
            ImageRsDecoder::new(),
            notifier,
            ViewerSettings::from_config(config),
        );

        Self {
            viewer,
            window_id: None,
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    fn title(&self) -> String {
        config::DEFAULT_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            viewer: &mut self.viewer,
            window_id: &mut self.window_id,
        };
        update::handle_message(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            surface: self.viewer.surface(),
        })
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every message becomes one controller call. The tasks returned here are
//! the side effects the controller cannot perform itself: opening the folder
//! picker, sleeping until the next slideshow tick, switching the window mode
//! and exiting.

use super::{dialogs, Message, Viewer};
use crate::domain::media::Dimensions;
use crate::domain::slideshow::SlideshowTick;
use iced::keyboard::{self, key::Named};
use iced::{event, window, Task};

/// Mutable application state handed to the update functions.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut Viewer,
    pub window_id: &'a mut Option<window::Id>,
}

/// Handles a message, then applies any window mode change it requested.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    let task = dispatch(ctx, message);
    let mode_task = apply_fullscreen_request(ctx);
    Task::batch([task, mode_task])
}

fn dispatch(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::OpenFolder => dialogs::pick_folder(),
        Message::FolderPicked(selection) => {
            ctx.viewer.open_folder(selection);
            Task::none()
        }
        Message::Previous => {
            ctx.viewer.previous();
            Task::none()
        }
        Message::Next => {
            ctx.viewer.next();
            Task::none()
        }
        Message::ZoomIn => {
            ctx.viewer.zoom_in();
            Task::none()
        }
        Message::ZoomOut => {
            ctx.viewer.zoom_out();
            Task::none()
        }
        Message::StartSlideshow => schedule_tick(ctx.viewer.start_slideshow()),
        Message::StopSlideshow => {
            ctx.viewer.stop_slideshow();
            Task::none()
        }
        Message::ToggleSlideshow => schedule_tick(ctx.viewer.toggle_slideshow()),
        Message::SlideshowTick(tick) => schedule_tick(ctx.viewer.on_slideshow_tick(tick)),
        Message::ToggleFullscreen => {
            ctx.viewer.toggle_fullscreen();
            Task::none()
        }
        Message::ExitFullscreen => {
            ctx.viewer.exit_fullscreen();
            Task::none()
        }
        Message::Exit => iced::exit(),
        Message::RawEvent { window, event } => {
            *ctx.window_id = Some(window);
            handle_raw_event(ctx, event)
        }
    }
}

fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: event::Event) -> Task<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size) | window::Event::Opened { size, .. }) => {
            if ctx
                .viewer
                .surface_mut()
                .set_window_size(window_dimensions(size))
            {
                ctx.viewer.refit();
            }
            Task::none()
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match shortcut(&key) {
            Some(message) => dispatch(ctx, message),
            None => Task::none(),
        },
        _ => Task::none(),
    }
}

/// Turns a slideshow tick into a one-shot delayed message.
fn schedule_tick(tick: Option<SlideshowTick>) -> Task<Message> {
    match tick {
        Some(tick) => Task::perform(
            async move {
                tokio::time::sleep(tick.delay()).await;
                tick
            },
            Message::SlideshowTick,
        ),
        None => Task::none(),
    }
}

/// Issues the pending fullscreen change, if any.
///
/// Until a window event has told us the window id, the request stays queued
/// on the surface.
fn apply_fullscreen_request(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(window_id) = *ctx.window_id else {
        return Task::none();
    };

    match ctx.viewer.surface_mut().take_fullscreen_request() {
        Some(fullscreen) => {
            let mode = if fullscreen {
                window::Mode::Fullscreen
            } else {
                window::Mode::Windowed
            };
            window::set_mode(window_id, mode)
        }
        None => Task::none(),
    }
}

/// Keyboard shortcut table.
pub fn shortcut(key: &keyboard::Key) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(Named::F11) => Some(Message::ToggleFullscreen),
        keyboard::Key::Named(Named::Escape) => Some(Message::ExitFullscreen),
        keyboard::Key::Named(Named::Space) => Some(Message::ToggleSlideshow),
        keyboard::Key::Character("+" | "=") => Some(Message::ZoomIn),
        keyboard::Key::Character("-") => Some(Message::ZoomOut),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window_dimensions(size: iced::Size) -> Dimensions {
    Dimensions::new(
        size.width.max(0.0).round() as u32,
        size.height.max(0.0).round() as u32,
    )
}

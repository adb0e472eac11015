// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the native events the viewer cares about (window geometry, focus
//! and unhandled key presses) to [`Message::RawEvent`], tagged with the
//! window they came from.

use super::Message;
use iced::{event, keyboard, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let forward = match &event {
            event::Event::Window(
                window::Event::Opened { .. } | window::Event::Resized(_) | window::Event::Focused,
            ) => true,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                status == event::Status::Ignored
            }
            _ => false,
        };

        forward.then_some(Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

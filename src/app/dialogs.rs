// SPDX-License-Identifier: MPL-2.0
//! Native dialogs via `rfd`: the folder picker and modal message boxes.

use super::Message;
use crate::application::port::Notifier;
use iced::Task;
use rfd::{AsyncFileDialog, MessageButtons, MessageDialog, MessageLevel};

/// [`Notifier`] that shows a blocking native message box.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdNotifier;

impl RfdNotifier {
    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Notifier for RfdNotifier {
    fn warn(&mut self, title: &str, message: &str) {
        Self::show(MessageLevel::Warning, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        Self::show(MessageLevel::Error, title, message);
    }
}

/// Opens the folder picker; resolves to [`Message::FolderPicked`].
pub fn pick_folder() -> Task<Message> {
    Task::perform(
        async move {
            AsyncFileDialog::new()
                .set_title("Open Folder")
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

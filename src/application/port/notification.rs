// SPDX-License-Identifier: MPL-2.0
//! User notification port definition.

/// Port for surfacing warnings and errors to the user.
///
/// Implementations are expected to be modal: the call returns once the user
/// has acknowledged the message.
pub trait Notifier {
    fn warn(&mut self, title: &str, message: &str);

    fn error(&mut self, title: &str, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn warn(&mut self, title: &str, message: &str) {
        (**self).warn(title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        (**self).error(title, message);
    }
}

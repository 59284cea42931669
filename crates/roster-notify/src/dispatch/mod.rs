//! Notification queue and runner

mod dead_letter;
mod dispatcher;
mod notification;

pub use dead_letter::{DeadLetter, DeadLetterLog};
pub use dispatcher::{DispatcherConfig, NotificationDispatcher};
pub use notification::Notification;

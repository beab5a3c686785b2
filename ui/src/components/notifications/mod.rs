//! Notifications

mod bell;

pub use bell::NotificationBell;

//! UI Components

pub mod auth;
pub mod common;
pub mod feed;
pub mod insights;
pub mod layout;
pub mod media;
pub mod notifications;
pub mod plans;
pub mod profile;
pub mod progress;

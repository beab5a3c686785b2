//! Shared types and rules for the LearnLoop client
//!
//! This crate contains the browser-independent half of the client:
//! - Backend JSON shapes (posts, profiles, progress updates, ...)
//! - Media pre-processing constraints (crop/trim rules)
//! - AI-insight retry policy and prompt building
//! - STOMP frame codec for the profile-update subscription
//! - Poll sequencing, form validation, and chart bucketing helpers
//!
//! Nothing in here touches a browser API, so it unit-tests natively.

pub mod chart;
pub mod http;
pub mod insight;
pub mod media;
pub mod models;
pub mod poll;
pub mod stomp;
pub mod validate;

pub use models::*;

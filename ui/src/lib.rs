//! LearnLoop UI Library
//!
//! Browser client for LearnLoop, a social learning platform. Renders the
//! feed, profiles, progress updates, learning plans, and AI skill insights,
//! talking to the backend over REST and one STOMP WebSocket topic.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: REST client, insight retry wrapper, WebSocket subscription
//! - [`components`]: UI components (feed, profile, progress, plans, ...)
//! - [`state`]: Global session state

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;

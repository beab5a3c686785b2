//! Backend Client Layer
//!
//! Everything that leaves the browser goes through here:
//!
//! - [`RestClient`]: the REST surface of the LearnLoop backend
//! - [`insight`]: retrying wrapper around the AI-insight proxy endpoint
//! - [`ProfileSocket`]: STOMP-over-WebSocket profile-picture subscription
//! - [`export`]: browser-side PDF export of insight cards

mod export;
mod insight;
mod rest;
mod subscription;

pub use export::export_insight_pdf;
pub use insight::{fetch_insight, generate_and_save};
pub use rest::RestClient;
pub use subscription::ProfileSocket;

/// Error type for backend client operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// 401/403 from an authenticated call; routes the user to `/error`
    #[error("Authentication failed: HTTP {status}")]
    Unauthorized { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Insight endpoint exhausted its retries
    #[error("AI insight unavailable: {0}")]
    InsightFailed(String),
}

impl ApiError {
    /// Whether this failure should send the user to the error page
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::RequestFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

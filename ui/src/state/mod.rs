//! Global State Management
//!
//! Session state shared across the app via Leptos context:
//! - The signed-in session (persisted to LocalStorage)
//! - The profile-update WebSocket manager
//! - The payload for the error page

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::{Deserialize, Serialize};

use learnloop_shared::AuthResponse;

use crate::client::{ApiError, ProfileSocket, RestClient};

const SESSION_KEY: &str = "learnloop.session";
const API_BASE_KEY: &str = "learnloop.api";
const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// A signed-in session, mirrored to LocalStorage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub username: Option<String>,
}

/// Payload carried to the error page
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub status: String,
    pub message: String,
    pub details: String,
}

impl ErrorInfo {
    pub fn from_api(error: &ApiError, message: &str) -> Self {
        Self {
            status: error
                .status()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            message: message.to_string(),
            details: error.to_string(),
        }
    }

    /// The Log Out action only appears for auth failures
    pub fn is_auth_failure(&self) -> bool {
        self.status
            .parse::<u16>()
            .is_ok_and(learnloop_shared::http::is_auth_status)
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current session, `None` when signed out
    pub session: RwSignal<Option<Session>>,

    /// Last error routed to the error page
    pub last_error: RwSignal<Option<ErrorInfo>>,

    /// Profile-picture push channel manager
    pub profile_socket: ProfileSocket,
}

impl AppState {
    /// Create app state, restoring any persisted session
    pub fn new() -> Self {
        let session: Option<Session> = LocalStorage::get(SESSION_KEY).ok();
        Self {
            session: create_rw_signal(session),
            last_error: create_rw_signal(None),
            profile_socket: ProfileSocket::new(),
        }
    }

    /// Backend base URL; overridable from LocalStorage for non-default
    /// deployments
    pub fn api_base(&self) -> String {
        LocalStorage::get(API_BASE_KEY).unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    }

    /// A REST client carrying the current bearer token, if any
    pub fn client(&self) -> RestClient {
        let token = self.session.get_untracked().map(|s| s.token);
        RestClient::new(&self.api_base(), token)
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.get_untracked().map(|s| s.user_id)
    }

    pub fn username(&self) -> Option<String> {
        self.session.get_untracked().and_then(|s| s.username)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with_untracked(|s| s.is_some())
    }

    /// Store a freshly issued session
    pub fn sign_in(&self, auth: AuthResponse) {
        let session = Session {
            token: auth.token,
            user_id: auth.user_id,
            username: auth.username,
        };
        if let Err(e) = LocalStorage::set(SESSION_KEY, &session) {
            tracing::warn!("failed to persist session: {}", e);
        }
        self.session.set(Some(session));
    }

    /// Clear the session. Only called from the explicit Log Out actions;
    /// auth failures alone never wipe the stored token.
    pub fn logout(&self) {
        self.profile_socket.disconnect();
        LocalStorage::delete(SESSION_KEY);
        self.session.set(None);
    }

    /// Record an error and return the route for it
    pub fn report_error(&self, info: ErrorInfo) -> &'static str {
        tracing::error!("{} {}: {}", info.status, info.message, info.details);
        self.last_error.set(Some(info));
        "/error"
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

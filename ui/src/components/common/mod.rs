//! Shared presentational components

mod avatar;
mod modal;
mod spinner;

pub use avatar::Avatar;
pub use modal::Modal;
pub use spinner::Spinner;

use crate::state::AppState;

/// Resolve a backend-relative media path to an absolute URL
pub fn media_url(state: &AppState, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
        path.to_string()
    } else {
        format!("{}/{}", state.api_base(), path.trim_start_matches('/'))
    }
}

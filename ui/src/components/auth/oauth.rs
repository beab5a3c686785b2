//! OAuth Redirect Landing
//!
//! The backend completes the Google flow and redirects here with `token`
//! and `userId` query parameters. Missing parameters route to the error
//! page.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use learnloop_shared::AuthResponse;

use crate::state::{AppState, ErrorInfo};

#[component]
pub fn OauthSuccessPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let query = use_query_map();
    let navigate = use_navigate();

    create_effect(move |done: Option<bool>| {
        if done.unwrap_or(false) {
            return true;
        }

        let (token, user_id) = query.with_untracked(|q| {
            (q.get("token").cloned(), q.get("userId").cloned())
        });

        match (token, user_id) {
            (Some(token), Some(user_id)) => {
                app_state.sign_in(AuthResponse {
                    token,
                    user_id,
                    username: None,
                });
                navigate("/dashboard", Default::default());
            }
            _ => {
                let route = app_state.report_error(ErrorInfo {
                    status: "401".to_string(),
                    message: "Google OAuth Failed".to_string(),
                    details: "Missing token or userId".to_string(),
                });
                navigate(route, Default::default());
            }
        }
        true
    });

    view! {
        <div class="min-h-screen flex items-center justify-center text-gray-600">
            "Signing in with Google..."
        </div>
    }
}

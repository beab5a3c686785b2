//! App Shell Component
//!
//! Layout container for the signed-in pages: top bar, sidebar navigation,
//! and the scrollable content area. Redirects to the login page when no
//! session exists.

use leptos::*;
use leptos_router::use_navigate;

use super::{Sidebar, TopBar};
use crate::state::AppState;

/// Main application shell layout
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Signed-out users have nothing to see here
    let navigate = use_navigate();
    create_effect(move |_| {
        if app_state.session.get().is_none() {
            navigate("/login", Default::default());
        }
    });

    view! {
        <div class="h-screen flex flex-col bg-gray-50 text-gray-900 overflow-hidden">
            <TopBar />
            <div class="flex-1 flex min-h-0 overflow-hidden">
                <Sidebar />
                <main class="flex-1 overflow-auto min-w-0">
                    {children()}
                </main>
            </div>
        </div>
    }
}

//! Top Bar Component

use leptos::*;

use crate::components::common::Avatar;
use crate::components::notifications::NotificationBell;
use crate::state::AppState;

/// Brand, notification bell, and the current user's avatar
#[component]
pub fn TopBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let username = move || {
        app_state
            .session
            .get()
            .and_then(|s| s.username)
            .unwrap_or_else(|| "Learner".to_string())
    };

    view! {
        <header class="h-14 flex-shrink-0 bg-white border-b border-gray-200 flex items-center justify-between px-4">
            <a href="/dashboard" class="flex items-center gap-2">
                <svg class="w-7 h-7 text-indigo-600" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                    <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
                </svg>
                <span class="text-xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                    "LearnLoop"
                </span>
            </a>
            <div class="flex items-center gap-4">
                <NotificationBell />
                <Avatar name=username() size=32 />
            </div>
        </header>
    }
}

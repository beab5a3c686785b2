//! Sidebar Navigation

use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::state::AppState;

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    path: &'static str,
    icon: NavIcon,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", path: "/dashboard", icon: NavIcon::Home },
    NavItem { label: "My Progress", path: "/progress", icon: NavIcon::Chart },
    NavItem { label: "Learning Plans", path: "/plans", icon: NavIcon::Map },
    NavItem { label: "Skill Insights", path: "/insights", icon: NavIcon::Spark },
];

/// Left navigation rail for the signed-in pages
#[component]
pub fn Sidebar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let location = use_location();

    let profile_path = move || {
        app_state
            .user_id()
            .map(|id| format!("/profile/{}", id))
            .unwrap_or_else(|| "/login".to_string())
    };

    let navigate = use_navigate();
    let logout_state = expect_context::<AppState>();
    let on_logout = move |_| {
        logout_state.logout();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="w-60 flex-shrink-0 bg-white border-r border-gray-200 flex flex-col">
            <div class="flex-1 py-4 space-y-1">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let is_active = move || location.pathname.get().starts_with(item.path);
                        view! {
                            <a
                                href=item.path
                                class=move || {
                                    if is_active() {
                                        "flex items-center gap-3 px-4 py-2 mx-2 rounded-lg bg-indigo-50 text-indigo-700 font-medium"
                                    } else {
                                        "flex items-center gap-3 px-4 py-2 mx-2 rounded-lg text-gray-600 hover:bg-gray-100"
                                    }
                                }
                            >
                                {item.icon.render()}
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a
                    href=profile_path
                    class="flex items-center gap-3 px-4 py-2 mx-2 rounded-lg text-gray-600 hover:bg-gray-100"
                >
                    {NavIcon::User.render()}
                    <span>"My Profile"</span>
                </a>
            </div>
            <div class="p-4 border-t border-gray-200">
                <button
                    class="flex items-center gap-3 px-4 py-2 w-full rounded-lg text-gray-600 hover:bg-red-50 hover:text-red-600"
                    on:click=on_logout
                >
                    {NavIcon::Exit.render()}
                    <span>"Log Out"</span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Clone, Copy)]
enum NavIcon {
    Home,
    Chart,
    Map,
    Spark,
    User,
    Exit,
}

impl NavIcon {
    fn render(self) -> impl IntoView {
        match self {
            NavIcon::Home => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
                    <polyline points="9 22 9 12 15 12 15 22" />
                </svg>
            }.into_view(),
            NavIcon::Chart => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <line x1="18" y1="20" x2="18" y2="10" />
                    <line x1="12" y1="20" x2="12" y2="4" />
                    <line x1="6" y1="20" x2="6" y2="14" />
                </svg>
            }.into_view(),
            NavIcon::Map => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6" />
                    <line x1="8" y1="2" x2="8" y2="18" />
                    <line x1="16" y1="6" x2="16" y2="22" />
                </svg>
            }.into_view(),
            NavIcon::Spark => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 2l2.4 7.2L22 12l-7.6 2.8L12 22l-2.4-7.2L2 12l7.6-2.8z" />
                </svg>
            }.into_view(),
            NavIcon::User => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                    <circle cx="12" cy="7" r="4" />
                </svg>
            }.into_view(),
            NavIcon::Exit => view! {
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
                    <polyline points="16 17 21 12 16 7" />
                    <line x1="21" y1="12" x2="9" y2="12" />
                </svg>
            }.into_view(),
        }
    }
}

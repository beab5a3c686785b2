//! Root Application Component
//!
//! Routing and the top-level pages. `AppState` is created once here and
//! provided through context; signed-in pages live inside `MainLayout`,
//! which enforces the session redirect.

use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, Outlet, Route, Router, Routes};

use learnloop_shared::{Post, ProfileUpdateMessage};

use crate::components::auth::{LoginPage, OauthSuccessPage, RegisterPage};
use crate::components::common::Spinner;
use crate::components::feed::{PostCard, PostForm};
use crate::components::insights::InsightsPage;
use crate::components::layout::AppShell;
use crate::components::plans::PlansPage;
use crate::components::profile::{ProfilePage, SuggestionsPanel};
use crate::components::progress::ProgressPage;
use crate::state::{AppState, ErrorInfo};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::new());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=LandingPage />
                <Route path="/login" view=LoginPage />
                <Route path="/register" view=RegisterPage />
                <Route path="/oauth/success" view=OauthSuccessPage />
                <Route path="/error" view=ErrorPage />
                <Route path="" view=MainLayout>
                    <Route path="/dashboard" view=DashboardPage />
                    <Route path="/profile/:user_id" view=ProfilePage />
                    <Route path="/progress" view=ProgressPage />
                    <Route path="/plans" view=PlansPage />
                    <Route path="/insights" view=InsightsPage />
                </Route>
                <Route path="/*any" view=NotFoundPage />
            </Routes>
        </Router>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <AppShell>
            <div class="p-6">
                <Outlet />
            </div>
        </AppShell>
    }
}

/// Public landing page; signed-in visitors go straight to the dashboard
#[component]
fn LandingPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    create_effect(move |_| {
        if app_state.is_signed_in() {
            navigate("/dashboard", Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-600 to-purple-700 flex items-center justify-center">
            <div class="text-center text-white px-6">
                <h1 class="text-5xl font-bold">"LearnLoop"</h1>
                <p class="mt-4 text-lg text-indigo-100 max-w-xl mx-auto">
                    "Share what you learn, track your progress, and turn every
                     completed skill into an insight."
                </p>
                <div class="mt-8 flex gap-4 justify-center">
                    <a
                        href="/login"
                        class="px-6 py-2.5 bg-white text-indigo-700 rounded-lg font-medium"
                    >
                        "Sign In"
                    </a>
                    <a
                        href="/register"
                        class="px-6 py-2.5 border border-white/60 rounded-lg font-medium"
                    >
                        "Join Now"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// The feed. Owns the canonical post list; cards and the composer report
/// every change back into it. Holds the profile-update subscription for
/// the duration of the page.
#[component]
fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let posts = create_rw_signal(Option::<Vec<Post>>::None);

    let load_state = app_state.clone();
    let load_navigate = navigate.clone();
    create_effect(move |loaded: Option<bool>| {
        if loaded.unwrap_or(false) {
            return true;
        }
        let state = load_state.clone();
        let navigate = load_navigate.clone();
        let Some(user_id) = state.user_id() else {
            return false;
        };
        spawn_local(async move {
            match state.client().feed(&user_id).await {
                Ok(list) => posts.set(Some(list)),
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Could not load your feed"));
                    navigate(route, Default::default());
                }
            }
        });
        true
    });

    // Live profile-picture updates patch every post of the changed author
    if let Some(user_id) = app_state.user_id() {
        let socket_state = app_state.clone();
        app_state.profile_socket.connect(
            &app_state.api_base(),
            &user_id,
            Rc::new(move |update: ProfileUpdateMessage| {
                posts.update(|list| {
                    let Some(list) = list else {
                        return;
                    };
                    for post in list.iter_mut().filter(|p| p.user_id == update.user_id) {
                        post.profile_picture_path = Some(update.profile_picture_path.clone());
                    }
                });
            }),
        );
        on_cleanup(move || socket_state.profile_socket.disconnect());
    }

    let on_post_created = Callback::new(move |post: Post| {
        posts.update(|list| {
            if let Some(list) = list {
                list.insert(0, post);
            }
        });
    });
    let on_post_change = Callback::new(move |updated: Post| {
        posts.update(|list| {
            let Some(list) = list else {
                return;
            };
            if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                *slot = updated;
            }
        });
    });
    let on_post_deleted = Callback::new(move |post_id: String| {
        posts.update(|list| {
            if let Some(list) = list {
                list.retain(|p| p.id != post_id);
            }
        });
    });

    view! {
        <div class="max-w-4xl mx-auto flex gap-6">
            <div class="flex-1 space-y-4">
                <PostForm on_post_created=on_post_created />
                {move || match posts.get() {
                    None => view! { <Spinner /> }.into_view(),
                    Some(list) if list.is_empty() => view! {
                        <p class="text-sm text-gray-400 text-center py-6">
                            "Your feed is empty. Follow people to see their posts."
                        </p>
                    }
                    .into_view(),
                    Some(list) => list
                        .into_iter()
                        .map(|post| view! {
                            <PostCard
                                post=post
                                on_change=on_post_change
                                on_deleted=on_post_deleted
                            />
                        })
                        .collect::<Vec<_>>()
                        .into_view(),
                }}
            </div>
            <div class="hidden lg:block w-72">
                <SuggestionsPanel />
            </div>
        </div>
    }
}

/// Error page fed by [`AppState::last_error`]. Auth failures offer an
/// explicit Log Out; nothing here ever clears the session on its own.
#[component]
fn ErrorPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let error = app_state.last_error.get_untracked();
    let (status, message, details, is_auth) = match &error {
        Some(e) => (
            e.status.clone(),
            e.message.clone(),
            e.details.clone(),
            e.is_auth_failure(),
        ),
        None => (
            "Error".to_string(),
            "Something went wrong".to_string(),
            String::new(),
            false,
        ),
    };

    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.history().map(|h| h.back());
        }
    };

    let logout_state = app_state.clone();
    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        logout_state.logout();
        logout_navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="bg-white rounded-xl shadow-lg p-8 max-w-md w-full text-center">
                <p class="text-5xl font-bold text-indigo-600">{status}</p>
                <h1 class="mt-3 text-xl font-semibold text-gray-800">{message}</h1>
                {(!details.is_empty()).then(|| view! {
                    <p class="mt-2 text-sm text-gray-500">{details}</p>
                })}
                <div class="mt-6 flex gap-3 justify-center">
                    <button
                        class="px-4 py-2 border border-gray-300 rounded text-sm"
                        on:click=go_back
                    >
                        "Go Back"
                    </button>
                    <a
                        href="/dashboard"
                        class="px-4 py-2 bg-indigo-600 text-white rounded text-sm"
                    >
                        "Dashboard"
                    </a>
                    {is_auth.then(|| view! {
                        <button
                            class="px-4 py-2 border border-red-300 text-red-600 rounded text-sm"
                            on:click=on_logout.clone()
                        >
                            "Log Out"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <p class="text-6xl font-bold text-indigo-600">"404"</p>
                <p class="mt-2 text-gray-500">"This page does not exist."</p>
                <a href="/" class="mt-4 inline-block text-indigo-600 hover:underline">
                    "Back to LearnLoop"
                </a>
            </div>
        </div>
    }
}

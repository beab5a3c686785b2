//! Who-to-follow suggestions

use leptos::*;

use learnloop_shared::UserSummary;

use crate::components::common::{Avatar, Spinner};
use crate::state::AppState;

#[component]
pub fn SuggestionsPanel() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let suggestions = create_rw_signal(Option::<Vec<UserSummary>>::None);

    let load_state = app_state.clone();
    create_effect(move |loaded: Option<bool>| {
        if loaded.unwrap_or(false) {
            return true;
        }
        let state = load_state.clone();
        let Some(user_id) = state.user_id() else {
            return false;
        };
        spawn_local(async move {
            match state.client().suggestions(&user_id).await {
                Ok(users) => suggestions.set(Some(users)),
                Err(e) => {
                    tracing::warn!("failed to load suggestions: {}", e);
                    suggestions.set(Some(Vec::new()));
                }
            }
        });
        true
    });

    let follow_state = app_state.clone();
    let on_follow = move |target: UserSummary| {
        let state = follow_state.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        spawn_local(async move {
            match state.client().follow(&target.user_id, &user_id).await {
                Ok(()) => suggestions.update(|s| {
                    if let Some(list) = s {
                        list.retain(|u| u.user_id != target.user_id);
                    }
                }),
                Err(e) => tracing::warn!("follow suggestion failed: {}", e),
            }
        });
    };

    view! {
        <aside class="p-4 bg-white rounded-lg shadow-md">
            <h2 class="text-sm font-semibold text-gray-700">"Suggested for you"</h2>
            {move || match suggestions.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="mt-2 text-sm text-gray-400">"No suggestions right now."</p>
                }
                .into_view(),
                Some(list) => {
                    let on_follow = on_follow.clone();
                    list.into_iter()
                        .map(|user| {
                            let on_follow = on_follow.clone();
                            let link = format!("/profile/{}", user.user_id);
                            let user_for_follow = user.clone();
                            view! {
                                <div class="flex items-center gap-2 mt-3">
                                    <a href=link class="flex items-center gap-2 flex-1">
                                        <Avatar
                                            name=user.name.clone()
                                            src=user.profile_picture_path.clone()
                                            size=32
                                        />
                                        <span class="text-sm text-gray-700">{user.name.clone()}</span>
                                    </a>
                                    <button
                                        class="text-xs text-indigo-600 font-medium"
                                        on:click=move |_| on_follow(user_for_follow.clone())
                                    >
                                        "Follow"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }
            }}
        </aside>
    }
}

//! Post Card Component
//!
//! Stateless over its post: every mutation is reported to the owning page
//! through `on_change` so a single copy of the feed exists. Likes apply
//! optimistically; on failure the exact pre-mutation snapshot is restored
//! rather than re-fetching the feed.

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::validate::toggle_like;
use learnloop_shared::Post;

use crate::components::common::Avatar;
use crate::components::feed::{CommentSection, MediaCarousel};
use crate::state::{AppState, ErrorInfo};

#[component]
pub fn PostCard(
    post: Post,
    #[prop(into)] on_change: Callback<Post>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let viewer_id = app_state.user_id().unwrap_or_default();
    let is_owner = viewer_id == post.user_id;
    let liked = post.likes.iter().any(|id| *id == viewer_id);
    let like_count = post.likes.len();

    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(post.description.clone());
    let (error, set_error) = create_signal(Option::<String>::None);

    let like_post = post.clone();
    let like_state = app_state.clone();
    let like_navigate = navigate.clone();
    let on_like = move |_| {
        let snapshot = like_post.clone();
        let state = like_state.clone();
        let navigate = like_navigate.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };

        let (likes, _now_liked) = toggle_like(&snapshot.likes, &user_id);
        let mut optimistic = snapshot.clone();
        optimistic.likes = likes;
        on_change.call(optimistic);

        spawn_local(async move {
            match state.client().toggle_like(&snapshot.id, &user_id).await {
                Ok(updated) => on_change.call(updated),
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    tracing::warn!("toggle like failed: {}", e);
                    on_change.call(snapshot);
                }
            }
        });
    };

    let edit_post = post.clone();
    let edit_state = app_state.clone();
    let on_save_edit = move |_| {
        let snapshot = edit_post.clone();
        let state = edit_state.clone();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            set_error.set(Some("Description cannot be empty.".to_string()));
            return;
        }
        spawn_local(async move {
            match state
                .client()
                .update_post(&snapshot.id, &snapshot.user_id, text.trim())
                .await
            {
                Ok(updated) => {
                    set_editing.set(false);
                    set_error.set(None);
                    on_change.call(updated);
                }
                Err(e) => set_error.set(Some(format!("Failed to update post: {}", e))),
            }
        });
    };

    let delete_post = post.clone();
    let delete_state = app_state.clone();
    let on_delete = move |_| {
        let snapshot = delete_post.clone();
        let state = delete_state.clone();
        spawn_local(async move {
            match state
                .client()
                .delete_post(&snapshot.id, &snapshot.user_id)
                .await
            {
                Ok(()) => on_deleted.call(snapshot.id),
                Err(e) => set_error.set(Some(format!("Failed to delete post: {}", e))),
            }
        });
    };

    let author_link = format!("/profile/{}", post.user_id);
    let timestamp = post
        .created_at
        .map(|t| t.format("%b %e, %Y %H:%M").to_string())
        .unwrap_or_default();
    let comment_post = post.clone();

    view! {
        <article class="p-4 bg-white rounded-lg shadow-md">
            <header class="flex items-center gap-3">
                <a href=author_link.clone()>
                    <Avatar
                        name=post.user_name.clone()
                        src=post.profile_picture_path.clone()
                    />
                </a>
                <div class="flex-1">
                    <a href=author_link class="font-semibold text-gray-800 hover:underline">
                        {post.user_name.clone()}
                    </a>
                    <p class="text-xs text-gray-400">{timestamp}</p>
                </div>
                {is_owner.then(|| view! {
                    <button
                        class="text-xs text-gray-500 hover:text-indigo-600"
                        on:click=move |_| set_editing.update(|e| *e = !*e)
                    >
                        "Edit"
                    </button>
                    <button
                        class="text-xs text-gray-500 hover:text-red-600"
                        on:click=on_delete
                    >
                        "Delete"
                    </button>
                })}
            </header>

            <Show
                when=move || editing.get()
                fallback={
                    let description = post.description.clone();
                    move || view! {
                        <p class="mt-2 text-gray-700 whitespace-pre-wrap">{description.clone()}</p>
                    }
                }
            >
                <div class="mt-2">
                    <textarea
                        class="w-full p-2 border border-gray-300 rounded"
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button
                        class="mt-1 px-3 py-1 bg-indigo-600 text-white rounded text-sm"
                        on:click=on_save_edit.clone()
                    >
                        "Save"
                    </button>
                </div>
            </Show>

            <MediaCarousel urls=post.media_urls.clone() />

            {move || error.get().map(|msg| view! {
                <p class="mt-2 text-sm text-red-500">{msg}</p>
            })}

            <div class="flex items-center gap-4 mt-3 text-sm text-gray-600">
                <button
                    class=if liked { "flex items-center gap-1 text-indigo-600 font-medium" } else { "flex items-center gap-1 hover:text-indigo-600" }
                    on:click=on_like
                >
                    <svg class="w-5 h-5" viewBox="0 0 24 24" fill=if liked { "currentColor" } else { "none" } stroke="currentColor" stroke-width="2">
                        <path d="M14 9V5a3 3 0 00-3-3l-4 9v11h11.28a2 2 0 002-1.7l1.38-9a2 2 0 00-2-2.3zM7 22H4a2 2 0 01-2-2v-7a2 2 0 012-2h3" />
                    </svg>
                    <span>{like_count}</span>
                </button>
                <span>{format!("{} comments", post.comments.len())}</span>
            </div>

            <CommentSection post=comment_post on_change=on_change condensed=true />
        </article>
    }
}

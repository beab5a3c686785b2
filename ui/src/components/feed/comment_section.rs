//! Comment Section Component
//!
//! One canonical comment UI used everywhere a post renders. `condensed`
//! collapses the list to the most recent comments until expanded. New
//! comments are inserted optimistically under a temporary id and the whole
//! post snapshot is restored if the request fails.

use leptos::*;
use uuid::Uuid;

use learnloop_shared::validate::validate_comment;
use learnloop_shared::{Comment, CommentRequest, Post};

use crate::components::common::Avatar;
use crate::state::AppState;

const CONDENSED_VISIBLE: usize = 2;

#[component]
pub fn CommentSection(
    post: Post,
    #[prop(into)] on_change: Callback<Post>,
    #[prop(default = false)] condensed: bool,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let viewer_id = app_state.user_id().unwrap_or_default();
    let viewer_name = app_state.username().unwrap_or_default();

    let (draft, set_draft) = create_signal(String::new());
    let (reply_to, set_reply_to) = create_signal(Option::<String>::None);
    let (expanded, set_expanded) = create_signal(!condensed);
    let (error, set_error) = create_signal(Option::<String>::None);

    let top_level: Vec<Comment> = post
        .comments
        .iter()
        .filter(|c| c.parent_id.is_none())
        .cloned()
        .collect();
    let total = top_level.len();
    let hidden = total.saturating_sub(CONDENSED_VISIBLE);

    let submit_post = post.clone();
    let submit_state = app_state.clone();
    let submit_viewer = viewer_id.clone();
    let submit_name = viewer_name.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = draft.get_untracked();
        let content = match validate_comment(&text) {
            Ok(content) => content.to_string(),
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let snapshot = submit_post.clone();
        let state = submit_state.clone();
        let user_id = submit_viewer.clone();
        let user_name = submit_name.clone();
        let parent_id = reply_to.get_untracked();

        // Optimistic insert under a temporary id; the server response
        // replaces the whole post and with it the real id
        let mut optimistic = snapshot.clone();
        optimistic.comments.push(Comment {
            id: format!("pending-{}", Uuid::new_v4()),
            user_id: user_id.clone(),
            user_name,
            content: content.clone(),
            created_at: None,
            parent_id: parent_id.clone(),
            user_profile_picture: None,
        });
        on_change.call(optimistic);
        set_draft.set(String::new());
        set_reply_to.set(None);
        set_error.set(None);

        spawn_local(async move {
            let request = CommentRequest {
                user_id,
                content,
                parent_id,
            };
            match state.client().add_comment(&snapshot.id, &request).await {
                Ok(updated) => on_change.call(updated),
                Err(e) => {
                    tracing::warn!("add comment failed: {}", e);
                    set_error.set(Some(format!("Failed to add comment: {}", e)));
                    on_change.call(snapshot);
                }
            }
        });
    };

    let replies_of = {
        let comments = post.comments.clone();
        move |parent: &str| -> Vec<Comment> {
            comments
                .iter()
                .filter(|c| c.parent_id.as_deref() == Some(parent))
                .cloned()
                .collect()
        }
    };

    let visible: Vec<Comment> = if condensed {
        top_level
            .iter()
            .rev()
            .take(CONDENSED_VISIBLE)
            .rev()
            .cloned()
            .collect()
    } else {
        top_level.clone()
    };

    let render_post = post.clone();
    let render_viewer = viewer_id.clone();

    view! {
        <section class="mt-3 border-t border-gray-100 pt-2">
            {(condensed && hidden > 0).then(|| view! {
                <button
                    class="text-xs text-indigo-600 hover:underline"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || {
                        if expanded.get() {
                            "Show fewer comments".to_string()
                        } else {
                            format!("View all {} comments", total)
                        }
                    }}
                </button>
            })}

            {move || {
                let listed = if expanded.get() { top_level.clone() } else { visible.clone() };
                listed
                    .into_iter()
                    .map(|comment| {
                        let replies = replies_of(&comment.id);
                        view! {
                            <CommentRow
                                post=render_post.clone()
                                comment=comment.clone()
                                viewer_id=render_viewer.clone()
                                on_change=on_change
                                on_reply=move |id| set_reply_to.set(Some(id))
                            />
                            <div class="ml-10">
                                {replies
                                    .into_iter()
                                    .map(|reply| view! {
                                        <CommentRow
                                            post=render_post.clone()
                                            comment=reply
                                            viewer_id=render_viewer.clone()
                                            on_change=on_change
                                            on_reply=move |id| set_reply_to.set(Some(id))
                                        />
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}

            {move || error.get().map(|msg| view! {
                <p class="text-xs text-red-500">{msg}</p>
            })}

            <form class="flex items-center gap-2 mt-2" on:submit=on_submit>
                {move || reply_to.get().map(|_| view! {
                    <button
                        type="button"
                        class="text-xs text-gray-400"
                        on:click=move |_| set_reply_to.set(None)
                    >
                        "Replying ✕"
                    </button>
                })}
                <input
                    type="text"
                    class="flex-1 px-3 py-1.5 border border-gray-200 rounded-full text-sm focus:outline-none focus:border-indigo-400"
                    placeholder="Write a comment..."
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="text-sm text-indigo-600 font-medium">
                    "Send"
                </button>
            </form>
        </section>
    }
}

/// A single comment with owner edit/delete controls
#[component]
fn CommentRow(
    post: Post,
    comment: Comment,
    viewer_id: String,
    #[prop(into)] on_change: Callback<Post>,
    #[prop(into)] on_reply: Callback<String>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let is_owner = comment.user_id == viewer_id;
    let pending = comment.id.starts_with("pending-");

    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(comment.content.clone());

    let edit_state = app_state.clone();
    let edit_post = post.clone();
    let edit_comment = comment.clone();
    let on_save = move |_| {
        let text = draft.get_untracked();
        let Ok(content) = validate_comment(&text) else {
            return;
        };
        let content = content.to_string();
        let state = edit_state.clone();
        let snapshot = edit_post.clone();
        let comment = edit_comment.clone();
        spawn_local(async move {
            let request = CommentRequest {
                user_id: comment.user_id.clone(),
                content,
                parent_id: comment.parent_id.clone(),
            };
            match state
                .client()
                .update_comment(&snapshot.id, &comment.id, &request)
                .await
            {
                Ok(updated) => {
                    set_editing.set(false);
                    on_change.call(updated);
                }
                Err(e) => tracing::warn!("update comment failed: {}", e),
            }
        });
    };

    let delete_state = app_state.clone();
    let delete_post = post.clone();
    let delete_comment = comment.clone();
    let on_delete = move |_| {
        let state = delete_state.clone();
        let snapshot = delete_post.clone();
        let comment = delete_comment.clone();
        spawn_local(async move {
            match state
                .client()
                .delete_comment(&snapshot.id, &comment.id, &comment.user_id)
                .await
            {
                Ok(updated) => on_change.call(updated),
                Err(e) => tracing::warn!("delete comment failed: {}", e),
            }
        });
    };

    let reply_id = comment.id.clone();
    let row_class = if pending {
        "flex items-start gap-2 mt-2 opacity-60"
    } else {
        "flex items-start gap-2 mt-2"
    };

    view! {
        <div class=row_class>
            <Avatar
                name=comment.user_name.clone()
                src=comment.user_profile_picture.clone()
                size=28
            />
            <div class="flex-1 bg-gray-50 rounded-lg px-3 py-1.5">
                <p class="text-xs font-semibold text-gray-700">{comment.user_name.clone()}</p>
                <Show
                    when=move || editing.get()
                    fallback={
                        let content = comment.content.clone();
                        move || view! {
                            <p class="text-sm text-gray-700">{content.clone()}</p>
                        }
                    }
                >
                    <div class="flex items-center gap-2">
                        <input
                            type="text"
                            class="flex-1 px-2 py-0.5 border rounded text-sm"
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button class="text-xs text-indigo-600" on:click=on_save.clone()>
                            "Save"
                        </button>
                    </div>
                </Show>
                <div class="flex gap-3 mt-0.5">
                    {(!pending && comment.parent_id.is_none()).then(|| view! {
                        <button
                            class="text-xs text-gray-400 hover:text-indigo-600"
                            on:click=move |_| on_reply.call(reply_id.clone())
                        >
                            "Reply"
                        </button>
                    })}
                    {(is_owner && !pending).then(|| view! {
                        <button
                            class="text-xs text-gray-400 hover:text-indigo-600"
                            on:click=move |_| set_editing.update(|e| *e = !*e)
                        >
                            "Edit"
                        </button>
                        <button
                            class="text-xs text-gray-400 hover:text-red-500"
                            on:click=on_delete
                        >
                            "Delete"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

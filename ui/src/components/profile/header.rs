//! Profile Header Component

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlInputElement};

use learnloop_shared::{Profile, ProfileUpdateRequest};

use crate::components::common::Avatar;
use crate::state::AppState;

/// Name, bio, follower counts, and the follow / edit actions. Stateless
/// over the profile; mutations go back to the page through `on_change`.
/// Follow state applies optimistically and rolls back to the exact
/// pre-mutation snapshot on failure.
#[component]
pub fn ProfileHeader(
    profile: Profile,
    #[prop(into)] on_change: Callback<Profile>,
    #[prop(into)] on_show_followers: Callback<()>,
    #[prop(into)] on_show_following: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let viewer_id = app_state.user_id().unwrap_or_default();
    let is_owner = viewer_id == profile.user_id;
    let is_following = profile.followers.iter().any(|id| *id == viewer_id);

    let (editing, set_editing) = create_signal(false);
    let (name_draft, set_name_draft) = create_signal(profile.name.clone());
    let (bio_draft, set_bio_draft) = create_signal(profile.bio.clone());
    let (error, set_error) = create_signal(Option::<String>::None);

    let follow_profile = profile.clone();
    let follow_state = app_state.clone();
    let follow_viewer = viewer_id.clone();
    let on_follow = move |_| {
        let snapshot = follow_profile.clone();
        let state = follow_state.clone();
        let viewer = follow_viewer.clone();
        if viewer.is_empty() {
            return;
        }

        let mut optimistic = snapshot.clone();
        let unfollowing = optimistic.followers.iter().any(|id| *id == viewer);
        if unfollowing {
            optimistic.followers.retain(|id| *id != viewer);
        } else {
            optimistic.followers.push(viewer.clone());
        }
        on_change.call(optimistic);

        spawn_local(async move {
            let client = state.client();
            let result = if unfollowing {
                client.unfollow(&snapshot.user_id, &viewer).await
            } else {
                client.follow(&snapshot.user_id, &viewer).await
            };
            if let Err(e) = result {
                tracing::warn!("follow toggle failed: {}", e);
                on_change.call(snapshot);
            }
        });
    };

    let save_state = app_state.clone();
    let save_profile = profile.clone();
    let on_save = move |_| {
        let state = save_state.clone();
        let snapshot = save_profile.clone();
        let request = ProfileUpdateRequest {
            name: name_draft.get_untracked().trim().to_string(),
            bio: bio_draft.get_untracked().trim().to_string(),
        };
        if request.name.is_empty() {
            set_error.set(Some("Name cannot be empty.".to_string()));
            return;
        }
        spawn_local(async move {
            match state.client().update_profile(&snapshot.user_id, &request).await {
                Ok(updated) => {
                    set_editing.set(false);
                    set_error.set(None);
                    on_change.call(updated);
                }
                Err(e) => set_error.set(Some(format!("Failed to update profile: {}", e))),
            }
        });
    };

    let picture_state = app_state.clone();
    let picture_profile = profile.clone();
    let on_picture = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let state = picture_state.clone();
        let snapshot = picture_profile.clone();
        spawn_local(async move {
            let Ok(form) = FormData::new() else {
                return;
            };
            if form.append_with_blob("file", file.unchecked_ref()).is_err() {
                return;
            }
            match state
                .client()
                .upload_profile_picture(&snapshot.user_id, form)
                .await
            {
                Ok(updated) => on_change.call(updated),
                Err(e) => set_error.set(Some(format!("Failed to upload picture: {}", e))),
            }
        });
    };

    view! {
        <header class="p-6 bg-white rounded-lg shadow-md">
            <div class="flex items-center gap-4">
                <div class="relative">
                    <Avatar
                        name=profile.name.clone()
                        src=profile.profile_picture_path.clone()
                        size=72
                    />
                    {is_owner.then(|| view! {
                        <label class="absolute -bottom-1 -right-1 w-6 h-6 rounded-full bg-indigo-600 text-white flex items-center justify-center cursor-pointer text-xs">
                            "+"
                            <input
                                type="file"
                                accept="image/png,image/jpeg"
                                class="hidden"
                                on:change=on_picture
                            />
                        </label>
                    })}
                </div>

                <div class="flex-1">
                    <Show
                        when=move || editing.get()
                        fallback={
                            let name = profile.name.clone();
                            let bio = profile.bio.clone();
                            move || view! {
                                <h1 class="text-xl font-bold text-gray-800">{name.clone()}</h1>
                                <p class="text-sm text-gray-500">{bio.clone()}</p>
                            }
                        }
                    >
                        <input
                            type="text"
                            class="block w-full px-2 py-1 border rounded"
                            prop:value=name_draft
                            on:input=move |ev| set_name_draft.set(event_target_value(&ev))
                        />
                        <textarea
                            class="block w-full mt-1 px-2 py-1 border rounded text-sm"
                            placeholder="Bio"
                            prop:value=bio_draft
                            on:input=move |ev| set_bio_draft.set(event_target_value(&ev))
                        />
                        <button
                            class="mt-1 px-3 py-1 bg-indigo-600 text-white rounded text-sm"
                            on:click=on_save.clone()
                        >
                            "Save"
                        </button>
                    </Show>
                </div>

                {if is_owner {
                    view! {
                        <button
                            class="px-4 py-1.5 border border-gray-300 rounded text-sm"
                            on:click=move |_| set_editing.update(|e| *e = !*e)
                        >
                            "Edit Profile"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <button
                            class=if is_following { "px-4 py-1.5 border border-gray-300 rounded text-sm" } else { "px-4 py-1.5 bg-indigo-600 text-white rounded text-sm" }
                            on:click=on_follow
                        >
                            {if is_following { "Unfollow" } else { "Follow" }}
                        </button>
                    }
                    .into_view()
                }}
            </div>

            {move || error.get().map(|msg| view! {
                <p class="mt-2 text-sm text-red-500">{msg}</p>
            })}

            <div class="flex gap-6 mt-4 text-sm text-gray-600">
                <span>
                    <strong>{profile.posts.len()}</strong>
                    " posts"
                </span>
                <button class="hover:underline" on:click=move |_| on_show_followers.call(())>
                    <strong>{profile.followers.len()}</strong>
                    " followers"
                </button>
                <button class="hover:underline" on:click=move |_| on_show_following.call(())>
                    <strong>{profile.following.len()}</strong>
                    " following"
                </button>
            </div>
        </header>
    }
}

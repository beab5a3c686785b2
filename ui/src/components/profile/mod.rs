//! Profile page and the follow graph
//!
//! The page owns the canonical `Profile` and the user's posts; header and
//! cards report every mutation back up so no stale copies exist.

mod follow_modal;
mod header;
mod suggestions;

pub use follow_modal::FollowModal;
pub use header::ProfileHeader;
pub use suggestions::SuggestionsPanel;

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use learnloop_shared::{Post, Profile, UserSummary};

use crate::components::common::Spinner;
use crate::components::feed::PostCard;
use crate::state::{AppState, ErrorInfo};

#[derive(Clone, Copy, PartialEq)]
enum FollowList {
    Followers,
    Following,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let params = use_params_map();
    let navigate = use_navigate();

    let profile = create_rw_signal(Option::<Profile>::None);
    let posts = create_rw_signal(Vec::<Post>::new());
    let (open_list, set_open_list) = create_signal(Option::<FollowList>::None);
    let (list_users, set_list_users) = create_signal(Option::<Vec<UserSummary>>::None);

    // Reload whenever the routed user id changes
    let load_state = app_state.clone();
    let load_navigate = navigate.clone();
    create_effect(move |_| {
        let Some(user_id) = params.with(|p| p.get("user_id").cloned()) else {
            return;
        };
        profile.set(None);
        posts.set(Vec::new());

        let state = load_state.clone();
        let navigate = load_navigate.clone();
        spawn_local(async move {
            let client = state.client();
            match client.public_profile(&user_id).await {
                Ok(p) => profile.set(Some(p)),
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                    return;
                }
                Err(e) => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Could not load this profile"));
                    navigate(route, Default::default());
                    return;
                }
            }
            match client.user_posts(&user_id).await {
                Ok(list) => posts.set(list),
                Err(e) => tracing::warn!("failed to load posts: {}", e),
            }
        });
    });

    let viewed_user_id = move || profile.with(|p| p.as_ref().map(|p| p.user_id.clone()));

    let list_state = app_state.clone();
    let open = move |kind: FollowList| {
        let Some(user_id) = viewed_user_id() else {
            return;
        };
        set_open_list.set(Some(kind));
        set_list_users.set(None);
        let state = list_state.clone();
        spawn_local(async move {
            let client = state.client();
            let result = match kind {
                FollowList::Followers => client.followers(&user_id).await,
                FollowList::Following => client.following(&user_id).await,
            };
            match result {
                Ok(users) => set_list_users.set(Some(users)),
                Err(e) => {
                    tracing::warn!("failed to load follow list: {}", e);
                    set_list_users.set(Some(Vec::new()));
                }
            }
        });
    };
    let open_followers = open.clone();
    let open_following = open.clone();

    let on_post_change = Callback::new(move |updated: Post| {
        posts.update(|list| {
            if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                *slot = updated;
            }
        });
    });
    let on_post_deleted = Callback::new(move |post_id: String| {
        posts.update(|list| list.retain(|p| p.id != post_id));
        profile.update(|p| {
            if let Some(p) = p {
                p.posts.retain(|id| *id != post_id);
            }
        });
    });

    let is_own = {
        let state = app_state.clone();
        move || viewed_user_id() == state.user_id()
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            {move || match profile.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(p) => {
                    let open_followers = open_followers.clone();
                    let open_following = open_following.clone();
                    view! {
                        <ProfileHeader
                            profile=p
                            on_change=move |updated| profile.set(Some(updated))
                            on_show_followers=move |_| open_followers(FollowList::Followers)
                            on_show_following=move |_| open_following(FollowList::Following)
                        />
                    }
                    .into_view()
                }
            }}

            {move || (!is_own()).then(|| view! { <SuggestionsPanel /> })}

            {move || {
                posts
                    .get()
                    .into_iter()
                    .map(|post| view! {
                        <PostCard
                            post=post
                            on_change=on_post_change
                            on_deleted=on_post_deleted
                        />
                    })
                    .collect::<Vec<_>>()
            }}

            {move || {
                open_list.get().map(|kind| {
                    let title = match kind {
                        FollowList::Followers => "Followers",
                        FollowList::Following => "Following",
                    };
                    view! {
                        <FollowModal
                            title=title
                            users=list_users
                            on_close=move |_| set_open_list.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

//! Follower / Following List Modal

use leptos::*;

use learnloop_shared::UserSummary;

use crate::components::common::{Avatar, Modal, Spinner};

#[component]
pub fn FollowModal(
    #[prop(into)] title: String,
    users: ReadSignal<Option<Vec<UserSummary>>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close>
            {move || match users.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="text-sm text-gray-500">"Nobody here yet."</p>
                }
                .into_view(),
                Some(list) => list
                    .into_iter()
                    .map(|user| {
                        let link = format!("/profile/{}", user.user_id);
                        view! {
                            <a href=link class="flex items-center gap-3 py-2 hover:bg-gray-50 rounded px-2">
                                <Avatar
                                    name=user.name.clone()
                                    src=user.profile_picture_path.clone()
                                    size=32
                                />
                                <span class="text-sm text-gray-700">{user.name}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_view(),
            }}
        </Modal>
    }
}

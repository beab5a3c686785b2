//! Notification Bell
//!
//! Polls on an interval; every response carries a sequencer ticket so a
//! slow early response can never overwrite a newer one. Mark-read and
//! clear-all mutate immediately and let the next poll reconcile.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use learnloop_shared::poll::PollSequencer;
use learnloop_shared::{MarkReadRequest, Notification, NotificationKind};

use crate::state::AppState;

const POLL_INTERVAL_MS: u32 = 15_000;

fn kind_label(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Like => "♥",
        NotificationKind::Comment => "💬",
        NotificationKind::Follow => "➕",
        NotificationKind::Mention => "@",
        NotificationKind::System => "ⓘ",
    }
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let notifications = create_rw_signal(Vec::<Notification>::new());
    let (open, set_open) = create_signal(false);
    let sequencer = Rc::new(PollSequencer::new());

    let poll_state = app_state.clone();
    let poll = move || {
        let state = poll_state.clone();
        let sequencer = sequencer.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let ticket = sequencer.issue();
        spawn_local(async move {
            match state.client().notifications(&user_id).await {
                Ok(list) => {
                    if sequencer.try_commit(ticket) {
                        notifications.set(list);
                    }
                }
                Err(e) => tracing::warn!("notification poll failed: {}", e),
            }
        });
    };

    poll();
    let interval = Interval::new(POLL_INTERVAL_MS, poll);
    on_cleanup(move || drop(interval));

    let unread = move || notifications.with(|list| list.iter().filter(|n| !n.read).count());

    let read_state = app_state.clone();
    let mark_all_read = move |_| {
        let state = read_state.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let unread_ids: Vec<String> = notifications.with_untracked(|list| {
            list.iter()
                .filter(|n| !n.read)
                .map(|n| n.id.clone())
                .collect()
        });
        notifications.update(|list| {
            for n in list.iter_mut() {
                n.read = true;
            }
        });
        spawn_local(async move {
            let client = state.client();
            for notification_id in unread_ids {
                let request = MarkReadRequest {
                    user_id: user_id.clone(),
                    notification_id,
                };
                if let Err(e) = client.mark_read(&request).await {
                    tracing::warn!("mark read failed: {}", e);
                }
            }
        });
    };

    let clear_state = app_state.clone();
    let clear_all = move |_| {
        let state = clear_state.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        notifications.set(Vec::new());
        spawn_local(async move {
            if let Err(e) = state.client().clear_notifications(&user_id).await {
                tracing::warn!("clear notifications failed: {}", e);
            }
        });
    };

    view! {
        <div class="relative">
            <button
                class="relative p-2 text-gray-500 hover:text-indigo-600"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M18 8A6 6 0 006 8c0 7-3 9-3 9h18s-3-2-3-9" />
                    <path d="M13.73 21a2 2 0 01-3.46 0" />
                </svg>
                {move || {
                    let n = unread();
                    (n > 0).then(|| view! {
                        <span class="absolute top-0 right-0 min-w-[18px] h-[18px] px-1 rounded-full bg-red-500 text-white text-[10px] flex items-center justify-center">
                            {n}
                        </span>
                    })
                }}
            </button>

            {move || open.get().then(|| view! {
                <div class="absolute right-0 mt-2 w-80 bg-white rounded-lg shadow-xl border border-gray-100 z-40">
                    <div class="flex items-center gap-3 px-4 py-2 border-b border-gray-100">
                        <span class="text-sm font-semibold text-gray-700">"Notifications"</span>
                        <div class="flex-1" />
                        <button
                            class="text-xs text-indigo-600 hover:underline"
                            on:click=mark_all_read.clone()
                        >
                            "Mark all read"
                        </button>
                        <button
                            class="text-xs text-gray-400 hover:text-red-500"
                            on:click=clear_all.clone()
                        >
                            "Clear"
                        </button>
                    </div>
                    <div class="max-h-96 overflow-auto">
                        {move || {
                            let list = notifications.get();
                            if list.is_empty() {
                                view! {
                                    <p class="px-4 py-6 text-sm text-gray-400 text-center">
                                        "You're all caught up."
                                    </p>
                                }
                                .into_view()
                            } else {
                                list.into_iter()
                                    .map(|n| {
                                        let time = n
                                            .timestamp
                                            .map(|t| t.format("%b %e, %H:%M").to_string())
                                            .unwrap_or_default();
                                        let row = if n.read {
                                            "flex items-start gap-2 px-4 py-2 text-sm"
                                        } else {
                                            "flex items-start gap-2 px-4 py-2 text-sm bg-indigo-50"
                                        };
                                        view! {
                                            <div class=row>
                                                <span>{kind_label(n.kind)}</span>
                                                <div class="flex-1">
                                                    <p class="text-gray-700">{n.message}</p>
                                                    <p class="text-xs text-gray-400">{time}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_view()
                            }
                        }}
                    </div>
                </div>
            })}
        </div>
    }
}

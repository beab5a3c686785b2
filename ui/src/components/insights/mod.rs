//! Skill insights
//!
//! Only completed activities appear here; in-progress work has no insight
//! to generate yet.

mod card;

pub use card::InsightCard;

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::ProgressUpdate;

use crate::components::common::Spinner;
use crate::state::{AppState, ErrorInfo};

#[component]
pub fn InsightsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let updates = create_rw_signal(Option::<Vec<ProgressUpdate>>::None);

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
            match state.client().progress_updates(&user_id).await {
                Ok(list) => {
                    let completed = list
                        .into_iter()
                        .filter(|u| u.kind.is_completed())
                        .collect();
                    updates.set(Some(completed));
                }
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    tracing::warn!("failed to load insights: {}", e);
                    updates.set(Some(Vec::new()));
                }
            }
        });
        true
    });

    let on_change = Callback::new(move |updated: ProgressUpdate| {
        updates.update(|list| {
            if let Some(list) = list {
                if let Some(slot) = list.iter_mut().find(|u| u.id == updated.id) {
                    *slot = updated;
                }
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h1 class="text-xl font-bold text-gray-800">"Skill Insights"</h1>
            {move || match updates.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="text-sm text-gray-400 text-center py-6">
                        "Complete a tutorial or learn a new skill to unlock insights."
                    </p>
                }
                .into_view(),
                Some(list) => list
                    .into_iter()
                    .map(|update| view! {
                        <InsightCard update=update on_change=on_change />
                    })
                    .collect::<Vec<_>>()
                    .into_view(),
            }}
        </div>
    }
}

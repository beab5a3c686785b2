//! Progress Update List

use leptos::*;

use learnloop_shared::{ProgressType, ProgressUpdate};

use crate::state::AppState;

fn badge_class(kind: ProgressType) -> &'static str {
    match kind {
        ProgressType::CompletedTutorial => "px-2 py-0.5 rounded-full text-xs bg-green-100 text-green-700",
        ProgressType::NewSkillLearned => "px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-700",
        ProgressType::InProgress => "px-2 py-0.5 rounded-full text-xs bg-amber-100 text-amber-700",
    }
}

#[component]
pub fn ProgressList(
    updates: Vec<ProgressUpdate>,
    #[prop(into)] on_edit: Callback<ProgressUpdate>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    if updates.is_empty() {
        return view! {
            <p class="text-sm text-gray-400 text-center py-6">
                "No progress updates match."
            </p>
        }
        .into_view();
    }

    updates
        .into_iter()
        .map(|update| {
            let state = app_state.clone();
            let delete_id = update.id.clone();
            let on_delete = move |_| {
                let state = state.clone();
                let id = delete_id.clone();
                spawn_local(async move {
                    match state.client().delete_progress_update(&id).await {
                        Ok(()) => on_deleted.call(id),
                        Err(e) => tracing::warn!("delete progress update failed: {}", e),
                    }
                });
            };

            let edit_update = update.clone();
            let date = update
                .date
                .map(|d| d.format("%b %e, %Y").to_string())
                .unwrap_or_default();
            let sub_kind = update
                .in_progress_type
                .clone()
                .filter(|t| !t.is_empty())
                .map(|t| format!(" · {}", t));

            view! {
                <div class="p-4 bg-white rounded-lg shadow-md mt-3">
                    <div class="flex items-center gap-2">
                        <span class=badge_class(update.kind)>
                            {update.kind.label()}
                            {sub_kind}
                        </span>
                        <span class="text-xs text-gray-400">{date}</span>
                        <div class="flex-1" />
                        <button
                            class="text-xs text-gray-500 hover:text-indigo-600"
                            on:click=move |_| on_edit.call(edit_update.clone())
                        >
                            "Edit"
                        </button>
                        <button
                            class="text-xs text-gray-500 hover:text-red-600"
                            on:click=on_delete
                        >
                            "Delete"
                        </button>
                    </div>
                    <h3 class="mt-2 font-semibold text-gray-800">{update.title.clone()}</h3>
                    <p class="mt-1 text-sm text-gray-600 whitespace-pre-wrap">
                        {update.description.clone()}
                    </p>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_view()
}

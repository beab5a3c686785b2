//! Plan Sharing List

use leptos::*;

use learnloop_shared::PlanSharingEntry;

use crate::state::AppState;

/// Plan cards with the favorite toggle. Favoriting applies optimistically
/// and restores the pre-mutation entry if the request fails.
#[component]
pub fn PlanList(
    plans: Vec<PlanSharingEntry>,
    #[prop(into)] on_change: Callback<PlanSharingEntry>,
    #[prop(into)] on_edit: Callback<PlanSharingEntry>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    if plans.is_empty() {
        return view! {
            <p class="text-sm text-gray-400 text-center py-6">
                "No plans yet. Share your first learning plan."
            </p>
        }
        .into_view();
    }

    plans
        .into_iter()
        .map(|plan| {
            let fav_state = app_state.clone();
            let fav_plan = plan.clone();
            let on_favorite = move |_| {
                let state = fav_state.clone();
                let snapshot = fav_plan.clone();

                let mut optimistic = snapshot.clone();
                optimistic.is_favorite = !optimistic.is_favorite;
                on_change.call(optimistic.clone());

                spawn_local(async move {
                    match state
                        .client()
                        .set_favorite(&snapshot.id, optimistic.is_favorite)
                        .await
                    {
                        Ok(updated) => on_change.call(updated),
                        Err(e) => {
                            tracing::warn!("favorite toggle failed: {}", e);
                            on_change.call(snapshot);
                        }
                    }
                });
            };

            let delete_state = app_state.clone();
            let delete_id = plan.id.clone();
            let on_delete = move |_| {
                let state = delete_state.clone();
                let id = delete_id.clone();
                spawn_local(async move {
                    match state.client().delete_plan(&id).await {
                        Ok(()) => on_deleted.call(id),
                        Err(e) => tracing::warn!("delete plan failed: {}", e),
                    }
                });
            };

            let edit_plan = plan.clone();
            let timeline = match (plan.timeline_start, plan.timeline_end) {
                (Some(s), Some(e)) => Some(format!(
                    "{} – {}",
                    s.format("%b %e, %Y"),
                    e.format("%b %e, %Y")
                )),
                (Some(s), None) => Some(format!("From {}", s.format("%b %e, %Y"))),
                _ => None,
            };
            let star_class = if plan.is_favorite {
                "text-amber-400"
            } else {
                "text-gray-300 hover:text-amber-400"
            };

            view! {
                <div class="p-4 bg-white rounded-lg shadow-md mt-3">
                    <div class="flex items-center gap-2">
                        <button class=star_class on:click=on_favorite title="Favorite">
                            <svg class="w-5 h-5" viewBox="0 0 24 24" fill="currentColor">
                                <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" />
                            </svg>
                        </button>
                        <h3 class="font-semibold text-gray-800">{plan.title.clone()}</h3>
                        <div class="flex-1" />
                        <button
                            class="text-xs text-gray-500 hover:text-indigo-600"
                            on:click=move |_| on_edit.call(edit_plan.clone())
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

                    {(!plan.topics.is_empty()).then(|| view! {
                        <p class="mt-1 text-xs text-indigo-600">{plan.topics.clone()}</p>
                    })}
                    <p class="mt-1 text-sm text-gray-600 whitespace-pre-wrap">
                        {plan.description.clone()}
                    </p>
                    {timeline.map(|t| view! {
                        <p class="mt-1 text-xs text-gray-400">{t}</p>
                    })}

                    {(!plan.resources.is_empty()).then(|| view! {
                        <ul class="mt-2 space-y-0.5">
                            {plan
                                .resources
                                .iter()
                                .map(|url| view! {
                                    <li>
                                        <a
                                            href=url.clone()
                                            target="_blank"
                                            rel="noopener"
                                            class="text-xs text-indigo-600 hover:underline break-all"
                                        >
                                            {url.clone()}
                                        </a>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    })}
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_view()
}

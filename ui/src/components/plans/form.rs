//! Plan Sharing Form

use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;

use learnloop_shared::validate::validate_title;
use learnloop_shared::{PlanSharingEntry, PlanSharingRequest};

use crate::state::AppState;

fn parse_day(value: &str) -> Option<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        day.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}

/// Create/edit form for a learning plan. Resources are entered one URL
/// per line.
#[component]
pub fn PlanForm(
    #[prop(optional_no_strip)] initial: Option<PlanSharingEntry>,
    #[prop(into)] on_saved: Callback<PlanSharingEntry>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let editing_id = initial.as_ref().map(|p| p.id.clone());

    let (title, set_title) = create_signal(
        initial.as_ref().map(|p| p.title.clone()).unwrap_or_default(),
    );
    let (topics, set_topics) = create_signal(
        initial.as_ref().map(|p| p.topics.clone()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        initial
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (resources, set_resources) = create_signal(
        initial
            .as_ref()
            .map(|p| p.resources.join("\n"))
            .unwrap_or_default(),
    );
    let (start, set_start) = create_signal(
        initial
            .as_ref()
            .and_then(|p| p.timeline_start)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (end, set_end) = create_signal(
        initial
            .as_ref()
            .and_then(|p| p.timeline_end)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (error, set_error) = create_signal(Option::<String>::None);
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let title_text = match validate_title(&title.get_untracked()) {
            Ok(t) => t.to_string(),
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let timeline_start = parse_day(&start.get_untracked());
        let timeline_end = parse_day(&end.get_untracked());
        if let (Some(s), Some(e)) = (timeline_start, timeline_end) {
            if e < s {
                set_error.set(Some("Timeline end is before its start.".to_string()));
                return;
            }
        }

        let state = app_state.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let request = PlanSharingRequest {
            user_id,
            title: title_text,
            topics: topics.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            resources: resources
                .get_untracked()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            timeline_start,
            timeline_end,
        };
        let editing_id = editing_id.clone();

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = state.client();
            let result = match &editing_id {
                Some(id) => client.update_plan(id, &request).await,
                None => client.create_plan(&request).await,
            };
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) => set_error.set(Some(format!("Failed to save plan: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="p-4 bg-white rounded-lg shadow-md space-y-3" on:submit=on_submit>
            <input
                type="text"
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm"
                placeholder="Plan title"
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm"
                placeholder="Topics (comma separated)"
                prop:value=topics
                on:input=move |ev| set_topics.set(event_target_value(&ev))
            />
            <textarea
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm"
                placeholder="What is this plan about?"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <textarea
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm font-mono"
                placeholder="Resource links, one per line"
                prop:value=resources
                on:input=move |ev| set_resources.set(event_target_value(&ev))
            />
            <div class="flex items-center gap-2 text-sm">
                <label class="text-gray-500">"From"</label>
                <input
                    type="date"
                    class="px-2 py-1 border border-gray-300 rounded"
                    prop:value=start
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
                <label class="text-gray-500">"to"</label>
                <input
                    type="date"
                    class="px-2 py-1 border border-gray-300 rounded"
                    prop:value=end
                    on:input=move |ev| set_end.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|msg| view! {
                <p class="text-sm text-red-500">{msg}</p>
            })}

            <div class="flex gap-2">
                <button
                    type="submit"
                    class="px-4 py-1.5 bg-indigo-600 text-white rounded text-sm disabled:opacity-50"
                    disabled=saving
                >
                    {move || if saving.get() { "Saving..." } else { "Save Plan" }}
                </button>
                <button
                    type="button"
                    class="px-4 py-1.5 border border-gray-300 rounded text-sm"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

//! Progress Update Form

use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;

use learnloop_shared::validate::validate_title;
use learnloop_shared::{ProgressType, ProgressUpdate, ProgressUpdateRequest};

use crate::state::AppState;

/// Create/edit form for a progress update. Passing `initial` switches it
/// into edit mode for that entry.
#[component]
pub fn ProgressForm(
    #[prop(optional_no_strip)] initial: Option<ProgressUpdate>,
    #[prop(into)] on_saved: Callback<ProgressUpdate>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let editing_id = initial.as_ref().map(|u| u.id.clone());

    let (kind, set_kind) = create_signal(
        initial
            .as_ref()
            .map(|u| u.kind)
            .unwrap_or(ProgressType::CompletedTutorial),
    );
    let (in_progress_type, set_in_progress_type) = create_signal(
        initial
            .as_ref()
            .and_then(|u| u.in_progress_type.clone())
            .unwrap_or_default(),
    );
    let (title, set_title) = create_signal(
        initial.as_ref().map(|u| u.title.clone()).unwrap_or_default(),
    );
    let (date, set_date) = create_signal(
        initial
            .as_ref()
            .and_then(|u| u.date)
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%d")
            .to_string(),
    );
    let (description, set_description) = create_signal(
        initial
            .as_ref()
            .map(|u| u.description.clone())
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
        let Ok(day) = NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d") else {
            set_error.set(Some("Please pick a valid date.".to_string()));
            return;
        };
        let when: DateTime<Utc> = DateTime::from_naive_utc_and_offset(
            day.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        );

        let state = app_state.clone();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let selected_kind = kind.get_untracked();
        let request = ProgressUpdateRequest {
            user_id,
            kind: selected_kind,
            in_progress_type: (selected_kind == ProgressType::InProgress)
                .then(|| in_progress_type.get_untracked())
                .filter(|t| !t.trim().is_empty()),
            title: title_text,
            date: when,
            description: description.get_untracked().trim().to_string(),
        };
        let editing_id = editing_id.clone();

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = state.client();
            let result = match &editing_id {
                Some(id) => client.update_progress_update(id, &request).await,
                None => client.create_progress_update(&request).await,
            };
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) => set_error.set(Some(format!("Failed to save: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="p-4 bg-white rounded-lg shadow-md space-y-3" on:submit=on_submit>
            <div class="flex gap-3">
                <select
                    class="px-2 py-1.5 border border-gray-300 rounded text-sm"
                    on:change=move |ev| {
                        if let Some(t) = ProgressType::from_label(&event_target_value(&ev)) {
                            set_kind.set(t);
                        }
                    }
                >
                    {ProgressType::ALL
                        .into_iter()
                        .map(|t| view! {
                            <option value=t.label() selected=move || kind.get() == t>
                                {t.label()}
                            </option>
                        })
                        .collect::<Vec<_>>()}
                </select>

                {move || (kind.get() == ProgressType::InProgress).then(|| view! {
                    <input
                        type="text"
                        class="flex-1 px-2 py-1.5 border border-gray-300 rounded text-sm"
                        placeholder="What kind of work? (course, project...)"
                        prop:value=in_progress_type
                        on:input=move |ev| set_in_progress_type.set(event_target_value(&ev))
                    />
                })}
            </div>

            <input
                type="text"
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm"
                placeholder="Title"
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="date"
                class="px-2 py-1.5 border border-gray-300 rounded text-sm"
                prop:value=date
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <textarea
                class="w-full px-2 py-1.5 border border-gray-300 rounded text-sm"
                placeholder="Describe what you did"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            {move || error.get().map(|msg| view! {
                <p class="text-sm text-red-500">{msg}</p>
            })}

            <div class="flex gap-2">
                <button
                    type="submit"
                    class="px-4 py-1.5 bg-indigo-600 text-white rounded text-sm disabled:opacity-50"
                    disabled=saving
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
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

//! Learning progress tracking
//!
//! The page owns the list; the form and rows report saves and deletes
//! back up. Search and type filtering are applied client-side.

mod form;
mod graph;
mod list;
mod summary;

pub use form::ProgressForm;
pub use graph::ProgressGraph;
pub use list::ProgressList;
pub use summary::ProgressSummary;

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::{ProgressType, ProgressUpdate};

use crate::components::common::Spinner;
use crate::state::{AppState, ErrorInfo};

#[component]
pub fn ProgressPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let updates = create_rw_signal(Option::<Vec<ProgressUpdate>>::None);
    let (search, set_search) = create_signal(String::new());
    let (type_filter, set_type_filter) = create_signal(Option::<ProgressType>::None);
    let (form_open, set_form_open) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<ProgressUpdate>::None);

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
                Ok(list) => updates.set(Some(list)),
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    tracing::warn!("failed to load progress updates: {}", e);
                    updates.set(Some(Vec::new()));
                }
            }
        });
        true
    });

    let filtered = move || -> Vec<ProgressUpdate> {
        let needle = search.get().to_lowercase();
        let kind = type_filter.get();
        updates
            .get()
            .unwrap_or_default()
            .into_iter()
            .filter(|u| kind.map_or(true, |k| u.kind == k))
            .filter(|u| {
                needle.is_empty()
                    || u.title.to_lowercase().contains(&needle)
                    || u.description.to_lowercase().contains(&needle)
            })
            .collect()
    };

    let on_saved = Callback::new(move |saved: ProgressUpdate| {
        updates.update(|list| {
            let Some(list) = list else {
                return;
            };
            match list.iter_mut().find(|u| u.id == saved.id) {
                Some(slot) => *slot = saved,
                None => list.insert(0, saved),
            }
        });
        set_form_open.set(false);
        set_editing.set(None);
    });
    let on_deleted = Callback::new(move |id: String| {
        updates.update(|list| {
            if let Some(list) = list {
                list.retain(|u| u.id != id);
            }
        });
    });
    let on_edit = Callback::new(move |update: ProgressUpdate| {
        set_editing.set(Some(update));
        set_form_open.set(true);
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <div class="flex items-center gap-3">
                <h1 class="text-xl font-bold text-gray-800">"My Progress"</h1>
                <div class="flex-1" />
                <button
                    class="px-4 py-1.5 bg-indigo-600 text-white rounded text-sm"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_form_open.update(|o| *o = !*o);
                    }
                >
                    "New Update"
                </button>
            </div>

            {move || updates.get().map(|list| view! { <ProgressSummary updates=list /> })}

            {move || updates.get().map(|list| view! { <ProgressGraph updates=list /> })}

            {move || form_open.get().then(|| view! {
                <ProgressForm
                    initial=editing.get_untracked()
                    on_saved=on_saved
                    on_cancel=move |_| {
                        set_form_open.set(false);
                        set_editing.set(None);
                    }
                />
            })}

            <div class="flex gap-3">
                <input
                    type="text"
                    class="flex-1 px-3 py-1.5 border border-gray-300 rounded text-sm"
                    placeholder="Search updates..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="px-2 py-1.5 border border-gray-300 rounded text-sm"
                    on:change=move |ev| {
                        set_type_filter.set(ProgressType::from_label(&event_target_value(&ev)))
                    }
                >
                    <option value="">"All types"</option>
                    {ProgressType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || match updates.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(_) => view! {
                    <ProgressList
                        updates=filtered()
                        on_edit=on_edit
                        on_deleted=on_deleted
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

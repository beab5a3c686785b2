//! Learning plan sharing
//!
//! Favorites sort first; within each group newest entries keep their
//! server order.

mod form;
mod list;

pub use form::PlanForm;
pub use list::PlanList;

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::PlanSharingEntry;

use crate::components::common::Spinner;
use crate::state::{AppState, ErrorInfo};

#[component]
pub fn PlansPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let plans = create_rw_signal(Option::<Vec<PlanSharingEntry>>::None);
    let (form_open, set_form_open) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<PlanSharingEntry>::None);

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
            match state.client().plans(&user_id).await {
                Ok(list) => plans.set(Some(list)),
                Err(e) if e.is_auth() => {
                    let route = state
                        .report_error(ErrorInfo::from_api(&e, "Your session is no longer valid"));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    tracing::warn!("failed to load plans: {}", e);
                    plans.set(Some(Vec::new()));
                }
            }
        });
        true
    });

    let sorted = move || -> Vec<PlanSharingEntry> {
        let mut list = plans.get().unwrap_or_default();
        list.sort_by_key(|p| !p.is_favorite);
        list
    };

    let on_saved = Callback::new(move |saved: PlanSharingEntry| {
        plans.update(|list| {
            let Some(list) = list else {
                return;
            };
            match list.iter_mut().find(|p| p.id == saved.id) {
                Some(slot) => *slot = saved,
                None => list.insert(0, saved),
            }
        });
        set_form_open.set(false);
        set_editing.set(None);
    });
    let on_change = Callback::new(move |updated: PlanSharingEntry| {
        plans.update(|list| {
            if let Some(list) = list {
                if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated;
                }
            }
        });
    });
    let on_deleted = Callback::new(move |id: String| {
        plans.update(|list| {
            if let Some(list) = list {
                list.retain(|p| p.id != id);
            }
        });
    });
    let on_edit = Callback::new(move |plan: PlanSharingEntry| {
        set_editing.set(Some(plan));
        set_form_open.set(true);
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <div class="flex items-center gap-3">
                <h1 class="text-xl font-bold text-gray-800">"Learning Plans"</h1>
                <div class="flex-1" />
                <button
                    class="px-4 py-1.5 bg-indigo-600 text-white rounded text-sm"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_form_open.update(|o| *o = !*o);
                    }
                >
                    "New Plan"
                </button>
            </div>

            {move || form_open.get().then(|| view! {
                <PlanForm
                    initial=editing.get_untracked()
                    on_saved=on_saved
                    on_cancel=move |_| {
                        set_form_open.set(false);
                        set_editing.set(None);
                    }
                />
            })}

            {move || match plans.get() {
                None => view! { <Spinner /> }.into_view(),
                Some(_) => view! {
                    <PlanList
                        plans=sorted()
                        on_change=on_change
                        on_edit=on_edit
                        on_deleted=on_deleted
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

//! Progress Summary Counts

use leptos::*;

use learnloop_shared::{ProgressType, ProgressUpdate};

#[component]
pub fn ProgressSummary(updates: Vec<ProgressUpdate>) -> impl IntoView {
    let count = |kind: ProgressType| updates.iter().filter(|u| u.kind == kind).count();

    view! {
        <div class="grid grid-cols-3 gap-3">
            {ProgressType::ALL
                .into_iter()
                .map(|kind| {
                    let n = count(kind);
                    view! {
                        <div class="p-4 bg-white rounded-lg shadow-md text-center">
                            <p class="text-2xl font-bold text-indigo-600">{n}</p>
                            <p class="text-xs text-gray-500">{kind.label()}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

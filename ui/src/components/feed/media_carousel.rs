//! Post Media Carousel

use leptos::*;

use crate::components::common::media_url;
use crate::state::AppState;

/// Ordered media attachments with previous/next controls
#[component]
pub fn MediaCarousel(urls: Vec<String>) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let resolved: Vec<String> = urls.iter().map(|u| media_url(&app_state, u)).collect();
    let count = resolved.len();
    let (index, set_index) = create_signal(0usize);

    if count == 0 {
        return ().into_view();
    }

    let current = {
        let resolved = resolved.clone();
        move || resolved[index.get().min(count - 1)].clone()
    };

    view! {
        <div class="relative mt-3 rounded-lg overflow-hidden bg-gray-100">
            {move || {
                let src = current();
                if is_video(&src) {
                    view! {
                        <video src=src controls class="w-full max-h-96 object-contain" />
                    }.into_view()
                } else {
                    view! {
                        <img src=src class="w-full max-h-96 object-contain" />
                    }.into_view()
                }
            }}

            {(count > 1).then(|| view! {
                <button
                    class="absolute left-2 top-1/2 -translate-y-1/2 w-8 h-8 rounded-full bg-black/40 text-white"
                    on:click=move |_| set_index.update(|i| *i = if *i == 0 { count - 1 } else { *i - 1 })
                >
                    "<"
                </button>
                <button
                    class="absolute right-2 top-1/2 -translate-y-1/2 w-8 h-8 rounded-full bg-black/40 text-white"
                    on:click=move |_| set_index.update(|i| *i = (*i + 1) % count)
                >
                    ">"
                </button>
                <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex gap-1">
                    {(0..count)
                        .map(|i| view! {
                            <span class=move || {
                                if index.get() == i {
                                    "w-2 h-2 rounded-full bg-white"
                                } else {
                                    "w-2 h-2 rounded-full bg-white/40"
                                }
                            } />
                        })
                        .collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
    .into_view()
}

fn is_video(url: &str) -> bool {
    let url = url.to_lowercase();
    url.ends_with(".mp4") || url.ends_with(".mov") || url.ends_with(".webm")
}

//! Avatar Component

use leptos::*;

use super::media_url;
use crate::state::AppState;

/// Circular user avatar with an initial-letter fallback
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(into, optional_no_strip)] src: Option<String>,
    /// Diameter in pixels
    #[prop(default = 40)] size: u32,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();
    let style = format!("width: {size}px; height: {size}px;");

    match src.filter(|s| !s.is_empty()) {
        Some(path) => view! {
            <img
                src=media_url(&app_state, &path)
                alt=name
                class="rounded-full object-cover flex-shrink-0"
                style=style
            />
        }
        .into_view(),
        None => view! {
            <div
                class="rounded-full bg-indigo-500 text-white flex items-center justify-center font-semibold flex-shrink-0"
                style=style
            >
                {initial}
            </div>
        }
        .into_view(),
    }
}

//! Modal Component

use leptos::*;

/// Centered modal with a dimmed backdrop. Clicking the backdrop or the
/// close button fires `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| on_close.call(())
        >
            <div
                class="bg-white rounded-xl shadow-2xl w-full max-w-lg mx-4 max-h-[85vh] overflow-auto"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                    <h3 class="text-lg font-semibold text-gray-800">{title}</h3>
                    <button
                        class="text-gray-400 hover:text-gray-600"
                        on:click=move |_| on_close.call(())
                    >
                        <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M18 6L6 18" />
                            <path d="M6 6l12 12" />
                        </svg>
                    </button>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

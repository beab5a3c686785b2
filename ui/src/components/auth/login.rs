//! Login Page

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::LoginRequest;

use crate::state::AppState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);
    let (loading, set_loading) = create_signal(false);

    let google_url = app_state.client().google_oauth_url();

    let navigate = use_navigate();
    let submit_state = app_state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let state = submit_state.clone();
        let navigate = navigate.clone();
        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match state.client().login(&request).await {
                Ok(auth) => {
                    state.sign_in(auth);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    set_error.set(Some("Invalid credentials. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-900 to-gray-900 flex items-center justify-center p-4">
            <div class="bg-gray-800 p-8 rounded-xl shadow-2xl w-full max-w-md border border-gray-700">
                <div class="flex justify-center mb-6">
                    <span class="text-2xl font-bold bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                        "LearnLoop"
                    </span>
                </div>

                <h2 class="text-2xl font-bold text-white mb-1 text-center">"Continue Your Learning Journey"</h2>
                <p class="text-gray-400 text-center mb-6">"Connect with fellow learners"</p>

                {move || error.get().map(|msg| view! {
                    <div class="mb-4 p-3 bg-red-900/50 text-red-200 rounded-lg text-sm border border-red-700/50">
                        {msg}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1" for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            class="w-full px-4 py-2 bg-gray-700 text-white rounded-lg border border-gray-600 focus:border-indigo-500 focus:outline-none"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1" for="password">"Password"</label>
                        <div class="relative">
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                class="w-full px-4 py-2 bg-gray-700 text-white rounded-lg border border-gray-600 focus:border-indigo-500 focus:outline-none"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-2.5 text-gray-400 hover:text-gray-200 text-sm"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition-colors disabled:opacity-50"
                        disabled=loading
                    >
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="my-4 flex items-center gap-3">
                    <div class="flex-1 h-px bg-gray-700" />
                    <span class="text-gray-500 text-sm">"or"</span>
                    <div class="flex-1 h-px bg-gray-700" />
                </div>

                <a
                    href=google_url
                    class="block w-full py-2 text-center bg-white text-gray-800 font-medium rounded-lg hover:bg-gray-100 transition-colors"
                >
                    "Continue with Google"
                </a>

                <p class="mt-6 text-center text-gray-400 text-sm">
                    "New to LearnLoop? "
                    <a href="/register" class="text-indigo-400 hover:text-indigo-300">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

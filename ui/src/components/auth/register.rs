//! Registration Page

use leptos::*;
use leptos_router::use_navigate;

use learnloop_shared::validate::validate_registration;
use learnloop_shared::RegisterRequest;

use crate::state::AppState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);
    let (loading, set_loading) = create_signal(false);

    let navigate = use_navigate();
    let submit_state = app_state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Blocked locally, never sent to the server
        if let Err(e) = validate_registration(
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            set_error.set(Some(e.to_string()));
            return;
        }

        let state = submit_state.clone();
        let navigate = navigate.clone();
        let request = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match state.client().register(&request).await {
                Ok(auth) => {
                    state.sign_in(auth);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    tracing::warn!("registration failed: {}", e);
                    set_error.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let field_class = "w-full px-4 py-2 bg-gray-700 text-white rounded-lg border border-gray-600 focus:border-indigo-500 focus:outline-none";

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-900 to-gray-900 flex items-center justify-center p-4">
            <div class="bg-gray-800 p-8 rounded-xl shadow-2xl w-full max-w-md border border-gray-700">
                <h2 class="text-2xl font-bold text-white mb-1 text-center">"Join LearnLoop"</h2>
                <p class="text-gray-400 text-center mb-6">"Start sharing your learning journey"</p>

                {move || error.get().map(|msg| view! {
                    <div class="mb-4 p-3 bg-red-900/50 text-red-200 rounded-lg text-sm border border-red-700/50">
                        {msg}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1">"Username"</label>
                        <input
                            type="text"
                            class=field_class
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1">"Email"</label>
                        <input
                            type="email"
                            class=field_class
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1">"Password"</label>
                        <input
                            type="password"
                            class=field_class
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-gray-300 text-sm font-medium mb-1">"Confirm Password"</label>
                        <input
                            type="password"
                            class=field_class
                            prop:value=confirm
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition-colors disabled:opacity-50"
                        disabled=loading
                    >
                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-gray-400 text-sm">
                    "Already have an account? "
                    <a href="/login" class="text-indigo-400 hover:text-indigo-300">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

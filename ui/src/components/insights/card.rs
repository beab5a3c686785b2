//! Skill Insight Card

use leptos::*;

use learnloop_shared::validate::validate_gmail_address;
use learnloop_shared::{InsightEmailRequest, InsightSaveRequest, ProgressUpdate};

use crate::client::{export_insight_pdf, generate_and_save};
use crate::components::common::Modal;
use crate::state::AppState;

/// One completed activity with its AI insight, the reflection editor, and
/// the email / PDF export actions.
#[component]
pub fn InsightCard(
    update: ProgressUpdate,
    #[prop(into)] on_change: Callback<ProgressUpdate>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (reflection, set_reflection) = create_signal(
        update.user_reflection.clone().unwrap_or_default(),
    );
    let (generating, set_generating) = create_signal(false);
    let (saving, set_saving) = create_signal(false);
    let (email_open, set_email_open) = create_signal(false);
    let (email_to, set_email_to) = create_signal(String::new());
    let (status, set_status) = create_signal(Option::<Result<String, String>>::None);

    let gen_state = app_state.clone();
    let gen_update = update.clone();
    let on_generate = move |_| {
        let state = gen_state.clone();
        let snapshot = gen_update.clone();
        set_generating.set(true);
        set_status.set(None);
        spawn_local(async move {
            let result = generate_and_save(
                &state.client(),
                &snapshot.id,
                &snapshot.title,
                &snapshot.description,
                &reflection.get_untracked(),
            )
            .await;
            match result {
                Ok(insight) => {
                    let mut updated = snapshot;
                    updated.ai_insight = Some(insight);
                    updated.user_reflection = Some(reflection.get_untracked());
                    on_change.call(updated);
                }
                Err(e) => set_status.set(Some(Err(format!(
                    "Could not generate an insight: {}",
                    e
                )))),
            }
            set_generating.set(false);
        });
    };

    let save_state = app_state.clone();
    let save_update = update.clone();
    let on_save_reflection = move |_| {
        let state = save_state.clone();
        let snapshot = save_update.clone();
        set_saving.set(true);
        set_status.set(None);
        spawn_local(async move {
            let request = InsightSaveRequest {
                ai_insight: snapshot.ai_insight.clone().unwrap_or_default(),
                user_reflection: reflection.get_untracked(),
            };
            match state.client().save_insight(&snapshot.id, &request).await {
                Ok(()) => {
                    let mut updated = snapshot;
                    updated.user_reflection = Some(request.user_reflection);
                    set_status.set(Some(Ok("Notes saved.".to_string())));
                    on_change.call(updated);
                }
                Err(e) => set_status.set(Some(Err(format!("Failed to save notes: {}", e)))),
            }
            set_saving.set(false);
        });
    };

    let email_state = app_state.clone();
    let email_update = update.clone();
    let on_send_email = move |_| {
        let to = email_to.get_untracked();
        if let Err(e) = validate_gmail_address(&to) {
            set_status.set(Some(Err(e.to_string())));
            return;
        }
        let state = email_state.clone();
        let snapshot = email_update.clone();
        spawn_local(async move {
            let request = InsightEmailRequest {
                to: to.trim().to_string(),
                subject: format!("Skill Insight: {}", snapshot.title),
                message: format!(
                    "<h2>{}</h2><div>{}</div><h3>My Notes</h3><div>{}</div>",
                    snapshot.title,
                    snapshot.ai_insight.clone().unwrap_or_default(),
                    reflection.get_untracked(),
                ),
            };
            match state.client().email_insight(&snapshot.id, &request).await {
                Ok(()) => {
                    set_email_open.set(false);
                    set_email_to.set(String::new());
                    set_status.set(Some(Ok(format!("Insight emailed to {}.", request.to))));
                }
                Err(e) => set_status.set(Some(Err(format!("Failed to send email: {}", e)))),
            }
        });
    };

    let export_update = update.clone();
    let on_export = move |_| {
        let insight = export_update.ai_insight.clone().unwrap_or_default();
        if let Err(e) = export_insight_pdf(&export_update, &insight, &reflection.get_untracked()) {
            set_status.set(Some(Err(format!("Export failed: {}", e))));
        }
    };

    let date = update
        .date
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    let has_insight = update.ai_insight.as_deref().is_some_and(|s| !s.is_empty());
    let insight_html = update.ai_insight.clone().unwrap_or_default();

    view! {
        <div class="p-4 bg-white rounded-lg shadow-md">
            <div class="flex items-center gap-2">
                <h3 class="font-semibold text-gray-800">{update.title.clone()}</h3>
                <span class="text-xs text-gray-400">{date}</span>
                <div class="flex-1" />
                {has_insight.then(|| view! {
                    <button
                        class="text-xs text-gray-500 hover:text-indigo-600"
                        on:click=move |_| set_email_open.set(true)
                    >
                        "Email"
                    </button>
                    <button
                        class="text-xs text-gray-500 hover:text-indigo-600"
                        on:click=on_export.clone()
                    >
                        "Export PDF"
                    </button>
                })}
            </div>
            <p class="mt-1 text-sm text-gray-600">{update.description.clone()}</p>

            <div class="mt-3 p-3 bg-indigo-50 rounded-lg text-sm">
                {if has_insight {
                    view! { <div inner_html=insight_html /> }.into_view()
                } else {
                    view! {
                        <button
                            class="px-3 py-1.5 bg-indigo-600 text-white rounded text-sm disabled:opacity-50"
                            disabled=generating
                            on:click=on_generate
                        >
                            {move || if generating.get() { "Generating..." } else { "Generate AI Insight" }}
                        </button>
                    }
                    .into_view()
                }}
            </div>

            <div class="mt-3">
                <label class="text-xs font-medium text-gray-500">"My Notes"</label>
                <textarea
                    class="w-full mt-1 px-2 py-1.5 border border-gray-200 rounded text-sm"
                    placeholder="Reflect on what you learned..."
                    prop:value=reflection
                    on:input=move |ev| set_reflection.set(event_target_value(&ev))
                />
                <button
                    class="px-3 py-1 border border-gray-300 rounded text-xs disabled:opacity-50"
                    disabled=saving
                    on:click=on_save_reflection
                >
                    {move || if saving.get() { "Saving..." } else { "Save Notes" }}
                </button>
            </div>

            {move || status.get().map(|s| match s {
                Ok(msg) => view! { <p class="mt-2 text-sm text-green-600">{msg}</p> },
                Err(msg) => view! { <p class="mt-2 text-sm text-red-500">{msg}</p> },
            })}

            {move || {
            let on_send_email = on_send_email.clone();
            email_open.get().then(move || view! {
                <Modal
                    title="Email this insight"
                    on_close=move |_| set_email_open.set(false)
                >
                    <p class="text-sm text-gray-500">
                        "Only Gmail addresses are supported."
                    </p>
                    <input
                        type="email"
                        class="w-full mt-2 px-2 py-1.5 border border-gray-300 rounded text-sm"
                        placeholder="someone@gmail.com"
                        prop:value=email_to
                        on:input=move |ev| set_email_to.set(event_target_value(&ev))
                    />
                    <button
                        class="mt-3 px-4 py-1.5 bg-indigo-600 text-white rounded text-sm"
                        on:click=on_send_email.clone()
                    >
                        "Send"
                    </button>
                </Modal>
            })}}
        </div>
    }
}

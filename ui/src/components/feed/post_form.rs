//! Post Form Component
//!
//! Create-post form with the media pre-processing flow: MIME/size/count
//! validation, interactive crop confirmation for images outside the legal
//! aspect band, and a trim selector for videos over the duration cap. All
//! violations are local validation errors; the user re-selects.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement};

use learnloop_shared::media::{
    crop_box, needs_crop, needs_trim, nearest_legal_ratio, validate_selection, MediaKind,
    TrimRange, MAX_VIDEO_SECS,
};
use learnloop_shared::validate::validate_post_description;

use crate::components::media::{
    crop_image, probe_image_dimensions, probe_video_duration, SelectedMedia,
};
use crate::state::{AppState, ErrorInfo};

#[component]
pub fn PostForm(#[prop(into)] on_post_created: Callback<learnloop_shared::Post>) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let (description, set_description) = create_signal(String::new());
    let media = create_rw_signal(Vec::<SelectedMedia>::new());
    let (error, set_error) = create_signal(Option::<String>::None);
    let (submitting, set_submitting) = create_signal(false);

    // Selection: validate as a whole, then probe each file
    let on_files = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();

        let described: Vec<(String, u64)> = files
            .iter()
            .map(|f| (f.type_(), f.size() as u64))
            .collect();
        if let Err(e) = validate_selection(&described) {
            set_error.set(Some(e.to_string()));
            media.set(Vec::new());
            return;
        }

        spawn_local(async move {
            let mut selected = Vec::new();
            for file in files {
                let kind = match MediaKind::from_mime(&file.type_()) {
                    Ok(kind) => kind,
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        media.set(Vec::new());
                        return;
                    }
                };
                let mut item = match SelectedMedia::new(file, kind) {
                    Ok(item) => item,
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        media.set(Vec::new());
                        return;
                    }
                };

                let probed = match kind {
                    MediaKind::Image => probe_image_dimensions(&item).await.map(|dims| {
                        item.dimensions = Some(dims);
                    }),
                    MediaKind::Video => probe_video_duration(&item).await.map(|duration| {
                        item.duration = Some(duration);
                        if needs_trim(duration) {
                            item.trim =
                                Some(TrimRange::clamped(0.0, MAX_VIDEO_SECS, duration));
                        }
                    }),
                };
                if let Err(e) = probed {
                    set_error.set(Some(e.to_string()));
                    media.set(Vec::new());
                    return;
                }

                selected.push(item);
            }
            set_error.set(None);
            media.set(selected);
        });
    };

    let confirm_crop = move |index: usize| {
        spawn_local(async move {
            let Some(item) = media.with_untracked(|m| m.get(index).cloned()) else {
                return;
            };
            let Some((w, h)) = item.dimensions else {
                return;
            };
            match crop_image(&item, crop_box(w, h)).await {
                Ok(blob) => media.update(|m| {
                    if let Some(item) = m.get_mut(index) {
                        item.cropped = Some(blob);
                    }
                }),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let remove_item = move |index: usize| {
        media.update(|m| {
            if index < m.len() {
                m.remove(index);
            }
        });
    };

    let set_trim = move |index: usize, start: f64, end: f64| {
        media.update(|m| {
            if let Some(item) = m.get_mut(index) {
                if let Some(duration) = item.duration {
                    item.trim = Some(TrimRange::clamped(start, end, duration));
                }
            }
        });
    };

    let submit_state = app_state.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let raw = description.get_untracked();
        let text = match validate_post_description(&raw) {
            Ok(t) => t.to_string(),
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let items = media.get_untracked();
        let uncropped = items.iter().any(|item| {
            item.kind == MediaKind::Image
                && item
                    .dimensions
                    .is_some_and(|(w, h)| needs_crop(w, h))
                && item.cropped.is_none()
        });
        if uncropped {
            set_error.set(Some(
                "Please crop images to a supported aspect ratio first.".to_string(),
            ));
            return;
        }

        let state = submit_state.clone();
        let navigate = submit_navigate.clone();
        let Some(user_id) = state.user_id() else {
            navigate("/login", Default::default());
            return;
        };

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = build_form(&text, &user_id, &items)
                .ok_or_else(|| crate::client::ApiError::InvalidResponse(
                    "could not assemble upload".to_string(),
                ));
            let result = match result {
                Ok(form) => state.client().create_post(form).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(post) => {
                    set_description.set(String::new());
                    media.set(Vec::new());
                    on_post_created.call(post);
                }
                Err(e) if e.is_auth() => {
                    let route = state.report_error(ErrorInfo::from_api(
                        &e,
                        "Your session is no longer valid",
                    ));
                    navigate(route, Default::default());
                }
                Err(e) => {
                    tracing::error!("create post failed: {}", e);
                    set_error.set(Some(format!("Failed to create post: {}", e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="p-4 bg-white rounded-lg shadow-md">
            <form on:submit=on_submit>
                <textarea
                    class="w-full p-2 border border-gray-300 rounded focus:border-indigo-500 focus:outline-none"
                    placeholder="What did you learn today?"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    type="file"
                    multiple
                    accept="image/png,image/jpeg,image/jpg,video/mp4,video/quicktime"
                    class="mt-2 text-sm text-gray-600"
                    on:change=on_files
                />

                {move || {
                    media
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <MediaPreview
                                    item=item
                                    index=index
                                    on_confirm_crop=confirm_crop
                                    on_remove=remove_item
                                    on_trim=set_trim
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || error.get().map(|msg| view! {
                    <p class="mt-2 text-sm text-red-500">{msg}</p>
                })}

                <button
                    type="submit"
                    class="mt-3 px-4 py-2 bg-indigo-600 text-white rounded hover:bg-indigo-700 disabled:opacity-50"
                    disabled=submitting
                >
                    {move || if submitting.get() { "Posting..." } else { "Post" }}
                </button>
            </form>
        </div>
    }
}

/// Preview of one selected file, with its crop/trim controls when needed
#[component]
fn MediaPreview<C, R, T>(
    item: SelectedMedia,
    index: usize,
    on_confirm_crop: C,
    on_remove: R,
    on_trim: T,
) -> impl IntoView
where
    C: Fn(usize) + Copy + 'static,
    R: Fn(usize) + Copy + 'static,
    T: Fn(usize, f64, f64) + Copy + 'static,
{
    let crop_required = item.kind == MediaKind::Image
        && item.dimensions.is_some_and(|(w, h)| needs_crop(w, h));
    let cropped = item.cropped.is_some();
    let target_ratio = item
        .dimensions
        .map(|(w, h)| nearest_legal_ratio(w, h))
        .unwrap_or(1.0);

    let trim = item.trim;
    let duration = item.duration.unwrap_or(0.0);
    let (start, set_start) = create_signal(trim.map(|t| t.start).unwrap_or(0.0));
    let (end, set_end) = create_signal(trim.map(|t| t.end).unwrap_or(duration));

    view! {
        <div class="mt-3 p-3 border border-gray-200 rounded-lg">
            <div class="flex items-start gap-3">
                {match item.kind {
                    MediaKind::Image => view! {
                        <img src=item.preview_url.clone() class="w-24 h-24 object-cover rounded" />
                    }.into_view(),
                    MediaKind::Video => view! {
                        <video src=item.preview_url.clone() class="w-24 h-24 object-cover rounded" muted />
                    }.into_view(),
                }}
                <div class="flex-1 text-sm">
                    <p class="font-medium text-gray-800">{item.file.name()}</p>

                    {crop_required.then(|| {
                        if cropped {
                            view! {
                                <p class="text-green-600 mt-1">"Cropped to fit."</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="mt-1">
                                    <p class="text-amber-600">
                                        "Aspect ratio outside the supported range."
                                    </p>
                                    <button
                                        type="button"
                                        class="mt-1 px-3 py-1 bg-indigo-600 text-white rounded text-xs"
                                        on:click=move |_| on_confirm_crop(index)
                                    >
                                        {format!("Crop to {:.2}:1", target_ratio)}
                                    </button>
                                </div>
                            }.into_view()
                        }
                    })}

                    {trim.is_some().then(|| view! {
                        <div class="mt-1">
                            <p class="text-amber-600">
                                {format!("Video is {:.1}s; select up to 30s to keep.", duration)}
                            </p>
                            <div class="flex items-center gap-2 mt-1">
                                <label class="text-xs text-gray-500">"Start"</label>
                                <input
                                    type="number"
                                    min="0"
                                    max=duration
                                    step="0.1"
                                    class="w-20 px-1 py-0.5 border rounded text-xs"
                                    prop:value=move || start.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                            set_start.set(v);
                                            on_trim(index, v, end.get_untracked());
                                        }
                                    }
                                />
                                <label class="text-xs text-gray-500">"End"</label>
                                <input
                                    type="number"
                                    min="0"
                                    max=duration
                                    step="0.1"
                                    class="w-20 px-1 py-0.5 border rounded text-xs"
                                    prop:value=move || end.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                            set_end.set(v);
                                            on_trim(index, start.get_untracked(), v);
                                        }
                                    }
                                />
                            </div>
                        </div>
                    })}
                </div>
                <button
                    type="button"
                    class="text-gray-400 hover:text-red-500"
                    on:click=move |_| on_remove(index)
                >
                    <svg class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M18 6L6 18" />
                        <path d="M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

/// Assemble the multipart payload: description, userId, media files (with
/// cropped blobs substituted), and trim metadata from the first trimmed
/// video
fn build_form(description: &str, user_id: &str, items: &[SelectedMedia]) -> Option<FormData> {
    let form = FormData::new().ok()?;
    form.append_with_str("description", description).ok()?;
    form.append_with_str("userId", user_id).ok()?;

    for item in items {
        match &item.cropped {
            Some(blob) => {
                form.append_with_blob_and_filename("media", blob, &item.file.name())
                    .ok()?;
            }
            None => {
                form.append_with_blob("media", item.file.unchecked_ref())
                    .ok()?;
            }
        }
    }

    if let Some(trim) = items.iter().find_map(|item| item.trim) {
        form.append_with_str("trimStart", &format!("{:.1}", trim.start))
            .ok()?;
        form.append_with_str("trimEnd", &format!("{:.1}", trim.end))
            .ok()?;
    }

    Some(form)
}

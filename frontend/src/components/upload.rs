//! Document upload form.
//!
//! File picker, mode selector and submit button wired to
//! [`submit`](crate::flow::submit). All state sits in one
//! `RwSignal<UploadState<File>>` and only changes through
//! [`UploadState`] transitions.

use leptos::*;
use std::fmt;
use web_sys::{Event, File, HtmlInputElement};

use crate::flow::{submit, UploadState, UploadStore};
use crate::services::HttpAnalysisClient;
use crate::{
    backend_url, is_accepted_file, AnalysisMode, AppError, ResultView, UploadSelection,
    ACCEPTED_FILE_TYPES, NO_FILE_NOTICE,
};

#[component]
pub fn FileUpload() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::default());
    let client = HttpAnalysisClient::new(backend_url());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        log::info!("📄 Selected {}", file.name());
        let selection = UploadSelection::new(file.name(), file);
        state.transition(|s| s.with_selection(selection));
    };

    let on_submit = move |_| {
        let client = client.clone();
        spawn_local(async move {
            if let Err(e) = submit(&client, &state).await {
                log::warn!("⚠️ Submission refused: {}", e);
                notify_refusal(&e, |notice| gloo_utils::window().alert_with_message(notice));
            }
        });
    };

    let is_loading = move || state.with(|s| s.is_loading());
    let selected_name = move || {
        state.with(|s| s.selection.as_ref().map(|selection| selection.name.clone()))
    };

    view! {
        <div class="file-upload-card fade-in">
            <input
                id="fileInput"
                type="file"
                accept=ACCEPTED_FILE_TYPES
                class="file-input"
                on:change=on_file_change
            />

            {move || selected_name().map(|name| view! { <p class="file-name">{selection_note(&name)}</p> })}

            <div class="endpoint-selector">
                {AnalysisMode::SELECTABLE
                    .into_iter()
                    .map(|mode| {
                        let value = mode.as_str().to_string();
                        let label = mode.label().to_string();
                        let checked_mode = mode.clone();
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="endpoint"
                                    value=value
                                    prop:checked=move || state.with(|s| s.mode == checked_mode)
                                    on:change=move |_| {
                                        let mode = mode.clone();
                                        state.transition(|s| s.with_mode(mode));
                                    }
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="btn-submit" on:click=on_submit disabled=is_loading>
                {move || if is_loading() { "Processing..." } else { "Submit for Processing" }}
            </button>

            {move || state.with(|s| s.result.clone()).map(|result| view! { <ResultView result=result/> })}
        </div>
    }
}

/// Blocking notice for a refused submission. A failing alert is logged.
fn notify_refusal<E: fmt::Debug>(err: &AppError, alert: impl FnOnce(&str) -> Result<(), E>) {
    if *err != AppError::NoFileSelected {
        return;
    }
    if let Err(e) = alert(NO_FILE_NOTICE) {
        log::warn!("Could not show notice: {:?}", e);
    }
}

/// Line shown under the picker for the selected file.
fn selection_note(name: &str) -> String {
    if is_accepted_file(name) {
        format!("✅ {} selected", name)
    } else {
        format!("⚠️ {} selected (unlisted file type, the server may reject it)", name)
    }
}

use std::time::Duration;

use leptos::prelude::*;
use qvision_core::Event;
use qvision_core::scan::{self, ScanRequest};
use web_sys::HtmlInputElement;

use crate::sections::{ICON_UPLOAD, Icon};
use crate::store::{Store, stamp};

/// Simulated QPU time before the result is published.
const SCAN_DELAY: Duration = Duration::from_millis(1800);

#[derive(Clone, Debug, PartialEq)]
struct Upload {
    name: String,
    size: u64,
    preview_url: Option<String>,
}

/// File picker plus mock scan. Finishing the scan emits `AnalysisCompleted`.
#[component]
pub fn UploadPage() -> impl IntoView {
    let store = Store::get();
    let upload = RwSignal::new(None::<Upload>);
    let scanning = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
        upload.set(Some(Upload {
            name: file.name(),
            size: file.size() as u64,
            preview_url,
        }));
    };

    let run_scan = move |_| {
        let Some(selected) = upload.get_untracked() else {
            return;
        };
        scanning.set(true);
        set_timeout(
            move || {
                let (id, timestamp) = stamp("QA");
                let seed = scan::seed_for_upload(&selected.name, selected.size);
                let mut request = ScanRequest::new(id, timestamp, seed);
                if let Some(url) = selected.preview_url {
                    request = request.with_image_url(url);
                }
                scanning.set(false);
                store.dispatch(Event::AnalysisCompleted(scan::analyze(&request)));
            },
            SCAN_DELAY,
        );
    };

    view! {
        <section class="upload">
            <header class="page-header">
                <h2>"Quantum Scan"</h2>
                <p class="page-kicker">"Mammogram feature extraction on QPU-07"</p>
            </header>

            <label class="dropzone">
                <Icon path=ICON_UPLOAD size=32 />
                <span>
                    {move || {
                        upload
                            .with(|u| u.as_ref().map(|u| u.name.clone()))
                            .unwrap_or_else(|| "Select a mammogram image".to_string())
                    }}
                </span>
                <input type="file" accept="image/*" on:change=on_file disabled=move || scanning.get() />
            </label>

            {move || {
                upload
                    .with(|u| u.as_ref().and_then(|u| u.preview_url.clone()))
                    .map(|url| view! { <img class="scan-preview" src=url alt="Selected mammogram" /> })
            }}

            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || scanning.get() || upload.with(|u| u.is_none())
                    on:click=run_scan
                >
                    {move || if scanning.get() { "Analyzing..." } else { "Run Quantum Analysis" }}
                </button>
            </div>

            <Show when=move || scanning.get()>
                <div class="scan-progress">
                    <div class="scan-bar"></div>
                    <p>"Encoding pixels into amplitude states..."</p>
                </div>
            </Show>
        </section>
    }
}

//! Report header with title, identifiers and the back action

use leptos::prelude::*;
use qvision_core::ReportKind;

/// Title block shared by both report kinds.
///
/// The "back" link points at `#home`; in the app the same slot emits the
/// back-from-report event.
#[component]
pub fn ReportHeader(kind: ReportKind, id: String, timestamp: String) -> impl IntoView {
    view! {
        <header class="report-header" data-kind=kind.as_str()>
            <div>
                <h1 class="report-title">{kind.title()}</h1>
                <div class="report-meta">
                    "ID " {id} " • " {timestamp}
                </div>
            </div>
            <a class="btn" href="#home" data-view="home">"Back to Dashboard"</a>
        </header>
    }
}

//! Empty state shown when no result exists yet

use leptos::prelude::*;

use super::{ICON_FILE_TEXT, Icon};

/// "No Reports Generated" with links to the survey and upload views.
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">
                <Icon path=ICON_FILE_TEXT size="28" />
            </div>
            <h3>"No Reports Generated"</h3>
            <p>
                "Complete a risk assessment survey or upload a mammogram for analysis "
                "to generate a report."
            </p>
            <div class="empty-actions">
                <a class="btn" href="#survey" data-view="survey">"Go to Survey"</a>
                <a class="btn" href="#upload" data-view="upload">"Upload Scan"</a>
            </div>
        </div>
    }
}

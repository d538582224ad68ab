//! Root document component - the complete HTML page

use leptos::prelude::*;
use qvision_core::ReportData;

use super::{EmptyState, MammogramReport, SurveyReport};
use crate::styles::REPORT_CSS;
use crate::{ReportOptions, VERSION};

/// The complete HTML document for one report (or the empty state).
#[component]
pub fn ReportDocument(data: Option<ReportData>, options: ReportOptions) -> impl IntoView {
    let body = match data {
        Some(ReportData::Survey(result)) => view! { <SurveyReport result=result /> }.into_any(),
        Some(ReportData::Mammogram(analysis)) => view! {
            <MammogramReport analysis=analysis include_heatmap=options.include_heatmap />
        }
        .into_any(),
        None => view! { <EmptyState /> }.into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{options.title}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class="report-page">
                    <nav class="report-nav">
                        <div class="brand-mark"></div>
                        <div>
                            <div class="brand-title">"Q-VISION"</div>
                            <div class="brand-sub">"DIAGNOSTICS"</div>
                        </div>
                    </nav>
                    <main class="container">{body}</main>
                    <footer class="report-footer">
                        {format!("Q-VISION v{VERSION} • Demonstration output, not a medical device")}
                    </footer>
                </div>
            </body>
        </html>
    }
}

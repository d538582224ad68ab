//! # qvision-report
//!
//! Leptos SSR renderer for standalone Q-VISION report pages.
//!
//! The interactive app renders reports in the browser; this crate renders the
//! same selection to a self-contained HTML file, for export and for the
//! `qvision` CLI.
//!
//! ## Quick Start
//!
//! ```rust
//! use qvision_core::{AppState, Event};
//! use qvision_core::types::{Factor, RiskLevel, SurveyResult};
//! use qvision_report::{render_report, ReportOptions};
//!
//! let mut state = AppState::default();
//! state.apply(Event::SurveyCompleted(SurveyResult {
//!     id: "QS-1".into(),
//!     timestamp: "2025-03-01T10:00:00Z".into(),
//!     risk_level: RiskLevel::High,
//!     risk_score: 0.9,
//!     factors: vec![Factor::new("age", "55")],
//! }));
//!
//! let html = render_report(&state, &ReportOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html`; no reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![recursion_limit = "256"]

pub mod components;
pub mod styles;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use qvision_core::{ActiveReport, AppState, ReportData, ReportView};
use serde::{Deserialize, Serialize};

/// Version shown in the report footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Presentation options for a rendered report.
///
/// Deserializable so it can sit directly under a `[report]` table in the CLI
/// config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Document `<title>`.
    pub title: String,
    /// Draw the ZZ-phase heatmap on mammogram reports.
    pub include_heatmap: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Q-VISION Diagnostic Report".into(),
            include_heatmap: true,
        }
    }
}

/// Render the report view for `state`.
///
/// Follows [`AppState::report_view`]: the selected report when one exists,
/// otherwise the empty state with links to the survey and upload views.
pub fn render_report(state: &AppState, options: &ReportOptions) -> String {
    let data = match state.report_view() {
        ReportView::Ready(report) => Some(report.to_data()),
        ReportView::Empty => None,
    };
    render_document(data, options)
}

/// Render a page for an explicit report, bypassing selection.
pub fn render_active(report: ActiveReport<'_>, options: &ReportOptions) -> String {
    render_document(Some(report.to_data()), options)
}

fn render_document(data: Option<ReportData>, options: &ReportOptions) -> String {
    let doc = view! {
        <ReportDocument data=data options=options.clone() />
    };

    // Leptos doesn't emit a DOCTYPE
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qvision_core::Event;
    use qvision_core::types::{
        Factor, Finding, MammogramAnalysis, QuantumMetrics, RiskLevel, SurveyResult,
    };

    fn survey() -> SurveyResult {
        SurveyResult {
            id: "QS-100".into(),
            timestamp: "2025-03-01T10:00:00Z".into(),
            risk_level: RiskLevel::High,
            risk_score: 0.9,
            factors: vec![Factor::new("age", "55")],
        }
    }

    fn analysis() -> MammogramAnalysis {
        MammogramAnalysis {
            id: "QA-200".into(),
            image_url: None,
            risk_score: 0.42,
            risk_level: RiskLevel::Intermediate,
            timestamp: "2025-03-01T11:00:00Z".into(),
            findings: vec![Finding {
                region: "Retroareolar".into(),
                probability: 0.37,
                kind: "Focal asymmetry".into(),
            }],
            quantum_metrics: Some(QuantumMetrics {
                entanglement_entropy: 1.234,
                coherence_time: "87µs".into(),
                circuit_depth: 48,
            }),
            features: Some(vec!["Bell-pair symmetry break".into()]),
            notes: Some("Compare against prior imaging.".into()),
        }
    }

    #[test]
    fn renders_empty_state_without_results() {
        let html = render_report(&AppState::default(), &ReportOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("No Reports Generated"));
        assert!(html.contains("Go to Survey"));
        assert!(html.contains("Upload Scan"));
        assert!(html.contains("href=\"#survey\""));
        assert!(html.contains("href=\"#upload\""));
    }

    #[test]
    fn renders_survey_report() {
        let mut state = AppState::default();
        state.apply(Event::SurveyCompleted(survey()));
        let html = render_report(&state, &ReportOptions::default());

        assert!(html.contains("Risk Assessment Report"));
        assert!(html.contains("data-kind=\"survey\""));
        assert!(html.contains("QS-100"));
        assert!(html.contains("age"));
        assert!(html.contains("55"));
        assert!(html.contains("90%"));
        assert!(html.contains("risk-high"));
        assert!(!html.contains("No Reports Generated"));
    }

    #[test]
    fn renders_latest_completed_kind() {
        let mut state = AppState::default();
        state.apply(Event::SurveyCompleted(survey()));
        state.apply(Event::AnalysisCompleted(analysis()));
        let html = render_report(&state, &ReportOptions::default());

        assert!(html.contains("Quantum Scan Report"));
        assert!(html.contains("data-kind=\"mammogram\""));
        assert!(html.contains("Retroareolar"));
        assert!(html.contains("Focal asymmetry"));
        assert!(html.contains("37%"));
        assert!(html.contains("87µs"));
        assert!(html.contains("Bell-pair symmetry break"));
        assert!(html.contains("Compare against prior imaging."));
        assert!(!html.contains("QS-100"));
    }

    #[test]
    fn heatmap_follows_options() {
        let data = analysis();
        let with = render_active(ActiveReport::Mammogram(&data), &ReportOptions::default());
        assert!(with.contains("class=\"heatmap\""));

        let options = ReportOptions {
            include_heatmap: false,
            ..Default::default()
        };
        let without = render_active(ActiveReport::Mammogram(&data), &options);
        assert!(!without.contains("class=\"heatmap\""));
    }

    #[test]
    fn custom_title() {
        let options = ReportOptions {
            title: "Clinic Export".into(),
            ..Default::default()
        };
        let html = render_report(&AppState::default(), &options);
        assert!(html.contains("<title>"));
        assert!(html.contains("Clinic Export"));
    }

    #[test]
    fn escapes_untrusted_text() {
        let mut data = analysis();
        data.notes = Some("<script>alert(1)</script>".into());
        let html = render_active(ActiveReport::Mammogram(&data), &ReportOptions::default());
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ReportOptions =
            serde_json::from_str(r#"{"include_heatmap": false}"#).expect("options");
        assert_eq!(options.title, ReportOptions::default().title);
        assert!(!options.include_heatmap);
    }
}

//! Leptos UI components for the report page.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── EmptyState                  (no result yet)
//! ├── SurveyReport
//! │   ├── ReportHeader
//! │   ├── RiskGauge
//! │   └── factor table
//! └── MammogramReport
//!     ├── ReportHeader
//!     ├── RiskGauge
//!     ├── findings table
//!     ├── QuantumMetricsPanel
//!     └── HeatmapPreview          (optional)
//! ```
//!
//! Components are normally used through [`crate::render_report`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use qvision_report::components::{RiskBadge, RiskGauge};
//!
//! view! {
//!     <RiskGauge score=0.42 level=RiskLevel::Intermediate />
//!     <RiskBadge level=RiskLevel::Intermediate />
//! }
//! ```

mod document;
mod empty_state;
mod header;
mod heatmap;
mod icons;
mod mammogram;
mod risk_gauge;
mod survey;

pub use document::ReportDocument;
pub use empty_state::EmptyState;
pub use header::ReportHeader;
pub use heatmap::HeatmapPreview;
pub use icons::*;
pub use mammogram::{MammogramReport, QuantumMetricsPanel};
pub use risk_gauge::{RiskBadge, RiskGauge};
pub use survey::SurveyReport;

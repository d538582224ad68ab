//! # qvision-core
//!
//! View-state controller and result model behind the Q-VISION diagnostics
//! shell. Everything here is UI-framework agnostic: the Leptos app, the SSR
//! report renderer and the CLI all drive the same [`AppState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use qvision_core::{AppState, Event, View, reduce};
//! use qvision_core::types::{Factor, ReportKind, RiskLevel, SurveyResult};
//!
//! let state = reduce(AppState::default(), Event::Navigate(View::Survey));
//! let state = reduce(state, Event::SurveyCompleted(SurveyResult {
//!     id: "QS-1".into(),
//!     timestamp: "2025-03-01T10:00:00Z".into(),
//!     risk_level: RiskLevel::High,
//!     risk_score: 0.9,
//!     factors: vec![Factor::new("age", "55")],
//! }));
//!
//! assert_eq!(state.current_view(), View::Report);
//! let report = state.select_active_report().unwrap();
//! assert_eq!(report.kind(), ReportKind::Survey);
//! ```
//!
//! ## Modules
//!
//! - [`types`] - survey and mammogram result records
//! - [`state`] - the controller: views, events, report selection
//! - [`session`] - JSON event logs and replay
//! - [`survey`] / [`scan`] - mock producers for the two result kinds
//! - [`visuals`] - geometry for the decorative visual components

pub mod error;
pub mod scan;
pub mod session;
pub mod state;
pub mod survey;
pub mod types;
pub mod visuals;

pub use error::{Error, Result};
pub use session::Session;
pub use state::{AppState, Event, NavEntry, ReportView, View, reduce};
pub use types::{ActiveReport, ReportData, ReportKind};

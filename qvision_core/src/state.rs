//! Application view-state controller.
//!
//! [`AppState`] is the single owner of navigation, the two result slots and
//! the shell toggles. Every transition goes through [`Event`], either in place
//! via [`AppState::apply`] or as a pure fold via [`reduce`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::types::{ActiveReport, MammogramAnalysis, ReportKind, SurveyResult};

/// The five views of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Survey,
    Upload,
    Report,
    Lab,
}

impl View {
    pub const ALL: [View; 5] = [View::Home, View::Survey, View::Upload, View::Report, View::Lab];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Dashboard",
            View::Survey => "Risk Assessment",
            View::Upload => "Quantum Scan",
            View::Report => "Analysis Report",
            View::Lab => "Q-Lab Monitor",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Survey => "survey",
            View::Upload => "upload",
            View::Report => "report",
            View::Lab => "lab",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

/// Everything that can change [`AppState`].
///
/// Serialized as `{"event": "navigate", "payload": "lab"}` so recorded
/// sessions can be replayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum Event {
    Navigate(View),
    SurveyCompleted(SurveyResult),
    AnalysisCompleted(MammogramAnalysis),
    ToggleSidebar,
    ToggleMobileMenu,
    /// The report renderer's back action.
    BackFromReport,
}

/// One entry of the navigation surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub view: View,
    pub label: &'static str,
    pub active: bool,
}

/// What the report view should show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportView<'a> {
    /// No result yet; offer navigation to survey and upload.
    Empty,
    Ready(ActiveReport<'a>),
}

/// State owned by the shell.
///
/// Fields are read through accessors; mutation happens only through events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    current_view: View,
    survey_result: Option<SurveyResult>,
    analysis_result: Option<MammogramAnalysis>,
    last_completed: ReportKind,
    sidebar_collapsed: bool,
    mobile_menu_open: bool,
}

/// Pure transition: `(state, event) -> state`.
pub fn reduce(mut state: AppState, event: Event) -> AppState {
    state.apply(event);
    state
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Navigate(view) => self.navigate_to(view),
            Event::SurveyCompleted(result) => self.on_survey_completed(result),
            Event::AnalysisCompleted(result) => self.on_analysis_completed(result),
            Event::ToggleSidebar => self.toggle_sidebar(),
            Event::ToggleMobileMenu => self.toggle_mobile_menu(),
            Event::BackFromReport => self.navigate_to(View::Home),
        }
    }

    /// Store a finished questionnaire and open its report.
    ///
    /// Overwrites any previous survey result; the analysis slot is untouched.
    pub fn on_survey_completed(&mut self, result: SurveyResult) {
        debug!(
            id = %result.id,
            risk = %result.risk_level,
            replaced = self.survey_result.is_some(),
            "survey completed"
        );
        self.survey_result = Some(result);
        self.last_completed = ReportKind::Survey;
        self.current_view = View::Report;
    }

    /// Store a finished scan and open its report.
    pub fn on_analysis_completed(&mut self, result: MammogramAnalysis) {
        debug!(
            id = %result.id,
            risk = %result.risk_level,
            findings = result.findings.len(),
            replaced = self.analysis_result.is_some(),
            "analysis completed"
        );
        self.analysis_result = Some(result);
        self.last_completed = ReportKind::Mammogram;
        self.current_view = View::Report;
    }

    /// Switch views. No guard for `Report`: an empty report view is a defined state.
    pub fn navigate_to(&mut self, view: View) {
        debug!(from = %self.current_view, to = %view, "navigate");
        self.current_view = view;
        self.mobile_menu_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        debug!(collapsed = self.sidebar_collapsed, "sidebar toggled");
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
    }

    /// Pick the report to show.
    ///
    /// The slot named by `last_completed` wins if present. Otherwise survey is
    /// checked before mammogram, regardless of which finished more recently.
    /// Keep this order: it is observable behavior.
    pub fn select_active_report(&self) -> Option<ActiveReport<'_>> {
        let preferred = match self.last_completed {
            ReportKind::Survey => self.survey_result.as_ref().map(ActiveReport::Survey),
            ReportKind::Mammogram => self.analysis_result.as_ref().map(ActiveReport::Mammogram),
        };

        preferred
            .or_else(|| self.survey_result.as_ref().map(ActiveReport::Survey))
            .or_else(|| self.analysis_result.as_ref().map(ActiveReport::Mammogram))
    }

    pub fn report_view(&self) -> ReportView<'_> {
        match self.select_active_report() {
            Some(report) => ReportView::Ready(report),
            None => ReportView::Empty,
        }
    }

    pub fn has_results(&self) -> bool {
        self.survey_result.is_some() || self.analysis_result.is_some()
    }

    /// Entries for the navigation surface; `Report` only once a result exists.
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        [View::Home, View::Survey, View::Upload, View::Lab, View::Report]
            .into_iter()
            .filter(|view| *view != View::Report || self.has_results())
            .map(|view| NavEntry {
                view,
                label: view.label(),
                active: view == self.current_view,
            })
            .collect()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn survey_result(&self) -> Option<&SurveyResult> {
        self.survey_result.as_ref()
    }

    pub fn analysis_result(&self) -> Option<&MammogramAnalysis> {
        self.analysis_result.as_ref()
    }

    pub fn last_completed(&self) -> ReportKind {
        self.last_completed
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Factor, RiskLevel};
    use pretty_assertions::assert_eq;

    fn survey(id: &str) -> SurveyResult {
        SurveyResult {
            id: id.into(),
            timestamp: "2025-03-01T10:00:00Z".into(),
            risk_level: RiskLevel::High,
            risk_score: 0.9,
            factors: vec![Factor::new("age", "55")],
        }
    }

    fn analysis(id: &str) -> MammogramAnalysis {
        MammogramAnalysis {
            id: id.into(),
            risk_score: 0.4,
            risk_level: RiskLevel::Intermediate,
            timestamp: "2025-03-01T11:00:00Z".into(),
            ..Default::default()
        }
    }

    #[test]
    fn fresh_state() {
        let state = AppState::new();
        assert_eq!(state.current_view(), View::Home);
        assert_eq!(state.survey_result(), None);
        assert_eq!(state.analysis_result(), None);
        assert_eq!(state.last_completed(), ReportKind::Survey);
        assert!(!state.sidebar_collapsed());
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn survey_completion_opens_report() {
        let prior = reduce(AppState::new(), Event::AnalysisCompleted(analysis("QA-1")));
        let state = reduce(prior.clone(), Event::SurveyCompleted(survey("QS-1")));

        assert_eq!(state.current_view(), View::Report);
        assert_eq!(state.survey_result(), Some(&survey("QS-1")));
        assert_eq!(state.last_completed(), ReportKind::Survey);
        assert_eq!(state.analysis_result(), prior.analysis_result());
    }

    #[test]
    fn analysis_completion_opens_report() {
        let prior = reduce(AppState::new(), Event::SurveyCompleted(survey("QS-1")));
        let state = reduce(prior.clone(), Event::AnalysisCompleted(analysis("QA-1")));

        assert_eq!(state.current_view(), View::Report);
        assert_eq!(state.analysis_result(), Some(&analysis("QA-1")));
        assert_eq!(state.last_completed(), ReportKind::Mammogram);
        assert_eq!(state.survey_result(), prior.survey_result());
    }

    #[test]
    fn second_survey_replaces_first() {
        let mut state = AppState::new();
        state.on_survey_completed(survey("QS-1"));
        state.on_survey_completed(survey("QS-2"));
        assert_eq!(state.survey_result().map(|r| r.id.as_str()), Some("QS-2"));
    }

    #[test]
    fn nothing_selected_without_results() {
        let state = AppState::new();
        assert_eq!(state.select_active_report(), None);
        assert_eq!(state.report_view(), ReportView::Empty);
    }

    #[test]
    fn falls_back_to_analysis_when_survey_slot_is_empty() {
        let mut state = AppState::new();
        state.on_analysis_completed(analysis("QA-1"));
        // Force the preferred kind back to survey while its slot stays empty.
        state.last_completed = ReportKind::Survey;

        let selected = state.select_active_report().expect("fallback");
        assert_eq!(selected.kind(), ReportKind::Mammogram);
        assert_eq!(selected.id(), "QA-1");
    }

    #[test]
    fn fallback_checks_survey_before_mammogram() {
        let mut state = AppState::new();
        state.on_analysis_completed(analysis("QA-1"));
        state.on_survey_completed(survey("QS-1"));
        state.analysis_result = None;
        state.last_completed = ReportKind::Mammogram;

        let selected = state.select_active_report().expect("fallback");
        assert_eq!(selected.kind(), ReportKind::Survey);
    }

    #[test]
    fn preferred_kind_wins_when_both_present() {
        let mut state = AppState::new();
        state.on_survey_completed(survey("QS-1"));
        state.on_analysis_completed(analysis("QA-1"));

        let selected = state.select_active_report().expect("selected");
        assert_eq!(selected, ActiveReport::Mammogram(&analysis("QA-1")));

        state.on_survey_completed(survey("QS-2"));
        let selected = state.select_active_report().expect("selected");
        assert_eq!(selected.kind(), ReportKind::Survey);
        assert_eq!(selected.id(), "QS-2");
    }

    #[test]
    fn navigate_to_report_without_results_is_empty_state() {
        let state = reduce(AppState::new(), Event::Navigate(View::Report));
        assert_eq!(state.current_view(), View::Report);
        assert_eq!(state.report_view(), ReportView::Empty);
    }

    #[test]
    fn completed_survey_is_rendered_as_survey_report() {
        let state = reduce(AppState::new(), Event::SurveyCompleted(survey("QS-1")));
        assert_eq!(state.current_view(), View::Report);
        match state.report_view() {
            ReportView::Ready(ActiveReport::Survey(result)) => {
                assert_eq!(result.risk_level, RiskLevel::High);
                assert_eq!(result.risk_score, 0.9);
                assert_eq!(result.factors, vec![Factor::new("age", "55")]);
            }
            other => panic!("expected survey report, got {other:?}"),
        }
    }

    #[test]
    fn back_from_report_goes_home() {
        let state = [
            Event::SurveyCompleted(survey("QS-1")),
            Event::BackFromReport,
        ]
        .into_iter()
        .fold(AppState::new(), reduce);
        assert_eq!(state.current_view(), View::Home);
        assert!(state.survey_result().is_some());
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let state = [Event::ToggleMobileMenu, Event::Navigate(View::Lab)]
            .into_iter()
            .fold(AppState::new(), reduce);
        assert!(!state.mobile_menu_open());
        assert_eq!(state.current_view(), View::Lab);
    }

    #[test]
    fn toggles_flip() {
        let mut state = AppState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed());
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open());
    }

    #[test]
    fn report_entry_hidden_until_a_result_exists() {
        let state = AppState::new();
        let views: Vec<View> = state.nav_entries().iter().map(|e| e.view).collect();
        assert_eq!(views, vec![View::Home, View::Survey, View::Upload, View::Lab]);

        let state = reduce(state, Event::AnalysisCompleted(analysis("QA-1")));
        let entries = state.nav_entries();
        assert_eq!(entries.last().map(|e| e.view), Some(View::Report));
        assert!(entries.last().is_some_and(|e| e.active));
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn view_parses_from_slug() {
        assert_eq!("lab".parse::<View>().ok(), Some(View::Lab));
        assert_eq!(" Report ".parse::<View>().ok(), Some(View::Report));
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn events_round_trip_through_json() {
        let json = r#"{"event":"navigate","payload":"upload"}"#;
        let event: Event = serde_json::from_str(json).expect("event");
        assert_eq!(event, Event::Navigate(View::Upload));

        let toggle: Event = serde_json::from_str(r#"{"event":"toggle_sidebar"}"#).expect("toggle");
        assert_eq!(toggle, Event::ToggleSidebar);
    }
}

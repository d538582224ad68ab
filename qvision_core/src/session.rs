//! Recorded event sessions.
//!
//! A session file is either a bare JSON array of events or an object with an
//! `events` array. Replaying folds the events through [`reduce`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::{AppState, Event, reduce};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub events: Vec<Event>,
}

impl Session {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse a session. Nothing is replayed if any event fails to parse.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim_start().starts_with('[') {
            let events: Vec<Event> = serde_json::from_str(json).map_err(Error::SessionParse)?;
            Ok(Self { events })
        } else {
            serde_json::from_str(json).map_err(Error::SessionParse)
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::SessionSerialize)
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Replay from a fresh [`AppState`].
    pub fn replay(&self) -> AppState {
        self.replay_onto(AppState::default())
    }

    pub fn replay_onto(&self, state: AppState) -> AppState {
        let state = self.events.iter().cloned().fold(state, reduce);
        tracing::debug!(
            events = self.events.len(),
            view = %state.current_view(),
            "session replayed"
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;
    use crate::types::ReportKind;

    const SURVEY_THEN_SCAN: &str = r#"{
        "events": [
            {"event": "survey_completed", "payload": {
                "id": "QS-1", "date": "2025-03-01", "riskLevel": "High",
                "riskScore": 0.9, "factors": [{"name": "age", "value": "55"}]
            }},
            {"event": "analysis_completed", "payload": {
                "id": "QA-1", "riskScore": 0.35, "riskLevel": "Intermediate",
                "timestamp": "2025-03-01T12:00:00Z", "findings": []
            }}
        ]
    }"#;

    #[test]
    fn parses_wrapped_session() {
        let session = Session::from_json(SURVEY_THEN_SCAN).expect("session");
        assert_eq!(session.len(), 2);

        let state = session.replay();
        assert_eq!(state.current_view(), View::Report);
        assert_eq!(state.last_completed(), ReportKind::Mammogram);
        let selected = state.select_active_report().expect("report");
        assert_eq!(selected.id(), "QA-1");
    }

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"event": "navigate", "payload": "lab"}, {"event": "toggle_sidebar"}]"#;
        let state = Session::from_json(json).expect("session").replay();
        assert_eq!(state.current_view(), View::Lab);
        assert!(state.sidebar_collapsed());
    }

    #[test]
    fn rejects_unknown_event() {
        let json = r#"[{"event": "navigate", "payload": "home"}, {"event": "teleport"}]"#;
        let err = Session::from_json(json).unwrap_err();
        assert!(matches!(err, Error::SessionParse(_)));
    }

    #[test]
    fn replay_onto_continues_existing_state() {
        let first = Session::from_json(SURVEY_THEN_SCAN).expect("session").replay();
        let more = Session::new(vec![Event::BackFromReport]);
        let state = more.replay_onto(first);
        assert_eq!(state.current_view(), View::Home);
        assert!(state.has_results());
    }

    #[test]
    fn empty_session_is_fresh_state() {
        let session = Session::from_json("[]").expect("session");
        assert!(session.is_empty());
        assert_eq!(session.replay(), AppState::default());
    }

    #[test]
    fn pretty_json_parses_back() {
        let mut session = Session::default();
        session.push(Event::Navigate(View::Upload));
        session.push(Event::ToggleMobileMenu);
        let json = session.to_json_pretty().expect("json");
        assert_eq!(Session::from_json(&json).expect("parse"), session);
    }
}

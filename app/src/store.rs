//! Shared app state.
//!
//! One `RwSignal<AppState>` lives in context. Components read it freely but
//! only change it through [`Store::dispatch`], which runs the core reducer.

use leptos::prelude::*;
use qvision_core::{AppState, Event};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy)]
pub struct Store(RwSignal<AppState>);

impl Store {
    /// Create the store and put it in context. Call once, from the root.
    pub fn provide() -> Self {
        let store = Self(RwSignal::new(AppState::new()));
        provide_context(store);
        store
    }

    pub fn get() -> Self {
        expect_context::<Store>()
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.0
    }

    pub fn dispatch(&self, event: Event) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[qvision] {}", describe(&event))));
        self.0.update(|state| state.apply(event));
    }
}

fn describe(event: &Event) -> String {
    match event {
        Event::Navigate(view) => format!("navigate -> {view}"),
        Event::SurveyCompleted(result) => {
            format!("survey completed {} ({})", result.id, result.risk_level)
        }
        Event::AnalysisCompleted(result) => {
            format!("analysis completed {} ({})", result.id, result.risk_level)
        }
        Event::ToggleSidebar => "toggle sidebar".into(),
        Event::ToggleMobileMenu => "toggle mobile menu".into(),
        Event::BackFromReport => "back from report".into(),
    }
}

/// Current time as ISO-8601, and a short id with the given prefix.
pub fn stamp(prefix: &str) -> (String, String) {
    let now = js_sys::Date::new_0();
    let timestamp: String = now.to_iso_string().into();
    let id = format!("{prefix}-{}", (now.get_time() as u64) % 1_000_000);
    (id, timestamp)
}

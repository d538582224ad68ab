//! Render a survey report page to disk.
//!
//! Run with: `cargo run -p qvision-report --example survey_report`

use qvision_core::survey::{Answers, Questionnaire};
use qvision_core::{AppState, Event};
use qvision_report::{ReportOptions, render_report};

fn main() {
    let questionnaire = Questionnaire::standard();
    let mut answers = Answers::for_questionnaire(&questionnaire);
    for (idx, question) in questionnaire.questions().iter().enumerate() {
        // Middle option of every question
        answers.answer(idx, question.choices.len() / 2);
    }

    let result = questionnaire
        .evaluate(&answers, "QS-DEMO", "2025-03-01T10:00:00Z")
        .expect("every question answered");

    let mut state = AppState::default();
    state.apply(Event::SurveyCompleted(result));

    let html = render_report(&state, &ReportOptions::default());

    let output_path = "survey_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}

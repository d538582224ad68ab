//! Report view: the selected result, or an empty state.
//!
//! Selection is the controller's [`AppState::report_view`]; this page only
//! renders what it returns.
//!
//! [`AppState::report_view`]: qvision_core::AppState::report_view

use leptos::prelude::*;
use qvision_core::types::{Factor, Finding, MammogramAnalysis, QuantumMetrics, RiskLevel};
use qvision_core::visuals::percent;
use qvision_core::{Event, ReportData, ReportView, View};

use crate::sections::{HeatmapPreview, ICON_ARROW_LEFT, ICON_FILE_TEXT, Icon};
use crate::store::Store;

#[component]
pub fn ReportPage() -> impl IntoView {
    let state = Store::get().state();

    move || {
        let data = state.with(|s| match s.report_view() {
            ReportView::Ready(report) => Some(report.to_data()),
            ReportView::Empty => None,
        });
        match data {
            Some(data) => view! { <SelectedReport data=data /> }.into_any(),
            None => view! { <EmptyReport /> }.into_any(),
        }
    }
}

#[component]
fn EmptyReport() -> impl IntoView {
    let store = Store::get();

    view! {
        <div class="empty-state">
            <div class="empty-icon">
                <Icon path=ICON_FILE_TEXT />
            </div>
            <h3>"No Reports Generated"</h3>
            <p>
                "Complete a risk assessment survey or upload a mammogram for analysis "
                "to generate a report."
            </p>
            <div class="empty-actions">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| store.dispatch(Event::Navigate(View::Survey))
                >
                    "Go to Survey"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| store.dispatch(Event::Navigate(View::Upload))
                >
                    "Upload Scan"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SelectedReport(data: ReportData) -> impl IntoView {
    let store = Store::get();
    let kind = data.kind();
    let (id, timestamp, score, level) = {
        let active = data.as_active();
        (
            active.id().to_string(),
            active.timestamp().to_string(),
            active.risk_score(),
            active.risk_level(),
        )
    };

    let body = match data {
        ReportData::Survey(result) => view! { <FactorTable factors=result.factors /> }.into_any(),
        ReportData::Mammogram(analysis) => view! { <ScanDetails analysis=analysis /> }.into_any(),
    };

    view! {
        <section class="report" data-kind=kind.as_str()>
            <header class="report-header">
                <button class="btn btn-ghost" on:click=move |_| store.dispatch(Event::BackFromReport)>
                    <Icon path=ICON_ARROW_LEFT size=16 />
                    "Back"
                </button>
                <div>
                    <h2>{kind.title()}</h2>
                    <p class="report-meta">{format!("{id} • {timestamp}")}</p>
                </div>
            </header>
            <div class="report-grid">
                <div class="card">
                    <ScoreDial score=score level=level />
                </div>
                <div class="report-body">{body}</div>
            </div>
        </section>
    }
}

#[component]
fn ScoreDial(score: f64, level: RiskLevel) -> impl IntoView {
    let pct = percent(score);
    let circumference = 2.0 * std::f64::consts::PI * 50.0;
    let offset = circumference * (1.0 - f64::from(pct) / 100.0);

    view! {
        <div class=format!("score-dial {}", level.css_class())>
            <svg viewBox="0 0 120 120" width="160" height="160">
                <circle cx="60" cy="60" r="50" class="dial-track" />
                <circle
                    cx="60"
                    cy="60"
                    r="50"
                    class="dial-arc"
                    stroke-dasharray=format!("{circumference:.2}")
                    stroke-dashoffset=format!("{offset:.2}")
                    transform="rotate(-90 60 60)"
                />
                <text x="60" y="64" text-anchor="middle" class="dial-value">
                    {format!("{pct}%")}
                </text>
            </svg>
            <span class="risk-badge">{level.label()}</span>
        </div>
    }
}

#[component]
fn FactorTable(factors: Vec<Factor>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Contributing Factors"</h3>
            <table>
                <tbody>
                    {factors
                        .into_iter()
                        .map(|f| view! { <tr><td>{f.name}</td><td>{f.value}</td></tr> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ScanDetails(analysis: MammogramAnalysis) -> impl IntoView {
    let MammogramAnalysis {
        image_url,
        risk_score,
        findings,
        quantum_metrics,
        features,
        notes,
        ..
    } = analysis;

    view! {
        {image_url.map(|url| view! {
            <div class="card">
                <img class="scan-preview" src=url alt="Analyzed mammogram" />
            </div>
        })}
        <div class="card">
            <h3>"Findings"</h3>
            <FindingRows findings=findings />
        </div>
        {quantum_metrics.map(|metrics| view! { <MetricTiles metrics=metrics /> })}
        {features.map(|features| view! {
            <div class="card">
                <h3>"Extracted Features"</h3>
                <ul class="feature-list">
                    {features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        })}
        {notes.map(|notes| view! {
            <div class="card notes">
                <h3>"Notes"</h3>
                <p>{notes}</p>
            </div>
        })}
        <div class="card">
            <h3>"ZZ-Phase Correlation"</h3>
            <HeatmapPreview risk=risk_score />
        </div>
    }
}

#[component]
fn FindingRows(findings: Vec<Finding>) -> impl IntoView {
    if findings.is_empty() {
        return view! { <p class="report-meta">"No findings above threshold."</p> }.into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Region"</th>
                    <th>"Type"</th>
                    <th>"Probability"</th>
                </tr>
            </thead>
            <tbody>
                {findings
                    .into_iter()
                    .map(|f| {
                        view! {
                            <tr>
                                <td>{f.region}</td>
                                <td>{f.kind}</td>
                                <td>{format!("{}%", percent(f.probability))}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn MetricTiles(metrics: QuantumMetrics) -> impl IntoView {
    view! {
        <div class="card metrics">
            <div>
                <div class="metric-label">"Entanglement Entropy"</div>
                <div class="metric-value">{format!("{:.3}", metrics.entanglement_entropy)}</div>
            </div>
            <div>
                <div class="metric-label">"Coherence Time"</div>
                <div class="metric-value">{metrics.coherence_time}</div>
            </div>
            <div>
                <div class="metric-label">"Circuit Depth"</div>
                <div class="metric-value">{metrics.circuit_depth.to_string()}</div>
            </div>
        </div>
    }
}

//! Quantum scan (mammogram) report

use leptos::prelude::*;
use qvision_core::ReportKind;
use qvision_core::types::{Finding, MammogramAnalysis, QuantumMetrics};
use qvision_core::visuals::percent;

use super::{HeatmapPreview, ICON_GRAPH, ICON_WARNING_CIRCLE, Icon, ReportHeader, RiskGauge};

/// Full report body for a [`MammogramAnalysis`].
#[component]
pub fn MammogramReport(
    /// The analysis to present
    analysis: MammogramAnalysis,
    /// Draw the correlation heatmap
    #[prop(default = true)]
    include_heatmap: bool,
) -> impl IntoView {
    let MammogramAnalysis {
        id,
        image_url,
        risk_score,
        risk_level,
        timestamp,
        findings,
        quantum_metrics,
        features,
        notes,
    } = analysis;

    view! {
        <ReportHeader kind=ReportKind::Mammogram id=id timestamp=timestamp />
        <div class="report-grid">
            <div>
                <div class="panel">
                    <RiskGauge score=risk_score level=risk_level />
                </div>
                {image_url.map(|url| view! {
                    <div class="panel">
                        <img class="scan-image" src=url alt="Uploaded mammogram" />
                    </div>
                })}
            </div>
            <div>
                <div class="panel">
                    <h3>"Findings"</h3>
                    <FindingsTable findings=findings />
                </div>
                {quantum_metrics.map(|metrics| view! { <QuantumMetricsPanel metrics=metrics /> })}
                {features.filter(|f| !f.is_empty()).map(|features| view! {
                    <div class="panel">
                        <h3><Icon path=ICON_GRAPH size="14" /> " Extracted Features"</h3>
                        <ul class="feature-list">
                            {features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })}
                {notes.map(|notes| view! {
                    <div class="panel">
                        <h3><Icon path=ICON_WARNING_CIRCLE size="14" /> " Notes"</h3>
                        <p>{notes}</p>
                    </div>
                })}
                {include_heatmap.then(|| view! {
                    <div class="panel">
                        <h3>"ZZ-Phase Correlation"</h3>
                        <HeatmapPreview risk=risk_score />
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn FindingsTable(findings: Vec<Finding>) -> impl IntoView {
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
                    .map(|finding| {
                        let pct = percent(finding.probability);
                        view! {
                            <tr>
                                <td>{finding.region}</td>
                                <td>{finding.kind}</td>
                                <td>
                                    {format!("{pct}%")}
                                    <div class="probability-bar">
                                        <div
                                            class="probability-fill"
                                            style=format!("width: {pct}%")
                                        ></div>
                                    </div>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Entropy, coherence time and circuit depth tiles.
#[component]
pub fn QuantumMetricsPanel(metrics: QuantumMetrics) -> impl IntoView {
    view! {
        <div class="panel">
            <h3>"Quantum Metrics"</h3>
            <div class="metrics">
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
        </div>
    }
}

//! Risk-assessment (survey) report

use leptos::prelude::*;
use qvision_core::ReportKind;
use qvision_core::types::SurveyResult;

use super::{ReportHeader, RiskGauge};

/// Full report body for a [`SurveyResult`].
#[component]
pub fn SurveyReport(result: SurveyResult) -> impl IntoView {
    let SurveyResult {
        id,
        timestamp,
        risk_level,
        risk_score,
        factors,
    } = result;

    view! {
        <ReportHeader kind=ReportKind::Survey id=id timestamp=timestamp />
        <div class="report-grid">
            <div class="panel">
                <RiskGauge score=risk_score level=risk_level />
            </div>
            <div class="panel">
                <h3>"Contributing Factors"</h3>
                {if factors.is_empty() {
                    view! { <p class="report-meta">"No factors recorded."</p> }.into_any()
                } else {
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Factor"</th>
                                    <th>"Response"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {factors
                                    .into_iter()
                                    .map(|factor| {
                                        view! {
                                            <tr>
                                                <td>{factor.name}</td>
                                                <td>{factor.value}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}

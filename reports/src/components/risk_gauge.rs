//! Risk score gauge and badge - circular SVG visualization

use leptos::prelude::*;
use qvision_core::types::RiskLevel;
use qvision_core::visuals::percent;

fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "#10b981",
        RiskLevel::Intermediate => "#eab308",
        RiskLevel::Elevated => "#f97316",
        RiskLevel::High => "#ef4444",
    }
}

/// Circular gauge showing the risk score as a percentage.
///
/// Arc color follows `level`, not `score`.
#[component]
pub fn RiskGauge(score: f64, level: RiskLevel) -> impl IntoView {
    let pct = percent(score);
    let color = level_color(level);

    // Circle parameters: center (60,60), radius 50
    let radius = 50.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let dash_offset = circumference - (f64::from(pct) / 100.0) * circumference;

    view! {
        <div class="risk-gauge">
            <svg viewBox="0 0 120 120" width="160" height="160">
                <circle
                    cx="60"
                    cy="60"
                    r=radius.to_string()
                    fill="none"
                    stroke="#1e293b"
                    stroke-width="10"
                />
                <circle
                    cx="60"
                    cy="60"
                    r=radius.to_string()
                    fill="none"
                    stroke=color
                    stroke-width="10"
                    stroke-linecap="round"
                    stroke-dasharray=circumference.to_string()
                    stroke-dashoffset=dash_offset.to_string()
                    transform="rotate(-90 60 60)"
                />
                <text
                    x="60"
                    y="56"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    fill=color
                    font-size="28"
                    font-weight="700"
                    font-family="system-ui, sans-serif"
                >
                    {format!("{pct}%")}
                </text>
                <text
                    x="60"
                    y="80"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    fill="#94a3b8"
                    font-size="10"
                    font-family="monospace"
                >
                    "RISK"
                </text>
            </svg>
            <div class="gauge-caption">
                <RiskBadge level=level />
            </div>
        </div>
    }
}

/// Pill showing the risk level name.
#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
    view! {
        <span class=format!("risk-badge {}", level.css_class())>{level.label()}</span>
    }
}

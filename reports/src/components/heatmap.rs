//! ZZ-phase correlation heatmap - decorative SVG grid driven by a risk scalar

use leptos::prelude::*;
use qvision_core::visuals::{heat_rgba, heatmap_cells};

const CELL: f64 = 10.0;

/// Heatmap grid; stateless, a pure function of `risk`.
#[component]
pub fn HeatmapPreview(
    /// Risk scalar, nominally 0-1
    risk: f64,
    /// Grid rows
    #[prop(default = 8)]
    rows: usize,
    /// Grid columns
    #[prop(default = 16)]
    cols: usize,
) -> impl IntoView {
    let cells = heatmap_cells(risk, rows, cols);
    let width = cols as f64 * CELL;
    let height = rows as f64 * CELL;

    view! {
        <svg
            class="heatmap"
            viewBox=format!("0 0 {width} {height}")
            preserveAspectRatio="none"
            role="img"
            aria-label="ZZ-phase correlation heatmap"
        >
            {cells
                .into_iter()
                .enumerate()
                .map(|(idx, intensity)| {
                    let x = (idx % cols.max(1)) as f64 * CELL;
                    let y = (idx / cols.max(1)) as f64 * CELL;
                    view! {
                        <rect
                            x=x.to_string()
                            y=y.to_string()
                            width="9.5"
                            height="9.5"
                            rx="1.5"
                            fill=heat_rgba(intensity)
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

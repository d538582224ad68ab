//! Decorative "quantum" visuals for the home and lab views.
//!
//! Geometry comes from `qvision_core::visuals`; these components only scale it
//! into SVG.

use leptos::prelude::*;
use qvision_core::visuals::{
    bloch_vector, energy_landscape, entanglement_links, heat_rgba, heatmap_cells,
};

/// Bloch sphere with a fixed state vector.
#[component]
pub fn BlochSphere(
    #[prop(default = 0.9)] theta: f64,
    #[prop(default = 0.6)] phi: f64,
) -> impl IntoView {
    let (x, y) = bloch_vector(theta, phi);
    // Sphere of radius 80 centered at (100, 100); SVG y grows downward.
    let tip_x = 100.0 + 80.0 * x;
    let tip_y = 100.0 - 80.0 * y;

    view! {
        <svg class="bloch" viewBox="0 0 200 200" role="img" aria-label="Bloch sphere">
            <circle cx="100" cy="100" r="80" class="bloch-shell" />
            <ellipse cx="100" cy="100" rx="80" ry="22" class="bloch-equator" />
            <line x1="100" y1="15" x2="100" y2="185" class="bloch-axis" />
            <text x="106" y="16" class="bloch-label">"|0⟩"</text>
            <text x="106" y="196" class="bloch-label">"|1⟩"</text>
            <line
                x1="100"
                y1="100"
                x2=format!("{tip_x:.1}")
                y2=format!("{tip_y:.1}")
                class="bloch-vector"
            />
            <circle cx=format!("{tip_x:.1}") cy=format!("{tip_y:.1}") r="4" class="bloch-tip" />
        </svg>
    }
}

#[component]
pub fn EnergyLandscape(#[prop(default = 64)] samples: usize) -> impl IntoView {
    let points = energy_landscape(samples)
        .into_iter()
        .map(|(x, y)| format!("{:.1},{:.1}", 10.0 + x * 280.0, 10.0 + y * 130.0))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <svg class="energy" viewBox="0 0 300 150" preserveAspectRatio="none" role="img"
            aria-label="Hamiltonian energy landscape">
            <line x1="10" y1="140" x2="290" y2="140" class="energy-axis" />
            <polyline points=points class="energy-curve" />
        </svg>
    }
}

#[component]
pub fn EntanglementMap(#[prop(default = 8)] qubits: usize) -> impl IntoView {
    let graph = entanglement_links(qubits);
    let scale = |(x, y): (f64, f64)| (x * 200.0, y * 200.0);

    let links = graph
        .links
        .iter()
        .map(|&(a, b)| {
            let (x1, y1) = scale(graph.nodes[a]);
            let (x2, y2) = scale(graph.nodes[b]);
            view! {
                <line
                    x1=format!("{x1:.1}")
                    y1=format!("{y1:.1}")
                    x2=format!("{x2:.1}")
                    y2=format!("{y2:.1}")
                    class="entangle-link"
                />
            }
        })
        .collect::<Vec<_>>();

    let nodes = graph
        .nodes
        .iter()
        .map(|&node| {
            let (cx, cy) = scale(node);
            view! { <circle cx=format!("{cx:.1}") cy=format!("{cy:.1}") r="6" class="entangle-node" /> }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="entangle" viewBox="0 0 200 200" role="img" aria-label="Entanglement map">
            {links}
            {nodes}
        </svg>
    }
}

#[component]
pub fn HeatmapPreview(
    risk: f64,
    #[prop(default = 8)] rows: usize,
    #[prop(default = 16)] cols: usize,
) -> impl IntoView {
    let cols = cols.max(1);
    let cells = heatmap_cells(risk, rows, cols)
        .into_iter()
        .enumerate()
        .map(|(idx, intensity)| {
            let x = (idx % cols) * 10;
            let y = (idx / cols) * 10;
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
        .collect::<Vec<_>>();

    view! {
        <svg
            class="heatmap"
            viewBox=format!("0 0 {} {}", cols * 10, rows * 10)
            preserveAspectRatio="none"
            role="img"
            aria-label="ZZ-phase correlation heatmap"
        >
            {cells}
        </svg>
    }
}

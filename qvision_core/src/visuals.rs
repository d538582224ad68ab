//! Geometry for the decorative "quantum" visuals.
//!
//! Stateless helpers: given a scalar, return shapes in unit coordinates.
//! Renderers scale them to their own viewBox. Nothing here is a simulation.

use std::f64::consts::{PI, TAU};

/// Normalized hotspot center of the heatmap.
const HOTSPOT: (f64, f64) = (0.62, 0.38);

fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Row-major cell intensities in `[0, 1]`.
///
/// A background ripple plus a gaussian hotspot whose height is `risk`, so the
/// hottest cell tracks the risk score.
pub fn heatmap_cells(risk: f64, rows: usize, cols: usize) -> Vec<f64> {
    let risk = unit(risk);
    let mut cells = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let y = (row as f64 + 0.5) / rows as f64;
            let x = (col as f64 + 0.5) / cols as f64;
            let d2 = (x - HOTSPOT.0).powi(2) + (y - HOTSPOT.1).powi(2);
            let hotspot = risk * (-d2 / 0.02).exp();
            let ripple = 0.08 * (1.0 + (x * 9.0 * PI).sin() * (y * 7.0 * PI).cos()) / 2.0;
            cells.push(unit(hotspot.max(ripple)));
        }
    }

    cells
}

/// Score as a whole percentage, clamped to 0-100 (NaN is 0).
pub fn percent(score: f64) -> u8 {
    (unit(score) * 100.0).round() as u8
}

/// Fill color for a heat intensity in `[0, 1]`: cyan at rest, pink at peak.
pub fn heat_rgba(intensity: f64) -> String {
    let t = unit(intensity);
    // #22d3ee -> #f472b6
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.2})",
        lerp(34.0, 244.0),
        lerp(211.0, 114.0),
        lerp(238.0, 182.0),
        0.15 + 0.85 * t
    )
}

/// Double-well energy curve sampled across `samples` points.
///
/// Points are `(x, y)` in `[0, 1]`, `y = 0` at the wells.
pub fn energy_landscape(samples: usize) -> Vec<(f64, f64)> {
    if samples < 2 {
        return vec![(0.0, 1.0); samples];
    }
    // V(u) = u^4 - u^2 on [-1.2, 1.2]; min -0.25 at u = ±1/√2.
    let span = 1.2_f64;
    let v = |u: f64| u.powi(4) - u.powi(2);
    let v_min = -0.25;
    let v_max = v(span);

    (0..samples)
        .map(|i| {
            let t = i as f64 / (samples - 1) as f64;
            let u = -span + 2.0 * span * t;
            (t, (v(u) - v_min) / (v_max - v_min))
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntanglementGraph {
    /// Node positions in `[0, 1]`.
    pub nodes: Vec<(f64, f64)>,
    /// Index pairs into `nodes`.
    pub links: Vec<(usize, usize)>,
}

/// Ring lattice: each node links to its next and second-next neighbour.
pub fn entanglement_links(count: usize) -> EntanglementGraph {
    let nodes = (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64 - PI / 2.0;
            (0.5 + 0.4 * angle.cos(), 0.5 + 0.4 * angle.sin())
        })
        .collect();

    let mut links = Vec::new();
    if count >= 2 {
        for i in 0..count {
            for step in [1, 2] {
                let j = (i + step) % count;
                let pair = (i.min(j), i.max(j));
                if i != j && !links.contains(&pair) {
                    links.push(pair);
                }
            }
        }
    }

    EntanglementGraph { nodes, links }
}

/// Projected tip of a Bloch vector, in `[-1, 1]` with `+y` toward `|0⟩`.
pub fn bloch_vector(theta: f64, phi: f64) -> (f64, f64) {
    (theta.sin() * phi.cos(), theta.cos())
}

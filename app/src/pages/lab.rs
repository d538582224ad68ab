use leptos::prelude::*;

use crate::sections::{BlochSphere, EnergyLandscape, EntanglementMap, HeatmapPreview};

#[component]
pub fn LabPage() -> impl IntoView {
    view! {
        <section class="lab">
            <header class="page-header">
                <h2>"Quantum Visualization Lab"</h2>
                <p class="page-kicker">"Real-time Telemetry • QPU-07"</p>
            </header>
            <div class="lab-grid">
                <div class="card">
                    <h3>"Qubit State Vector"</h3>
                    <BlochSphere />
                </div>
                <div class="card">
                    <h3>"Hamiltonian Landscape"</h3>
                    <EnergyLandscape />
                </div>
                <div class="card">
                    <h3>"Entanglement Map"</h3>
                    <EntanglementMap />
                </div>
                <div class="card wide">
                    <h3>"ZZ-Phase Correlation"</h3>
                    <HeatmapPreview risk=0.8 />
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use qvision_core::{Event, View};

use crate::sections::{BlochSphere, ICON_ACTIVITY, ICON_UPLOAD, Icon};
use crate::store::Store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = Store::get();

    view! {
        <section class="home">
            <div class="hero-grid">
                <div class="hero-content">
                    <h2 class="hero-title">
                        <span class="hero-title-dim">"QUANTUM"</span>
                        <span class="hero-title-accent">"ONCOLOGY"</span>
                    </h2>
                    <p class="hero-description">
                        "Variational Quantum Eigensolvers and entanglement-based feature "
                        "extraction for early detection of micro-anomalies in breast tissue."
                    </p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| store.dispatch(Event::Navigate(View::Survey))
                        >
                            <Icon path=ICON_ACTIVITY size=16 />
                            "Start Assessment"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| store.dispatch(Event::Navigate(View::Upload))
                        >
                            <Icon path=ICON_UPLOAD size=16 />
                            "Upload Mammogram"
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <BlochSphere />
                    <div class="float-card top">
                        <div class="float-label">"MODEL ACCURACY"</div>
                        <div class="float-value">"99.8%"</div>
                    </div>
                    <div class="float-card bottom">
                        <div class="float-label pink">"QUBIT COHERENCE"</div>
                        <div class="float-value">"45ns"</div>
                    </div>
                </div>
            </div>

            <div class="card-row">
                <div class="card">
                    <h3>"Symptom Analysis"</h3>
                    <p>"Questionnaire covering 12 clinical risk factors."</p>
                </div>
                <div class="card">
                    <h3>"Quantum Radiomics"</h3>
                    <p>"Texture features from qubit entanglement patterns."</p>
                </div>
                <div class="card">
                    <h3>"Instant Reports"</h3>
                    <p>"Clinical summaries in seconds, ready for radiologist review."</p>
                </div>
            </div>
        </section>
    }
}

// Q-VISION diagnostics shell, Leptos 0.8 CSR

mod pages;
mod sections;
mod store;

use leptos::prelude::*;
use qvision_core::View;

use pages::{HomePage, LabPage, ReportPage, SurveyPage, UploadPage};
use sections::{MobileHeader, MobileMenu, Sidebar};
use store::Store;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let store = Store::provide();
    let state = store.state();

    let main_class = move || {
        if state.with(|s| s.sidebar_collapsed()) {
            "main collapsed"
        } else {
            "main"
        }
    };

    view! {
        <div class="shell">
            <div class="grid-backdrop"></div>
            <Sidebar />
            <MobileHeader />
            <Show when=move || state.with(|s| s.mobile_menu_open())>
                <MobileMenu />
            </Show>
            <main class=main_class>
                {move || match state.with(|s| s.current_view()) {
                    View::Home => view! { <HomePage /> }.into_any(),
                    View::Survey => view! { <SurveyPage /> }.into_any(),
                    View::Upload => view! { <UploadPage /> }.into_any(),
                    View::Report => view! { <ReportPage /> }.into_any(),
                    View::Lab => view! { <LabPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

use leptos::prelude::*;
use qvision_core::Event;

use super::{ICON_ATOM, ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon, view_icon};
use crate::store::Store;

/// Navigation buttons, one per entry the controller exposes.
///
/// Shared by the desktop sidebar and the mobile overlay.
#[component]
pub fn NavList() -> impl IntoView {
    let store = Store::get();
    let state = store.state();
    let collapsed = move || state.with(|s| s.sidebar_collapsed());

    view! {
        <nav class="nav-list">
            {move || {
                state
                    .with(|s| s.nav_entries())
                    .into_iter()
                    .map(|entry| {
                        let class = if entry.active { "nav-item active" } else { "nav-item" };
                        view! {
                            <button
                                class=class
                                on:click=move |_| store.dispatch(Event::Navigate(entry.view))
                            >
                                <Icon path=view_icon(entry.view) />
                                <span class="nav-label" class:hidden=collapsed>
                                    {entry.label}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = Store::get();
    let state = store.state();
    let collapsed = move || state.with(|s| s.sidebar_collapsed());

    view! {
        <aside class=move || if collapsed() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-brand">
                <div class="brand-mark">
                    <Icon path=ICON_ATOM size=16 />
                </div>
                <div class="brand-text" class:hidden=collapsed>
                    <h1>"Q-VISION"</h1>
                    <p>"DIAGNOSTICS"</p>
                </div>
                <button
                    class="collapse-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| store.dispatch(Event::ToggleSidebar)
                >
                    {move || {
                        let path = if collapsed() { ICON_CHEVRON_RIGHT } else { ICON_CHEVRON_LEFT };
                        view! { <Icon path=path size=12 /> }
                    }}
                </button>
            </div>

            <NavList />

            <div class="system-status">
                <span class="status-dot"></span>
                <Show when=move || !collapsed()>
                    <div>
                        <div class="status-label">"SYSTEM STATUS"</div>
                        <div class="status-value">"OPERATIONAL"</div>
                    </div>
                </Show>
                <Show when=move || !collapsed()>
                    <div class="build-tag">{concat!("v", env!("CARGO_PKG_VERSION"))}</div>
                </Show>
            </div>
        </aside>
    }
}

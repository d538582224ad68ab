use leptos::prelude::*;
use qvision_core::Event;

use super::{ICON_ATOM, ICON_CLOSE, ICON_MENU, Icon, NavList};
use crate::store::Store;

#[component]
pub fn MobileHeader() -> impl IntoView {
    let store = Store::get();
    let state = store.state();

    view! {
        <header class="mobile-header">
            <div class="mobile-brand">
                <div class="brand-mark">
                    <Icon path=ICON_ATOM size=16 />
                </div>
                <span>"Q-VISION"</span>
            </div>
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| store.dispatch(Event::ToggleMobileMenu)
            >
                {move || {
                    let path = if state.with(|s| s.mobile_menu_open()) { ICON_CLOSE } else { ICON_MENU };
                    view! { <Icon path=path /> }
                }}
            </button>
        </header>
    }
}

/// Full-screen overlay; navigating from it closes it.
#[component]
pub fn MobileMenu() -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <NavList />
        </div>
    }
}

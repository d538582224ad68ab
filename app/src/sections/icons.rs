//! Stroke icons (24x24 grid).

use leptos::prelude::*;
use qvision_core::View;

#[component]
pub fn Icon(
    path: &'static str,
    #[prop(default = 20)] size: u32,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_DASHBOARD: &str = "M3 3h7v9H3zM14 3h7v5h-7zM14 12h7v9h-7zM3 16h7v5H3z";
pub const ICON_ACTIVITY: &str = "M22 12h-4l-3 9L9 3l-3 9H2";
pub const ICON_UPLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M17 8l-5-5-5 5M12 3v12";
pub const ICON_FILE_TEXT: &str =
    "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8";
pub const ICON_ATOM: &str = "M11 12a1 1 0 1 0 2 0a1 1 0 1 0-2 0M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5ZM15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z";
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
pub const ICON_CLOSE: &str = "M18 6 6 18M6 6l12 12";
pub const ICON_CHEVRON_LEFT: &str = "m15 18-6-6 6-6";
pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";
pub const ICON_ARROW_LEFT: &str = "M19 12H5M12 19l-7-7 7-7";

pub fn view_icon(view: View) -> &'static str {
    match view {
        View::Home => ICON_DASHBOARD,
        View::Survey => ICON_ACTIVITY,
        View::Upload => ICON_UPLOAD,
        View::Report => ICON_FILE_TEXT,
        View::Lab => ICON_ATOM,
    }
}

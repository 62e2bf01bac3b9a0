use leptos::prelude::*;

use crate::host::WebViewport;
use crate::state::{scroll_to_top, use_scroll_watch};

/// Floating button that appears once the page is scrolled past the fold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let watch = use_scroll_watch();

    view! {
        <button
            class=move || if watch.is_visible() { "to-top to-top--visible" } else { "to-top" }
            type="button"
            aria-label="Back to top"
            on:click=move |_| scroll_to_top(&WebViewport)
        >
            "↑"
        </button>
    }
}

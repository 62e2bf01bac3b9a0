//! Thin adapters over the browser primitives the page needs.
//!
//! The hooks in [`crate::state`] are generic over these two traits, so they
//! can be driven from plain unit tests with recording fakes.

use anyhow::{Result, anyhow};
use leptos::ev;
use leptos_use::{use_event_listener, use_window};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub trait Viewport {
    /// Vertical distance between the document top and the top of the visible area.
    fn scroll_y(&self) -> f64;

    /// Animated scroll to `top`.
    fn smooth_scroll_to(&self, top: f64) -> Result<()>;

    /// Call `on_scroll` on every scroll event until the current reactive owner
    /// is disposed.
    fn watch_scroll(&self, on_scroll: impl FnMut() + 'static);
}

/// Page-level scroll locking. Both calls must be idempotent.
pub trait BodyScroll {
    fn lock(&self) -> Result<()>;
    fn unlock(&self) -> Result<()>;
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global `window`"))
}

fn body() -> Result<HtmlElement> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("window has no document"))?
        .body()
        .ok_or_else(|| anyhow!("document has no <body>"))
}

/// The browser window.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebViewport;

impl Viewport for WebViewport {
    fn scroll_y(&self) -> f64 {
        // no window means nothing has scrolled
        window()
            .and_then(|w| w.scroll_y().map_err(|e| anyhow!("scrollY: {e:?}")))
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<()> {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&opts);
        Ok(())
    }

    fn watch_scroll(&self, mut on_scroll: impl FnMut() + 'static) {
        // leptos-use removes the listener when the owner goes away
        let _stop = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());
    }
}

/// Inline `overflow` style on `<body>`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BodyStyle;

impl BodyScroll for BodyStyle {
    fn lock(&self) -> Result<()> {
        body()?
            .style()
            .set_property("overflow", "hidden")
            .map_err(|e| anyhow!("set body overflow: {e:?}"))
    }

    fn unlock(&self) -> Result<()> {
        body()?
            .style()
            .remove_property("overflow")
            .map(|_| ())
            .map_err(|e| anyhow!("clear body overflow: {e:?}"))
    }
}

use leptos::logging::warn;
use leptos::prelude::{Get, GetUntracked, RwSignal, Set};

use crate::host::{Viewport, WebViewport};

/// Offset past which the back-to-top button shows up.
pub const TO_TOP_THRESHOLD: f64 = 400.0;

/// Whether the back-to-top button should be visible.
#[derive(Copy, Clone)]
pub struct ScrollWatch {
    visible: RwSignal<bool>,
}

impl ScrollWatch {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
        }
    }

    /// Feed the latest scroll offset. Strictly greater than the threshold shows the button.
    pub fn observe(&self, offset: f64) {
        let next = offset > TO_TOP_THRESHOLD;
        if self.visible.get_untracked() != next {
            self.visible.set(next);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_visible_untracked(&self) -> bool {
        self.visible.get_untracked()
    }
}

impl Default for ScrollWatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Track the window scroll position for the lifetime of the calling component.
pub fn use_scroll_watch() -> ScrollWatch {
    use_scroll_watch_with(WebViewport)
}

/// Track `viewport`'s scroll position for the lifetime of the current owner.
///
/// The current offset is read once up front so a page reloaded halfway down
/// starts with the button shown.
pub fn use_scroll_watch_with<V: Viewport + Clone + 'static>(viewport: V) -> ScrollWatch {
    let watch = ScrollWatch::new();
    watch.observe(viewport.scroll_y());

    let source = viewport.clone();
    viewport.watch_scroll(move || watch.observe(source.scroll_y()));

    watch
}

/// Smooth-scroll back to the top of the page. Fire and forget.
pub fn scroll_to_top<V: Viewport>(viewport: &V) {
    if let Err(e) = viewport.smooth_scroll_to(0.0) {
        warn!("scroll to top: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::on_cleanup;
    use leptos::reactive::owner::Owner;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    type Listener = (Arc<AtomicBool>, Box<dyn FnMut()>);

    /// Viewport whose listeners stop firing once their owner is cleaned up.
    #[derive(Clone, Default)]
    struct FakeViewport {
        offset: Rc<Cell<f64>>,
        targets: Rc<RefCell<Vec<f64>>>,
        listeners: Rc<RefCell<Vec<Listener>>>,
    }

    impl FakeViewport {
        fn at(offset: f64) -> Self {
            let viewport = Self::default();
            viewport.offset.set(offset);
            viewport
        }

        /// Move to `offset` and fire a scroll event. Returns how many listeners heard it.
        fn scroll(&self, offset: f64) -> usize {
            self.offset.set(offset);
            let mut heard = 0;
            for (live, on_scroll) in self.listeners.borrow_mut().iter_mut() {
                if live.load(Ordering::SeqCst) {
                    on_scroll();
                    heard += 1;
                }
            }
            heard
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.offset.get()
        }

        fn smooth_scroll_to(&self, top: f64) -> anyhow::Result<()> {
            self.targets.borrow_mut().push(top);
            self.offset.set(top);
            Ok(())
        }

        fn watch_scroll(&self, on_scroll: impl FnMut() + 'static) {
            let live = Arc::new(AtomicBool::new(true));
            let flag = live.clone();
            on_cleanup(move || flag.store(false, Ordering::SeqCst));
            self.listeners.borrow_mut().push((live, Box::new(on_scroll)));
        }
    }

    #[test]
    fn threshold_is_strict() {
        let owner = Owner::new();
        owner.set();
        let watch = ScrollWatch::new();

        watch.observe(399.0);
        assert!(!watch.is_visible_untracked());
        watch.observe(400.0);
        assert!(!watch.is_visible_untracked());
        watch.observe(401.0);
        assert!(watch.is_visible_untracked());
        watch.observe(400.5);
        assert!(watch.is_visible_untracked());
    }

    #[test]
    fn hidden_at_mount_from_the_top() {
        let owner = Owner::new();
        owner.set();

        let watch = use_scroll_watch_with(FakeViewport::at(0.0));

        assert!(!watch.is_visible_untracked());
    }

    #[test]
    fn reads_position_when_registering() {
        let owner = Owner::new();
        owner.set();

        let watch = use_scroll_watch_with(FakeViewport::at(500.0));

        assert!(watch.is_visible_untracked());
    }

    #[test]
    fn follows_latest_offset_only() {
        let owner = Owner::new();
        owner.set();
        let viewport = FakeViewport::default();
        let watch = use_scroll_watch_with(viewport.clone());

        for offset in [1200.0, 20.0, 900.0, 401.0] {
            viewport.scroll(offset);
        }
        assert!(watch.is_visible_untracked());

        viewport.scroll(0.0);
        assert!(!watch.is_visible_untracked());
    }

    #[test]
    fn scroll_down_up_then_back_to_top() {
        let owner = Owner::new();
        owner.set();
        let viewport = FakeViewport::default();
        let watch = use_scroll_watch_with(viewport.clone());
        assert!(!watch.is_visible_untracked());

        assert_eq!(viewport.scroll(500.0), 1);
        assert!(watch.is_visible_untracked());

        viewport.scroll(100.0);
        assert!(!watch.is_visible_untracked());

        scroll_to_top(&viewport);
        assert_eq!(viewport.targets.borrow().as_slice(), &[0.0]);
        assert_eq!(viewport.scroll_y(), 0.0);
    }

    #[test]
    fn listener_goes_away_with_its_owner() {
        let root = Owner::new();
        root.set();
        let viewport = FakeViewport::default();
        let scope = root.child();

        let watch = scope.with(|| use_scroll_watch_with(viewport.clone()));
        assert_eq!(viewport.scroll(600.0), 1);
        assert!(watch.is_visible_untracked());

        scope.cleanup();

        assert_eq!(viewport.scroll(700.0), 0);
    }

    #[test]
    fn failed_scroll_is_swallowed() {
        struct NoWindow;

        impl Viewport for NoWindow {
            fn scroll_y(&self) -> f64 {
                0.0
            }

            fn smooth_scroll_to(&self, _: f64) -> anyhow::Result<()> {
                Err(anyhow::anyhow!("no global `window`"))
            }

            fn watch_scroll(&self, _: impl FnMut() + 'static) {}
        }

        scroll_to_top(&NoWindow);
    }
}

use leptos::logging::warn;
use leptos::prelude::{Effect, StoredValue, UpdateValue, on_cleanup};

use crate::host::{BodyScroll, BodyStyle};
use crate::state::NavMenu;

/// Guard over page scrolling.
///
/// Engaged while an overlay is up. Every release path (sync to closed,
/// explicit release, drop) goes through [`ScrollLock::release`], which only
/// touches the host when the lock is actually held, so one engagement is
/// released exactly once.
pub struct ScrollLock<B: BodyScroll> {
    body: B,
    engaged: bool,
}

impl<B: BodyScroll> ScrollLock<B> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            engaged: false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Follow the menu state.
    pub fn sync(&mut self, open: bool) {
        if open {
            self.engage();
        } else {
            self.release();
        }
    }

    pub fn engage(&mut self) {
        if self.engaged {
            return;
        }
        if let Err(e) = self.body.lock() {
            warn!("scroll lock: {e:#}");
        }
        self.engaged = true;
    }

    pub fn release(&mut self) {
        if !self.engaged {
            return;
        }
        self.engaged = false;
        if let Err(e) = self.body.unlock() {
            warn!("scroll unlock: {e:#}");
        }
    }
}

impl<B: BodyScroll> Drop for ScrollLock<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Lock `<body>` scrolling while `menu` is open.
pub fn use_body_scroll_lock(menu: NavMenu) {
    use_body_scroll_lock_with(menu, BodyStyle);
}

/// Hold a [`ScrollLock`] over `body` while `menu` is open.
///
/// The lock is released when the menu closes and when the current owner is
/// disposed, whatever the menu state is at that point.
pub fn use_body_scroll_lock_with<B: BodyScroll + 'static>(menu: NavMenu, body: B) {
    let lock = StoredValue::new_local(ScrollLock::new(body));

    Effect::new(move |_| {
        let open = menu.is_open();
        lock.update_value(|l| l.sync(open));
    });

    on_cleanup(move || {
        lock.try_update_value(|l| l.release());
    });
}

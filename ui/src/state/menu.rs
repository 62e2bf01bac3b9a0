use leptos::prelude::{Get, GetUntracked, RwSignal, Set, Update};

/// Open/closed state of the mobile navigation menu.
#[derive(Copy, Clone)]
pub struct NavMenu {
    open: RwSignal<bool>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    /// Bound to every nav link and the logo.
    pub fn close(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }

    /// Tracked read, for views and effects.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

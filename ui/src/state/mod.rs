pub mod menu;
pub mod scroll_lock;
pub mod to_top;
pub mod year;

pub use menu::NavMenu;
pub use scroll_lock::{ScrollLock, use_body_scroll_lock, use_body_scroll_lock_with};
pub use to_top::{ScrollWatch, TO_TOP_THRESHOLD, scroll_to_top, use_scroll_watch, use_scroll_watch_with};
pub use year::YearStamp;

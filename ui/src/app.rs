use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{footer::SiteFooter, header::SiteHeader};
use crate::content::OWNER_NAME;
use crate::pages::home::Home;
use crate::state::{NavMenu, use_body_scroll_lock};

/// Page root. Owns the menu state; the scroll watcher lives with the
/// back-to-top button in the footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let menu = NavMenu::new();
    use_body_scroll_lock(menu);

    view! {
        <Title text=format!("{OWNER_NAME} | Full-Stack MERN Developer")/>
        <Meta
            name="description"
            content="Electrical and Computer Engineer crafting modern web experiences with the MERN stack."
        />

        <SiteHeader menu/>
        <Home/>
        <SiteFooter/>
    }
}

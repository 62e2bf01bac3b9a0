use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::NavMenu;

#[component]
pub fn SiteHeader(menu: NavMenu) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href on:click=move |_| menu.close()>{ link.label }</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="#hero" class="site-logo" on:click=move |_| menu.close()>
                    "Dawit"<span>"."</span>
                </a>
                <nav class="site-nav" aria-label="Primary navigation">
                    <button
                        class="site-nav__toggle"
                        type="button"
                        aria-expanded=move || menu.is_open().to_string()
                        aria-controls="primary-menu"
                        on:click=move |_| menu.toggle()
                    >
                        <span class="sr-only">"Toggle navigation"</span>
                        // hamburger bars
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <ul
                        class="site-nav__list"
                        id="primary-menu"
                        data-open=move || if menu.is_open() { "true" } else { "false" }
                    >
                        { links }
                    </ul>
                </nav>
            </div>
        </header>
    }
}

use leptos::prelude::*;

use crate::components::to_top::BackToTop;
use crate::content::{CONTACT_EMAIL, GITHUB_URL, OWNER_NAME};
use crate::state::YearStamp;

#[component]
pub fn SiteFooter() -> impl IntoView {
    // read once per mount
    let year = YearStamp::now();

    view! {
        <footer id="contact" class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__intro">
                    <h2>"Let's Build Something Great"</h2>
                    <p>
                        "I'm always open to collaborating on impactful projects, mentoring developers, or "
                        "brainstorming new ideas."
                    </p>
                </div>
                <div class="site-footer__actions">
                    <a class="btn btn--primary" href=format!("mailto:{CONTACT_EMAIL}")>"Email Me"</a>
                    <a class="btn btn--ghost" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
                <div class="site-footer__meta">
                    <span>"MERN developer based in Ethiopia"</span>
                    <span>{ format!("© {year} {OWNER_NAME}") }</span>
                </div>
            </div>
            <BackToTop/>
        </footer>
    }
}

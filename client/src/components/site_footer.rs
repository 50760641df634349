//! Page footer: tagline, quick links, registered office.

use leptos::prelude::*;

use crate::content::company::{COMPANY_NAME, COPYRIGHT, FOOTER_TAGLINE, NAV_LINKS, REGISTERED_OFFICE};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <h3 class="site-footer__brand">{COMPANY_NAME}</h3>
                        <p class="site-footer__text">{FOOTER_TAGLINE}</p>
                    </div>
                    <div>
                        <h3 class="site-footer__heading">"Quick Links"</h3>
                        <ul class="site-footer__links">
                            {NAV_LINKS
                                .iter()
                                .map(|link| view! { <li><a class="site-footer__link" href=link.href>{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="site-footer__heading">"Contact Us"</h3>
                        {REGISTERED_OFFICE
                            .iter()
                            .map(|line| view! { <p class="site-footer__text">{*line}</p> })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__legal">
                    <p class="site-footer__text">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

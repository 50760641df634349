//! Fixed header with desktop navigation and the mobile slide-down menu.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::company::{COMPANY_NAME, NAV_LINKS};
use crate::state::menu::MenuState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let is_open = move || menu.get().is_open();

    view! {
        <header class="site-header">
            <div class="container site-header__bar">
                <h1 class="site-header__brand">{COMPANY_NAME}</h1>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="site-header__link" href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
                <button
                    class="site-header__toggle"
                    type="button"
                    aria-expanded=move || if is_open() { "true" } else { "false" }
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        let kind = if is_open() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind=kind/> }
                    }}
                    <span class="sr-only">"Toggle menu"</span>
                </button>
            </div>
        </header>
        <Show when=is_open>
            <div class="mobile-menu">
                <nav class="mobile-menu__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="mobile-menu__link"
                                    href=link.href
                                    on:click=move |_| menu.update(MenuState::close)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}

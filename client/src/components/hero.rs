//! Landing banner at `#home`.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::content::company::{HERO_CTA, HERO_LEDE, HERO_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <Reveal class="hero__inner">
                    <h2 class="hero__title">{HERO_TITLE}</h2>
                    <p class="hero__lede">{HERO_LEDE}</p>
                    <a class="button button--light" href=HERO_CTA.href>
                        {HERO_CTA.label}
                        <Icon kind=IconKind::ArrowRight class="button__icon"/>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

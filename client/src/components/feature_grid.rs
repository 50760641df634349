//! "Why Choose Us" feature tiles at `#why-us`.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::reveal::Reveal;
use crate::content::catalog::FEATURES;

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="why-us" class="section section--tint">
            <div class="container">
                <h2 class="section__title">"Why Choose Us"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|item| {
                            view! {
                                <Reveal class="card feature-card">
                                    <Icon kind=item.icon class="feature-card__icon"/>
                                    <h3 class="card__title">{item.title}</h3>
                                    <p class="card__description">{item.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

//! Product catalog cards at `#products`.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::catalog::{PRODUCTS, Product};

#[component]
pub fn ProductGrid() -> impl IntoView {
    view! {
        <section id="products" class="section section--muted">
            <div class="container">
                <h2 class="section__title">"Our Products"</h2>
                <div class="card-grid">
                    {PRODUCTS.iter().map(|product| view! { <ProductCard product=*product/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <Reveal class="card product-card">
            <div class="product-card__media">
                <img class="product-card__image" src=product.image alt=product.name loading="lazy"/>
            </div>
            <div class="product-card__content">
                <h3 class="card__title">{product.name}</h3>
                <p class="card__description">{product.description}</p>
            </div>
            <div class="product-card__footer">
                <p>{product.additional_info}</p>
            </div>
        </Reveal>
    }
}

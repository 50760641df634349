//! The single marketing page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_section::ContactSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::gallery_carousel::GalleryCarousel;
use crate::components::hero::Hero;
use crate::components::hs_code_table::HsCodeTable;
use crate::components::product_grid::ProductGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

/// Home page with every section in scroll order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__main">
                <Hero/>
                <About/>
                <ProductGrid/>
                <HsCodeTable/>
                <section id="gallery" class="section">
                    <div class="container">
                        <h2 class="section__title">"Our Gallery"</h2>
                        <GalleryCarousel/>
                    </div>
                </section>
                <FeatureGrid/>
            </main>
            <ContactSection/>
            <SiteFooter/>
        </div>
    }
}

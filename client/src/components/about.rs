//! "Who We Are" section with the managing director profile.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::company::{COMPANY_SUMMARY, DIRECTOR, FOUNDED};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <Reveal class="about">
                    <h2 class="section__title">"Who We Are"</h2>
                    <p class="about__founded">{FOUNDED}</p>
                    <div class="about__body">
                        <div class="about__portrait">
                            <img class="about__photo" src=DIRECTOR.photo alt=DIRECTOR.name/>
                        </div>
                        <div class="about__bio">
                            <h3 class="about__name">{DIRECTOR.name}</h3>
                            <p class="about__credentials">{DIRECTOR.credentials}</p>
                            <p class="about__role">{DIRECTOR.role}</p>
                            <p class="about__text">{DIRECTOR.bio}</p>
                            <p class="about__text">{COMPANY_SUMMARY}</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

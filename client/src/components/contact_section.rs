//! Contact section: office cards, the `mailto:` form, and global inquiries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Message delivery is delegated to the visitor's mail client. Submitting the
//! form navigates to a pre-filled `mailto:` link and clears the fields; the
//! page never learns whether a mail client opened.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::offices::{LOCATIONS, Location};
use crate::state::contact::{ContactField, ContactFormState};
use crate::util::browser::navigate_to;
use crate::util::mailto::{CONTACT_EMAIL, contact_href};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact" aria-labelledby="contact-heading">
            <div class="container">
                <div class="contact__intro">
                    <h2 id="contact-heading" class="section__title">"Get in Touch"</h2>
                    <p class="contact__lede">
                        "We're here to help and answer any questions you might have about Yalama International. "
                        "Contact us at any of our global offices."
                    </p>
                </div>
                <div class="contact__offices">
                    {LOCATIONS.iter().map(|location| view! { <OfficeCard location=*location/> }).collect_view()}
                </div>
                <div class="contact__panel">
                    <ContactForm/>
                    <div>
                        <h3 class="contact__heading">"Global Inquiries"</h3>
                        <div class="contact__row">
                            <Icon kind=IconKind::Mail class="contact__icon"/>
                            <a href=contact_href()>{CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact__row">
                            <Icon kind=IconKind::Globe class="contact__icon"/>
                            <span>"Available Worldwide"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfficeCard(location: Location) -> impl IntoView {
    view! {
        <div class="office-card">
            <h3 class="contact__heading">{location.region}</h3>
            <div class="contact__row contact__row--top">
                <Icon kind=IconKind::MapPin class="contact__icon"/>
                <div>
                    {location.address.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    <a class="office-card__directions" href=location.maps_url target="_blank" rel="noopener noreferrer">
                        "Get Directions"
                    </a>
                </div>
            </div>
            <div class="contact__row">
                <Icon kind=IconKind::Phone class="contact__icon"/>
                <a href=location.tel_href()>{location.phone}</a>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(ContactFormState::is_complete) {
            return;
        }
        if let Some(href) = form.try_update(ContactFormState::submit) {
            navigate_to(&href);
        }
    };

    view! {
        <div>
            <h3 class="contact__heading">"Send us a Message"</h3>
            <form class="contact-form" on:submit=on_submit>
                {ContactField::ALL.into_iter().map(|field| view! { <FormField field=field form=form/> }).collect_view()}
                <button class="button button--primary contact-form__submit" type="submit">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

/// Labelled required input bound to one contact field.
#[component]
fn FormField(field: ContactField, form: RwSignal<ContactFormState>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = match field {
        ContactField::Message => view! {
            <textarea
                class="contact-form__input"
                id=field.key()
                name=field.key()
                rows="4"
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        ContactField::Name | ContactField::Email => {
            let kind = if field == ContactField::Email { "email" } else { "text" };
            view! {
                <input
                    class="contact-form__input"
                    type=kind
                    id=field.key()
                    name=field.key()
                    required=true
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label" for=field.key()>{field.label()}</label>
            {control}
        </div>
    }
}

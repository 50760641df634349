//! Fade-in-once wrapper for sections and cards.
//!
//! Content renders hidden and gets `reveal--visible` the first time it
//! intersects the viewport. If the observer cannot be created the content is
//! revealed immediately.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Class list for a reveal wrapper in the given visibility state.
#[must_use]
pub fn reveal_class(extra: &str, visible: bool) -> String {
    let mut class = String::from("reveal");
    if visible {
        class.push_str(" reveal--visible");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            observe_once(&el, visible);
        }
    });

    view! {
        <div node_ref=node_ref class=move || reveal_class(&class, visible.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::Element, visible: RwSignal<bool>) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries
                .iter()
                .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
            if hit {
                visible.set(true);
                observer.disconnect();
            }
        },
    );

    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(el);
            // The observer owns the only reference; it disconnects after the first hit.
            callback.forget();
        }
        Err(err) => {
            log::warn!("reveal: IntersectionObserver unavailable: {err:?}");
            visible.set(true);
        }
    }
}

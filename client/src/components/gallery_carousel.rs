//! Auto-scrolling, draggable gallery strip.
//!
//! ARCHITECTURE
//! ============
//! `CarouselState` owns all motion rules. This component only feeds it input
//! (hover, pointer drag), measures the rendered strip, and runs a
//! `requestAnimationFrame` chain that ticks the state with the frame
//! timestamp. The strip and tile transforms are derived from the state
//! signal on every frame.

#[cfg(test)]
#[path = "gallery_carousel_test.rs"]
mod gallery_carousel_test;

use leptos::prelude::*;

use crate::content::gallery::{GALLERY_IMAGES, looped_sequence};
use crate::state::carousel::CarouselState;
use crate::util::browser::now_ms;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Inline style translating the strip by `offset` pixels.
#[must_use]
pub fn strip_style(offset: f64) -> String {
    format!("transform: translate3d({offset:.2}px, 0, 0);")
}

/// Inline style skewing a tile by `skew_deg` degrees.
#[must_use]
pub fn tile_style(skew_deg: f64) -> String {
    format!("transform: skewX({skew_deg:.2}deg);")
}

#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn request_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("carousel: requestAnimationFrame failed: {err:?}");
        }
    }
}

/// Run the per-frame loop until `alive` is cleared.
#[cfg(feature = "hydrate")]
fn start_frame_loop(
    state: RwSignal<CarouselState>,
    viewport_ref: NodeRef<leptos::html::Div>,
    strip_ref: NodeRef<leptos::html::Div>,
    alive: Arc<AtomicBool>,
) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let callback_for_frame = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
        if !alive.load(Ordering::Relaxed) {
            // Breaks the Rc cycle; the closure is freed once this frame returns.
            callback_for_frame.borrow_mut().take();
            return;
        }

        if let (Some(viewport), Some(strip)) = (viewport_ref.get_untracked(), strip_ref.get_untracked()) {
            let strip_width = f64::from(strip.scroll_width());
            let viewport_width = f64::from(viewport.client_width());
            state.update(|s| {
                s.measure(strip_width, viewport_width);
                s.tick(timestamp_ms);
            });
        }

        request_frame(&callback_for_frame);
    }));

    request_frame(&callback);
}

#[component]
pub fn GalleryCarousel() -> impl IntoView {
    let state = RwSignal::new(CarouselState::default());
    let viewport_ref = NodeRef::<leptos::html::Div>::new();
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        start_frame_loop(state, viewport_ref, strip_ref, Arc::clone(&alive));
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let x = f64::from(ev.client_x());
        state.update(|s| s.begin_drag(x, now_ms()));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !state.with_untracked(CarouselState::is_dragging) {
            return;
        }
        let x = f64::from(ev.client_x());
        state.update(|s| s.drag_to(x, now_ms()));
    };
    let end_drag = move |_: leptos::ev::PointerEvent| state.update(CarouselState::end_drag);

    view! {
        <div
            node_ref=viewport_ref
            class="carousel"
            class:carousel--dragging=move || state.with(CarouselState::is_dragging)
            on:mouseenter=move |_| state.update(|s| s.set_hovering(true))
            on:mouseleave=move |_| {
                state.update(|s| {
                    s.set_hovering(false);
                    s.end_drag();
                });
            }
        >
            <div
                node_ref=strip_ref
                class="carousel__strip"
                style=move || strip_style(state.with(CarouselState::offset))
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=end_drag
                on:pointercancel=end_drag
            >
                {looped_sequence(GALLERY_IMAGES)
                    .into_iter()
                    .map(|image| {
                        view! {
                            <div class="carousel__tile" style=move || tile_style(state.with(CarouselState::skew_deg))>
                                <img class="carousel__image" src=image.src alt=image.alt draggable="false"/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

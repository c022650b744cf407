//! Bridge component between Leptos and the imperative `seascape::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The seascape crate owns the scene and drawing. This host sizes the canvas
//! to the window, drives one engine frame per animation frame, and tears both
//! the frame loop and the resize listener down when the hero unmounts.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use seascape::engine::Engine;

#[cfg(feature = "hydrate")]
use crate::util::dom::window_size;
#[cfg(feature = "hydrate")]
use crate::util::frame_loop::start_frame_loop;

/// Full-bleed decorative canvas behind the hero content.
#[component]
pub fn WaveBackdrop() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let mounted = Rc::new(RefCell::new(false));
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if mounted.replace(true) {
                return;
            }
            let (width, height) = window_size().unwrap_or((0.0, 0.0));
            let Some(engine) = Engine::new(canvas, width, height) else {
                log::warn!("wave backdrop: 2d context unavailable");
                return;
            };
            let engine = Rc::new(RefCell::new(engine));

            let engine_for_frame = Rc::clone(&engine);
            let frames = start_frame_loop(move || {
                if let Err(err) = engine_for_frame.borrow_mut().frame() {
                    log::warn!("wave backdrop: frame failed: {err:?}");
                }
            });

            let resize = window_event_listener(leptos::ev::resize, move |_| {
                if let Some((width, height)) = window_size() {
                    engine.borrow_mut().fit(width, height);
                }
            });

            on_cleanup(move || {
                frames.cancel();
                resize.remove();
            });
        });
    }

    view! { <canvas node_ref=canvas_ref class="wave-backdrop" aria-hidden="true"></canvas> }
}

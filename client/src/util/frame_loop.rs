//! `requestAnimationFrame` loop.
//!
//! Each frame's closure holds itself in a shared slot and re-requests the
//! next frame while the returned [`TaskHandle`] is live. After cancellation
//! the already-scheduled frame runs once as a no-op and drops the closure,
//! which breaks the `Rc` cycle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::task::TaskHandle;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Call `on_frame` once per animation frame until the handle is cancelled.
pub fn start_frame_loop(mut on_frame: impl FnMut() + 'static) -> TaskHandle {
    let handle = TaskHandle::new();
    let Some(window) = web_sys::window() else {
        handle.cancel();
        return handle;
    };

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let live = handle.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !live.is_live() {
            slot_for_cb.borrow_mut().take();
            return;
        }
        on_frame();
        let scheduled = web_sys::window().is_some_and(|w| {
            slot_for_cb
                .borrow()
                .as_ref()
                .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
        });
        if !scheduled {
            live.cancel();
            slot_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *slot.borrow_mut() = Some(cb);
    } else {
        log::warn!("requestAnimationFrame unavailable; frame loop not started");
        handle.cancel();
    }
    handle
}

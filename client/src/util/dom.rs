//! Small DOM queries used by scroll and resize handlers.

/// Bottom edge of the element with `id`, relative to the viewport top.
#[must_use]
pub fn element_bottom(id: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().bottom())
}

/// Viewport size in CSS pixels.
#[must_use]
pub fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

//! Canvas binding for the seascape scene.
//!
//! [`Engine`] owns the canvas element, its 2D context, and the [`Scene`].
//! The host component drives it: [`Engine::fit`] on mount and on every
//! window resize, [`Engine::frame`] once per animation frame.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::scene::Scene;

pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub scene: Scene,
}

impl Engine {
    /// Bind to `canvas` sized to `width` x `height` CSS pixels.
    ///
    /// Returns `None` when the canvas has no 2D context; the backdrop is
    /// decorative, so callers skip the animation in that case.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Option<Self> {
        let Ok(Some(raw)) = canvas.get_context("2d") else {
            return None;
        };
        let Ok(ctx) = raw.dyn_into::<CanvasRenderingContext2d>() else {
            return None;
        };
        let mut engine = Self { canvas, ctx, scene: Scene::new(width, height, js_sys::Math::random) };
        engine.fit(width, height);
        Some(engine)
    }

    /// Resize the backing store and the scene to `width` x `height`.
    pub fn fit(&mut self, width: f64, height: f64) {
        let (w, h) = (width.max(0.0), height.max(0.0));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (w_px, h_px) = (w as u32, h as u32);
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        self.scene.resize(w, h);
    }

    /// Advance one frame and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.scene.step();
        render::draw(&self.ctx, &self.scene)
    }
}

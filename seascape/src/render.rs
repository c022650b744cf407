//! Rendering: draws a [`Scene`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only scene and produces pixels.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BIRD_LINE_WIDTH, BIRD_STROKE};
use crate::scene::{Bird, Scene, Wave};

/// Horizontal sampling step for wave outlines, in pixels.
const WAVE_SAMPLE_PX: f64 = 1.0;

/// Clear the canvas and draw waves (back to front) then birds.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

    for wave in &scene.waves {
        draw_wave(ctx, wave, scene.width, scene.height);
    }
    for bird in &scene.birds {
        draw_bird(ctx, bird);
    }
    Ok(())
}

fn draw_wave(ctx: &CanvasRenderingContext2d, wave: &Wave, width: f64, height: f64) {
    ctx.begin_path();
    ctx.move_to(0.0, height);
    let mut x = 0.0;
    while x <= width {
        ctx.line_to(x, wave.y_at(x));
        x += WAVE_SAMPLE_PX;
    }
    ctx.line_to(width, height);
    ctx.set_fill_style_str(wave.color);
    ctx.fill();
}

fn draw_bird(ctx: &CanvasRenderingContext2d, bird: &Bird) {
    let Bird { x, y, size, .. } = *bird;
    let half = size / 2.0;
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.quadratic_curve_to(x + half, y - half, x + size, y);
    ctx.quadratic_curve_to(x + size * 1.5, y - half, x + size * 2.0, y);
    ctx.set_stroke_style_str(BIRD_STROKE);
    ctx.set_line_width(BIRD_LINE_WIDTH);
    ctx.stroke();
}

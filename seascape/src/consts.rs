//! Shared constants for the seascape crate.

// ── Waves ───────────────────────────────────────────────────────

/// Fill colours, back to front.
pub const WAVE_COLORS: [&str; 3] = ["#b5d3dc", "#97bfcc", "#79a7b6"];

/// Amplitude of the first wave in pixels; each further wave adds [`WAVE_AMPLITUDE_STEP`].
pub const WAVE_BASE_AMPLITUDE: f64 = 30.0;
pub const WAVE_AMPLITUDE_STEP: f64 = 15.0;

/// Angular frequency per pixel of the first wave; each further wave subtracts [`WAVE_FREQUENCY_STEP`].
pub const WAVE_BASE_FREQUENCY: f64 = 0.005;
pub const WAVE_FREQUENCY_STEP: f64 = 0.001;

/// Baseline of the first wave as a fraction of canvas height.
pub const WAVE_BASE_LEVEL: f64 = 0.5;
pub const WAVE_LEVEL_STEP: f64 = 0.15;

/// Phase advance per frame, in radians.
pub const WAVE_PHASE_STEP: f64 = 0.02;

// ── Birds ───────────────────────────────────────────────────────

pub const BIRD_COUNT: usize = 3;

/// Half wingspan in pixels. A bird is drawn `2 * BIRD_SIZE` wide.
pub const BIRD_SIZE: f64 = 20.0;

/// Maximum absolute velocity per axis, in pixels per frame.
pub const BIRD_MAX_SPEED: f64 = 0.25;

/// Birds stay in the upper part of the canvas.
pub const BIRD_CEILING_FRACTION: f64 = 0.5;

pub const BIRD_STROKE: &str = "#545454";
pub const BIRD_LINE_WIDTH: f64 = 2.0;

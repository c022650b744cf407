//! Scene model: layered sine waves and a few drifting gulls.
//!
//! Everything here is pure arithmetic so it can be stepped and inspected in
//! native tests. The renderer reads a [`Scene`] and never mutates it.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{
    BIRD_CEILING_FRACTION, BIRD_COUNT, BIRD_MAX_SPEED, BIRD_SIZE, WAVE_AMPLITUDE_STEP, WAVE_BASE_AMPLITUDE,
    WAVE_BASE_FREQUENCY, WAVE_BASE_LEVEL, WAVE_COLORS, WAVE_FREQUENCY_STEP, WAVE_LEVEL_STEP, WAVE_PHASE_STEP,
};

/// Layer index as a multiplier for the per-layer wave steps.
#[allow(clippy::cast_precision_loss)]
fn layer_step(i: usize) -> f64 {
    i as f64
}

/// One horizontal sine band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    /// Baseline in canvas pixels.
    pub level: f64,
    pub color: &'static str,
}

impl Wave {
    /// Vertical position of the wave crest at horizontal pixel `x`.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.level + (x * self.frequency + self.phase).sin() * self.amplitude
    }
}

/// A gull drawn as two shallow arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

/// Full backdrop state for one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub waves: Vec<Wave>,
    pub birds: Vec<Bird>,
    frame: u64,
}

impl Scene {
    /// Build a scene for a `width` x `height` canvas.
    ///
    /// `random` must yield values in `[0, 1)`; it seeds bird positions and
    /// velocities. The browser passes `Math.random`, tests pass fixed sequences.
    pub fn new(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let waves = WAVE_COLORS
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                let step = layer_step(i);
                Wave {
                    amplitude: WAVE_BASE_AMPLITUDE + step * WAVE_AMPLITUDE_STEP,
                    frequency: WAVE_BASE_FREQUENCY - step * WAVE_FREQUENCY_STEP,
                    phase: 0.0,
                    level: height * (WAVE_BASE_LEVEL + step * WAVE_LEVEL_STEP),
                    color,
                }
            })
            .collect();

        let birds = (0..BIRD_COUNT)
            .map(|_| Bird {
                x: random() * width,
                y: random() * height * BIRD_CEILING_FRACTION,
                size: BIRD_SIZE,
                vx: (random() - 0.5) * 2.0 * BIRD_MAX_SPEED,
                vy: (random() - 0.5) * 2.0 * BIRD_MAX_SPEED,
            })
            .collect();

        Self { width, height, waves, birds, frame: 0 }
    }

    /// Number of frames stepped since construction.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Bottom edge of the band birds fly in (canvas y grows downward).
    #[must_use]
    pub fn bird_ceiling(&self) -> f64 {
        self.height * BIRD_CEILING_FRACTION
    }

    /// Advance the scene by one animation frame.
    pub fn step(&mut self) {
        for wave in &mut self.waves {
            wave.phase += WAVE_PHASE_STEP;
        }

        let (max_x, max_y) = (self.width, self.bird_ceiling());
        for bird in &mut self.birds {
            bird.x += bird.vx;
            bird.y += bird.vy;

            // Past an edge, velocity always points back inside.
            if bird.x < 0.0 {
                bird.vx = bird.vx.abs();
            } else if bird.x > max_x {
                bird.vx = -bird.vx.abs();
            }
            if bird.y < 0.0 {
                bird.vy = bird.vy.abs();
            } else if bird.y > max_y {
                bird.vy = -bird.vy.abs();
            }
        }

        self.frame += 1;
    }

    /// Follow a canvas resize. Wave baselines track the new height and birds
    /// are pulled back inside the new flight region.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        for (i, wave) in self.waves.iter_mut().enumerate() {
            wave.level = self.height * (WAVE_BASE_LEVEL + layer_step(i) * WAVE_LEVEL_STEP);
        }
        let (max_x, max_y) = (self.width, self.bird_ceiling());
        for bird in &mut self.birds {
            bird.x = bird.x.clamp(0.0, max_x);
            bird.y = bird.y.clamp(0.0, max_y);
        }
    }
}

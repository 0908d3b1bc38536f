//! The wheel motif: placed geometry plus per-wheel animation state.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;

use crate::animate::{PulseState, PULSE_PERIOD_MAX, PULSE_PERIOD_MIN};
use crate::packing::{rand_in, rand_period};
use crate::palette::Palette;

/// Outer-dot size as a factor of the wheel radius.
pub const OUTER_DOT_SIZE_FACTOR: f32 = 0.08;
/// Smallest per-tick rotation increment in radians (inclusive).
pub const ROTATION_SPEED_MIN: f32 = 0.003;
/// Largest per-tick rotation increment in radians (exclusive).
pub const ROTATION_SPEED_MAX: f32 = 0.015;

/// A circular motif with layered decorative rings.
///
/// Center and radius are fixed once the wheel is placed; only `rotation`
/// and the pulse advance over time. Wheels carry no identity of their own,
/// they are referenced by index in the owning [`crate::scene::Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    /// Center position in viewport coordinates.
    pub center: Vec2,
    /// Radius in viewport units.
    pub radius: f32,
    /// Five-role color palette.
    pub palette: Palette,
    /// Angle of the decorative stem, fixed at creation.
    pub stem_angle: f32,
    /// Current rotation in radians; grows without bound.
    pub rotation: f32,
    /// Per-tick rotation increment, fixed at creation.
    pub rotation_speed: f32,
    /// Eased outer-dot size oscillator.
    pub pulse: PulseState,
}

impl Wheel {
    /// Create a wheel at `center` with `radius`, drawing the stem angle,
    /// starting rotation, rotation speed and pulse period from `rng`.
    pub fn sample(center: Vec2, radius: f32, palette: Palette, rng: &mut dyn RngCore) -> Self {
        let stem_angle = rand_in(rng, 0.0, TAU);
        let rotation = rand_in(rng, 0.0, TAU);
        let rotation_speed = rand_in(rng, ROTATION_SPEED_MIN, ROTATION_SPEED_MAX);
        let period = rand_period(rng, PULSE_PERIOD_MIN, PULSE_PERIOD_MAX);

        Self {
            center,
            radius,
            palette,
            stem_angle,
            rotation,
            rotation_speed,
            pulse: PulseState::new(radius * OUTER_DOT_SIZE_FACTOR, period),
        }
    }

    /// Advance the wheel's animation by one tick.
    pub fn advance(&mut self, tick: u64) {
        self.rotation += self.rotation_speed;
        self.pulse.advance(tick);
    }
}

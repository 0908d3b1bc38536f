//! The connector link between two nearby wheels.
use std::f32::consts::PI;

use glam::Vec2;

use crate::palette::Color;
use crate::scene::Wheel;

/// A decorative link between two wheels.
///
/// Holds the indices of the joined wheels in the owning
/// [`crate::scene::Scene`] plus geometry precomputed at creation time.
/// The endpoints never need recomputing because wheel centers are fixed
/// after placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Index of the first wheel (`a < b`).
    pub a: usize,
    /// Index of the second wheel.
    pub b: usize,
    /// Display color of the link.
    pub color: Color,
    /// Angle from wheel `a` toward wheel `b`, in radians.
    pub angle: f32,
    /// Point on the boundary of wheel `a` along `angle`.
    pub start: Vec2,
    /// Point on the boundary of wheel `b` along the opposite angle.
    pub end: Vec2,
}

impl Connector {
    /// Create a connector joining `wheel_a` (index `a`) to `wheel_b`
    /// (index `b`), precomputing the boundary endpoints.
    pub fn between(a: usize, wheel_a: &Wheel, b: usize, wheel_b: &Wheel, color: Color) -> Self {
        let delta = wheel_b.center - wheel_a.center;
        let angle = delta.y.atan2(delta.x);
        let start = wheel_a.center + Vec2::from_angle(angle) * wheel_a.radius;
        let end = wheel_b.center + Vec2::from_angle(angle + PI) * wheel_b.radius;

        Self {
            a,
            b,
            color,
            angle,
            start,
            end,
        }
    }

    /// Distance between the two precomputed endpoints.
    pub fn span(&self) -> f32 {
        self.start.distance(self.end)
    }
}

//! Proximity-based derivation of connectors from a placed wheel set.
//!
//! A connector joins every unordered pair of wheels whose center distance
//! is strictly below [`LINK_REACH`] times their combined radius. The pass
//! is O(n²) over pairs, which is fine at the wheel counts the packer
//! produces (tens).
use rand::RngCore;

use crate::events::{EventSink, SceneEvent, SceneEventKind};
use crate::packing::rand01;
use crate::palette::Palette;
use crate::scene::{Connector, Wheel};

/// Link reach as a factor of a pair's combined radius.
pub const LINK_REACH: f32 = 1.3;

/// Derives connectors for every qualifying wheel pair.
///
/// Each connector's color is the base color of a palette drawn uniformly
/// from `palettes`, independent of either wheel's own palette.
pub fn link_wheels<R: RngCore>(
    wheels: &[Wheel],
    palettes: &[Palette],
    rng: &mut R,
) -> Vec<Connector> {
    link_wheels_with_events(wheels, palettes, rng, &mut ())
}

/// Like [`link_wheels`], emitting [`SceneEvent`]s into `sink`.
pub fn link_wheels_with_events<R: RngCore>(
    wheels: &[Wheel],
    palettes: &[Palette],
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Vec<Connector> {
    debug_assert!(!palettes.is_empty(), "palette set must not be empty");

    let mut connectors = Vec::new();
    for i in 0..wheels.len() {
        for j in (i + 1)..wheels.len() {
            let a = &wheels[i];
            let b = &wheels[j];
            let distance = a.center.distance(b.center);
            if distance < (a.radius + b.radius) * LINK_REACH {
                let pick = ((rand01(rng) * palettes.len() as f32) as usize)
                    .min(palettes.len() - 1);
                let color = palettes[pick].base();
                if sink.wants(SceneEventKind::ConnectorAdded) {
                    sink.send(SceneEvent::ConnectorAdded { a: i, b: j });
                }
                connectors.push(Connector::between(i, a, j, b, color));
            }
        }
    }

    connectors
}

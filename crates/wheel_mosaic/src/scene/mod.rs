//! The scene: the current wheel and connector sets plus generation glue.
//!
//! A [`Scene`] is generated in one shot (packing followed by connectivity)
//! and replaced wholesale whenever the viewport changes; it is never
//! partially mutated. With a single-threaded host the swap is atomic by
//! construction — simply bind the freshly generated value over the old one
//! between frames. A multi-threaded host must serialize that swap against
//! the render/update path behind one mutual-exclusion boundary.
use rand::RngCore;
use tracing::info;

pub mod connector;
pub mod wheel;

pub use connector::Connector;
pub use wheel::Wheel;

use crate::connect::link_wheels_with_events;
use crate::events::EventSink;
use crate::packing::{pack_wheels_with_events, PackingConfig};
use crate::palette::Palette;

/// The current composition: placed wheels and the connectors derived from
/// them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Wheels in placement order; connectors reference them by index.
    pub wheels: Vec<Wheel>,
    /// Connectors in derivation order.
    pub connectors: Vec<Connector>,
}

impl Scene {
    /// Generates a fresh scene: packs wheels, then derives connectors.
    ///
    /// Call this again with a new extent to handle a viewport resize; the
    /// returned value replaces the previous scene wholesale.
    pub fn generate<R: RngCore>(
        config: &PackingConfig,
        palettes: &[Palette],
        rng: &mut R,
    ) -> Self {
        Self::generate_with_events(config, palettes, rng, &mut ())
    }

    /// Like [`Scene::generate`], emitting [`crate::events::SceneEvent`]s
    /// into `sink`.
    pub fn generate_with_events<R: RngCore>(
        config: &PackingConfig,
        palettes: &[Palette],
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Self {
        let packed = pack_wheels_with_events(config, palettes, rng, sink);
        let connectors = link_wheels_with_events(&packed.wheels, palettes, rng, sink);

        info!(
            "Generated scene: {} wheels, {} connectors, {} attempts used.",
            packed.wheels.len(),
            connectors.len(),
            packed.attempts_used
        );

        Self {
            wheels: packed.wheels,
            connectors,
        }
    }

    /// Advances every wheel's animation by one tick.
    ///
    /// `tick` is the host's monotonic frame counter; passing it explicitly
    /// keeps the pulse triggers deterministic under test.
    pub fn advance(&mut self, tick: u64) {
        for wheel in &mut self.wheels {
            wheel.advance(tick);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }
}

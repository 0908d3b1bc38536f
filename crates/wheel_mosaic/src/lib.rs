#![forbid(unsafe_code)]
//! wheel_mosaic: procedural generation and animation of a mosaic of linked,
//! rotating wheel motifs.
//!
//! Modules:
//! - packing: constraint-based random placement of wheels in a viewport
//! - connect: proximity-based derivation of connector links
//! - scene: the owned wheel/connector sets and generation glue
//! - animate: per-tick rotation and eased size pulsation
//! - render: the drawing capability trait and the fixed-order pipeline
//! - events: sinks for observing scene generation
//!
//! Randomness is injected everywhere as [`rand::RngCore`], so a seeded
//! `StdRng` reproduces a scene exactly. For examples and docs, see README
//! and docs.rs.
pub mod animate;
pub mod connect;
pub mod error;
pub mod events;
pub mod packing;
pub mod palette;
pub mod render;
pub mod scene;

/// Convenient re-exports for common types. Import with `use wheel_mosaic::prelude::*;`.
pub mod prelude {
    pub use crate::animate::{
        lerp, PulseState, PulseTarget, EASING_FACTOR, PULSE_MAX_FACTOR, PULSE_MIN_FACTOR,
    };
    pub use crate::connect::{link_wheels, link_wheels_with_events, LINK_REACH};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, MultiSink, SceneEvent, SceneEventKind, VecSink};
    pub use crate::packing::{
        pack_wheels, pack_wheels_with_events, PackResult, PackingConfig, NEIGHBOR_REACH,
        OVERLAP_ALLOWANCE,
    };
    pub use crate::palette::{Color, Palette, PALETTE_LEN};
    pub use crate::render::{render_scene, Canvas, Stroke, Style};
    pub use crate::scene::{Connector, Scene, Wheel};
}

#![forbid(unsafe_code)]

mod palettes;
mod rendering;

pub use palettes::{mosaic_palettes, BACKGROUND};
pub use rendering::{init_tracing, PngCanvas};

use std::fs;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wheel_mosaic::prelude::*;
use wheel_mosaic_examples::{init_tracing, mosaic_palettes, PngCanvas, BACKGROUND};

const FRAME_COUNT: u64 = 120;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(1280.0, 720.0);
    let palettes = mosaic_palettes();
    let config = PackingConfig::new(extent);
    let mut rng = StdRng::seed_from_u64(7);

    let mut scene = Scene::generate(&config, &palettes, &mut rng);

    let out_dir = "mosaic-frames";
    fs::create_dir_all(out_dir)?;

    let mut canvas = PngCanvas::new(extent.x as u32, extent.y as u32, BACKGROUND);
    for tick in 1..=FRAME_COUNT {
        scene.advance(tick);
        canvas.clear(BACKGROUND);
        render_scene(&scene, &mut canvas);
        canvas.save_png(format!("{out_dir}/frame-{tick:03}.png"))?;
    }
    tracing::info!("Wrote {FRAME_COUNT} frames to {out_dir}/.");

    Ok(())
}

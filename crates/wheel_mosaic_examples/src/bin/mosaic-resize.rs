use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wheel_mosaic::prelude::*;
use wheel_mosaic_examples::{init_tracing, mosaic_palettes, PngCanvas, BACKGROUND};

/// Regenerates the scene for a new viewport, the way a windowed host
/// reacts to a resize event: the old scene is replaced wholesale.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let palettes = mosaic_palettes();
    let mut rng = StdRng::seed_from_u64(11);

    let extent = Vec2::new(1024.0, 1024.0);
    let mut scene = Scene::generate(&PackingConfig::new(extent), &palettes, &mut rng);
    for tick in 1..=60u64 {
        scene.advance(tick);
    }
    let mut canvas = PngCanvas::new(extent.x as u32, extent.y as u32, BACKGROUND);
    render_scene(&scene, &mut canvas);
    canvas.save_png("mosaic-before-resize.png")?;

    // The viewport grew: generate a fresh scene for the new extent and
    // bind it over the old one.
    let extent = Vec2::new(1920.0, 800.0);
    scene = Scene::generate(&PackingConfig::new(extent), &palettes, &mut rng);
    for tick in 1..=60u64 {
        scene.advance(tick);
    }
    let mut canvas = PngCanvas::new(extent.x as u32, extent.y as u32, BACKGROUND);
    render_scene(&scene, &mut canvas);
    canvas.save_png("mosaic-after-resize.png")?;

    tracing::info!("Wrote mosaic-before-resize.png and mosaic-after-resize.png.");

    Ok(())
}

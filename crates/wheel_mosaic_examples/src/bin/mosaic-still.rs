use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wheel_mosaic::prelude::*;
use wheel_mosaic_examples::{init_tracing, mosaic_palettes, PngCanvas, BACKGROUND};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(1600.0, 900.0);
    let palettes = mosaic_palettes();
    let config = PackingConfig::new(extent);
    let mut rng = StdRng::seed_from_u64(2025);

    // Observe generation through an event sink instead of parsing logs.
    let mut sink = FnSink::new(|event: SceneEvent| {
        tracing::debug!(?event, "scene event");
    });
    let mut scene = Scene::generate_with_events(&config, &palettes, &mut rng, &mut sink);

    // Let the pulses settle into their rhythm before the snapshot.
    for tick in 1..=240u64 {
        scene.advance(tick);
    }

    let mut canvas = PngCanvas::new(extent.x as u32, extent.y as u32, BACKGROUND);
    render_scene(&scene, &mut canvas);

    let out = "mosaic-still.png";
    canvas.save_png(out)?;
    tracing::info!("Wrote {out}.");

    Ok(())
}

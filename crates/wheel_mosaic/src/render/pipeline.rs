//! Fixed-order drawing of a scene onto a [`Canvas`].
//!
//! Connectors are painted first so wheels visually sit on top of them.
//! Each wheel is drawn under a local transform anchored at its center and
//! rotated by its current rotation; size constants are diameters relative
//! to the wheel radius unless stated otherwise.
use std::f32::consts::TAU;

use glam::Vec2;

use crate::palette::Color;
use crate::render::{Canvas, Stroke, Style};
use crate::scene::{Connector, Scene, Wheel};

const OUTER_DOT_COUNT: usize = 40;
const OUTER_DOT_RING: f32 = 0.9;

const SPOKE_COUNT: usize = 24;
const SPOKE_INNER: f32 = 0.55;
const SPOKE_OUTER: f32 = 0.8;
const SPOKE_WEIGHT: f32 = 0.03;

const INNER_DISC_SIZE: f32 = 0.6;
const INNER_DOT_COUNT: usize = 20;
const INNER_DOT_RING: f32 = 0.4;
const INNER_DOT_SIZE: f32 = 0.06;
const CENTER_DISC_SIZE: f32 = 0.3;
const CORE_DISC_SIZE: f32 = 0.15;

const STEM_START: f32 = 0.075;
const STEM_END: f32 = 0.5;
const STEM_CONTROL_RADIUS: f32 = 0.4;
const STEM_CONTROL_SWING: f32 = 0.5;
const STEM_WEIGHT: f32 = 0.04;
const STEM_CAP_SIZE: f32 = 0.08;

const CONNECTOR_LINE_WEIGHT: f32 = 5.0;
const CHAIN_LINK_SIZE: f32 = 10.0;
const CHAIN_LINK_OUTLINE_WEIGHT: f32 = 1.0;
const CHAIN_LINK_CORE_FACTOR: f32 = 0.4;
const CHAIN_LINK_FILL: Color = Color::rgb(255, 200, 100);

const BLOB_MIN_SPAN: f32 = 50.0;
const BLOB_SIZE: f32 = 20.0;
const BLOB_OUTLINE_WEIGHT: f32 = 3.0;
const BLOB_CORE_SIZE: f32 = 10.0;
const BLOB_DOT_COUNT: usize = 8;
const BLOB_DOT_RING: f32 = 15.0;
const BLOB_DOT_SIZE: f32 = 4.0;

/// Draws the whole scene in fixed layer order: all connectors, then all
/// wheels. An empty scene draws nothing.
pub fn render_scene(scene: &Scene, canvas: &mut impl Canvas) {
    for connector in &scene.connectors {
        draw_connector(connector, canvas);
    }
    for wheel in &scene.wheels {
        draw_wheel(wheel, canvas);
    }
}

fn draw_wheel(wheel: &Wheel, canvas: &mut impl Canvas) {
    let r = wheel.radius;
    let palette = &wheel.palette;

    canvas.save();
    canvas.translate(wheel.center);
    canvas.rotate(wheel.rotation);

    // Base disc.
    canvas.circle(Vec2::ZERO, r, Style::fill(palette.base()));

    // Pulsating outer dot ring.
    let dot_radius = wheel.pulse.current_size * 0.5;
    for i in 0..OUTER_DOT_COUNT {
        let angle = i as f32 / OUTER_DOT_COUNT as f32 * TAU;
        let pos = Vec2::from_angle(angle) * (r * OUTER_DOT_RING);
        canvas.circle(pos, dot_radius, Style::fill(palette.outer_dot()));
    }

    // Radial spokes.
    let spoke_stroke = Stroke::new(palette.spoke(), r * SPOKE_WEIGHT);
    for i in 0..SPOKE_COUNT {
        let angle = i as f32 / SPOKE_COUNT as f32 * TAU;
        let dir = Vec2::from_angle(angle);
        canvas.line(dir * (r * SPOKE_INNER), dir * (r * SPOKE_OUTER), spoke_stroke);
    }

    // Concentric decoration.
    canvas.circle(
        Vec2::ZERO,
        r * INNER_DISC_SIZE * 0.5,
        Style::fill(palette.inner_disc()),
    );
    for i in 0..INNER_DOT_COUNT {
        let angle = i as f32 / INNER_DOT_COUNT as f32 * TAU;
        let pos = Vec2::from_angle(angle) * (r * INNER_DOT_RING);
        canvas.circle(pos, r * INNER_DOT_SIZE * 0.5, Style::fill(palette.spoke()));
    }
    canvas.circle(
        Vec2::ZERO,
        r * CENTER_DISC_SIZE * 0.5,
        Style::fill(palette.center()),
    );
    canvas.circle(
        Vec2::ZERO,
        r * CORE_DISC_SIZE * 0.5,
        Style::fill(palette.base()),
    );

    draw_stem(wheel, canvas);

    canvas.restore();
}

fn draw_stem(wheel: &Wheel, canvas: &mut impl Canvas) {
    let r = wheel.radius;
    let dir = Vec2::from_angle(wheel.stem_angle);
    let start = dir * (r * STEM_START);
    let end = dir * (r * STEM_END);
    let control = Vec2::from_angle(wheel.stem_angle + STEM_CONTROL_SWING) * (r * STEM_CONTROL_RADIUS);

    let stroke = Stroke::new(wheel.palette.outer_dot(), r * STEM_WEIGHT);
    canvas.quad_curve(start, control, end, stroke);
    canvas.circle(
        end,
        r * STEM_CAP_SIZE * 0.5,
        Style::fill(wheel.palette.outer_dot()),
    );
}

fn draw_connector(connector: &Connector, canvas: &mut impl Canvas) {
    canvas.line(
        connector.start,
        connector.end,
        Stroke::new(connector.color, CONNECTOR_LINE_WEIGHT),
    );

    let span = connector.span();

    // Chain links, evenly spaced along the line including both ends.
    let link_count = (span / (CHAIN_LINK_SIZE * 2.0)).floor() as usize;
    if link_count > 0 {
        let link_style = Style::fill(CHAIN_LINK_FILL)
            .with_stroke(Stroke::new(connector.color, CHAIN_LINK_OUTLINE_WEIGHT));
        for i in 0..=link_count {
            let t = i as f32 / link_count as f32;
            let pos = connector.start.lerp(connector.end, t);
            canvas.circle(pos, CHAIN_LINK_SIZE * 0.5, link_style);
            canvas.circle(
                pos,
                CHAIN_LINK_SIZE * CHAIN_LINK_CORE_FACTOR * 0.5,
                Style::fill(Color::BLACK),
            );
        }
    }

    // Decorative blob at the midpoint of long connectors.
    if span > BLOB_MIN_SPAN {
        let mid = connector.start.lerp(connector.end, 0.5);
        canvas.circle(
            mid,
            BLOB_SIZE * 0.5,
            Style::fill(Color::WHITE)
                .with_stroke(Stroke::new(connector.color, BLOB_OUTLINE_WEIGHT)),
        );
        canvas.circle(mid, BLOB_CORE_SIZE * 0.5, Style::fill(connector.color));
        for i in 0..BLOB_DOT_COUNT {
            let angle = i as f32 / BLOB_DOT_COUNT as f32 * TAU;
            let pos = mid + Vec2::from_angle(angle) * BLOB_DOT_RING;
            canvas.circle(pos, BLOB_DOT_SIZE * 0.5, Style::fill(CHAIN_LINK_FILL));
        }
    }
}

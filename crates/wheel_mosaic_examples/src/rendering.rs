//! A PNG-backed software rasterizer implementing the core's [`Canvas`]
//! capability, plus tracing setup for the demo binaries.
//!
//! The rasterizer is deliberately simple: every primitive is stamped as
//! (rings of) filled discs. All transforms in the pipeline are rigid
//! (translation and rotation only), so radii and stroke weights carry over
//! to device space unchanged.
use std::path::Path;

use glam::{Affine2, Vec2};
use image::{Rgb, RgbImage};
use wheel_mosaic::palette::Color;
use wheel_mosaic::render::{Canvas, Stroke, Style};

/// Install a fmt tracing subscriber honoring `RUST_LOG`, default `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// An RGB image with a transform stack, usable as a [`Canvas`].
pub struct PngCanvas {
    image: RgbImage,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl PngCanvas {
    /// Create a canvas of the given pixel size, cleared to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let pixel = Rgb([background.r, background.g, background.b]);
        Self {
            image: RgbImage::from_pixel(width, height, pixel),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Clear the image back to `background` and reset the transform.
    pub fn clear(&mut self, background: Color) {
        let pixel = Rgb([background.r, background.g, background.b]);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgb([color.r, color.g, color.b]));
        }
    }

    /// Fill a disc given in device coordinates.
    fn stamp_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        let r = radius.max(0.5);
        let r2 = r * r;
        let x0 = (center.x - r).floor() as i64;
        let x1 = (center.x + r).ceil() as i64;
        let y0 = (center.y - r).floor() as i64;
        let y1 = (center.y + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroke a circle outline given in device coordinates.
    fn stamp_ring(&mut self, center: Vec2, radius: f32, weight: f32, color: Color) {
        let half = (weight * 0.5).max(0.5);
        let outer = radius + half;
        let x0 = (center.x - outer).floor() as i64;
        let x1 = (center.x + outer).ceil() as i64;
        let y0 = (center.y - outer).floor() as i64;
        let y1 = (center.y + outer).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - radius).abs() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stamp discs along a device-space segment.
    fn dab_segment(&mut self, from: Vec2, to: Vec2, weight: f32, color: Color) {
        let length = from.distance(to);
        let step = (weight * 0.25).max(0.25);
        let count = (length / step).ceil() as usize;
        for i in 0..=count {
            let t = if count == 0 { 0.0 } else { i as f32 / count as f32 };
            self.stamp_disc(from.lerp(to, t), weight * 0.5, color);
        }
    }
}

impl Canvas for PngCanvas {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.transform = previous;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: Style) {
        let device = self.transform.transform_point2(center);
        if let Some(fill) = style.fill {
            self.stamp_disc(device, radius, fill);
        }
        if let Some(stroke) = style.stroke {
            self.stamp_ring(device, radius, stroke.weight, stroke.color);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let a = self.transform.transform_point2(from);
        let b = self.transform.transform_point2(to);
        self.dab_segment(a, b, stroke.weight, stroke.color);
    }

    fn quad_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke) {
        // Flatten the curve into short segments before stamping.
        let rough_length = from.distance(control) + control.distance(to);
        let segments = ((rough_length / 2.0).ceil() as usize).max(8);
        let mut previous = self.transform.transform_point2(from);
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let inv = 1.0 - t;
            let point = from * (inv * inv) + control * (2.0 * inv * t) + to * (t * t);
            let device = self.transform.transform_point2(point);
            self.dab_segment(previous, device, stroke.weight, stroke.color);
            previous = device;
        }
    }
}

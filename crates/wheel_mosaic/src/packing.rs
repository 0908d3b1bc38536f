//! Constraint-based random packing of wheels into a rectangular viewport.
//!
//! Candidates are rejection-sampled: a position and radius are drawn
//! uniformly at random (padded so the full circle stays inbounds) and kept
//! only if the candidate does not overlap any placed wheel beyond the
//! allowance AND sits close enough to at least one placed wheel to later
//! receive a connector. Running out of attempts is not an error; the packer
//! returns whatever subset it managed to place.
use glam::Vec2;
use rand::RngCore;
use tracing::warn;

use crate::error::{Error, Result};
use crate::events::{EventSink, SceneEvent, SceneEventKind};
use crate::palette::Palette;
use crate::scene::Wheel;

/// Permitted overlap as a factor of the smaller radius of a pair.
///
/// Two wheels may approach each other until their center distance drops to
/// the sum of radii minus this fraction of the smaller radius; the layered
/// look of the composition depends on that moderate overlap.
pub const OVERLAP_ALLOWANCE: f32 = 0.4;

/// Neighbor requirement reach as a factor of a pair's combined radius.
pub const NEIGHBOR_REACH: f32 = 1.5;

/// Default number of wheels to place.
pub const DEFAULT_TARGET_COUNT: usize = 25;

/// Default candidate attempt budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5000;

/// Smallest wheel radius as a factor of the viewport width.
pub const VIEWPORT_MIN_RADIUS_FACTOR: f32 = 0.04;

/// Largest wheel radius as a factor of the viewport width.
pub const VIEWPORT_MAX_RADIUS_FACTOR: f32 = 0.12;

/// Configuration for packing wheels into a viewport.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackingConfig {
    /// Viewport size in world units.
    pub extent: Vec2,
    /// Number of wheels to try to place.
    pub target_count: usize,
    /// Smallest candidate radius (inclusive).
    pub min_radius: f32,
    /// Largest candidate radius (exclusive).
    pub max_radius: f32,
    /// Candidate attempt budget.
    pub max_attempts: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            extent: Vec2::ZERO,
            target_count: DEFAULT_TARGET_COUNT,
            min_radius: 0.0,
            max_radius: 0.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PackingConfig {
    /// Creates a new [`PackingConfig`] for the given viewport, deriving the
    /// radius range from the viewport width.
    pub fn new(extent: Vec2) -> Self {
        Self {
            extent,
            min_radius: extent.x * VIEWPORT_MIN_RADIUS_FACTOR,
            max_radius: extent.x * VIEWPORT_MAX_RADIUS_FACTOR,
            ..Default::default()
        }
    }

    /// Sets the target wheel count.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    /// Sets an explicit radius range, overriding the width-derived one.
    pub fn with_radius_range(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    /// Sets the candidate attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.extent.x <= 0.0 || self.extent.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "extent must be > 0 in both components".into(),
            ));
        }
        if self.min_radius <= 0.0 {
            return Err(Error::InvalidConfig("min_radius must be > 0".into()));
        }
        if self.max_radius < self.min_radius {
            return Err(Error::InvalidConfig(
                "max_radius must be >= min_radius".into(),
            ));
        }
        if self.max_radius * 2.0 > self.extent.x || self.max_radius * 2.0 > self.extent.y {
            return Err(Error::InvalidConfig(
                "a wheel of max_radius must fit inside the extent".into(),
            ));
        }

        Ok(())
    }
}

/// Result of a packing run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PackResult {
    /// Wheels placed, in placement order.
    pub wheels: Vec<Wheel>,
    /// Attempts consumed from the budget.
    pub attempts_used: usize,
    /// Candidates rejected by the overlap or neighbor constraints.
    pub candidates_rejected: usize,
}

impl PackResult {
    /// Whether the run placed fewer wheels than the configured target.
    pub fn fell_short_of(&self, target_count: usize) -> bool {
        self.wheels.len() < target_count
    }
}

/// Packs wheels according to `config`, drawing palettes from `palettes`.
///
/// The config must be valid per [`PackingConfig::validate`] and `palettes`
/// must not be empty; both are caller-owned preconditions.
pub fn pack_wheels<R: RngCore>(
    config: &PackingConfig,
    palettes: &[Palette],
    rng: &mut R,
) -> PackResult {
    pack_wheels_with_events(config, palettes, rng, &mut ())
}

/// Like [`pack_wheels`], emitting [`SceneEvent`]s into `sink`.
pub fn pack_wheels_with_events<R: RngCore>(
    config: &PackingConfig,
    palettes: &[Palette],
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> PackResult {
    debug_assert!(config.validate().is_ok(), "packing config must be valid");
    debug_assert!(!palettes.is_empty(), "palette set must not be empty");

    if sink.wants(SceneEventKind::PackStarted) {
        sink.send(SceneEvent::PackStarted {
            target_count: config.target_count,
            extent: config.extent,
        });
    }

    let mut wheels: Vec<Wheel> = Vec::with_capacity(config.target_count);
    let mut previous_palette: Option<usize> = None;
    let mut attempts = 0;
    let mut rejected = 0;

    while wheels.len() < config.target_count && attempts < config.max_attempts {
        attempts += 1;

        let radius = rand_in(rng, config.min_radius, config.max_radius);
        let center = Vec2::new(
            rand_in(rng, radius, config.extent.x - radius),
            rand_in(rng, radius, config.extent.y - radius),
        );

        let mut overlaps_too_much = false;
        // The very first wheel is exempt from the neighbor requirement.
        let mut has_neighbor = wheels.is_empty();
        for other in &wheels {
            let distance = center.distance(other.center);
            let combined = radius + other.radius;
            let allowance = radius.min(other.radius) * OVERLAP_ALLOWANCE;
            if distance < combined - allowance {
                overlaps_too_much = true;
                break;
            }
            if distance < combined * NEIGHBOR_REACH {
                has_neighbor = true;
            }
        }

        if overlaps_too_much || !has_neighbor {
            rejected += 1;
            continue;
        }

        let palette_index = pick_palette_index(palettes.len(), previous_palette, rng);
        previous_palette = Some(palette_index);

        let wheel = Wheel::sample(center, radius, palettes[palette_index], rng);
        if sink.wants(SceneEventKind::WheelPlaced) {
            sink.send(SceneEvent::WheelPlaced {
                index: wheels.len(),
                center,
                radius,
            });
        }
        wheels.push(wheel);
    }

    if wheels.len() < config.target_count {
        warn!(
            "Placed {} of {} wheels before the attempt budget of {} ran out.",
            wheels.len(),
            config.target_count,
            config.max_attempts
        );
        if sink.wants(SceneEventKind::Warning) {
            sink.send(SceneEvent::Warning {
                context: "packing".into(),
                message: format!(
                    "placed {} of {} wheels before the attempt budget ran out",
                    wheels.len(),
                    config.target_count
                ),
            });
        }
    }

    if sink.wants(SceneEventKind::PackFinished) {
        sink.send(SceneEvent::PackFinished {
            placed: wheels.len(),
            attempts_used: attempts,
            candidates_rejected: rejected,
        });
    }

    PackResult {
        wheels,
        attempts_used: attempts,
        candidates_rejected: rejected,
    }
}

/// Uniform palette pick that never repeats the previous pick when more
/// than one palette exists.
fn pick_palette_index(len: usize, previous: Option<usize>, rng: &mut dyn RngCore) -> usize {
    let first = ((rand01(rng) * len as f32) as usize).min(len - 1);
    match previous {
        Some(prev) if len > 1 && first == prev => {
            // Re-draw uniformly over the remaining palettes.
            let other = ((rand01(rng) * (len - 1) as f32) as usize).min(len - 2);
            if other >= prev {
                other + 1
            } else {
                other
            }
        }
        _ => first,
    }
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a random float in the range [lo, hi).
#[inline]
pub(crate) fn rand_in(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    lo + rand01(rng) * (hi - lo)
}

/// Generate a random tick count in the range [lo, hi).
#[inline]
pub(crate) fn rand_period(rng: &mut dyn RngCore, lo: u64, hi: u64) -> u64 {
    lo + (rand01(rng) * (hi - lo) as f32) as u64
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::events::VecSink;

    fn palettes(n: usize) -> Vec<Palette> {
        (0..n)
            .map(|i| {
                let base = (i as u32 + 1) * 0x111111;
                Palette::from_hex([base, base + 1, base + 2, base + 3, base + 4])
            })
            .collect()
    }

    fn scenario_config() -> PackingConfig {
        PackingConfig::new(Vec2::new(1000.0, 1000.0))
            .with_target_count(25)
            .with_radius_range(40.0, 120.0)
            .with_max_attempts(5000)
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        assert!(PackingConfig::default().validate().is_err());
        assert!(PackingConfig::new(Vec2::new(0.0, 100.0)).validate().is_err());
        assert!(PackingConfig::new(Vec2::new(1000.0, 1000.0))
            .with_radius_range(50.0, 40.0)
            .validate()
            .is_err());
        assert!(PackingConfig::new(Vec2::new(100.0, 100.0))
            .with_radius_range(10.0, 60.0)
            .validate()
            .is_err());
        assert!(scenario_config().validate().is_ok());
    }

    #[test]
    fn viewport_constructor_derives_radius_range_from_width() {
        let config = PackingConfig::new(Vec2::new(1000.0, 800.0));
        assert_eq!(config.min_radius, 40.0);
        assert_eq!(config.max_radius, 120.0);
        assert_eq!(config.target_count, DEFAULT_TARGET_COUNT);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn packed_wheels_stay_inside_the_viewport() {
        let config = scenario_config();
        let mut rng = StdRng::seed_from_u64(2025);
        let result = pack_wheels(&config, &palettes(6), &mut rng);

        assert!(!result.wheels.is_empty());
        assert!(result.wheels.len() <= config.target_count);
        for wheel in &result.wheels {
            assert!((config.min_radius..=config.max_radius).contains(&wheel.radius));
            assert!(wheel.center.x >= wheel.radius);
            assert!(wheel.center.x <= config.extent.x - wheel.radius);
            assert!(wheel.center.y >= wheel.radius);
            assert!(wheel.center.y <= config.extent.y - wheel.radius);
        }
    }

    #[test]
    fn no_pair_violates_the_overlap_allowance() {
        let config = scenario_config();
        let mut rng = StdRng::seed_from_u64(7);
        let wheels = pack_wheels(&config, &palettes(6), &mut rng).wheels;

        for i in 0..wheels.len() {
            for j in (i + 1)..wheels.len() {
                let a = &wheels[i];
                let b = &wheels[j];
                let distance = a.center.distance(b.center);
                let floor =
                    a.radius + b.radius - a.radius.min(b.radius) * OVERLAP_ALLOWANCE;
                assert!(
                    distance >= floor - 1e-3,
                    "wheels {i} and {j} overlap beyond the allowance"
                );
            }
        }
    }

    #[test]
    fn every_wheel_after_the_first_had_a_neighbor_at_placement() {
        let config = scenario_config();
        let mut rng = StdRng::seed_from_u64(11);
        let wheels = pack_wheels(&config, &palettes(6), &mut rng).wheels;

        for k in 1..wheels.len() {
            let wheel = &wheels[k];
            let has_neighbor = wheels[..k].iter().any(|other| {
                wheel.center.distance(other.center)
                    < (wheel.radius + other.radius) * NEIGHBOR_REACH
            });
            assert!(has_neighbor, "wheel {k} was placed without a neighbor");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_packing() {
        let config = scenario_config();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = pack_wheels(&config, &palettes(6), &mut rng_a);
        let b = pack_wheels(&config, &palettes(6), &mut rng_b);
        assert_eq!(a.wheels, b.wheels);
        assert_eq!(a.attempts_used, b.attempts_used);
    }

    #[test]
    fn consecutive_wheels_never_share_a_palette() {
        let config = scenario_config();
        let mut rng = StdRng::seed_from_u64(3);
        let wheels = pack_wheels(&config, &palettes(3), &mut rng).wheels;

        assert!(wheels.len() > 2);
        for pair in wheels.windows(2) {
            assert_ne!(pair[0].palette, pair[1].palette);
        }
    }

    #[test]
    fn a_single_palette_is_reused_freely() {
        let config = scenario_config().with_target_count(5);
        let mut rng = StdRng::seed_from_u64(9);
        let wheels = pack_wheels(&config, &palettes(1), &mut rng).wheels;
        assert!(wheels.len() > 1);
        for pair in wheels.windows(2) {
            assert_eq!(pair[0].palette, pair[1].palette);
        }
    }

    #[test]
    fn exhausted_budget_yields_a_partial_result_and_a_warning() {
        // Radii close to the extent leave room for very few wheels.
        let config = PackingConfig::new(Vec2::new(220.0, 220.0))
            .with_radius_range(80.0, 100.0)
            .with_target_count(10)
            .with_max_attempts(60);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sink = VecSink::new();
        let result = pack_wheels_with_events(&config, &palettes(6), &mut rng, &mut sink);

        assert!(result.fell_short_of(config.target_count));
        assert_eq!(result.attempts_used, config.max_attempts);

        let events = sink.into_inner();
        let placed = events
            .iter()
            .filter(|e| matches!(e, SceneEvent::WheelPlaced { .. }))
            .count();
        assert_eq!(placed, result.wheels.len());
        assert!(events
            .iter()
            .any(|e| matches!(e, SceneEvent::Warning { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, SceneEvent::PackFinished { .. })));
    }

    #[test]
    fn warning_is_emitted_exactly_when_the_run_falls_short() {
        let config = scenario_config();
        let mut rng = StdRng::seed_from_u64(2025);
        let mut sink = VecSink::new();
        let result = pack_wheels_with_events(&config, &palettes(6), &mut rng, &mut sink);

        let warned = sink
            .as_slice()
            .iter()
            .any(|e| matches!(e, SceneEvent::Warning { .. }));
        assert_eq!(warned, result.fell_short_of(config.target_count));
    }

    #[test]
    fn zero_target_returns_an_empty_result() {
        let config = scenario_config().with_target_count(0);
        let mut rng = StdRng::seed_from_u64(1);
        let result = pack_wheels(&config, &palettes(6), &mut rng);
        assert!(result.wheels.is_empty());
        assert_eq!(result.attempts_used, 0);
    }

    #[test]
    fn palette_pick_avoids_the_previous_index() {
        let mut rng = StdRng::seed_from_u64(17);
        for prev in 0..4 {
            for _ in 0..200 {
                let picked = pick_palette_index(4, Some(prev), &mut rng);
                assert!(picked < 4);
                assert_ne!(picked, prev);
            }
        }
    }

    #[test]
    fn palette_pick_with_one_entry_always_returns_it() {
        let mut rng = StdRng::seed_from_u64(23);
        assert_eq!(pick_palette_index(1, Some(0), &mut rng), 0);
        assert_eq!(pick_palette_index(1, None, &mut rng), 0);
    }

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!((0.0..=1.0).contains(&result));
    }

    #[test]
    fn rand_in_maps_the_unit_range_onto_bounds() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand_in(&mut rng, 3.0, 9.0), 3.0);
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand_in(&mut rng, 0.0, 10.0) - 5.0).abs() < 0.001);
    }

    #[test]
    fn rand_period_stays_in_range() {
        for value in [0, u32::MAX / 3, u32::MAX] {
            let mut rng = FixedRng { value };
            let period = rand_period(&mut rng, 80, 200);
            assert!((80..=200).contains(&period));
        }
    }
}

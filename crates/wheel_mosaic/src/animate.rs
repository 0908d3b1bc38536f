//! Per-tick animation state: eased size pulsation.
//!
//! Every wheel carries a [`PulseState`] that oscillates its outer-dot size
//! between a shrunken and a grown bound. The state is advanced once per
//! render tick with an externally supplied monotonic tick counter, so tests
//! can drive time explicitly and two runs fed the same ticks are identical.

/// Lower bound of the pulse as a factor of the initial size.
pub const PULSE_MIN_FACTOR: f32 = 0.85;
/// Upper bound of the pulse as a factor of the initial size.
pub const PULSE_MAX_FACTOR: f32 = 1.15;
/// Per-tick interpolation fraction toward the current pulse target.
pub const EASING_FACTOR: f32 = 0.1;
/// Smallest pulse period in ticks (inclusive).
pub const PULSE_PERIOD_MIN: u64 = 80;
/// Largest pulse period in ticks (exclusive).
pub const PULSE_PERIOD_MAX: u64 = 200;

/// Linear interpolation from `from` toward `to` by fraction `t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Which of the two pulse bounds the size is currently easing toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseTarget {
    Grow,
    Shrink,
}

impl PulseTarget {
    fn flipped(self) -> Self {
        match self {
            PulseTarget::Grow => PulseTarget::Shrink,
            PulseTarget::Shrink => PulseTarget::Grow,
        }
    }
}

/// Eased two-state size oscillator.
///
/// The target flips whenever the tick counter crosses a period boundary;
/// the current size then approaches the target by linear interpolation
/// every tick. With [`EASING_FACTOR`] in (0, 1) the size decelerates into
/// the target and in practice never quite reaches it before the next flip,
/// which keeps the motion smooth instead of sawtooth-shaped.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseState {
    /// Size at creation; the pulse bounds derive from it.
    pub initial_size: f32,
    /// Current animated size.
    pub current_size: f32,
    /// Bound the size is easing toward.
    pub target: PulseTarget,
    /// Ticks between target flips.
    pub period: u64,
}

impl PulseState {
    /// Create a pulse at rest at `initial_size`, flipping every `period`
    /// ticks. The first flip turns the target to [`PulseTarget::Grow`].
    pub fn new(initial_size: f32, period: u64) -> Self {
        debug_assert!(period > 0, "pulse period must be > 0");
        Self {
            initial_size,
            current_size: initial_size,
            target: PulseTarget::Shrink,
            period,
        }
    }

    /// Size the pulse is currently easing toward.
    pub fn target_size(&self) -> f32 {
        match self.target {
            PulseTarget::Grow => self.initial_size * PULSE_MAX_FACTOR,
            PulseTarget::Shrink => self.initial_size * PULSE_MIN_FACTOR,
        }
    }

    /// Advance the pulse by one tick.
    ///
    /// A tick value of zero counts as a period boundary; hosts typically
    /// start their counter at one.
    pub fn advance(&mut self, tick: u64) {
        if tick % self.period == 0 {
            self.target = self.target.flipped();
        }
        self.current_size = lerp(self.current_size, self.target_size(), EASING_FACTOR);
    }
}

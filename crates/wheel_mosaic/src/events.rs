//! Event types and sinks for observing scene generation.
//!
//! This module defines [`SceneEvent`] and a set of sinks and adapters to
//! emit, collect, or forward events while packing wheels via
//! [`crate::packing::pack_wheels`] or generating a full scene via
//! [`crate::scene::Scene::generate`].
use glam::Vec2;

/// Describes events emitted while generating a scene.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SceneEvent {
    /// Emitted when packing starts.
    PackStarted {
        /// Number of wheels the packer will try to place.
        target_count: usize,
        /// Viewport extent in world units.
        extent: Vec2,
    },

    /// Emitted when a candidate wheel is accepted.
    WheelPlaced {
        /// Index of the wheel in the packed sequence.
        index: usize,
        /// Center of the accepted wheel.
        center: Vec2,
        /// Radius of the accepted wheel.
        radius: f32,
    },

    /// Emitted when packing ends, whether or not the target was reached.
    PackFinished {
        /// Number of wheels actually placed.
        placed: usize,
        /// Attempts consumed from the budget.
        attempts_used: usize,
        /// Candidates rejected by the overlap or neighbor constraints.
        candidates_rejected: usize,
    },

    /// Emitted when a connector between two wheels is derived.
    ConnectorAdded {
        /// Index of the first wheel.
        a: usize,
        /// Index of the second wheel.
        b: usize,
    },

    /// Non-fatal warning generated during scene generation.
    Warning {
        /// Context string (e.g. "packing").
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant for [`SceneEvent`], used by sinks to opt out of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEventKind {
    PackStarted,
    WheelPlaced,
    PackFinished,
    ConnectorAdded,
    Warning,
}

impl SceneEvent {
    pub fn kind(&self) -> SceneEventKind {
        match self {
            SceneEvent::PackStarted { .. } => SceneEventKind::PackStarted,
            SceneEvent::WheelPlaced { .. } => SceneEventKind::WheelPlaced,
            SceneEvent::PackFinished { .. } => SceneEventKind::PackFinished,
            SceneEvent::ConnectorAdded { .. } => SceneEventKind::ConnectorAdded,
            SceneEvent::Warning { .. } => SceneEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`SceneEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SceneEvent);

    /// Whether the sink is interested in events of the given kind.
    /// Producers may skip constructing events the sink does not want.
    fn wants(&self, _kind: SceneEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SceneEvent) {}

    #[inline]
    fn wants(&self, _kind: SceneEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SceneEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SceneEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SceneEvent),
{
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SceneEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SceneEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SceneEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: SceneEventKind) -> bool {
        self.sinks.iter().any(|sink| sink.wants(kind))
    }
}

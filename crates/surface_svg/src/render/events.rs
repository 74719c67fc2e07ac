//! Event types and sinks for observing renders.
//!
//! This module defines [`RenderEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while a document is produced by
//! [`crate::render::runner::Renderer`] or [`crate::render::runner::render_document`].
use crate::mesh::GridSpec;
use crate::render::runner::RenderStats;

/// Describes events emitted while rendering.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Emitted before the first cell is scanned.
    RenderStarted {
        /// The grid being rendered.
        spec: GridSpec,
        /// Number of cells that will be visited.
        cell_count: usize,
    },

    /// Emitted when a cell is left out because a corner height is not finite.
    CellSkipped {
        /// Cell indices `(i, j)`.
        cell: (u32, u32),
        /// Indices of the offending corner.
        corner: (u32, u32),
        /// The non-finite height sampled there.
        z: f64,
    },

    /// Emitted after the document footer has been written.
    RenderFinished {
        /// Totals for the whole render.
        stats: RenderStats,
    },
}

/// Discriminant of [`RenderEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderEventKind {
    RenderStarted,
    CellSkipped,
    RenderFinished,
}

impl RenderEvent {
    pub fn kind(&self) -> RenderEventKind {
        match self {
            RenderEvent::RenderStarted { .. } => RenderEventKind::RenderStarted,
            RenderEvent::CellSkipped { .. } => RenderEventKind::CellSkipped,
            RenderEvent::RenderFinished { .. } => RenderEventKind::RenderFinished,
        }
    }
}

/// A generic event sink that accepts [`RenderEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: RenderEvent);

    /// Returns `false` to skip building events of the given kind.
    fn wants(&self, _kind: RenderEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: RenderEvent) {}

    #[inline]
    fn wants(&self, _kind: RenderEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(RenderEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(RenderEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(RenderEvent),
{
    #[inline]
    fn send(&mut self, event: RenderEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<RenderEvent>,
    only: Option<Vec<RenderEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects only events of the listed kinds.
    pub fn only(kinds: &[RenderEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<RenderEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[RenderEvent] {
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
    fn send(&mut self, event: RenderEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: RenderEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
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

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: RenderEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for sink in &mut self.sinks[..last_idx] {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: RenderEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

//! Events emitted while a layout is generated
//!
//! The solver pushes events at every observable change; consumers such as
//! renderers, spawners, or tests receive them through an [`EventSink`] and
//! return nothing. A host that only polls the grid can pass [`NullSink`].

/// One observable change during generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A cell was resolved; fires exactly once per cell
    TilePlaced {
        /// Cell x coordinate
        x: usize,
        /// Cell y coordinate
        y: usize,
        /// Catalog index of the committed tile
        tile: usize,
    },
    /// An unresolved cell's candidate set changed
    ///
    /// Fires for every cell at initialization and after each propagation
    /// that removed candidates.
    CandidatesChanged {
        /// Cell x coordinate
        x: usize,
        /// Cell y coordinate
        y: usize,
        /// Candidates still allowed at the cell
        remaining: usize,
        /// Catalog size, for rendering constraint heat
        total: usize,
    },
    /// A cell ran out of candidates; fires once per cell per attempt
    Contradiction {
        /// Cell x coordinate
        x: usize,
        /// Cell y coordinate
        y: usize,
    },
    /// The process reached its terminal state
    GenerationFinished {
        /// False only when unreported contradictions remained at the end
        success: bool,
    },
}

/// Push-style consumer of generation events
pub trait EventSink {
    /// Receive one event
    fn emit(&mut self, event: GenerationEvent);
}

impl<F> EventSink for F
where
    F: FnMut(GenerationEvent),
{
    fn emit(&mut self, event: GenerationEvent) {
        self(event);
    }
}

/// Sink that discards every event
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GenerationEvent) {}
}

/// Recording sink keeping every event in order
///
/// Drives the test suite, the CLI event trace, and GIF replay.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GenerationEvent>,
}

impl EventLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events in emission order
    pub fn events(&self) -> &[GenerationEvent] {
        &self.events
    }

    /// Only the tile placements, in emission order
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match event {
            GenerationEvent::TilePlaced { x, y, tile } => Some((*x, *y, *tile)),
            _ => None,
        })
    }

    /// Number of recorded events
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}

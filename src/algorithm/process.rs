//! Resumable generation process state machine
//!
//! The original generation loop is flattened into an explicit state machine
//! so a host can drive it one suspension at a time: initialization is one
//! resumable unit, every solving step is another, and a step is atomic with
//! no partial rollback. All loop-local state lives in persistent fields.

use crate::algorithm::events::{EventSink, GenerationEvent};
use crate::algorithm::solver::{self, StepOutcome};
use crate::io::error::{LayoutError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileCatalog;
use rand::{SeedableRng, rngs::StdRng};

/// What to do when a cell runs out of candidates
///
/// Read at scan time; switching policy mid-run applies from the next scan
/// and never reinterprets contradictions already reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContradictionPolicy {
    /// Report the cell once, mark it terminal, and keep generating
    #[default]
    Placeholder,
    /// Discard the grid and start a fresh attempt with the same random stream
    Restart,
}

/// Lifecycle of a generation process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// No generation has started yet
    Uninitialized,
    /// Building the starting grid
    Initializing,
    /// Stepping through the main observe/collapse/propagate loop
    Looping,
    /// Generation is over; further advances are no-ops
    Finished,
}

/// One resumable generation run over an owned grid
///
/// Owns the grid exclusively for the duration of an attempt and the single
/// random stream feeding both tie-break jitter and collapse draws. The
/// stream is seeded once at construction and never reseeded, so policy
/// restarts continue it and identically seeded processes emit identical
/// event sequences.
pub struct GenerationProcess {
    catalog: TileCatalog,
    width: usize,
    height: usize,
    policy: ContradictionPolicy,
    rng: StdRng,
    grid: Option<Grid>,
    state: ProcessState,
}

impl GenerationProcess {
    /// Create a process for the given catalog and dimensions
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] when either dimension is
    /// zero; the failure surfaces before any generation starts.
    pub fn new(
        catalog: TileCatalog,
        width: usize,
        height: usize,
        policy: ContradictionPolicy,
        seed: u64,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidDimensions { width, height });
        }

        Ok(Self {
            catalog,
            width,
            height,
            policy,
            rng: StdRng::seed_from_u64(seed),
            grid: None,
            state: ProcessState::Uninitialized,
        })
    }

    /// Discard any progress and run the initialization phase
    ///
    /// Valid from every state. Initialization is itself one resumable unit:
    /// when this returns the process is suspended in [`ProcessState::Looping`]
    /// waiting for its first [`Self::advance`]. The random stream continues;
    /// it is not reseeded.
    pub fn reset(&mut self, sink: &mut impl EventSink) {
        self.reinitialize(sink);
    }

    /// Perform exactly one solving step
    ///
    /// In [`ProcessState::Looping`] this runs one observe/collapse/propagate
    /// unit. A restart outcome rebuilds the grid in place and consumes the
    /// step. A finished outcome emits the final event and moves to
    /// [`ProcessState::Finished`], where further calls are no-ops, as they
    /// are before any reset.
    pub fn advance(&mut self, sink: &mut impl EventSink) {
        if self.state != ProcessState::Looping {
            return;
        }
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        match solver::step(grid, &self.catalog, &mut self.rng, self.policy, sink) {
            StepOutcome::Placed => {}
            StepOutcome::Restarted => self.reinitialize(sink),
            StepOutcome::Finished { success } => {
                sink.emit(GenerationEvent::GenerationFinished { success });
                self.state = ProcessState::Finished;
            }
        }
    }

    fn reinitialize(&mut self, sink: &mut impl EventSink) {
        self.state = ProcessState::Initializing;
        self.grid = Some(solver::initialize(
            &self.catalog,
            self.width,
            self.height,
            sink,
        ));
        self.state = ProcessState::Looping;
    }

    /// Current lifecycle state
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    /// The grid of the active attempt, if any generation has started
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Active contradiction policy
    pub const fn policy(&self) -> ContradictionPolicy {
        self.policy
    }

    /// Swap the contradiction policy, effective from the next scan
    pub fn set_policy(&mut self, policy: ContradictionPolicy) {
        self.policy = policy;
    }

    /// Configured grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The catalog this process generates from
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }
}

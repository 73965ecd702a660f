//! Grid state management for one generation attempt
//!
//! Holds the per-cell solver state for a width by height layout. The grid is
//! created fresh on every reset, mutated exclusively by the solver while
//! stepping, and discarded wholesale when a reset or policy restart replaces
//! it. Hosts observe it through read-only queries.

use crate::algorithm::candidates::CandidateSet;
use ndarray::Array2;

/// Solver state of a single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Still open; holds the tile indices allowed here
    ///
    /// An empty candidate set is an unreported contradiction: the next scan
    /// reports it and the cell becomes [`CellState::Contradiction`].
    Unresolved(CandidateSet),
    /// Permanently committed to one catalog tile index
    Resolved(usize),
    /// Reported contradiction; terminal until the whole grid is replaced
    Contradiction,
}

impl CellState {
    /// The candidate set of an unresolved cell
    pub const fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            Self::Unresolved(set) => Some(set),
            _ => None,
        }
    }

    /// The committed tile index of a resolved cell
    pub const fn resolved_tile(&self) -> Option<usize> {
        match self {
            Self::Resolved(tile) => Some(*tile),
            _ => None,
        }
    }
}

/// Width by height array of cell states for one generation attempt
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<CellState>,
    width: usize,
    height: usize,
    catalog_len: usize,
}

impl Grid {
    /// Create a grid with every cell open to the full catalog
    ///
    /// Boundary filtering is the solver's job at initialization; a freshly
    /// constructed grid allows all `catalog_len` tiles everywhere.
    pub fn new(width: usize, height: usize, catalog_len: usize) -> Self {
        let cells = Array2::from_shape_fn((width, height), |_| {
            CellState::Unresolved(CandidateSet::all(catalog_len))
        });

        Self {
            cells,
            width,
            height,
            catalog_len,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of tiles in the catalog this grid was built against
    ///
    /// This is the `totalTileCount` of the constraint score and the `total`
    /// reported in candidate-change events.
    pub const fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    /// The state of cell `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<&CellState> {
        self.cells.get([x, y])
    }

    /// Mutable access to cell `(x, y)`
    ///
    /// Reserved for the solver; hosts use the read-only queries.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut CellState> {
        self.cells.get_mut([x, y])
    }

    /// The committed tile at `(x, y)`, if that cell is resolved
    pub fn resolved_tile(&self, x: usize, y: usize) -> Option<usize> {
        self.cell(x, y).and_then(CellState::resolved_tile)
    }

    /// Remaining candidate count at `(x, y)`, if that cell is unresolved
    pub fn candidate_count(&self, x: usize, y: usize) -> Option<usize> {
        self.cell(x, y)
            .and_then(CellState::candidates)
            .map(CandidateSet::count)
    }

    /// Visit every cell in scan order (x-major: outer x, inner y)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &CellState)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), state)| (x, y, state))
    }

    /// Number of resolved cells
    pub fn resolved_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| matches!(state, CellState::Resolved(_)))
            .count()
    }

    /// Number of reported contradiction cells
    pub fn contradiction_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| matches!(state, CellState::Contradiction))
            .count()
    }

    /// Number of cells still unresolved
    pub fn unresolved_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| matches!(state, CellState::Unresolved(_)))
            .count()
    }

    /// Whether any unresolved cell has run out of candidates unreported
    pub fn has_unreported_contradiction(&self) -> bool {
        self.cells.iter().any(|state| {
            state
                .candidates()
                .is_some_and(CandidateSet::is_empty)
        })
    }
}

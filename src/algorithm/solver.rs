//! Observation, collapse, and propagation core
//!
//! One [`step`] performs exactly one observe/collapse/propagate unit: scan
//! all open cells for the most constrained one, commit a uniformly drawn
//! tile there, and narrow the four immediate neighbors. Propagation is a
//! single hop; further narrowing happens only through future steps. The
//! boundary between two steps is the process's suspension point.

use crate::algorithm::events::{EventSink, GenerationEvent};
use crate::algorithm::process::ContradictionPolicy;
use crate::io::configuration::CONSTRAINT_JITTER;
use crate::spatial::grid::{CellState, Grid};
use crate::spatial::tiles::{Direction, ExitType, TileCatalog};
use rand::{Rng, rngs::StdRng};

/// Result of one solving step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A tile was committed to the most constrained cell
    Placed,
    /// A contradiction was found under the restart policy; the grid must be
    /// rebuilt before the next step
    Restarted,
    /// No open cell remains; generation is over
    Finished {
        /// False only when unreported contradictions remained at the end
        success: bool,
    },
}

/// Build the starting grid for a generation attempt
///
/// Every cell begins with the full catalog minus the tiles its border
/// position forbids: an exit other than [`ExitType::None`] may not face off
/// the grid. A cell on two borders applies both filters. This is the only
/// place boundary rules are enforced. Emits a candidate-change event for
/// every cell; a cell filtered to zero candidates stays unresolved and is
/// reported by the first scan.
pub fn initialize(
    catalog: &TileCatalog,
    width: usize,
    height: usize,
    sink: &mut impl EventSink,
) -> Grid {
    let total = catalog.len();
    let mut grid = Grid::new(width, height, total);

    for x in 0..width {
        for y in 0..height {
            if let Some(CellState::Unresolved(set)) = grid.cell_mut(x, y) {
                set.retain(|tile| fits_border(catalog, tile, x, y, width, height));
                let remaining = set.count();
                sink.emit(GenerationEvent::CandidatesChanged {
                    x,
                    y,
                    remaining,
                    total,
                });
            }
        }
    }

    grid
}

/// Whether a tile's exits are legal at a border position
fn fits_border(
    catalog: &TileCatalog,
    tile: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> bool {
    let Some(definition) = catalog.tile(tile) else {
        return false;
    };

    (y != height - 1 || definition.north == ExitType::None)
        && (y != 0 || definition.south == ExitType::None)
        && (x != 0 || definition.west == ExitType::None)
        && (x != width - 1 || definition.east == ExitType::None)
}

/// Perform exactly one observe/collapse/propagate step
///
/// The scan walks cells x-major and scores each open cell with
/// `(catalog len - candidate count)` plus a small uniform jitter that breaks
/// ties pseudorandomly; the maximum wins. Open cells with empty candidate
/// sets are handled by `policy` as they are encountered: reported once and
/// marked terminal, or aborting the scan for a full restart. Jitter and the
/// collapse draw consume the same random stream.
pub fn step(
    grid: &mut Grid,
    catalog: &TileCatalog,
    rng: &mut StdRng,
    policy: ContradictionPolicy,
    sink: &mut impl EventSink,
) -> StepOutcome {
    let total = grid.catalog_len();
    let mut best: Option<(usize, usize, f64)> = None;

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let count = match grid.cell(x, y) {
                Some(CellState::Unresolved(set)) => set.count(),
                _ => continue,
            };

            if count == 0 {
                match policy {
                    ContradictionPolicy::Restart => return StepOutcome::Restarted,
                    ContradictionPolicy::Placeholder => {
                        if let Some(cell) = grid.cell_mut(x, y) {
                            *cell = CellState::Contradiction;
                        }
                        sink.emit(GenerationEvent::Contradiction { x, y });
                        continue;
                    }
                }
            }

            let jitter = rng.random_range(-CONSTRAINT_JITTER..CONSTRAINT_JITTER);
            let score = (total - count) as f64 + jitter;
            if best.is_none_or(|(_, _, high)| score > high) {
                best = Some((x, y, score));
            }
        }
    }

    let Some((x, y, _)) = best else {
        let success = !grid.has_unreported_contradiction();
        return StepOutcome::Finished { success };
    };

    // The scan only nominates unresolved cells with candidates left.
    let Some(tile) = draw_candidate(grid, x, y, rng) else {
        let success = !grid.has_unreported_contradiction();
        return StepOutcome::Finished { success };
    };

    if let Some(cell) = grid.cell_mut(x, y) {
        *cell = CellState::Resolved(tile);
    }
    sink.emit(GenerationEvent::TilePlaced { x, y, tile });

    propagate(grid, catalog, x, y, tile, sink);

    StepOutcome::Placed
}

/// Draw one tile uniformly from the cell's remaining candidates
fn draw_candidate(grid: &Grid, x: usize, y: usize, rng: &mut StdRng) -> Option<usize> {
    let set = grid.cell(x, y).and_then(CellState::candidates)?;
    let count = set.count();
    if count == 0 {
        return None;
    }
    set.nth(rng.random_range(0..count))
}

/// Narrow the collapsed cell's immediate neighbors by one hop
///
/// Each existing unresolved neighbor keeps only tiles whose facing exit
/// equals the committed tile's exit toward it. An emptied neighbor stays
/// unresolved and is reported on the next scan; narrowing never cascades
/// past the immediate neighbors within a step.
fn propagate(
    grid: &mut Grid,
    catalog: &TileCatalog,
    x: usize,
    y: usize,
    tile: usize,
    sink: &mut impl EventSink,
) {
    let total = grid.catalog_len();

    for direction in Direction::ALL {
        let (dx, dy) = direction.offset();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        if nx < 0 || ny < 0 || nx as usize >= grid.width() || ny as usize >= grid.height() {
            continue;
        }

        let Some(required) = catalog.exit(tile, direction) else {
            continue;
        };
        let facing = direction.opposite();

        if let Some(CellState::Unresolved(set)) = grid.cell_mut(nx as usize, ny as usize) {
            let changed =
                set.retain(|candidate| catalog.exit(candidate, facing) == Some(required));
            if changed {
                let remaining = set.count();
                sink.emit(GenerationEvent::CandidatesChanged {
                    x: nx as usize,
                    y: ny as usize,
                    remaining,
                    total,
                });
            }
        }
    }
}

use bitvec::{bitvec, vec::BitVec};
use std::fmt;

/// Set of catalog indices still allowed at an unresolved cell
///
/// Backed by a fixed-capacity bitset over the catalog. The solver only ever
/// removes members, so a cell's set shrinks monotonically until the cell is
/// resolved or runs empty. Iteration is in ascending index order, which is
/// catalog insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
    capacity: usize,
}

impl CandidateSet {
    /// Create a set containing every tile of a catalog with `capacity` entries
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Remove a tile index from the set
    pub fn remove(&mut self, tile: usize) {
        if tile < self.capacity {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Drop every member for which `keep` returns false
    ///
    /// Returns true when at least one member was removed, so callers can
    /// report candidate-set changes without diffing.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        let members: Vec<usize> = self.bits.iter_ones().collect();
        let mut changed = false;
        for tile in members {
            if !keep(tile) {
                self.bits.set(tile, false);
                changed = true;
            }
        }
        changed
    }

    /// Number of tiles still in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether no tiles remain
    ///
    /// An empty set on an unresolved cell is the contradiction condition.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Members in ascending catalog order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The `k`-th member in ascending catalog order
    ///
    /// Used for uniform draws: a random index below [`Self::count`] maps to
    /// exactly one member.
    pub fn nth(&self, k: usize) -> Option<usize> {
        self.bits.iter_ones().nth(k)
    }

    /// Capacity the set was created with (the catalog length)
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<usize> = self.iter().collect();
        write!(f, "CandidateSet({} tiles: {members:?})", self.count())
    }
}

//! Room tile definitions and the edge-compatibility catalog
//!
//! Each tile carries one exit signature per cardinal direction. Two tiles may
//! sit next to each other exactly when the signatures on their shared edge are
//! equal. The catalog is an ordered, immutable sequence of tiles; insertion
//! order is the deterministic enumeration order used everywhere else.

use crate::io::error::{LayoutError, Result};
use std::fmt;

/// Edge signature on one side of a tile
///
/// `None` means the edge is closed and is the only value permitted on grid
/// borders. All other values describe an opening kind; openings match only
/// openings of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitType {
    /// Closed edge with no opening
    None,
    /// Standard doorway
    Door,
    /// Open archway
    Arch,
}

impl ExitType {
    /// Parse an exit token from a catalog file
    ///
    /// Accepts `none`, `door`, and `arch` in any case. Returns `None` for
    /// unknown tokens so callers can attach file/line context to the error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "door" => Some(Self::Door),
            "arch" => Some(Self::Arch),
            _ => Option::None,
        }
    }
}

impl fmt::Display for ExitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::None => "none",
            Self::Door => "door",
            Self::Arch => "arch",
        };
        write!(f, "{token}")
    }
}

/// Cardinal direction on the grid
///
/// North is the direction of increasing `y`, east of increasing `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward `y + 1`
    North,
    /// Toward `x + 1`
    East,
    /// Toward `y - 1`
    South,
    /// Toward `x - 1`
    West,
}

impl Direction {
    /// All four directions in propagation order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction pointing back at this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Grid offset `(dx, dy)` of the neighbor in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

/// One placeable room template
///
/// Immutable once built. The four exits map to the grid directions of
/// [`Direction`]: `north` faces the `y + 1` neighbor and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDefinition {
    /// Display name, unique within a catalog
    pub name: String,
    /// Exit signature on the `y + 1` edge
    pub north: ExitType,
    /// Exit signature on the `x + 1` edge
    pub east: ExitType,
    /// Exit signature on the `y - 1` edge
    pub south: ExitType,
    /// Exit signature on the `x - 1` edge
    pub west: ExitType,
}

impl TileDefinition {
    /// Create a tile definition from its four exits
    pub fn new(
        name: impl Into<String>,
        north: ExitType,
        east: ExitType,
        south: ExitType,
        west: ExitType,
    ) -> Self {
        Self {
            name: name.into(),
            north,
            east,
            south,
            west,
        }
    }

    /// The exit signature facing the given direction
    pub const fn exit(&self, direction: Direction) -> ExitType {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// A mirrored variant with east and west exits swapped
    ///
    /// Mirroring is about the vertical axis, so north and south are
    /// unchanged. The result is an independent definition; the original is
    /// not modified.
    pub fn mirrored(&self) -> Self {
        Self {
            name: format!("{}_m", self.name),
            north: self.north,
            east: self.west,
            south: self.south,
            west: self.east,
        }
    }
}

/// Ordered, immutable set of room tiles
///
/// Tile indices into the catalog are the identities used by the solver, the
/// grid, and every emitted event. Iteration and tie-breaking follow insertion
/// order.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
}

impl TileCatalog {
    /// Build a catalog from base definitions, optionally adding mirrors
    ///
    /// Mirrors are synthesized from a snapshot of the base list and appended
    /// after it, one per base tile, so base indices are stable and the list
    /// being read is never the list being grown.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidCatalog`] when `base` is empty.
    pub fn build(base: Vec<TileDefinition>, include_mirrors: bool) -> Result<Self> {
        if base.is_empty() {
            return Err(LayoutError::InvalidCatalog {
                reason: "catalog requires at least one tile definition".to_string(),
            });
        }

        let mut tiles = base;
        if include_mirrors {
            let mirrors: Vec<TileDefinition> =
                tiles.iter().map(TileDefinition::mirrored).collect();
            tiles.extend(mirrors);
        }

        Ok(Self { tiles })
    }

    /// Number of tiles in the catalog
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    ///
    /// Always false for a built catalog; present for API completeness.
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile definition by catalog index
    pub fn tile(&self, index: usize) -> Option<&TileDefinition> {
        self.tiles.get(index)
    }

    /// All tile definitions in catalog order
    pub fn tiles(&self) -> &[TileDefinition] {
        &self.tiles
    }

    /// The exit signature of tile `index` facing `direction`
    pub fn exit(&self, index: usize, direction: Direction) -> Option<ExitType> {
        self.tiles.get(index).map(|tile| tile.exit(direction))
    }

    /// Test whether tile `b` may sit in `direction` from tile `a`
    ///
    /// True when the facing exit signatures are equal.
    pub fn compatible(&self, a: usize, direction: Direction, b: usize) -> bool {
        match (self.exit(a, direction), self.exit(b, direction.opposite())) {
            (Some(from), Some(toward)) => from == toward,
            _ => false,
        }
    }
}

/// Built-in room set used when no catalog file is supplied
///
/// A small, satisfiable mix of closed rooms, door corridors and junctions,
/// and archway halls with their end caps. The closed room keeps border cells
/// satisfiable at any grid size.
pub fn demo_rooms() -> Vec<TileDefinition> {
    use ExitType::{Arch, Door, None};

    vec![
        TileDefinition::new("closed", None, None, None, None),
        TileDefinition::new("hall_ns", Door, None, Door, None),
        TileDefinition::new("hall_ew", None, Door, None, Door),
        TileDefinition::new("corner_ne", Door, Door, None, None),
        TileDefinition::new("corner_nw", Door, None, None, Door),
        TileDefinition::new("corner_se", None, Door, Door, None),
        TileDefinition::new("corner_sw", None, None, Door, Door),
        TileDefinition::new("cross", Door, Door, Door, Door),
        TileDefinition::new("arch_hall_ew", None, Arch, None, Arch),
        TileDefinition::new("arch_cap_e", None, Arch, None, None),
        TileDefinition::new("arch_cap_w", None, None, None, Arch),
    ]
}

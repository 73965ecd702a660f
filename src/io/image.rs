//! PNG export of finished layouts
//!
//! Each cell is rendered as a fixed-size room block: wall outline, floor
//! fill, and an opening painted on every edge whose exit is not closed,
//! colored by exit kind. Contradiction cells get a red cross, unresolved
//! cells a dimmed fill. Cell `(0, 0)` is the bottom-left room; y grows
//! upward, so image rows run from the top row of the grid downward.

use crate::io::configuration::{ROOM_PIXEL_HEIGHT, ROOM_PIXEL_WIDTH};
use crate::io::error::{LayoutError, Result};
use crate::spatial::Grid;
use crate::spatial::grid::CellState;
use crate::spatial::tiles::{Direction, ExitType, TileCatalog};
use image::{Rgba, RgbaImage};
use std::path::Path;

const WALL: Rgba<u8> = Rgba([60, 56, 54, 255]);
const FLOOR: Rgba<u8> = Rgba([189, 174, 147, 255]);
const UNRESOLVED: Rgba<u8> = Rgba([40, 40, 40, 255]);
const CONTRADICTION_FILL: Rgba<u8> = Rgba([30, 10, 10, 255]);
const CONTRADICTION_MARK: Rgba<u8> = Rgba([204, 36, 29, 255]);
const DOOR: Rgba<u8> = Rgba([152, 105, 46, 255]);
const ARCH: Rgba<u8> = Rgba([69, 133, 136, 255]);

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(grid: &Grid, catalog: &TileCatalog, output_path: &Path) -> Result<()> {
    let width = grid.width() as u32 * ROOM_PIXEL_WIDTH;
    let height = grid.height() as u32 * ROOM_PIXEL_HEIGHT;
    let mut img = RgbaImage::new(width, height);

    for (x, y, state) in grid.iter_cells() {
        paint_cell(&mut img, grid.height(), x, y, state, catalog);
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| LayoutError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Paint one cell's room block into an image of `grid_height` rows
pub(crate) fn paint_cell(
    img: &mut RgbaImage,
    grid_height: usize,
    x: usize,
    y: usize,
    state: &CellState,
    catalog: &TileCatalog,
) {
    let left = x as u32 * ROOM_PIXEL_WIDTH;
    // Row 0 sits at the bottom of the image.
    let top = (grid_height - 1 - y) as u32 * ROOM_PIXEL_HEIGHT;

    match state {
        CellState::Unresolved(_) => {
            fill_block(img, left, top, UNRESOLVED);
        }
        CellState::Contradiction => {
            fill_block(img, left, top, CONTRADICTION_FILL);
            paint_cross(img, left, top);
        }
        CellState::Resolved(tile) => {
            paint_room(img, left, top, *tile, catalog);
        }
    }
}

fn fill_block(img: &mut RgbaImage, left: u32, top: u32, color: Rgba<u8>) {
    for py in 0..ROOM_PIXEL_HEIGHT {
        for px in 0..ROOM_PIXEL_WIDTH {
            img.put_pixel(left + px, top + py, color);
        }
    }
}

fn paint_cross(img: &mut RgbaImage, left: u32, top: u32) {
    for px in 0..ROOM_PIXEL_WIDTH {
        let py = px * (ROOM_PIXEL_HEIGHT - 1) / (ROOM_PIXEL_WIDTH - 1).max(1);
        img.put_pixel(left + px, top + py, CONTRADICTION_MARK);
        img.put_pixel(left + px, top + (ROOM_PIXEL_HEIGHT - 1 - py), CONTRADICTION_MARK);
    }
}

fn paint_room(img: &mut RgbaImage, left: u32, top: u32, tile: usize, catalog: &TileCatalog) {
    for py in 0..ROOM_PIXEL_HEIGHT {
        for px in 0..ROOM_PIXEL_WIDTH {
            let on_wall =
                px == 0 || py == 0 || px == ROOM_PIXEL_WIDTH - 1 || py == ROOM_PIXEL_HEIGHT - 1;
            let color = if on_wall { WALL } else { FLOOR };
            img.put_pixel(left + px, top + py, color);
        }
    }

    let Some(definition) = catalog.tile(tile) else {
        return;
    };

    let mid_x = ROOM_PIXEL_WIDTH / 2;
    let mid_y = ROOM_PIXEL_HEIGHT / 2;
    for direction in Direction::ALL {
        let color = match definition.exit(direction) {
            ExitType::None => continue,
            ExitType::Door => DOOR,
            ExitType::Arch => ARCH,
        };
        // North faces increasing y, which is the top edge of the block.
        let (px, py) = match direction {
            Direction::North => (mid_x, 0),
            Direction::South => (mid_x, ROOM_PIXEL_HEIGHT - 1),
            Direction::East => (ROOM_PIXEL_WIDTH - 1, mid_y),
            Direction::West => (0, mid_y),
        };
        img.put_pixel(left + px, top + py, color);
        match direction {
            Direction::North | Direction::South => {
                img.put_pixel(left + px - 1, top + py, color);
                img.put_pixel(left + px + 1, top + py, color);
            }
            Direction::East | Direction::West => {
                img.put_pixel(left + px, top + py - 1, color);
                img.put_pixel(left + px, top + py + 1, color);
            }
        }
    }
}

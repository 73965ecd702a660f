//! GIF capture of the generation sequence
//!
//! Replays a recorded event log into per-frame cell states and encodes one
//! frame per placement or contradiction, starting from the fully unresolved
//! grid and holding the final layout. Frames are skipped when the requested
//! delay is below what GIF viewers reliably honor.

use crate::algorithm::events::{EventLog, GenerationEvent};
use crate::io::configuration::{
    GIF_FRAME_DELAY_MS, ROOM_PIXEL_HEIGHT, ROOM_PIXEL_WIDTH, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{LayoutError, Result};
use crate::io::image::paint_cell;
use crate::spatial::grid::CellState;
use crate::spatial::tiles::TileCatalog;
use crate::algorithm::candidates::CandidateSet;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Renders an event log into an animated GIF of the generation
pub struct VisualizationCapture {
    width: usize,
    height: usize,
    catalog: TileCatalog,
    frame_delay_ms: u32,
}

impl VisualizationCapture {
    /// Create a capture for the given grid dimensions and catalog
    pub fn new(width: usize, height: usize, catalog: TileCatalog) -> Self {
        Self {
            width,
            height,
            catalog,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }

    /// Export the generation recorded in `log` as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, log: &EventLog, output_path: &Path) -> Result<()> {
        let effective_delay_ms = self.frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if self.frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(self.frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(log, effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| LayoutError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| LayoutError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(
        &self,
        log: &EventLog,
        delay_ms: u32,
        skip_factor: usize,
    ) -> Vec<Frame> {
        let mut cells: Vec<CellState> = (0..self.width * self.height)
            .map(|_| CellState::Unresolved(CandidateSet::all(self.catalog.len())))
            .collect();
        let mut frames = vec![self.render_frame(&cells, delay_ms)];

        let mut frame_count = 0;
        for event in log.events() {
            let (x, y, state) = match event {
                GenerationEvent::TilePlaced { x, y, tile } => {
                    (*x, *y, CellState::Resolved(*tile))
                }
                GenerationEvent::Contradiction { x, y } => (*x, *y, CellState::Contradiction),
                _ => continue,
            };

            if let Some(cell) = cells.get_mut(y * self.width + x) {
                *cell = state;
            }

            frame_count += 1;
            if frame_count % skip_factor == 0 {
                frames.push(self.render_frame(&cells, delay_ms));
            }
        }

        if frame_count % skip_factor != 0 {
            frames.push(self.render_frame(&cells, delay_ms));
        }

        // Final frame displays longer for better visibility
        let final_frame_delay = delay_ms * 25;
        if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(final_frame_delay, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, cells: &[CellState], delay_ms: u32) -> Frame {
        let mut img = RgbaImage::new(
            self.width as u32 * ROOM_PIXEL_WIDTH,
            self.height as u32 * ROOM_PIXEL_HEIGHT,
        );

        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(state) = cells.get(y * self.width + x) {
                    paint_cell(&mut img, self.height, x, y, state, &self.catalog);
                }
            }
        }

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

//! Command-line interface for generating room layouts

use crate::algorithm::controller::ExecutionController;
use crate::algorithm::events::{EventLog, GenerationEvent};
use crate::algorithm::process::{ContradictionPolicy, GenerationProcess, ProcessState};
use crate::io::catalog::load_catalog;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_STEPS, DEFAULT_WIDTH, VISUALIZATION_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressTracker;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::tiles::{TileCatalog, demo_rooms};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Contradiction policy as selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Flag stuck cells and keep generating
    Placeholder,
    /// Throw the grid away and start over
    Restart,
}

impl From<PolicyArg> for ContradictionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Placeholder => Self::Placeholder,
            PolicyArg::Restart => Self::Restart,
        }
    }
}

#[derive(Parser)]
#[command(name = "roomwave")]
#[command(version, about = "Generate room grid layouts using wave function collapse")]
/// Command-line arguments for the layout generation tool
pub struct Cli {
    /// Tile catalog file (defaults to the built-in room set)
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Level width in rooms
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Level height in rooms
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (drawn from entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum ticks before the run loop gives up
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// What to do when a cell runs out of candidates
    #[arg(long, value_enum, default_value_t = PolicyArg::Placeholder)]
    pub policy: PolicyArg,

    /// Include mirrored variants of every catalog tile
    #[arg(short, long)]
    pub mirror: bool,

    /// Write the finished layout as a PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write an animated GIF of the generation steps
    #[arg(short, long)]
    pub visualize: bool,

    /// Print every emitted event after the run
    #[arg(long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates one generation run from CLI arguments
pub struct LayoutRunner {
    cli: Cli,
}

impl LayoutRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the catalog, drive generation to completion, and export results
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, the dimensions are
    /// invalid, or an export fails.
    pub fn run(&self) -> Result<()> {
        let catalog = match &self.cli.catalog {
            Some(path) => load_catalog(path, self.cli.mirror)?,
            None => TileCatalog::build(demo_rooms(), self.cli.mirror)?,
        };

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let process = GenerationProcess::new(
            catalog.clone(),
            self.cli.width,
            self.cli.height,
            self.cli.policy.into(),
            seed,
        )?;
        let mut controller = ExecutionController::new(process);
        let mut log = EventLog::new();

        let progress = (!self.cli.quiet).then(|| ProgressTracker::new(self.cli.steps));

        controller.run_continuously(&mut log);
        for step in 1..=self.cli.steps {
            controller.tick(&mut log);

            if let (Some(tracker), Some(grid)) = (&progress, controller.process().grid()) {
                tracker.update(step, grid.resolved_count(), grid.contradiction_count());
            }

            if !controller.is_running() {
                break;
            }
        }

        let finished = controller.process().state() == ProcessState::Finished;
        if let (Some(tracker), Some(grid)) = (&progress, controller.process().grid()) {
            tracker.finish(grid.resolved_count(), grid.contradiction_count());
            if !finished {
                self.report_unfinished();
            }
        }

        if self.cli.trace {
            Self::print_trace(&log);
        }

        if let Some(output) = &self.cli.output {
            if let Some(grid) = controller.process().grid() {
                export_layout_as_png(grid, &catalog, output)?;
            }
        }

        if self.cli.visualize {
            let capture =
                VisualizationCapture::new(self.cli.width, self.cli.height, catalog.clone());
            capture.export_gif(&log, &self.visualization_path())?;
        }

        Ok(())
    }

    // Allow print for user feedback when the tick budget runs out
    #[allow(clippy::print_stderr)]
    fn report_unfinished(&self) {
        eprintln!(
            "Generation did not finish within {} steps (restart policy may be churning)",
            self.cli.steps
        );
    }

    // Allow print for the requested event trace
    #[allow(clippy::print_stdout)]
    fn print_trace(log: &EventLog) {
        for event in log.events() {
            match event {
                GenerationEvent::TilePlaced { x, y, tile } => {
                    println!("placed   ({x}, {y}) tile {tile}");
                }
                GenerationEvent::CandidatesChanged {
                    x,
                    y,
                    remaining,
                    total,
                } => {
                    println!("narrowed ({x}, {y}) {remaining}/{total}");
                }
                GenerationEvent::Contradiction { x, y } => {
                    println!("stuck    ({x}, {y})");
                }
                GenerationEvent::GenerationFinished { success } => {
                    println!("finished success={success}");
                }
            }
        }
    }

    fn visualization_path(&self) -> PathBuf {
        self.cli.output.as_ref().map_or_else(
            || PathBuf::from(format!("roomwave{VISUALIZATION_SUFFIX}.gif")),
            |output| {
                let stem = output.file_stem().unwrap_or_default().to_string_lossy();
                let name = format!("{stem}{VISUALIZATION_SUFFIX}.gif");
                output
                    .parent()
                    .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
            },
        )
    }
}

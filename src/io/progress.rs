//! Generation progress reporting

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one generation run
///
/// Tracks ticks against the host's step budget and shows resolved and
/// contradiction counts alongside.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Create a progress bar sized to the tick budget
    pub fn new(max_steps: usize) -> Self {
        let bar = ProgressBar::new(max_steps as u64);
        bar.set_style(STEP_STYLE.clone());
        Self { bar }
    }

    /// Report the state after one tick
    pub fn update(&self, step: usize, resolved: usize, contradictions: usize) {
        self.bar.set_position(step as u64);
        if contradictions > 0 {
            self.bar
                .set_message(format!("{resolved} rooms, {contradictions} stuck"));
        } else {
            self.bar.set_message(format!("{resolved} rooms"));
        }
    }

    /// Finish the display with a closing summary
    pub fn finish(&self, resolved: usize, contradictions: usize) {
        self.bar.finish_with_message(format!(
            "done: {resolved} rooms placed, {contradictions} contradictions"
        ));
    }
}

//! Batch progress tracking with automatic switching for large input sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ItemState {
    Running,
    Done,
    Failed,
}

impl ItemState {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Running => "…",
            Self::Done => "✓",
            Self::Failed => "✗",
        }
    }
}

/// Coordinates progress display while generating a batch of identicons
///
/// Small batches get one status line per input; larger batches get a single
/// counter bar plus a rolling window of the most recent inputs.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    item_bars: Vec<ProgressBar>,
    /// Stores (`label`, `state`) for rolling window display
    item_states: Vec<(String, ItemState)>,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ITEM_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Identicons: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            item_bars: Vec::new(),
            item_states: Vec::new(),
            total: 0,
        }
    }

    /// Initialize progress bars based on the number of inputs
    pub fn initialize(&mut self, item_count: usize) {
        self.total = item_count;

        // Switch to batch mode for large input sets to avoid terminal spam
        if item_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(item_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = item_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(1);
            pb.set_style(ITEM_STYLE.clone());
            self.item_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register an input whose identicon is about to be written to `output`
    pub fn start_item(&mut self, index: usize, input: &str, output: &Path) {
        if index >= self.item_states.len() {
            self.item_states.resize(index + 1, (String::new(), ItemState::Running));
        }
        if let Some(state) = self.item_states.get_mut(index) {
            *state = (format!("{input:?} -> {}", output.display()), ItemState::Running);
        }
        self.update_bars();
    }

    /// Mark an input as written and advance the batch counter
    pub fn complete_item(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        self.set_state(index, ItemState::Done);
    }

    /// Mark an input whose identicon could not be generated or written
    pub fn fail_item(&mut self, index: usize) {
        self.set_state(index, ItemState::Failed);
    }

    /// Number of inputs marked as written
    pub fn completed(&self) -> usize {
        self.item_states
            .iter()
            .filter(|(_, state)| *state == ItemState::Done)
            .count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            let completed = self.completed();
            if completed == self.total {
                batch_bar.finish_with_message("All identicons generated");
            } else {
                batch_bar.abandon_with_message(format!(
                    "{completed}/{} identicons generated",
                    self.total
                ));
            }
        }
        let _ = self.multi_progress.clear();
    }

    fn set_state(&mut self, index: usize, state: ItemState) {
        if let Some(entry) = self.item_states.get_mut(index) {
            entry.1 = state;
        }
        self.update_bars();
    }

    /// Update the item bars to show the last N registered inputs
    fn update_bars(&self) {
        let active: Vec<&(String, ItemState)> = self
            .item_states
            .iter()
            .filter(|(label, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, state)) in visible.iter().enumerate() {
            if let Some(bar) = self.item_bars.get(bar_idx) {
                bar.set_prefix(state.prefix());
                bar.set_message(label.clone());
                bar.set_position(u64::from(*state == ItemState::Done));
            }
        }

        for bar_idx in visible.len()..self.item_bars.len() {
            if let Some(bar) = self.item_bars.get(bar_idx) {
                bar.set_prefix("");
                bar.set_message(String::new());
                bar.set_position(0);
            }
        }
    }
}

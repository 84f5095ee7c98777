//! Progress display for batch arena generation
//!
//! Small batches get one bar per arena; larger batches add an overall bar and
//! show only the most recent arenas.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ARENA_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>12} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Arenas: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Display state of one arena
#[derive(Clone, Debug, Default)]
struct ArenaState {
    label: String,
    placed: usize,
    capacity: usize,
    done: bool,
}

/// Coordinates progress bars across a batch of generated arenas
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    arena_bars: Vec<ProgressBar>,
    arenas: Vec<ArenaState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            arena_bars: Vec::new(),
            arenas: Vec::new(),
        }
    }

    /// Create bars for `arena_count` arenas
    pub fn initialize(&mut self, arena_count: usize) {
        if arena_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(arena_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..arena_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ARENA_STYLE.clone());
            self.arena_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking an arena that can place at most `capacity` cells
    pub fn start_arena(&mut self, index: usize, label: String, capacity: usize) {
        if index >= self.arenas.len() {
            self.arenas.resize_with(index + 1, ArenaState::default);
        }
        if let Some(state) = self.arenas.get_mut(index) {
            *state = ArenaState {
                label,
                placed: 0,
                capacity,
                done: false,
            };
        }
        self.refresh();
    }

    /// Record one more obstacle cell placed in arena `index`
    pub fn cell_placed(&mut self, index: usize) {
        if let Some(state) = self.arenas.get_mut(index) {
            state.placed += 1;
        }
        self.refresh();
    }

    /// Mark arena `index` finished
    pub fn complete_arena(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.arenas.get_mut(index) {
            state.done = true;
        }
        self.refresh();
    }

    /// Clear every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All arenas generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recently started arenas on the available bars
    fn refresh(&self) {
        let started: Vec<&ArenaState> = self
            .arenas
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();
        let first_visible = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (bar, state) in self.arena_bars.iter().zip(visible) {
            let position = if state.done {
                state.capacity
            } else {
                state.placed.min(state.capacity)
            };
            bar.set_length(state.capacity as u64);
            bar.set_position(position as u64);
            bar.set_prefix(state.label.clone());
            bar.set_message(if state.done {
                format!("✓ {} cells", state.placed)
            } else {
                format!("{} cells", state.placed)
            });
        }

        for bar in self.arena_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}

//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while component files are written
//! - Interactive progress bars using indicatif
//! - Silent progress for dry-run and quiet mode
//! - Printing install reports and registry listings ([`display`])

pub mod display;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for applying an install plan
pub trait ProgressReporter {
    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Show the component currently being installed
    fn update_entry(&mut self, entry_name: &str, current: usize, total: usize);

    /// Advance past one file
    fn update_file(&mut self, file_path: &str);

    fn finish_files(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    file_pb: ProgressBar,
    entry: String,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self {
            file_pb: ProgressBar::hidden(),
            entry: String::new(),
        }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn init_file_progress(&mut self, total_files: u64) {
        let file_pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
        {
            file_pb.set_style(style.progress_chars("#>-"));
        }
        self.file_pb = file_pb;
    }

    fn update_entry(&mut self, entry_name: &str, current: usize, total: usize) {
        self.entry = format!("({current}/{total}) {entry_name}");
        self.file_pb.set_message(self.entry.clone());
    }

    fn update_file(&mut self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.chars().count() > 50 {
            let tail: String = file_path
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            file_path.to_string()
        };
        self.file_pb
            .set_message(format!("{} {}", self.entry, display_path));
        self.file_pb.inc(1);
    }

    fn finish_files(&mut self) {
        self.file_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.file_pb.abandon();
    }
}

/// Silent progress reporter for dry-run and quiet mode
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_entry(&mut self, _entry_name: &str, _current: usize, _total: usize) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish_files(&mut self) {}

    fn abandon(&mut self) {}
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a sort operation
#[derive(Debug, Serialize)]
pub struct SortResult {
    /// Number of non-empty lines in the input
    pub lines_in: usize,
    /// Number of non-empty lines in the output
    pub lines_out: usize,
    /// Destination file, if the sorted rules were written to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The sorted rules, when they go to stdout rather than a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Result of a check operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckResult {
    /// Whether the input was already sorted
    pub sorted: bool,
    /// Number of non-empty lines checked
    pub lines: usize,
    /// 1-based position of the first out-of-order line, counting only
    /// non-empty lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_unsorted: Option<usize>,
}

impl SortResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(path) = &self.output {
            println!("Sorted {} line(s) -> {}", self.lines_out, path);
        } else if let Some(text) = &self.text {
            // Payload only, so the output stays pipeable
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.sorted {
            println!("Already sorted ({} line(s)).", self.lines);
        } else {
            println!(
                "Not sorted: line {} is out of order.",
                self.first_unsorted.unwrap_or(0)
            );
            println!("Run 'rulesort sort' to fix.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

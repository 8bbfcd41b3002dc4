//! Command implementations

mod check;
mod sort;

pub use check::check;
pub use sort::sort;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the input text from a file, or from stdin when the path is omitted
/// or given as "-".
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if !is_stdin(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        },
    }
}

/// Whether a path is the conventional "-" stdin sentinel
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

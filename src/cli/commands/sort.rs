//! Sort command - read rules, sort, write the result

use std::path::Path;

use anyhow::Context;

use super::{is_stdin, read_input};
use rulesort::output::{OutputMode, SortResult};
use rulesort::sorter;

/// Sort rules from `file` (or stdin) and write them to stdout, `output`,
/// or back to `file` when `in_place` is set.
pub fn sort(
    file: Option<&Path>,
    output: Option<&Path>,
    in_place: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if in_place && file.is_none_or(is_stdin) {
        anyhow::bail!("--in-place requires a file argument, not stdin");
    }

    let input = read_input(file)?;
    let lines_in = sorter::line_count(&input);

    let sorted = sorter::sort_rules(&input);
    let lines_out = sorter::line_count(&sorted);

    log::debug!("input: {lines_in} line(s), output: {lines_out} line(s)");

    let destination = if in_place { file } else { output };

    let result = match destination {
        Some(path) => {
            write_text_file(path, &sorted)?;
            SortResult {
                lines_in,
                lines_out,
                output: Some(path.display().to_string()),
                text: None,
            }
        },
        None => SortResult {
            lines_in,
            lines_out,
            output: None,
            text: Some(sorted),
        },
    };

    result.render(mode);

    Ok(())
}

/// Write sorted rules to a file, with a trailing newline when non-empty.
/// The in-memory transform never appends one; that convention belongs to
/// the file boundary.
fn write_text_file(path: &Path, text: &str) -> anyhow::Result<()> {
    let content = if text.is_empty() {
        String::new()
    } else {
        format!("{text}\n")
    };

    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

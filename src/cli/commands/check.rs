//! Check command - report whether rules are already sorted

use std::path::Path;

use super::read_input;
use rulesort::output::{CheckResult, OutputMode};
use rulesort::sorter;

/// Check whether the rules in `file` (or stdin) are already sorted.
/// Renders the result, then exits 1 when they are not.
pub fn check(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let input = read_input(file)?;

    let lines = sorter::line_count(&input);
    let first_unsorted = sorter::first_unsorted(&input);

    let result = CheckResult {
        sorted: first_unsorted.is_none(),
        lines,
        // 1-based for display, counting only non-empty lines
        first_unsorted: first_unsorted.map(|index| index + 1),
    };

    result.render(mode);

    if !result.sorted {
        std::process::exit(1);
    }

    Ok(())
}

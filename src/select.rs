use std::io::{self, BufRead, Write};

use crate::pdf::{Dimension, DimensionIndex};

pub const AVAILABLE_DIMENSIONS: &str = "Available dimensions (width x height) and number of pages:";
pub const SELECT_DIMENSIONS: &str =
    "Select page sets to remove by index (comma-separated) or press Enter to cancel: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter valid indices separated by commas.";

/// Print the dimension listing and ask which groups to remove.
///
/// Returns `None` when the user enters an empty line (or input ends), which
/// callers treat as cancellation. Invalid input re-prompts indefinitely.
pub fn select_dimensions<R: BufRead, W: Write>(
    index: &DimensionIndex,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Vec<Dimension>>> {
    writeln!(output, "{}", AVAILABLE_DIMENSIONS)?;
    for (i, group) in index.iter().enumerate() {
        writeln!(
            output,
            "{}: {} ({} pages)",
            i,
            group.dimension,
            group.pages.len()
        )?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", SELECT_DIMENSIONS)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("selection input closed");
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        match parse_selection(answer, index) {
            Some(dimensions) => {
                log::debug!("selected {:?}", dimensions);
                return Ok(Some(dimensions));
            }
            None => writeln!(output, "{}\n", INVALID_INPUT)?,
        }
    }
}

/// Resolve comma-separated zero-based indices into dimensions. Any bad token
/// invalidates the whole answer.
fn parse_selection(answer: &str, index: &DimensionIndex) -> Option<Vec<Dimension>> {
    let mut selected: Vec<Dimension> = Vec::new();
    for token in answer.split(',') {
        let i: usize = token.trim().parse().ok()?;
        let dimension = index.get(i)?.dimension;
        if !selected.contains(&dimension) {
            selected.push(dimension);
        }
    }
    Some(selected)
}

pub mod dimensions;
pub mod excerpt;
pub mod filter;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// How a command ended when it did not hit a library or I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

pub const SAME_PATHS: &str = "Input and output paths must be different.";

/// Checked by value before anything is opened or written.
pub fn paths_conflict(input: &Path, output: Option<&Path>) -> bool {
    output.is_some_and(|output| output == input)
}

/// The explicit output path, or a fresh `.pdf` file in the temp directory.
/// The temp file is kept; it belongs to the caller afterwards.
pub fn resolve_output(output: Option<&Path>) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }

    let path = tempfile::Builder::new()
        .prefix("pagewielder-")
        .suffix(".pdf")
        .tempfile()
        .context("Failed to create temporary output file")?
        .into_temp_path()
        .keep()
        .context("Failed to keep temporary output file")?;
    log::debug!("writing to temporary file {}", path.display());
    Ok(path)
}

/// "page" for exactly one, "pages" otherwise
pub fn pages_noun(count: u32) -> &'static str {
    if count == 1 {
        "page"
    } else {
        "pages"
    }
}

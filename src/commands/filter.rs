use super::{paths_conflict, resolve_output, Outcome, SAME_PATHS};
use crate::pdf::{Dimension, DimensionIndex, PdfDocument};
use crate::select::select_dimensions;
use anyhow::Result;
use lopdf::Document;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub const NOTHING_SELECTED: &str = "No page sets selected. No output file created.";

pub fn run<P: AsRef<Path>>(input: P, output: Option<&Path>) -> Result<Outcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(input, output, &mut stdin.lock(), &mut stdout.lock())
}

/// Same as [`run`], with the selection prompt on the given streams.
pub fn run_with<P, R, W>(
    input: P,
    output: Option<&Path>,
    reader: &mut R,
    writer: &mut W,
) -> Result<Outcome>
where
    P: AsRef<Path>,
    R: BufRead,
    W: Write,
{
    let input = input.as_ref();
    if paths_conflict(input, output) {
        eprintln!("{}", SAME_PATHS);
        return Ok(Outcome::Failure);
    }

    let doc = PdfDocument::open(input)?;
    let index = DimensionIndex::build(&doc)?;

    let Some(selected) = select_dimensions(&index, reader, writer)? else {
        eprintln!("{}", NOTHING_SELECTED);
        return Ok(Outcome::Failure);
    };

    let output = resolve_output(output)?;
    let mut new_doc = filter_pages(&doc, &index, &selected)?;
    PdfDocument::save(&mut new_doc, &output)?;

    writeln!(writer, "Filtered PDF saved as {}", output.display())?;

    Ok(Outcome::Success)
}

/// New document without the pages whose dimension is in `remove`.
pub fn filter_pages(
    doc: &PdfDocument,
    index: &DimensionIndex,
    remove: &[Dimension],
) -> Result<Document> {
    let excluded = index.pages_for(remove);
    let keep: Vec<u32> = (1..=doc.page_count())
        .filter(|page| !excluded.contains(page))
        .collect();
    log::info!(
        "removing {} of {} pages from {}",
        excluded.len(),
        doc.page_count(),
        doc.path
    );
    doc.retain_pages(&keep)
}

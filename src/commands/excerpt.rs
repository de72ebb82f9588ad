use super::{pages_noun, paths_conflict, resolve_output, Outcome, SAME_PATHS};
use crate::page_range::PageRange;
use crate::pdf::PdfDocument;
use anyhow::Result;
use lopdf::Document;
use std::path::Path;

pub fn run<P: AsRef<Path>>(input: P, pages: &str, output: Option<&Path>) -> Result<Outcome> {
    let input = input.as_ref();
    if paths_conflict(input, output) {
        eprintln!("{}", SAME_PATHS);
        return Ok(Outcome::Failure);
    }

    let doc = PdfDocument::open(input)?;
    let range = match PageRange::parse(pages, doc.page_count()) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(Outcome::Failure);
        }
    };

    let output = resolve_output(output)?;
    let mut new_doc = excerpt(&doc, &range)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!("{}", summary(&range, &output));

    Ok(Outcome::Success)
}

/// New document holding the pages of `range` in their original order.
pub fn excerpt(doc: &PdfDocument, range: &PageRange) -> Result<Document> {
    let pages: Vec<u32> = range.pages().collect();
    doc.retain_pages(&pages)
}

pub fn summary(range: &PageRange, output: &Path) -> String {
    let count = range.page_count();
    format!(
        "Extracted {} {} ({}) to {}",
        count,
        pages_noun(count),
        range,
        output.display()
    )
}

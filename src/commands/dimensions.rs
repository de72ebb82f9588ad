use crate::pdf::{DimensionIndex, PdfDocument};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;
    let index = DimensionIndex::build(&doc)?;
    report(&index, &mut io::stdout().lock())?;
    Ok(())
}

pub fn report<W: Write>(index: &DimensionIndex, out: &mut W) -> io::Result<()> {
    if index.is_empty() {
        writeln!(out, "No pages found.")?;
        return Ok(());
    }

    for group in index.iter() {
        let pages: Vec<String> = group.pages.iter().map(|p| p.to_string()).collect();
        writeln!(
            out,
            "Dimensions (width x height): {} x {}",
            group.dimension.width, group.dimension.height
        )?;
        writeln!(out, "Pages: {}\n", pages.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures;

    #[test]
    fn test_report_mixed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_mixed_pdf(dir.path(), "mixed.pdf");
        let doc = PdfDocument::open(&path).unwrap();
        let index = DimensionIndex::build(&doc).unwrap();

        let mut out = Vec::new();
        report(&index, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dimensions (width x height): 612 x 792\n\
             Pages: 1, 2\n\
             \n\
             Dimensions (width x height): 300 x 300\n\
             Pages: 3, 4, 5\n\
             \n"
        );
    }

    #[test]
    fn test_report_empty_index() {
        let mut out = Vec::new();
        report(&DimensionIndex::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No pages found.\n");
    }

    #[test]
    fn test_report_sorts_interleaved_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_pdf(dir.path(), "p.pdf", &[(10, 20), (30, 40), (10, 20)]);
        let doc = PdfDocument::open(&path).unwrap();
        let index = DimensionIndex::build(&doc).unwrap();

        let mut out = Vec::new();
        report(&index, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("10 x 20\nPages: 1, 3\n"));
        assert!(text.contains("30 x 40\nPages: 2\n"));
    }
}

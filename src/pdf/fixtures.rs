//! Small PDFs built with lopdf for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};

/// Write a PDF with one page per `(width, height)` entry. Each page draws
/// "Page N" so pages can be told apart after copying.
pub fn write_pdf(dir: &Path, name: &str, sizes: &[(i64, i64)]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for (i, &(width, height)) in sizes.iter().enumerate() {
        let content = page_content(i as u32 + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => sizes.len() as i64,
        }),
    );

    save(doc, pages_id, dir, name)
}

/// Write a PDF whose pages carry no MediaBox of their own and inherit it
/// from the page tree root.
pub fn write_inherited_pdf(dir: &Path, name: &str, size: (i64, i64), count: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let kids: Vec<Object> = (0..count)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count as i64,
            "MediaBox" => vec![0.into(), 0.into(), size.0.into(), size.1.into()],
        }),
    );

    save(doc, pages_id, dir, name)
}

/// The 5-page document used throughout: pages 1-2 are US Letter, 3-5 are
/// 300pt squares.
pub fn write_mixed_pdf(dir: &Path, name: &str) -> PathBuf {
    write_pdf(
        dir,
        name,
        &[(612, 792), (612, 792), (300, 300), (300, 300), (300, 300)],
    )
}

fn page_content(page: u32) -> Vec<u8> {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 72.into()]),
            Operation::new("Tj", vec![Object::string_literal(format!("Page {}", page))]),
            Operation::new("ET", vec![]),
        ],
    };
    content.encode().unwrap()
}

fn save(mut doc: Document, pages_id: ObjectId, dir: &Path, name: &str) -> PathBuf {
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Page sizes of a saved PDF, in page order.
pub fn page_sizes(path: &Path) -> Vec<(f64, f64)> {
    let doc = super::PdfDocument::open(path).unwrap();
    doc.page_ids()
        .into_iter()
        .map(|(_, id)| {
            let dim = doc.page_dimension(id).unwrap();
            (dim.width, dim.height)
        })
        .collect()
}

pub fn page_widths(path: &Path) -> Vec<f64> {
    page_sizes(path).into_iter().map(|(w, _)| w).collect()
}

/// Decoded content stream of every page, in page order.
pub fn page_contents(path: &Path) -> Vec<Vec<u8>> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|&id| doc.get_page_content(id).unwrap())
        .collect()
}

/// Content a page written by [`write_pdf`] carries for original page `page`.
pub fn expected_content(page: u32) -> Vec<u8> {
    page_content(page)
}

use anyhow::{anyhow, bail, Context, Result};
use lopdf::{Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;

use super::dimensions::Dimension;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        log::debug!("opened {} ({} pages)", path_str, doc.get_pages().len());
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Width and height of a page's media box.
    ///
    /// `/MediaBox` is inheritable, so when the page itself has none the
    /// page tree is walked up through `/Parent`.
    pub fn page_dimension(&self, page_id: ObjectId) -> Result<Dimension> {
        let media_box = self
            .inherited_attribute(page_id, b"MediaBox")?
            .ok_or_else(|| anyhow!("Page {:?} has no MediaBox in {}", page_id, self.path))?;

        let array = match media_box {
            Object::Reference(id) => self.doc.get_object(*id)?,
            other => other,
        }
        .as_array()
        .with_context(|| format!("MediaBox of page {:?} is not an array", page_id))?;

        if array.len() != 4 {
            bail!(
                "MediaBox of page {:?} has {} elements, expected 4",
                page_id,
                array.len()
            );
        }

        let mut coords = [0.0f64; 4];
        for (slot, obj) in coords.iter_mut().zip(array) {
            *slot = match obj {
                Object::Integer(i) => *i as f64,
                Object::Real(r) => *r as f64,
                other => bail!(
                    "MediaBox of page {:?} has non-numeric entry {:?}",
                    page_id,
                    other
                ),
            };
        }

        Ok(Dimension {
            width: (coords[2] - coords[0]).abs(),
            height: (coords[3] - coords[1]).abs(),
        })
    }

    fn inherited_attribute(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<&Object>> {
        let mut visited = HashSet::new();
        let mut current = page_id;
        while visited.insert(current) {
            let dict = self
                .doc
                .get_dictionary(current)
                .with_context(|| format!("Failed to read page tree node {:?}", current))?;

            if let Ok(value) = dict.get(key) {
                return Ok(Some(value));
            }

            match dict.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => current = parent,
                Err(_) => break,
            }
        }
        Ok(None)
    }

    /// Build a new document holding only `pages` (1-based), in their
    /// original order. Every other page is removed.
    pub fn retain_pages(&self, pages: &[u32]) -> Result<Document> {
        let mut new_doc = self.doc.clone();
        let all_pages = self.page_ids();
        let total = all_pages.len() as u32;

        // Validate page numbers
        for &page in pages {
            if page == 0 || page > total {
                bail!("Page {} is out of range (1-{})", page, total);
            }
        }

        // Get page numbers to delete (pages NOT in our list)
        let pages_to_delete: Vec<u32> = all_pages
            .iter()
            .filter(|(num, _)| !pages.contains(num))
            .map(|(num, _)| *num)
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            new_doc.prune_objects();
        }
        log::debug!(
            "kept {} of {} pages, removed {:?}",
            total as usize - pages_to_delete.len(),
            total,
            pages_to_delete
        );

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        log::debug!("saved {}", path.as_ref().display());
        Ok(())
    }
}

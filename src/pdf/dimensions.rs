use anyhow::Result;
use std::collections::BTreeSet;
use std::fmt;

use super::PdfDocument;

/// Width and height of a page's media box, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} x {:.2}", self.width, self.height)
    }
}

/// 1-based page numbers
pub type PageSet = BTreeSet<u32>;

#[derive(Debug, Clone)]
pub struct DimensionGroup {
    pub dimension: Dimension,
    pub pages: PageSet,
}

/// Pages grouped by dimension, in the order each dimension first appears
/// in the document.
#[derive(Debug, Clone, Default)]
pub struct DimensionIndex {
    groups: Vec<DimensionGroup>,
}

impl DimensionIndex {
    /// Scan every page of `doc` once and group the page numbers by size.
    pub fn build(doc: &PdfDocument) -> Result<Self> {
        let mut index = DimensionIndex::default();
        for (page_num, page_id) in doc.page_ids() {
            index.insert(doc.page_dimension(page_id)?, page_num);
        }
        log::debug!(
            "grouped {} pages of {} into {} dimension(s)",
            doc.page_count(),
            doc.path,
            index.len()
        );
        Ok(index)
    }

    pub fn insert(&mut self, dimension: Dimension, page: u32) {
        // Linear lookup; groups stay in first-seen order.
        match self.groups.iter_mut().find(|g| g.dimension == dimension) {
            Some(group) => {
                group.pages.insert(page);
            }
            None => self.groups.push(DimensionGroup {
                dimension,
                pages: PageSet::from([page]),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DimensionGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionGroup> {
        self.groups.iter()
    }

    pub fn pages(&self, dimension: Dimension) -> Option<&PageSet> {
        self.groups
            .iter()
            .find(|g| g.dimension == dimension)
            .map(|g| &g.pages)
    }

    /// Union of the page sets of every dimension in `dimensions`.
    pub fn pages_for(&self, dimensions: &[Dimension]) -> PageSet {
        dimensions
            .iter()
            .filter_map(|d| self.pages(*d))
            .flatten()
            .copied()
            .collect()
    }
}

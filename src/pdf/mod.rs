pub mod dimensions;
pub mod document;
#[cfg(test)]
pub mod fixtures;

pub use dimensions::{Dimension, DimensionIndex};
pub use document::PdfDocument;

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid page range format: {0}")]
    InvalidFormat(String),

    #[error("Invalid page number: {0}")]
    InvalidNumber(String),

    #[error("Page {page} is out of range (1-{total})")]
    OutOfRange { page: u32, total: u32 },

    #[error("Start page {0} must be >= 1")]
    StartBelowOne(u32),

    #[error("End page {end} exceeds total pages ({total})")]
    EndPastTotal { end: u32, total: u32 },

    #[error("Start page {start} must be <= end page {end}")]
    Reversed { start: u32, end: u32 },
}

/// An inclusive, 1-based, validated page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Parse a range like "7", "3:", ":10" or "1:5" against a document of
    /// `total_pages` pages.
    pub fn parse(s: &str, total_pages: u32) -> Result<Self, RangeError> {
        let s = s.trim();

        let Some((start_str, end_str)) = s.split_once(':') else {
            // Single page
            let page = parse_page_number(s)?;
            if page < 1 || page > total_pages {
                return Err(RangeError::OutOfRange {
                    page,
                    total: total_pages,
                });
            }
            return Ok(PageRange {
                start: page,
                end: page,
            });
        };

        let start_str = start_str.trim();
        let end_str = end_str.trim();

        if end_str.contains(':') || (start_str.is_empty() && end_str.is_empty()) {
            return Err(RangeError::InvalidFormat(s.to_string()));
        }

        let start = if start_str.is_empty() {
            1
        } else {
            parse_page_number(start_str)?
        };
        let end = if end_str.is_empty() {
            total_pages
        } else {
            parse_page_number(end_str)?
        };

        if start < 1 {
            return Err(RangeError::StartBelowOne(start));
        }
        if end > total_pages {
            return Err(RangeError::EndPastTotal {
                end,
                total: total_pages,
            });
        }
        if start > end {
            return Err(RangeError::Reversed { start, end });
        }

        Ok(PageRange { start, end })
    }

    /// Number of pages covered by the range
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// The 1-based page numbers in order
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

fn parse_page_number(s: &str) -> Result<u32, RangeError> {
    s.parse::<u32>()
        .map_err(|_| RangeError::InvalidNumber(s.to_string()))
}

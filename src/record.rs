use crate::text::{normalize_identifier, split_fields, trim};
use std::fmt;

/// One course as read from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Normalized course number, e.g. `CSCI200`. Unique within a catalog.
    pub id: String,
    /// Course title exactly as written, minus surrounding whitespace.
    pub title: String,
    /// Normalized prerequisite course numbers in file order. Not checked
    /// against the catalog and may contain duplicates.
    pub prerequisites: Vec<String>,
}

impl CourseRecord {
    pub fn new(id: &str, title: &str, prerequisites: &[&str]) -> Self {
        Self {
            id: normalize_identifier(id),
            title: trim(title).to_string(),
            prerequisites: prerequisites
                .iter()
                .map(|p| normalize_identifier(p))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }
}

/// `ID, Title`, the form used in course listings.
impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}

/// Parse one line of a catalog file.
///
/// Returns `None` for blank lines and lines with fewer than two fields. Such
/// lines are meant to be skipped, not reported. An empty identifier is kept
/// as is.
pub fn parse_line(line: &str) -> Option<CourseRecord> {
    let line = trim(line);
    if line.is_empty() {
        return None;
    }

    let fields = split_fields(line);
    let [id, title, prerequisites @ ..] = fields.as_slice() else {
        return None;
    };

    Some(CourseRecord::new(id, title, prerequisites))
}

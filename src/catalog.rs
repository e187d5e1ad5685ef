use crate::error::CatalogError;
use crate::record::{CourseRecord, parse_line};
use crate::text::{normalize_identifier, trim};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Counters describing a finished load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Courses held by the catalog after the load.
    pub records: usize,
    /// Non-blank lines that did not produce a course.
    pub skipped: usize,
    /// Lines whose identifier replaced a course from an earlier line.
    pub replaced: usize,
}

/// In-memory set of courses keyed by normalized identifier.
///
/// A catalog starts empty and unloaded. Every load replaces the whole content;
/// there is no incremental update.
#[derive(Debug, Default)]
pub struct Catalog {
    courses: HashMap<String, CourseRecord>,
    loaded: bool,
}

impl Catalog {
    /// Empty, unloaded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with the courses found in the file at `path`.
    ///
    /// If the file cannot be opened or read, the previous contents and the
    /// loaded flag are left untouched. Malformed lines are skipped.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            log::warn!("cannot open {}: {}", path.display(), source);
            CatalogError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let summary = self
            .load_reader(BufReader::new(file))
            .map_err(|source| {
                log::warn!("cannot read {}: {}", path.display(), source);
                CatalogError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        log::info!(
            "loaded {} course(s) from {} ({} line(s) skipped)",
            summary.records,
            path.display(),
            summary.skipped
        );
        Ok(summary)
    }

    /// Replace the catalog with the courses read from `reader`.
    ///
    /// The new set is built completely before it is swapped in, so a read
    /// error leaves the catalog as it was.
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<LoadSummary> {
        let mut courses = HashMap::new();
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let Some(record) = parse_line(&line) else {
                if !trim(&line).is_empty() {
                    log::debug!("line {}: skipped, expected `id, title[, prereq...]`", line_no);
                    summary.skipped += 1;
                }
                continue;
            };

            match courses.entry(record.id.clone()) {
                Entry::Occupied(mut slot) => {
                    log::debug!("line {}: {} replaces an earlier entry", line_no, record.id);
                    summary.replaced += 1;
                    slot.insert(record);
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }

        summary.records = courses.len();
        self.courses = courses;
        self.loaded = true;
        Ok(summary)
    }

    /// Whether at least one load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of distinct courses held.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True when no course is held, loaded or not.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses in ascending identifier order.
    pub fn list(&self) -> Result<Vec<&CourseRecord>, CatalogError> {
        if !self.loaded {
            return Err(CatalogError::NotLoaded);
        }
        let mut courses: Vec<&CourseRecord> = self.courses.values().collect();
        courses.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        Ok(courses)
    }

    /// Find a course by identifier, ignoring case and surrounding whitespace.
    ///
    /// A course without prerequisites is found like any other; only a missing
    /// identifier yields [`CatalogError::NotFound`].
    pub fn lookup(&self, raw_id: &str) -> Result<&CourseRecord, CatalogError> {
        if !self.loaded {
            return Err(CatalogError::NotLoaded);
        }
        let id = normalize_identifier(raw_id);
        match self.courses.get(&id) {
            Some(course) => Ok(course),
            None => Err(CatalogError::NotFound(id)),
        }
    }
}

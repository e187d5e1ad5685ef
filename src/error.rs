use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by [`Catalog`](crate::Catalog) operations.
///
/// None of these are fatal: the catalog keeps its previous contents and the
/// caller decides how to report the outcome.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The course file could not be opened for reading.
    #[error("Could not open file \"{}\"", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The course file was opened but reading it failed part way through.
    #[error("Could not read file \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No course with this (normalized) identifier.
    #[error("Course not found: {0}")]
    NotFound(String),

    /// A query was made before any successful load.
    #[error("Please load the data first.")]
    NotLoaded,
}

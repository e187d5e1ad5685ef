//! Course planner: load a course list from a comma-separated text file and
//! browse it.
//!
//! Each line of a course file reads `ID, Title[, PREREQ...]`. Lines are parsed
//! by [`parse_line`] into [`CourseRecord`]s and collected in a [`Catalog`]
//! keyed by the course identifier, normalized to trimmed uppercase so that
//! lookups ignore case and padding. Malformed lines are skipped rather than
//! reported.
//!
//! The [`Planner`] wraps a catalog in the interactive menu used by the
//! `course_planner` binary. Its input comes through the [`Prompt`] trait, so
//! the same loop serves the terminal and scripted sessions.

mod catalog;
pub mod error;
mod io_adapters;
pub mod menu;
mod planner;
mod record;
pub mod text;

pub use catalog::{Catalog, LoadSummary};
pub use error::CatalogError;
pub use io_adapters::{Prompt, ReaderPrompt};
pub use planner::Planner;
pub use record::{CourseRecord, parse_line};

//! Procfile parsing and process table construction.
//!
//! A Procfile declares named processes, one per line:
//!
//! ```text
//! # comments start the line
//! web: bundle exec puma -p $PORT
//! worker: celery worker
//! ```
//!
//! Two entry points produce the same [`ProcessTable`]:
//!
//! - [`parse`] reads Procfile text. Malformed lines are skipped, only an
//!   input with no valid process at all is an error.
//! - [`from_specs`] takes already structured [`ProcessSpec`] records and keeps
//!   their command tokens as given.
//!
//! Both pick the routable process with [`select_routable`]: `web` if declared,
//! otherwise the lexicographically smallest name.

/// Error types for parsing and building.
pub mod error;
/// Process name validation.
pub mod name;
/// Routable process selection.
pub mod select;
/// Process table and spec types.
pub mod table;

mod build;
mod parse;

pub use build::from_specs;
pub use error::{ProcfileError, Result};
pub use name::{NamePattern, is_valid_name};
pub use parse::{Entry, ParseOptions, Parser, Reject, parse};
pub use select::{ROUTABLE_DEFAULT, select_routable};
pub use table::{ProcessSpec, ProcessTable};

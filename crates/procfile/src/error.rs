//! Error types for Procfile parsing and process table building.

use thiserror::Error;

/// Errors that can occur when producing a [`ProcessTable`](crate::ProcessTable).
#[derive(Debug, Error)]
pub enum ProcfileError {
	/// No valid process remained after processing the whole input.
	#[error("no valid processes found")]
	NoValidProcesses,

	/// A custom process name pattern failed to compile.
	#[error("invalid process name pattern {pattern:?}: {source}")]
	InvalidNamePattern {
		/// The pattern as supplied by the caller.
		pattern: String,
		/// The underlying regex error.
		source: regex::Error,
	},
}

/// Result type for Procfile operations.
pub type Result<T> = std::result::Result<T, ProcfileError>;

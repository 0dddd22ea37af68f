//! Procfile text parser.
//!
//! Each line is `name: command`. Blank lines and lines whose first
//! non-whitespace character is `#` are skipped. Lines that cannot be read as a
//! process are dropped without failing the parse, so one bad line never
//! discards an otherwise usable Procfile.

use std::collections::HashMap;

use thiserror::Error;

use crate::error::Result;
use crate::name::NamePattern;
use crate::table::ProcessTable;

#[cfg(test)]
mod tests;

/// Parses Procfile text with default options.
///
/// # Errors
///
/// Returns [`ProcfileError::NoValidProcesses`](crate::ProcfileError::NoValidProcesses)
/// if no line declares a valid process.
///
/// # Examples
///
/// ```
/// let table = shipyard_procfile::parse("worker: celery worker\nweb: puma").unwrap();
/// assert_eq!(table.routable_process_name(), "web");
/// assert_eq!(table.command("worker").unwrap(), ["celery worker"]);
/// ```
pub fn parse(text: &str) -> Result<ProcessTable> {
	Parser::default().parse(text)
}

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
	/// Predicate process names must satisfy.
	pub name_pattern: NamePattern,
}

/// A process line accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
	/// 1-based line number.
	pub line: usize,
	/// Trimmed process name.
	pub name: &'a str,
	/// Trimmed command text, not split into tokens.
	pub command: &'a str,
}

/// A line the parser dropped, and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reject {
	/// The line has no `:` between name and command.
	#[error("line {line}: missing ':' separator")]
	MissingSeparator {
		/// 1-based line number.
		line: usize,
	},
	/// The name before the `:` is empty or not a legal process name.
	#[error("line {line}: invalid process name {name:?}")]
	InvalidName {
		/// 1-based line number.
		line: usize,
		/// The rejected name, trimmed.
		name: String,
	},
	/// Nothing follows the `:`.
	#[error("line {line}: empty command for process {name:?}")]
	EmptyCommand {
		/// 1-based line number.
		line: usize,
		/// The process name.
		name: String,
	},
}

impl Reject {
	/// Returns the 1-based line number of the dropped line.
	pub fn line(&self) -> usize {
		match self {
			Self::MissingSeparator { line } | Self::InvalidName { line, .. } | Self::EmptyCommand { line, .. } => {
				*line
			}
		}
	}
}

/// Procfile parser with configurable name validation.
#[derive(Debug, Clone, Default)]
pub struct Parser {
	options: ParseOptions,
}

impl Parser {
	/// Creates a parser with the given options.
	pub fn new(options: ParseOptions) -> Self {
		Self { options }
	}

	/// Returns the parser options.
	pub fn options(&self) -> &ParseOptions {
		&self.options
	}

	/// Classifies every non-blank, non-comment line of `text`.
	///
	/// Nothing is deduplicated here; a later entry for the same name wins when
	/// the entries are collected by [`parse`](Self::parse).
	pub fn entries<'a>(&'a self, text: &'a str) -> impl Iterator<Item = std::result::Result<Entry<'a>, Reject>> + 'a {
		text.split('\n').enumerate().filter_map(move |(idx, raw)| {
			let line = raw.strip_suffix('\r').unwrap_or(raw).trim();
			if line.is_empty() || line.starts_with('#') {
				return None;
			}
			Some(self.classify(idx + 1, line))
		})
	}

	/// Parses `text` into a process table.
	///
	/// # Errors
	///
	/// Returns [`ProcfileError::NoValidProcesses`](crate::ProcfileError::NoValidProcesses)
	/// if no line declares a valid process.
	pub fn parse(&self, text: &str) -> Result<ProcessTable> {
		let processes = self.entries(text).fold(HashMap::new(), |mut processes, entry| {
			match entry {
				Ok(Entry { name, command, .. }) => {
					processes.insert(name.to_string(), vec![command.to_string()]);
				}
				Err(reject) => tracing::trace!(%reject, "Discarding Procfile line"),
			}
			processes
		});

		let table = ProcessTable::from_processes(processes)?;
		tracing::debug!(
			processes = table.len(),
			routable = table.routable_process_name(),
			"Parsed Procfile"
		);
		Ok(table)
	}

	fn classify<'a>(&self, line: usize, text: &'a str) -> std::result::Result<Entry<'a>, Reject> {
		let (name, command) = text.split_once(':').ok_or(Reject::MissingSeparator { line })?;
		let (name, command) = (name.trim(), command.trim());

		if !self.options.name_pattern.matches(name) {
			return Err(Reject::InvalidName {
				line,
				name: name.to_string(),
			});
		}
		if command.is_empty() {
			return Err(Reject::EmptyCommand {
				line,
				name: name.to_string(),
			});
		}

		Ok(Entry { line, name, command })
	}
}

//! Process table construction from structured specs.

use std::collections::HashMap;

use crate::error::Result;
use crate::table::{ProcessSpec, ProcessTable};


/// Builds a process table from upstream process specs.
///
/// Command tokens are kept exactly as given. Names are trusted to be valid.
/// A later spec with the same name replaces an earlier one. Specs without any
/// command token are skipped.
///
/// # Errors
///
/// Returns [`ProcfileError::NoValidProcesses`](crate::ProcfileError::NoValidProcesses)
/// if `specs` is empty or no spec carries a command.
pub fn from_specs<I>(specs: I) -> Result<ProcessTable>
where
	I: IntoIterator<Item = ProcessSpec>,
{
	let processes: HashMap<String, Vec<String>> =
		specs.into_iter().map(|spec| (spec.name, spec.cmd)).collect();

	let table = ProcessTable::from_processes(processes)?;
	tracing::debug!(
		processes = table.len(),
		routable = table.routable_process_name(),
		"Built process table from specs"
	);
	Ok(table)
}

//! Process table and spec types shared by the parser and the builder.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ProcfileError, Result};
use crate::select::select_routable;

/// A process as declared by an upstream application spec.
///
/// Command tokens are kept as given when building a table with
/// [`from_specs`](crate::from_specs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
	/// Process name.
	pub name: String,
	/// Command line tokens, in execution order.
	pub cmd: Vec<String>,
}

impl ProcessSpec {
	/// Creates a spec from a name and its command tokens.
	pub fn new<I, S>(name: impl Into<String>, cmd: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			cmd: cmd.into_iter().map(Into::into).collect(),
		}
	}
}

/// Named processes plus the one that receives routed traffic.
///
/// A table always holds at least one process, every process has at least one
/// command token, and the routable name is always one of the process names.
/// Tables can only be obtained from [`parse`](crate::parse) or
/// [`from_specs`](crate::from_specs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTable {
	#[serde(serialize_with = "sorted")]
	processes: HashMap<String, Vec<String>>,
	routable_process_name: String,
}

impl ProcessTable {
	/// Finalizes accumulated processes into a table.
	///
	/// Entries with no command tokens are dropped. Fails with
	/// [`ProcfileError::NoValidProcesses`] when nothing is left.
	pub(crate) fn from_processes(mut processes: HashMap<String, Vec<String>>) -> Result<Self> {
		processes.retain(|_, cmd| !cmd.is_empty());
		let routable_process_name = select_routable(processes.keys().map(String::as_str))
			.ok_or(ProcfileError::NoValidProcesses)?
			.to_string();
		Ok(Self {
			processes,
			routable_process_name,
		})
	}

	/// Returns the process map.
	pub fn processes(&self) -> &HashMap<String, Vec<String>> {
		&self.processes
	}

	/// Returns the name of the routable process.
	pub fn routable_process_name(&self) -> &str {
		&self.routable_process_name
	}

	/// Returns the command tokens of the named process.
	pub fn command(&self, name: &str) -> Option<&[String]> {
		self.processes.get(name).map(Vec::as_slice)
	}

	/// Returns the command tokens of the routable process.
	pub fn routable_command(&self) -> &[String] {
		self.command(&self.routable_process_name).unwrap_or_default()
	}

	/// Returns `true` if a process with this name is declared.
	pub fn contains(&self, name: &str) -> bool {
		self.processes.contains_key(name)
	}

	/// Returns the process names in byte order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.processes.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Returns the number of processes. Never zero.
	pub fn len(&self) -> usize {
		self.processes.len()
	}

	/// Always `false`; present for API symmetry with [`len`](Self::len).
	pub fn is_empty(&self) -> bool {
		self.processes.is_empty()
	}

	/// Consumes the table, returning the process map and the routable name.
	pub fn into_parts(self) -> (HashMap<String, Vec<String>>, String) {
		(self.processes, self.routable_process_name)
	}
}

impl FromStr for ProcessTable {
	type Err = ProcfileError;

	fn from_str(s: &str) -> Result<Self> {
		crate::parse(s)
	}
}

impl TryFrom<Vec<ProcessSpec>> for ProcessTable {
	type Error = ProcfileError;

	fn try_from(specs: Vec<ProcessSpec>) -> Result<Self> {
		crate::from_specs(specs)
	}
}

fn sorted<S>(processes: &HashMap<String, Vec<String>>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
	S: Serializer,
{
	processes.iter().collect::<BTreeMap<_, _>>().serialize(serializer)
}

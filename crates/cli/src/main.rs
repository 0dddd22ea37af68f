//! Procfile inspection binary.
//!
//! Reads a Procfile (or a JSON list of process specs) and prints the resulting
//! process table as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shipyard_procfile::{ProcessSpec, ProcessTable, from_specs};
use tracing::{debug, warn};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "shipyard-procfile")]
#[command(about = "Parse a Procfile and print its process table as JSON")]
struct Args {
	/// Input file, `-` or omitted for stdin
	#[arg(value_name = "PATH")]
	input: Option<PathBuf>,

	/// Treat the input as a JSON array of `{"name", "cmd"}` process specs
	#[arg(long)]
	specs: bool,

	/// Verbose logging, reports discarded Procfile lines
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let text = read_input(args.input.as_deref())?;
	let table = if args.specs {
		let specs: Vec<ProcessSpec> = serde_json::from_str(&text).context("failed to decode process specs")?;
		from_specs(specs)?
	} else {
		parse_procfile(&text, args.verbose)?
	};

	println!("{}", serde_json::to_string_pretty(&table)?);
	Ok(())
}

fn parse_procfile(text: &str, verbose: bool) -> Result<ProcessTable> {
	let parser = shipyard_procfile::Parser::default();
	if verbose {
		for reject in parser.entries(text).filter_map(|entry| entry.err()) {
			warn!(line = reject.line(), "{reject}");
		}
	}
	let table = parser.parse(text)?;
	debug!(routable = table.routable_process_name(), "Procfile parsed");
	Ok(table)
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) if path != Path::new("-") => {
			std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
		}
		_ => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
			Ok(text)
		}
	}
}

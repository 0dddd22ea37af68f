use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::ProcfileError;

fn processes(entries: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
	entries
		.iter()
		.map(|(name, cmd)| (name.to_string(), vec![cmd.to_string()]))
		.collect()
}

#[test]
fn single_web_command() {
	let table = parse("web: command arg1 arg2").unwrap();
	assert_eq!(table.processes(), &processes(&[("web", "command arg1 arg2")]));
	assert_eq!(table.routable_process_name(), "web");
}

#[test]
fn single_command() {
	let table = parse("long-command-name: command arg1 arg2").unwrap();
	assert_eq!(table.processes(), &processes(&[("long-command-name", "command arg1 arg2")]));
	assert_eq!(table.routable_process_name(), "long-command-name");
}

#[test]
fn two_commands() {
	let table = parse("web: command arg1 arg2\nworker: celery worker").unwrap();
	assert_eq!(
		table.processes(),
		&processes(&[("web", "command arg1 arg2"), ("worker", "celery worker")])
	);
	assert_eq!(table.routable_process_name(), "web");
}

#[test]
fn two_commands_without_web() {
	let table = parse("worker: command arg1 arg2\n\r\nabc: abc-arg1 abc-arg2").unwrap();
	assert_eq!(
		table.processes(),
		&processes(&[("worker", "command arg1 arg2"), ("abc", "abc-arg1 abc-arg2")])
	);
	assert_eq!(table.routable_process_name(), "abc");
}

#[test]
fn three_commands_without_web() {
	let table = parse("bbb: bbb-command\n\r\nzzz: zzz-command\r\naaa: aaa-command").unwrap();
	assert_eq!(
		table.processes(),
		&processes(&[("aaa", "aaa-command"), ("zzz", "zzz-command"), ("bbb", "bbb-command")])
	);
	assert_eq!(table.routable_process_name(), "aaa");
}

#[test]
fn comments_are_skipped() {
	let table =
		parse("bbb: bbb-command\n# some comment\n\nzzz: zzz-command\r\naaa: aaa-command\n # another comment").unwrap();
	assert_eq!(
		table.processes(),
		&processes(&[("aaa", "aaa-command"), ("zzz", "zzz-command"), ("bbb", "bbb-command")])
	);
	assert_eq!(table.routable_process_name(), "aaa");
}

#[test]
fn hash_inside_command_is_kept() {
	let table = parse("web: echo '#not a comment' # nor this").unwrap();
	assert_eq!(table.command("web").unwrap(), ["echo '#not a comment' # nor this"]);
}

#[test]
fn broken_lines_are_ignored() {
	let table = parse("b,bb: bbb-command\n\r\n: zzz-command\r\naaa: aaa-command").unwrap();
	assert_eq!(table.processes(), &processes(&[("aaa", "aaa-command")]));
	assert_eq!(table.routable_process_name(), "aaa");
}

#[test]
fn lines_without_separator_or_command_are_ignored() {
	let table = parse("just some text\nweb:\nwe b: run\nworker:   \nclock: tick").unwrap();
	assert_eq!(table.processes(), &processes(&[("clock", "tick")]));
}

#[test]
fn splits_on_first_colon_only() {
	let table = parse("web: python -m http.server --bind 0.0.0.0:8080").unwrap();
	assert_eq!(table.command("web").unwrap(), ["python -m http.server --bind 0.0.0.0:8080"]);
}

#[test]
fn duplicate_name_last_write_wins() {
	let table = parse("worker: command arg1 arg2\nworker: celery worker").unwrap();
	assert_eq!(table.processes(), &processes(&[("worker", "celery worker")]));
	assert_eq!(table.routable_process_name(), "worker");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
	let table = parse("   web   :\t bundle exec puma  \r\n").unwrap();
	assert_eq!(table.processes(), &processes(&[("web", "bundle exec puma")]));
}

#[test]
fn broken_procfile() {
	assert!(matches!(parse(": bbb-command"), Err(ProcfileError::NoValidProcesses)));
}

#[test]
fn empty_procfile() {
	assert!(matches!(parse(""), Err(ProcfileError::NoValidProcesses)));
}

#[test]
fn only_comments_and_blanks() {
	assert!(matches!(parse("# web: nope\n\n\r\n   \n"), Err(ProcfileError::NoValidProcesses)));
}

#[test]
fn entries_report_rejects_with_line_numbers() {
	let parser = Parser::default();
	let text = "web: puma\n# comment\nnocolon\n\nb,bb: x\nworker:\nclock: tick";
	let entries: Vec<_> = parser.entries(text).collect();
	assert_eq!(
		entries,
		vec![
			Ok(Entry {
				line: 1,
				name: "web",
				command: "puma",
			}),
			Err(Reject::MissingSeparator { line: 3 }),
			Err(Reject::InvalidName {
				line: 5,
				name: "b,bb".to_string(),
			}),
			Err(Reject::EmptyCommand {
				line: 6,
				name: "worker".to_string(),
			}),
			Ok(Entry {
				line: 7,
				name: "clock",
				command: "tick",
			}),
		]
	);
	assert_eq!(entries[2].as_ref().unwrap_err().line(), 5);
}

#[test]
fn reject_messages() {
	assert_eq!(Reject::MissingSeparator { line: 3 }.to_string(), "line 3: missing ':' separator");
	assert_eq!(
		Reject::InvalidName {
			line: 1,
			name: String::new(),
		}
		.to_string(),
		r#"line 1: invalid process name """#
	);
}

#[test]
fn custom_name_pattern() {
	let parser = Parser::new(ParseOptions {
		name_pattern: NamePattern::new("[a-z]+").unwrap(),
	});
	let table = parser.parse("web-2: puma\nworker: celery\nWeb: nope").unwrap();
	assert_eq!(table.processes(), &processes(&[("worker", "celery")]));
	assert!(matches!(parser.parse("web-2: puma"), Err(ProcfileError::NoValidProcesses)));
}

fn arb_name() -> impl Strategy<Value = String> {
	"[A-Za-z0-9_-]{1,16}"
}

fn arb_command() -> impl Strategy<Value = String> {
	"[a-z0-9./=:-]{1,8}( [a-z0-9./=:-]{1,8}){0,4}"
}

proptest! {
	/// A single well-formed line yields exactly that process, and it is routable.
	#[test]
	fn prop_single_line(name in arb_name(), cmd in arb_command(), crlf in any::<bool>()) {
		let text = format!("{name}: {cmd}{}", if crlf { "\r\n" } else { "" });
		let table = parse(&text).unwrap();
		prop_assert_eq!(table.len(), 1);
		prop_assert_eq!(table.command(&name).unwrap(), [cmd.clone()]);
		prop_assert_eq!(table.routable_process_name(), name.as_str());
	}

	/// Comment and blank lines never change the result.
	#[test]
	fn prop_comments_are_inert(
		lines in prop::collection::vec((arb_name(), arb_command()), 1..6),
		comment in "[ -~]{0,20}",
	) {
		let plain: String = lines.iter().map(|(n, c)| format!("{n}: {c}\n")).collect();
		let noisy: String = lines
			.iter()
			.map(|(n, c)| format!("# {comment}\n\n  \r\n{n}: {c}\r\n"))
			.collect();
		prop_assert_eq!(parse(&plain).unwrap(), parse(&noisy).unwrap());
	}
}

//! Process name validation.
//!
//! A legal process name is one or more ASCII letters, digits, hyphens or
//! underscores. The rule lives in [`DEFAULT_NAME_PATTERN`]; [`NamePattern`]
//! allows a different regular language to be plugged into the parser.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ProcfileError, Result};


/// Regular expression every process name must match by default.
pub const DEFAULT_NAME_PATTERN: &str = "^[A-Za-z0-9_-]+$";

static DEFAULT_NAME_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(DEFAULT_NAME_PATTERN).expect("default name pattern is valid"));

/// Returns `true` if `name` is a legal process name under the default pattern.
///
/// `name` is expected to be trimmed already; surrounding whitespace makes it
/// illegal.
pub fn is_valid_name(name: &str) -> bool {
	matches_with(&DEFAULT_NAME_REGEX, name)
}

fn matches_with(regex: &Regex, name: &str) -> bool {
	!name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == ',' || c == ':') && regex.is_match(name)
}

/// Compiled process name predicate.
///
/// Whatever the pattern, empty names and names containing whitespace, commas
/// or colons never match: those characters are structural in a Procfile line.
#[derive(Clone)]
pub struct NamePattern {
	regex: Regex,
}

impl NamePattern {
	/// Compiles a custom name pattern.
	///
	/// The pattern is anchored at both ends, so `[a-z]+` only accepts names made
	/// entirely of lowercase letters.
	///
	/// # Errors
	///
	/// Returns [`ProcfileError::InvalidNamePattern`] if the pattern does not
	/// compile.
	pub fn new(pattern: &str) -> Result<Self> {
		let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
			ProcfileError::InvalidNamePattern {
				pattern: pattern.to_string(),
				source,
			}
		})?;
		Ok(Self { regex })
	}

	/// Returns the underlying regular expression source.
	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}

	/// Tests a trimmed candidate name against the pattern.
	pub fn matches(&self, name: &str) -> bool {
		matches_with(&self.regex, name)
	}
}

impl Default for NamePattern {
	fn default() -> Self {
		Self {
			regex: DEFAULT_NAME_REGEX.clone(),
		}
	}
}

impl fmt::Debug for NamePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("NamePattern").field(&self.as_str()).finish()
	}
}

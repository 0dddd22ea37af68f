//! Routable process selection.


/// Process name that is always routable when declared.
pub const ROUTABLE_DEFAULT: &str = "web";

/// Picks the process that receives external traffic.
///
/// Returns [`ROUTABLE_DEFAULT`] if present, otherwise the smallest name in byte
/// order. The whole set is scanned, so the result does not depend on the order
/// the names are yielded in. Returns `None` for an empty set.
pub fn select_routable<'a, I>(names: I) -> Option<&'a str>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut smallest: Option<&'a str> = None;
	for name in names {
		if name == ROUTABLE_DEFAULT {
			return Some(name);
		}
		if smallest.is_none_or(|current| name < current) {
			smallest = Some(name);
		}
	}
	smallest
}

/*!
# Argot: Callees

A callee is the literal token used to invoke an argument, like `-f` or
`--flag`. This module handles their validation at registration time and the
classification of raw tokens during parsing.
*/

use crate::ArgotError;



/// # Callee Collection.
///
/// Registration accepts either a single callee or a short/long pair, in any
/// order:
///
/// ```
/// let mut parser = argot::Parser::new("app", argot::Version::new(1, 0));
/// parser.register::<(i32,)>("-n").unwrap();
/// parser.register::<(i32,)>(["--count", "-c"]).unwrap();
/// parser.register::<(i32,)>(("-x", "--width")).unwrap();
///
/// // The shorter callee is always the canonical one.
/// assert_eq!(parser.get("--count").unwrap().callee(), "-c");
/// ```
pub trait Callees {
	/// # Primary and Secondary Callees.
	fn pair(&self) -> (&str, Option<&str>);
}

impl Callees for &str {
	#[inline]
	fn pair(&self) -> (&str, Option<&str>) { (self, None) }
}

impl Callees for [&str; 2] {
	#[inline]
	fn pair(&self) -> (&str, Option<&str>) { (self[0], Some(self[1])) }
}

impl Callees for (&str, &str) {
	#[inline]
	fn pair(&self) -> (&str, Option<&str>) { (self.0, Some(self.1)) }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Callee Kind.
pub(crate) enum CalleeKind {
	/// # A dash and one character.
	Short,

	/// # Two dashes and two or more characters.
	Long,
}

impl CalleeKind {
	/// # Classify.
	///
	/// Return the kind of callee, or `None` if the string doesn't follow the
	/// rules for either.
	pub(crate) fn classify(callee: &str) -> Option<Self> {
		if let Some(rest) = callee.strip_prefix("--") {
			let mut chars = rest.chars();
			let first = chars.next()?;
			if chars.next().is_some() && valid_first(first) { Some(Self::Long) }
			else { None }
		}
		else if let Some(rest) = callee.strip_prefix('-') {
			let mut chars = rest.chars();
			let first = chars.next()?;
			if chars.next().is_none() && valid_first(first) { Some(Self::Short) }
			else { None }
		}
		else { None }
	}
}



/// # Normalize Callees.
///
/// Validate the callee(s), returning them canonical (shortest) first.
///
/// ## Errors
///
/// This will return an error if either callee is malformed, or if both are
/// the same kind.
pub(crate) fn normalize(a: &str, b: Option<&str>)
-> Result<(String, Option<String>), ArgotError> {
	let kind_a = CalleeKind::classify(a)
		.ok_or_else(|| ArgotError::InvalidCallee(a.to_owned()))?;

	let Some(b) = b else { return Ok((a.to_owned(), None)); };
	let kind_b = CalleeKind::classify(b)
		.ok_or_else(|| ArgotError::InvalidCallee(b.to_owned()))?;

	match (kind_a, kind_b) {
		(CalleeKind::Short, CalleeKind::Long) => Ok((a.to_owned(), Some(b.to_owned()))),
		(CalleeKind::Long, CalleeKind::Short) => Ok((b.to_owned(), Some(a.to_owned()))),
		_ => Err(ArgotError::CalleePair(a.to_owned(), b.to_owned())),
	}
}

/// # Option-Like?
///
/// Raw tokens are options if they start with a dash followed by anything
/// other than a digit. A lone `-`, a bare `--`, and negative numbers like
/// `-5` are values.
pub(crate) fn is_option_like(token: &str) -> bool {
	match token.as_bytes() {
		[b'-', b'-'] => false,
		[b'-', second, ..] => ! second.is_ascii_digit(),
		_ => false,
	}
}

/// # Compound Bundle?
///
/// A single-dash option carrying more than one character, like `-abc`.
pub(crate) fn is_compound(token: &str) -> bool {
	is_option_like(token) &&
	! token.starts_with("--") &&
	2 < token.chars().count()
}

/// # Valid First Character?
///
/// The first character after the dash(es) cannot be a digit (that would be a
/// negative number) or another dash.
fn valid_first(c: char) -> bool {
	! c.is_ascii_digit() && c != '-' && ! c.is_whitespace()
}

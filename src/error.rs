/*!
# Argot: Errors

This is the obligatory error enum. Every variant carries enough owned
context to print a one-line diagnostic, and maps onto one of a handful of
broader [`ErrorKind`]s for callers who only care about the category.
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Error!
pub enum ArgotError {
	/// # Invalid Callee.
	///
	/// Short callees are a dash and one non-digit character; long callees
	/// are two dashes and at least two characters, the first of which is not
	/// a digit.
	#[error("Invalid callee: {0}")]
	InvalidCallee(String),

	/// # Callee Pair Mismatch.
	///
	/// Two callees were given but they are not one short and one long.
	#[error("Callees {0} and {1} must be one short and one long.")]
	CalleePair(String, String),

	/// # Duplicate Callee.
	#[error("Duplicate callee: {0}")]
	DuplicateCallee(String),

	/// # Unknown Argument.
	#[error("Unknown argument: {0}; use -h for help.")]
	UnknownArgument(String),

	/// # Compound Bundle Blocked.
	///
	/// A parameter slot belonging to one of the options in a bundle like
	/// `-abc` ran into another option before it could be filled.
	#[error("Not enough parameters for compound argument {0}; use -h for help.")]
	BlockedBundle(String),

	/// # Not Enough Parameters.
	///
	/// The argument was given fewer parameters than it has slots, and has
	/// neither implicit nor default values to make up the difference.
	#[error("Not enough parameters for argument {argument}; usage: {usage}")]
	InsufficientParameters {
		/// # Canonical Callee.
		argument: String,
		/// # Usage Line.
		usage: String,
	},

	/// # Missing Required Argument(s).
	#[error("Missing required argument(s): {}; usage: {usage}", .missing.join(", "))]
	MissingRequired {
		/// # Canonical Callees.
		missing: Vec<String>,
		/// # Usage Line.
		usage: String,
	},

	/// # Validation Failed.
	///
	/// The position is one-based.
	#[error("Validator for argument {argument} failed at position {position}.")]
	Validation {
		/// # Canonical Callee.
		argument: String,
		/// # Failing Slot (1-based).
		position: usize,
	},

	/// # Conversion Failed.
	#[error("Conversion from {value:?} to {target} failed.")]
	Conversion {
		/// # Raw Value.
		value: String,
		/// # Target Type Name.
		target: &'static str,
	},

	/// # No Such Argument.
	#[error("No such argument: {0}")]
	NoSuchArgument(String),

	/// # Slot Out of Range.
	#[error("Argument {argument}'s parameter {index} is out of range.")]
	SlotOutOfRange {
		/// # Canonical Callee.
		argument: String,
		/// # Requested Slot (0-based).
		index: usize,
	},

	/// # Slot Not Set.
	#[error("Argument {argument}'s parameter {index} was not set.")]
	SlotUnset {
		/// # Canonical Callee.
		argument: String,
		/// # Requested Slot (0-based).
		index: usize,
	},
}

impl ArgotError {
	#[must_use]
	/// # Kind.
	///
	/// Return the broader category this error falls into.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{ArgotError, ErrorKind};
	///
	/// let err = ArgotError::DuplicateCallee("-f".to_owned());
	/// assert_eq!(err.kind(), ErrorKind::Registration);
	/// ```
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidCallee(_)
				| Self::CalleePair(_, _)
				| Self::DuplicateCallee(_) => ErrorKind::Registration,
			Self::UnknownArgument(_) => ErrorKind::UnknownArgument,
			Self::BlockedBundle(_)
				| Self::InsufficientParameters { .. } => ErrorKind::InsufficientParameters,
			Self::MissingRequired { .. } => ErrorKind::MissingRequired,
			Self::Validation { .. } => ErrorKind::Validation,
			Self::Conversion { .. } => ErrorKind::Conversion,
			Self::NoSuchArgument(_)
				| Self::SlotOutOfRange { .. }
				| Self::SlotUnset { .. } => ErrorKind::Access,
		}
	}

	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, context-free description of the error.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidCallee(_) => "Invalid callee.",
			Self::CalleePair(_, _) => "Callees must be one short and one long.",
			Self::DuplicateCallee(_) => "Duplicate callee.",
			Self::UnknownArgument(_) => "Unknown argument.",
			Self::BlockedBundle(_) => "Not enough parameters for compound argument.",
			Self::InsufficientParameters { .. } => "Not enough parameters.",
			Self::MissingRequired { .. } => "Missing required argument(s).",
			Self::Validation { .. } => "Validation failed.",
			Self::Conversion { .. } => "Conversion failed.",
			Self::NoSuchArgument(_) => "No such argument.",
			Self::SlotOutOfRange { .. } => "Parameter out of range.",
			Self::SlotUnset { .. } => "Parameter not set.",
		}
	}

	#[must_use]
	/// # Missing Callees.
	///
	/// For [`ArgotError::MissingRequired`], return the canonical callee of
	/// each required argument that never showed up. Everything else returns
	/// an empty slice.
	pub fn missing(&self) -> &[String] {
		if let Self::MissingRequired { missing, .. } = self { missing }
		else { &[] }
	}

	#[must_use]
	/// # Usage Line.
	///
	/// Return the usage string carried by the error, if any.
	pub fn usage(&self) -> Option<&str> {
		match self {
			Self::InsufficientParameters { usage, .. }
				| Self::MissingRequired { usage, .. } => Some(usage),
			_ => None,
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Kind.
///
/// The broad failure categories, one per kind of thing that can go wrong.
pub enum ErrorKind {
	/// # Malformed or duplicate callee.
	Registration,
	/// # Option-like token with no registration.
	UnknownArgument,
	/// # Parameter slots could not be filled.
	InsufficientParameters,
	/// # Required arguments never matched.
	MissingRequired,
	/// # A validator rejected the bound values.
	Validation,
	/// # Typed access could not parse the stored string.
	Conversion,
	/// # Query by unknown callee, or bad slot access.
	Access,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Registration => "registration",
			Self::UnknownArgument => "unknown argument",
			Self::InsufficientParameters => "insufficient parameters",
			Self::MissingRequired => "missing required",
			Self::Validation => "validation",
			Self::Conversion => "conversion",
			Self::Access => "access",
		})
	}
}

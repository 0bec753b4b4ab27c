/*!
# Argot: Value Conversion

Stored parameter values are plain strings; typed access goes through the
[`StringParsable`] trait. Types without an implementation simply cannot be
requested, so the capability check happens at compile time.
*/

use crate::ArgotError;
use std::path::PathBuf;



/// # String-Parsable Type.
///
/// This trait marks a type as extractable from a single CLI parameter. It
/// also provides the short display name used for parameters that were never
/// given an explicit name.
///
/// Implementations receive a non-empty string and must consume _all_ of it;
/// anything left over is a failure. Numeric and character types skip
/// leading whitespace first, but trailing whitespace counts as leftovers.
///
/// ## Examples
///
/// Custom types can opt in too:
///
/// ```
/// use argot::StringParsable;
///
/// #[derive(Debug, PartialEq)]
/// enum Level { Low, High }
///
/// impl StringParsable for Level {
///     const NAME: &'static str = "level";
///
///     fn parse_arg(raw: &str) -> Option<Self> {
///         match raw {
///             "low" => Some(Self::Low),
///             "high" => Some(Self::High),
///             _ => None,
///         }
///     }
///
///     fn to_arg(&self) -> String {
///         match self {
///             Self::Low => "low".to_owned(),
///             Self::High => "high".to_owned(),
///         }
///     }
/// }
///
/// assert_eq!(argot::to_type::<Level>("high"), Ok(Level::High));
/// assert!(argot::to_type::<Level>("medium").is_err());
/// ```
pub trait StringParsable: Sized {
	/// # Display Name.
	const NAME: &'static str;

	/// # Parse.
	///
	/// Return `None` if `raw` is not (entirely) a valid `Self`.
	fn parse_arg(raw: &str) -> Option<Self>;

	/// # To Argument String.
	///
	/// This is the inverse of [`StringParsable::parse_arg`], used to store
	/// default and implicit values.
	fn to_arg(&self) -> String;
}

/// # Helper: Whitespace-skipping `FromStr` implementations.
macro_rules! from_str {
	($($ty:ty, $name:literal),+ $(,)?) => ($(
		impl StringParsable for $ty {
			const NAME: &'static str = $name;

			#[inline]
			fn parse_arg(raw: &str) -> Option<Self> { raw.trim_start().parse().ok() }

			#[inline]
			fn to_arg(&self) -> String { self.to_string() }
		}
	)+);
}

from_str!(
	i8, "int8",
	i16, "int16",
	i32, "int",
	i64, "int64",
	i128, "int128",
	isize, "isize",
	u8, "uint8",
	u16, "uint16",
	u32, "uint",
	u64, "uint64",
	u128, "uint128",
	usize, "usize",
);

/// # Helper: Finite-only float implementations.
///
/// `inf`, `NaN`, and anything that overflows to infinity are rejected.
macro_rules! from_str_float {
	($($ty:ty, $name:literal),+ $(,)?) => ($(
		impl StringParsable for $ty {
			const NAME: &'static str = $name;

			#[inline]
			fn parse_arg(raw: &str) -> Option<Self> {
				raw.trim_start().parse::<Self>().ok().filter(|n| n.is_finite())
			}

			#[inline]
			fn to_arg(&self) -> String { self.to_string() }
		}
	)+);
}

from_str_float!(
	f32, "float",
	f64, "double",
);

impl StringParsable for bool {
	const NAME: &'static str = "bool";

	fn parse_arg(raw: &str) -> Option<Self> {
		match raw.trim_start() {
			"true" | "1" => Some(true),
			"false" | "0" => Some(false),
			_ => None,
		}
	}

	#[inline]
	fn to_arg(&self) -> String { self.to_string() }
}

impl StringParsable for char {
	const NAME: &'static str = "char";

	fn parse_arg(raw: &str) -> Option<Self> {
		let mut chars = raw.trim_start().chars();
		let c = chars.next()?;
		if chars.next().is_none() { Some(c) }
		else { None }
	}

	#[inline]
	fn to_arg(&self) -> String { self.to_string() }
}

impl StringParsable for String {
	const NAME: &'static str = "string";

	#[inline]
	fn parse_arg(raw: &str) -> Option<Self> { Some(raw.to_owned()) }

	#[inline]
	fn to_arg(&self) -> String { self.clone() }
}

impl StringParsable for PathBuf {
	const NAME: &'static str = "path";

	#[inline]
	fn parse_arg(raw: &str) -> Option<Self> { Some(Self::from(raw)) }

	#[inline]
	fn to_arg(&self) -> String { self.to_string_lossy().into_owned() }
}



/// # To Type.
///
/// Convert a raw parameter string into `T`.
///
/// ## Examples
///
/// ```
/// assert_eq!(argot::to_type::<i32>("42"), Ok(42));
/// assert!(argot::to_type::<i32>("42x").is_err());
/// assert!(argot::to_type::<i32>("").is_err());
/// ```
///
/// ## Errors
///
/// This will return an error if `raw` is empty or cannot be wholly parsed as
/// a `T`.
pub fn to_type<T: StringParsable>(raw: &str) -> Result<T, ArgotError> {
	let out = if raw.is_empty() { None } else { T::parse_arg(raw) };
	out.ok_or_else(|| ArgotError::Conversion {
		value: raw.to_owned(),
		target: T::NAME,
	})
}

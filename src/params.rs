/*!
# Argot: Parameter Lists
*/

use crate::StringParsable;



/// # Parameter List.
///
/// This trait describes the fixed list of parameter slots an argument
/// expects. It is implemented for `()` (no parameters) and for tuples of up
/// to eight [`StringParsable`] types, so the slot count and types are declared
/// once, at registration:
///
/// ```
/// let mut parser = argot::Parser::new("app", argot::Version::new(1, 0));
/// let arg = parser.register::<(i32, f32)>("-r").unwrap();
/// assert_eq!(arg.arity(), 2);
/// ```
///
/// Note that single-parameter lists are written as one-tuples: `(i32,)`.
pub trait Params {
	/// # Number of Slots.
	const ARITY: usize;

	/// # Slot Type Names.
	fn names() -> Vec<&'static str>;

	/// # Slot Values as Strings.
	fn to_args(&self) -> Vec<String>;
}

impl Params for () {
	const ARITY: usize = 0;

	#[inline]
	fn names() -> Vec<&'static str> { Vec::new() }

	#[inline]
	fn to_args(&self) -> Vec<String> { Vec::new() }
}

/// # Helper: Tuple Implementations.
macro_rules! params {
	($len:literal; $($ty:ident $idx:tt),+) => (
		impl<$($ty: StringParsable),+> Params for ($($ty,)+) {
			const ARITY: usize = $len;

			#[inline]
			fn names() -> Vec<&'static str> { vec![$($ty::NAME),+] }

			#[inline]
			fn to_args(&self) -> Vec<String> { vec![$(self.$idx.to_arg()),+] }
		}
	);
}

params!(1; A 0);
params!(2; A 0, B 1);
params!(3; A 0, B 1, C 2);
params!(4; A 0, B 1, C 2, D 3);
params!(5; A 0, B 1, C 2, D 3, E 4);
params!(6; A 0, B 1, C 2, D 3, E 4, F 5);
params!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
params!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

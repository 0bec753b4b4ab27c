/*!
# Argot: Tokenizer
*/

use crate::{
	ArgotError,
	callee,
};
use super::Parser;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Invocation.
///
/// One match of one argument, with the raw parameter tokens captured for it.
pub(super) struct Invocation {
	/// # Argument Index.
	pub(super) arg: usize,

	/// # Raw Parameters.
	pub(super) raw: Vec<String>,

	/// # Input Order.
	pub(super) seq: usize,
}



impl Parser {
	/// # Tokenize.
	///
	/// Walk the raw tokens left to right, matching options to registered
	/// arguments and collecting their parameters. Values outside any
	/// option's reach are skipped.
	///
	/// Bundles like `-abc` are split into one invocation per character, in
	/// order, each taking up to its arity from the tokens that follow. A
	/// bundle running out of tokens is fine (binding sorts that out); one
	/// running into another option is not.
	///
	/// ## Errors
	///
	/// This will return an error if an option (or bundled character) is not
	/// registered, or if a bundle is blocked by another option.
	pub(super) fn tokenize(&self, tokens: &[String])
	-> Result<Vec<Invocation>, ArgotError> {
		let mut out: Vec<Invocation> = Vec::new();
		let mut i = 0;

		while let Some(token) = tokens.get(i) {
			i += 1;
			if ! callee::is_option_like(token) {
				tracing::trace!(token = %token, "skipped stray value");
				continue;
			}

			if callee::is_compound(token) {
				for c in token.chars().skip(1) {
					let short = format!("-{c}");
					let arg = self.position(&short)
						.ok_or_else(|| ArgotError::UnknownArgument(short))?;

					let arity = self.args[arg].arity();
					let mut raw = Vec::with_capacity(arity);
					while raw.len() < arity {
						let Some(next) = tokens.get(i) else { break; };
						if callee::is_option_like(next) {
							return Err(ArgotError::BlockedBundle(token.clone()));
						}
						raw.push(next.clone());
						i += 1;
					}

					tracing::trace!(bundle = %token, argument = %self.args[arg].callee(), raw = ?raw, "matched");
					out.push(Invocation { arg, raw, seq: out.len() });
				}
			}
			else {
				let arg = self.position(token)
					.ok_or_else(|| ArgotError::UnknownArgument(token.clone()))?;

				let end = tokens[i..].iter()
					.position(|t| callee::is_option_like(t))
					.map_or(tokens.len(), |n| i + n);
				let raw = tokens[i..end].to_vec();
				i = end;

				tracing::trace!(argument = %self.args[arg].callee(), raw = ?raw, "matched");
				out.push(Invocation { arg, raw, seq: out.len() });
			}
		}

		Ok(out)
	}
}

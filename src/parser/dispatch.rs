/*!
# Argot: Dispatch
*/

use crate::{
	ArgotError,
	Flow,
	argument::Action,
};
use std::{
	cmp::Reverse,
	collections::BTreeSet,
	io::Write,
};
use super::{
	Parser,
	tokenize::Invocation,
};



impl Parser {
	/// # Dispatch.
	///
	/// Bind each invocation in priority order (ties in input order), stopping
	/// early if anything asks to exit.
	///
	/// If any required arguments went unmatched, only the always-run
	/// invocations get a turn before the parse fails.
	///
	/// ## Errors
	///
	/// This will return an error if required arguments are missing, or if
	/// binding fails for any invocation.
	pub(super) fn dispatch<W: Write>(
		&mut self,
		mut invocations: Vec<Invocation>,
		out: &mut W,
	) -> Result<Flow, ArgotError> {
		invocations.sort_by_key(|inv| (Reverse(self.args[inv.arg].priority()), inv.seq));

		let matched: BTreeSet<usize> = invocations.iter().map(|inv| inv.arg).collect();
		let missing: Vec<String> = self.arguments()
			.filter(|arg| arg.is_required())
			.filter_map(|arg| {
				let idx = self.position(arg.callee())?;
				if matched.contains(&idx) { None }
				else { Some(arg.callee().to_owned()) }
			})
			.collect();

		if ! missing.is_empty() {
			tracing::debug!(missing = ?missing, "required arguments missing");
			for inv in &invocations {
				if ! self.args[inv.arg].is_always_run() { continue; }
				if let Flow::Exit(code) = self.run(inv, out)? {
					return Ok(Flow::Exit(code));
				}
			}

			return Err(ArgotError::MissingRequired { missing, usage: self.usage() });
		}

		tracing::debug!(invocations = invocations.len(), "dispatching");
		for inv in &invocations {
			if let Flow::Exit(code) = self.run(inv, out)? {
				tracing::debug!(argument = %self.args[inv.arg].callee(), code, "exit requested");
				return Ok(Flow::Exit(code));
			}
		}

		Ok(Flow::Continue)
	}

	/// # Run One.
	///
	/// Bind the invocation, then handle the built-in help/version output if
	/// that's what it was.
	///
	/// Output is best-effort; a failed write still exits.
	fn run<W: Write>(&mut self, inv: &Invocation, out: &mut W)
	-> Result<Flow, ArgotError> {
		let flow = self.args[inv.arg].bind(&inv.raw)?;
		let page = match self.args[inv.arg].builtin() {
			Some(Action::Help) => self.help(),
			Some(Action::Version) => self.version_line(),
			_ => return Ok(flow),
		};

		let _res = out.write_all(page.as_bytes()).and_then(|()| out.flush());
		Ok(Flow::Exit(0))
	}
}

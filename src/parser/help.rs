/*!
# Argot: Help and Usage
*/

use std::fmt::Write;
use super::Parser;



/// # Callee Column Width.
///
/// Help text starts this many characters after the leading tab.
const CALLEE_WIDTH: usize = 22;



impl Parser {
	#[must_use]
	/// # Usage.
	///
	/// Return a minimal usage line: the program name followed by every
	/// required argument and its parameters.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(1, 0));
	/// parser.register::<(i32,)>("-J").unwrap()
	///     .parameter_names(["jobs"])
	///     .required();
	///
	/// assert_eq!(parser.usage(), "./app -J [jobs] ");
	/// ```
	pub fn usage(&self) -> String {
		let mut out = format!("./{} ", self.name);
		for arg in self.arguments().filter(|a| a.is_required()) {
			out.push_str(&arg.usage());
		}
		out
	}

	#[must_use]
	/// # Help Page.
	///
	/// Return the full help screen printed by `-h`/`--help`: the usage line,
	/// then each argument (in canonical callee order) with its help text and
	/// own usage line.
	pub fn help(&self) -> String {
		let mut out = String::with_capacity(256 * self.args.len());
		out.push_str("Default Usage: ");
		out.push_str(&self.usage());
		out.push('\n');

		let indent = format!("\n\t{:CALLEE_WIDTH$}", "");
		for arg in self.arguments() {
			let callees = arg.callees_formatted();
			let _res = write!(&mut out, "\t{callees:<CALLEE_WIDTH$}");
			if CALLEE_WIDTH <= callees.len() { out.push_str(&indent); }

			out.push_str(&arg.help_text().replace('\n', &indent));
			let _res = writeln!(&mut out, "\n\t{:>w$}{}\n", "Usage: ", arg.usage(), w = CALLEE_WIDTH + 7);
		}

		out
	}

	/// # Version Line.
	pub(super) fn version_line(&self) -> String {
		format!("{} {}\n", self.name, self.version)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Version;

	#[test]
	fn t_usage() {
		let mut parser = Parser::new("app", Version::new(1, 0));
		assert_eq!(parser.usage(), "./app ");

		parser.register::<(i32, f32)>("-r").expect("Bad callee.")
			.implicit_value((10, 0.5))
			.required();
		parser.register::<()>("--go").expect("Bad callee.").required();
		parser.register::<(i32,)>("-n").expect("Bad callee.");

		assert_eq!(parser.usage(), "./app --go -r [int: 10] [float: 0.5] ");
	}

	#[test]
	fn t_help() {
		let mut parser = Parser::new("app", Version::new(1, 0));
		parser.add_flag(["-q", "--quiet-but-very-long"]).expect("Bad callee.")
			.help("Shh.");
		parser.register::<(i32,)>("-n").expect("Bad callee.")
			.help("A number.\nAny number.")
			.default_value((3,));

		let pad = " ".repeat(CALLEE_WIDTH);
		let usage = format!("\t{pad}Usage: ");
		let expected = [
			"Default Usage: ./app \n".to_owned(),
			format!("\t-V, --version         Displays the software version.\n{usage}-V \n\n"),
			format!("\t-h, --help            Displays this message.\n{usage}-h \n\n"),
			format!("\t-n                    A number.\n\t{pad}Any number.\n{usage}-n [int]  default: int(3) \n\n"),
			format!("\t-q, --quiet-but-very-long\n\t{pad}Shh.\n{usage}-q \n\n"),
		].concat();
		assert_eq!(parser.help(), expected);
	}

	#[test]
	fn t_version_line() {
		let parser = Parser::new("my-app", Version::new(0, 12));
		assert_eq!(parser.version_line(), "my-app 0.12\n");
	}
}

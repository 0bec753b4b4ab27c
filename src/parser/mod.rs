/*!
# Argot: Parser
*/

mod dispatch;
mod help;
mod tokenize;

use crate::{
	ArgHandle,
	ArgotError,
	Argument,
	Callees,
	Flow,
	Params,
	argument::Action,
	callee,
};
use std::{
	collections::BTreeMap,
	fmt,
	io::Write,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Program Version.
///
/// This is printed by the built-in `-V`/`--version` argument.
pub struct Version {
	/// # Major.
	pub major: u32,

	/// # Minor.
	pub minor: u32,
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

impl Version {
	#[must_use]
	/// # New.
	pub const fn new(major: u32, minor: u32) -> Self { Self { major, minor } }
}



/// # Argument Parser.
///
/// This is the registry of known arguments, and the entry point for parsing.
///
/// Register arguments with [`Parser::register`] and [`Parser::add_flag`],
/// feed it the raw CLI tokens with [`Parser::parse_env`] (or one of its
/// siblings), then query the results with [`Parser::get`].
///
/// Parsing happens in three phases:
/// 1. Tokens are matched to arguments, producing an ordered list of invocations;
/// 2. Required arguments are checked for; if any are missing, only the always-run invocations (help, version) are dispatched before failing;
/// 3. Invocations are dispatched by priority (highest first), then input order: parameters are resolved and validated, actions are called, and the final values are stored.
///
/// If an argument matches more than once, each match is dispatched in
/// turn, so the last one in the input wins.
///
/// Any failure aborts the whole parse. Any action returning [`Flow::Exit`]
/// stops it early, and the exit code is returned to the caller.
///
/// ## Examples
///
/// ```
/// use argot::{Flow, Parser, Version};
///
/// let mut parser = Parser::new("app", Version::new(1, 2));
/// parser.add_flag(["-v", "--verbose"]).unwrap();
///
/// assert_eq!(parser.parse(["-v"]), Ok(Flow::Continue));
/// assert!(parser.get("--verbose").unwrap().is_used());
/// ```
pub struct Parser {
	/// # Program Name.
	name: String,

	/// # Program Version.
	version: Version,

	/// # Arguments.
	args: Vec<Argument>,

	/// # Callee Index.
	///
	/// Both callees of every argument map to its position in `args`.
	callees: BTreeMap<String, usize>,
}

impl fmt::Debug for Parser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Parser")
			.field("name", &self.name)
			.field("version", &self.version)
			.field("args", &self.args)
			.finish_non_exhaustive()
	}
}

/// ## Instantiation and Registration.
impl Parser {
	#[must_use]
	/// # New.
	///
	/// Create a new parser, pre-loaded with the built-in `-h`/`--help` and
	/// `-V`/`--version` flags.
	pub fn new<S: Into<String>>(name: S, version: Version) -> Self {
		let mut out = Self {
			name: name.into(),
			version,
			args: Vec::new(),
			callees: BTreeMap::new(),
		};

		out.insert_builtin("-h", "--help", "Displays this message.", Action::Help);
		out.insert_builtin("-V", "--version", "Displays the software version.", Action::Version);
		out
	}

	/// # Register Argument.
	///
	/// Add a new argument taking parameters of types `P` (a tuple; see
	/// [`Params`]), returning a handle for further configuration.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(1, 0));
	/// parser.register::<(i32, f32, char, u32)>("-I").unwrap()
	///     .help("Four parameters, all optional.")
	///     .implicit_value((10, 0.5, 'h', 404))
	///     .default_value((0, 0.0, 'a', 0));
	///
	/// // Callees must follow the rules.
	/// assert!(parser.register::<(i32,)>("-io").is_err());
	///
	/// // And can't be reused.
	/// assert!(parser.register::<(i32,)>(["-I", "--input"]).is_err());
	/// assert!(parser.register::<()>("--help").is_err());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if a callee is malformed, if two callees are
	/// given that aren't one short and one long, or if either is already
	/// registered.
	pub fn register<P: Params>(&mut self, callees: impl Callees)
	-> Result<ArgHandle<'_, P>, ArgotError> {
		let idx = self.register_raw::<P>(&callees)?;
		Ok(ArgHandle::new(&mut self.args[idx]))
	}

	/// # Add Flag.
	///
	/// Register a boolean switch. Flags take one parameter, which is
	/// implicitly `true` when present and `false` by default.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(1, 0));
	/// parser.add_flag(["-f", "--flag"]).unwrap();
	/// parser.add_flag("-g").unwrap();
	///
	/// parser.parse(["-f"]).unwrap();
	/// assert_eq!(parser.get("-f").unwrap().parse::<bool>(0), Ok(true));
	/// assert_eq!(parser.get("-g").unwrap().parse::<bool>(0), Ok(false));
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if a callee is malformed or already
	/// registered.
	pub fn add_flag(&mut self, callees: impl Callees)
	-> Result<ArgHandle<'_, (bool,)>, ArgotError> {
		let idx = self.register_raw::<(bool,)>(&callees)?;
		self.args[idx].set_flag();

		let mut handle = ArgHandle::new(&mut self.args[idx]);
		handle.implicit_value((true,)).default_value((false,));
		Ok(handle)
	}

	/// # Register (Index).
	///
	/// Validate and insert a new argument, returning its position.
	fn register_raw<P: Params>(&mut self, callees: &impl Callees)
	-> Result<usize, ArgotError> {
		let (a, b) = callees.pair();
		let (callee, alias) = callee::normalize(a, b)?;

		if let Some(dupe) = std::iter::once(&callee)
			.chain(alias.as_ref())
			.find(|c| self.callees.contains_key(c.as_str()))
		{
			return Err(ArgotError::DuplicateCallee(dupe.clone()));
		}

		tracing::debug!(callee = %callee, alias = ?alias, arity = P::ARITY, "registered argument");
		Ok(self.insert(Argument::new::<P>(callee, alias)))
	}

	/// # Insert Built-In.
	///
	/// The callees are known to be valid and unique.
	fn insert_builtin(
		&mut self,
		callee: &str,
		alias: &str,
		help: &str,
		action: Action,
	) {
		let mut arg = Argument::new::<(bool,)>(callee.to_owned(), Some(alias.to_owned()));
		arg.set_flag();
		arg.set_action(action);

		let idx = self.insert(arg);
		ArgHandle::<(bool,)>::new(&mut self.args[idx])
			.help(help)
			.implicit_value((true,))
			.default_value((false,))
			.always_run()
			.priority(usize::MAX);
	}

	/// # Insert.
	///
	/// Push the argument and index its callee(s), returning its position.
	fn insert(&mut self, arg: Argument) -> usize {
		let idx = self.args.len();
		for c in arg.callees() {
			self.callees.insert(c.to_owned(), idx);
		}
		self.args.push(arg);
		idx
	}
}

/// ## Queries.
impl Parser {
	#[must_use]
	/// # Program Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Program Version.
	pub const fn version(&self) -> Version { self.version }

	/// # Get Argument.
	///
	/// Look up an argument by either of its callees.
	///
	/// ## Errors
	///
	/// This will return an error if no argument answers to `callee`.
	pub fn get(&self, callee: &str) -> Result<&Argument, ArgotError> {
		self.lookup(callee)
			.ok_or_else(|| ArgotError::NoSuchArgument(callee.to_owned()))
	}

	#[must_use]
	/// # Lookup Argument.
	///
	/// Like [`Parser::get`], but returns an `Option`.
	pub fn lookup(&self, callee: &str) -> Option<&Argument> {
		self.position(callee).map(|idx| &self.args[idx])
	}

	/// # Arguments.
	///
	/// Return an iterator over all registered arguments, built-ins included,
	/// ordered by canonical callee.
	pub fn arguments(&self) -> impl Iterator<Item=&Argument> {
		self.callees.iter()
			.filter_map(|(k, &idx)| {
				let arg = &self.args[idx];
				if arg.callee() == k { Some(arg) }
				else { None }
			})
	}

	/// # Position.
	///
	/// Return the index of the argument answering to `callee`.
	fn position(&self, callee: &str) -> Option<usize> {
		self.callees.get(callee).copied()
	}
}

/// ## Parsing.
impl Parser {
	/// # Parse Environment.
	///
	/// Parse the arguments the program was launched with (minus the first),
	/// writing any help/version output to `STDOUT`.
	///
	/// Arguments that aren't valid UTF-8 are converted lossily.
	///
	/// ## Errors
	///
	/// See [`Parser::parse_to`].
	pub fn parse_env(&mut self) -> Result<Flow, ArgotError> {
		self.parse(
			std::env::args_os()
				.skip(1)
				.map(|a| a.to_string_lossy().into_owned())
		)
	}

	/// # Parse.
	///
	/// Parse the given arguments, writing any help/version output to
	/// `STDOUT`. The first (program path) argument should _not_ be included.
	///
	/// ## Errors
	///
	/// See [`Parser::parse_to`].
	pub fn parse<I, S>(&mut self, args: I) -> Result<Flow, ArgotError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.parse_to(args, &mut std::io::stdout().lock())
	}

	/// # Parse To.
	///
	/// Parse the given arguments, writing any help/version output to `out`.
	///
	/// Returns [`Flow::Continue`] if everything was dispatched, or
	/// [`Flow::Exit`] if an action asked to stop early.
	///
	/// Parsers can be reused; every argument is returned to its unused,
	/// default state before the new tokens are considered.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Flow, Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(2, 5));
	/// let mut out = Vec::new();
	/// assert_eq!(parser.parse_to(["-V"], &mut out), Ok(Flow::Exit(0)));
	/// assert_eq!(out, b"app 2.5\n");
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if a token isn't a known argument, there
	/// aren't enough parameters for an argument, required arguments are
	/// missing, or a validator fails.
	pub fn parse_to<I, S, W>(&mut self, args: I, out: &mut W)
	-> Result<Flow, ArgotError>
	where I: IntoIterator<Item=S>, S: Into<String>, W: Write {
		let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
		tracing::debug!(program = %self.name, tokens = tokens.len(), "parsing");

		// Each parse starts fresh.
		for arg in &mut self.args { arg.reset(); }

		let invocations = self.tokenize(&tokens)?;
		self.dispatch(invocations, out)
	}
}

/*!
# Argot: Arguments

This module holds the registered definition of a single argument, the
builder handle returned at registration, and the binding logic that turns
raw parameter tokens into final values.
*/

use crate::{
	ArgotError,
	Params,
	StringParsable,
	to_type,
};
use std::{
	fmt,
	marker::PhantomData,
	ops::Index,
};



/// # Validator Callback.
///
/// Return `0` if the values check out, otherwise the 1-based position of the
/// first offending slot.
type Validator = Box<dyn Fn(&[String]) -> usize>;

/// # Action Callback.
type Callback = Box<dyn FnMut(&[String]) -> Flow>;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Control Flow.
///
/// This is returned by argument actions to tell the parser whether to keep
/// going, and is in turn returned by [`Parser::parse`](crate::Parser::parse)
/// to tell the caller how things ended.
///
/// Actions should return `Exit` rather than terminating the process
/// themselves; the parser stops dispatching immediately and hands the code
/// back up.
pub enum Flow {
	/// # Carry On.
	Continue,

	/// # Stop Everything.
	///
	/// The value is the suggested process exit code.
	Exit(i32),
}

impl Flow {
	#[must_use]
	/// # Is Exit?
	pub const fn is_exit(self) -> bool { matches!(self, Self::Exit(_)) }
}



/// # Action.
pub(crate) enum Action {
	/// # Custom Callback.
	///
	/// If `needs_parameters` is false, the callback is run with an empty
	/// slice _before_ binding.
	Custom {
		/// # Callback.
		callback: Callback,
		/// # Wait for Binding?
		needs_parameters: bool,
	},

	/// # Print Help.
	Help,

	/// # Print Version.
	Version,
}



/// # Registered Argument.
///
/// This holds everything known about a single argument: how it is called,
/// how many parameters it takes, what to fall back to when they're missing,
/// and, after parsing, the final values.
///
/// Instances are created via [`Parser::register`](crate::Parser::register)
/// and [`Parser::add_flag`](crate::Parser::add_flag), and retrieved after
/// parsing with [`Parser::get`](crate::Parser::get).
pub struct Argument {
	/// # Canonical (Short) Callee.
	callee: String,

	/// # Secondary (Long) Callee.
	alias: Option<String>,

	/// # Slot Count.
	arity: usize,

	/// # Slot Display Names.
	names: Vec<String>,

	/// # Default Values.
	defaults: Option<Vec<String>>,

	/// # Implicit Values.
	implicits: Option<Vec<String>>,

	/// # Current Values.
	values: Vec<String>,

	/// # Help Text.
	help: String,

	/// # Required?
	required: bool,

	/// # Always Run?
	always_run: bool,

	/// # Boolean Flag?
	flag: bool,

	/// # Used?
	used: bool,

	/// # Dispatch Priority.
	priority: usize,

	/// # Validator.
	validator: Option<Validator>,

	/// # Action.
	action: Option<Action>,
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Argument")
			.field("callee", &self.callee)
			.field("alias", &self.alias)
			.field("arity", &self.arity)
			.field("names", &self.names)
			.field("defaults", &self.defaults)
			.field("implicits", &self.implicits)
			.field("values", &self.values)
			.field("required", &self.required)
			.field("always_run", &self.always_run)
			.field("flag", &self.flag)
			.field("used", &self.used)
			.field("priority", &self.priority)
			.finish_non_exhaustive()
	}
}

impl Index<usize> for Argument {
	type Output = str;

	/// # Raw Value.
	///
	/// ## Panics
	///
	/// This will panic if `idx` is out of range. Use [`Argument::get`] for a
	/// non-panicking alternative.
	fn index(&self, idx: usize) -> &Self::Output { &self.values[idx] }
}

/// ## Instantiation.
impl Argument {
	/// # New.
	///
	/// Callees are assumed to be pre-validated.
	pub(crate) fn new<P: Params>(callee: String, alias: Option<String>) -> Self {
		Self {
			callee,
			alias,
			arity: P::ARITY,
			names: P::names().into_iter().map(str::to_owned).collect(),
			defaults: None,
			implicits: None,
			values: vec![String::new(); P::ARITY],
			help: String::new(),
			required: false,
			always_run: false,
			flag: false,
			used: false,
			priority: 0,
			validator: None,
			action: None,
		}
	}

	/// # Mark as Flag.
	pub(crate) fn set_flag(&mut self) { self.flag = true; }

	/// # Set Built-In Action.
	pub(crate) fn set_action(&mut self, action: Action) { self.action = Some(action); }

	/// # Reset.
	///
	/// Forget any previous binding, restoring the defaults (if any).
	pub(crate) fn reset(&mut self) {
		self.used = false;
		match &self.defaults {
			Some(defaults) => self.values.clone_from(defaults),
			None => self.values.iter_mut().for_each(String::clear),
		}
	}
}

/// ## Queries.
impl Argument {
	#[must_use]
	/// # Canonical Callee.
	///
	/// This is the shorter of the registered callees.
	pub fn callee(&self) -> &str { &self.callee }

	/// # All Callees.
	///
	/// Return an iterator over the canonical and (if any) secondary callee.
	pub fn callees(&self) -> impl Iterator<Item=&str> {
		std::iter::once(self.callee.as_str()).chain(self.alias.as_deref())
	}

	#[must_use]
	/// # Matches Callee?
	pub fn answers_to(&self, callee: &str) -> bool {
		self.callee == callee || self.alias.as_deref() == Some(callee)
	}

	#[must_use]
	/// # Arity.
	///
	/// Return the number of parameter slots.
	pub const fn arity(&self) -> usize { self.arity }

	#[must_use]
	/// # Parameter Names.
	pub fn parameter_names(&self) -> &[String] { &self.names }

	#[must_use]
	/// # Help Text.
	pub fn help_text(&self) -> &str { &self.help }

	#[must_use]
	/// # Is Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # Is Always-Run?
	pub const fn is_always_run(&self) -> bool { self.always_run }

	#[must_use]
	/// # Is Flag?
	pub const fn is_flag(&self) -> bool { self.flag }

	#[must_use]
	/// # Was Used?
	///
	/// Returns `true` if the argument was matched and bound during the most
	/// recent parse.
	pub const fn is_used(&self) -> bool { self.used }

	#[must_use]
	/// # Priority.
	pub const fn priority(&self) -> usize { self.priority }

	#[must_use]
	/// # Values.
	///
	/// Return the current raw values. Before parsing (or if the argument
	/// was not matched by the most recent parse) these are the defaults, if
	/// any, or empty strings.
	pub fn values(&self) -> &[String] { &self.values }

	#[must_use]
	/// # Raw Value.
	///
	/// Return the raw value at `idx`, if in range.
	pub fn get(&self, idx: usize) -> Option<&str> {
		self.values.get(idx).map(String::as_str)
	}

	/// # Parse Value.
	///
	/// Convert the raw value at `idx` into a `T`.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(1, 0));
	/// parser.register::<(i32, f32)>("-r").unwrap()
	///     .default_value((3, 0.5));
	///
	/// parser.parse_to(["-r", "7"], &mut std::io::sink()).unwrap();
	///
	/// let r = parser.get("-r").unwrap();
	/// assert_eq!(r.parse::<i32>(0), Ok(7));
	/// assert_eq!(r.parse::<f32>(1), Ok(0.5));
	/// assert!(r.parse::<i32>(2).is_err());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if `idx` is out of range, the value was
	/// never set, or the conversion fails.
	pub fn parse<T: StringParsable>(&self, idx: usize) -> Result<T, ArgotError> {
		let raw = self.values.get(idx).ok_or_else(|| ArgotError::SlotOutOfRange {
			argument: self.callee.clone(),
			index: idx,
		})?;

		if raw.is_empty() {
			return Err(ArgotError::SlotUnset {
				argument: self.callee.clone(),
				index: idx,
			});
		}

		to_type(raw)
	}
}

/// ## Formatting.
impl Argument {
	#[must_use]
	/// # Formatted Callees.
	///
	/// E.g. `-f, --flag`.
	pub fn callees_formatted(&self) -> String {
		match &self.alias {
			Some(alias) => format!("{}, {alias}", self.callee),
			None => self.callee.clone(),
		}
	}

	#[must_use]
	/// # Usage.
	///
	/// Return the canonical callee followed by the formatted parameter list.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Parser, Version};
	///
	/// let mut parser = Parser::new("app", Version::new(1, 0));
	/// parser.register::<(i32, f32)>("-r").unwrap()
	///     .parameter_names(["count", "ratio"])
	///     .implicit_value((10, 0.5))
	///     .default_value((0, 0.0));
	///
	/// assert_eq!(
	///     parser.get("-r").unwrap().usage(),
	///     "-r [count: 10] [ratio: 0.5]  default: count(0) ratio(0) ",
	/// );
	/// ```
	pub fn usage(&self) -> String {
		let mut out = self.callee.clone();
		out.push(' ');
		self.push_parameters(&mut out);
		out
	}

	/// # Push Formatted Parameters.
	///
	/// Flags don't list their parameters.
	pub(crate) fn push_parameters(&self, out: &mut String) {
		if self.flag { return; }

		for (idx, name) in self.names.iter().enumerate() {
			out.push('[');
			out.push_str(name);
			if let Some(v) = self.implicits.as_ref().and_then(|v| v.get(idx)) {
				out.push_str(": ");
				out.push_str(v);
			}
			out.push_str("] ");
		}

		if let Some(defaults) = &self.defaults {
			out.push_str(" default: ");
			for (name, v) in self.names.iter().zip(defaults) {
				out.push_str(name);
				out.push('(');
				out.push_str(v);
				out.push_str(") ");
			}
		}
	}
}

/// ## Binding.
impl Argument {
	/// # Resolve Values.
	///
	/// Work out the final value for each slot from the raw tokens given,
	/// falling back to the implicit values, then the default values.
	///
	/// If there are implicit values and no tokens at all, the implicit values
	/// are used wholesale. Tokens beyond the arity are ignored.
	///
	/// Validation, if any, is applied to the result.
	///
	/// ## Errors
	///
	/// This will return an error if there are not enough tokens and no
	/// fallbacks, or if the validator rejects the values.
	pub(crate) fn resolve(&self, raw: &[String]) -> Result<Vec<String>, ArgotError> {
		let out = match &self.implicits {
			Some(implicits) if raw.is_empty() => implicits.clone(),
			_ => {
				let given = raw.len().min(self.arity);
				let mut out = raw[..given].to_vec();
				if given < self.arity {
					let fill = self.implicits.as_ref()
						.or(self.defaults.as_ref())
						.ok_or_else(|| ArgotError::InsufficientParameters {
							argument: self.callee.clone(),
							usage: self.usage(),
						})?;
					out.extend_from_slice(&fill[given..]);
				}
				out
			},
		};

		if let Some(cb) = &self.validator {
			let position = cb(&out);
			if position != 0 {
				return Err(ArgotError::Validation {
					argument: self.callee.clone(),
					position,
				});
			}
		}

		tracing::trace!(argument = %self.callee, values = ?out, "resolved");
		Ok(out)
	}

	/// # Bind.
	///
	/// Run the whole binding sequence for one invocation: info action (if
	/// any), resolution and validation, the regular action (if any), then
	/// commit the values.
	///
	/// Built-in help/version actions are handled by the dispatcher and are
	/// ignored here.
	///
	/// ## Errors
	///
	/// This bubbles up any resolution or validation errors.
	pub(crate) fn bind(&mut self, raw: &[String]) -> Result<Flow, ArgotError> {
		// Information-only actions don't wait for anything.
		if let Some(Action::Custom { callback, needs_parameters: false }) = &mut self.action {
			let none: &[String] = &[];
			if let Flow::Exit(code) = callback(none) {
				self.used = true;
				return Ok(Flow::Exit(code));
			}
		}

		let values = self.resolve(raw)?;

		let flow =
			if let Some(Action::Custom { callback, needs_parameters: true }) = &mut self.action {
				callback(&values)
			}
			else { Flow::Continue };

		self.values = values;
		self.used = true;
		Ok(flow)
	}

	/// # Builtin Action.
	pub(crate) fn builtin(&self) -> Option<&Action> {
		match &self.action {
			Some(a @ (Action::Help | Action::Version)) => Some(a),
			_ => None,
		}
	}
}



/// # Argument Handle.
///
/// This is returned by [`Parser::register`](crate::Parser::register) and
/// [`Parser::add_flag`](crate::Parser::add_flag) for builder-style
/// configuration of the freshly-registered argument.
///
/// The type parameter carries the argument's parameter list so that default
/// and implicit values are checked against it at compile time, and can only
/// ever be set for all slots at once.
///
/// ## Examples
///
/// ```
/// use argot::{Parser, Version};
///
/// let mut parser = Parser::new("app", Version::new(1, 0));
/// parser.register::<(i32,)>(["-j", "--jobs"]).unwrap()
///     .help("Number of parallel jobs.")
///     .parameter_names(["count"])
///     .validator(|v| usize::from(argot::to_type::<i32>(&v[0]).map_or(true, |n| n < 1)))
///     .required();
/// ```
pub struct ArgHandle<'a, P> {
	/// # The Argument.
	inner: &'a mut Argument,

	/// # Parameter Types.
	params: PhantomData<fn() -> P>,
}

impl<P> fmt::Debug for ArgHandle<'_, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ArgHandle").field(&self.inner).finish()
	}
}

impl<'a, P: Params> ArgHandle<'a, P> {
	/// # New.
	pub(crate) fn new(inner: &'a mut Argument) -> Self {
		Self { inner, params: PhantomData }
	}

	#[must_use]
	/// # Argument.
	///
	/// Borrow the underlying argument.
	pub fn argument(&self) -> &Argument { self.inner }

	#[must_use]
	/// # Canonical Callee.
	pub fn callee(&self) -> &str { &self.inner.callee }

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> usize { P::ARITY }

	/// # With Help Text.
	pub fn help<S: Into<String>>(&mut self, help: S) -> &mut Self {
		self.inner.help = help.into();
		self
	}

	/// # Required.
	///
	/// Parsing will fail if this argument is not present, unless an
	/// always-run argument stops things first.
	pub fn required(&mut self) -> &mut Self {
		self.inner.required = true;
		self
	}

	/// # Always Run.
	///
	/// Dispatch this argument even when required arguments are missing.
	pub fn always_run(&mut self) -> &mut Self {
		self.inner.always_run = true;
		self
	}

	/// # With Priority.
	///
	/// Higher priorities are dispatched first; ties go in input order.
	pub fn priority(&mut self, priority: usize) -> &mut Self {
		self.inner.priority = priority;
		self
	}

	/// # With Parameter Names.
	///
	/// Name the slots for display purposes, in order. Extra names are
	/// ignored; unnamed slots keep their type name.
	pub fn parameter_names<I, S>(&mut self, names: I) -> &mut Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		for (slot, name) in self.inner.names.iter_mut().zip(names) {
			*slot = name.into();
		}
		self
	}

	/// # With Default Values.
	///
	/// Used for any slot not filled from input or implicit values, and
	/// reported as the argument's values if it is never matched at all.
	pub fn default_value(&mut self, values: P) -> &mut Self {
		let values = values.to_args();
		if ! self.inner.used { self.inner.values.clone_from(&values); }
		self.inner.defaults = Some(values);
		self
	}

	/// # With Implicit Values.
	///
	/// Used when the argument is present but given no parameters, and to
	/// fill any trailing slots when only some are given.
	pub fn implicit_value(&mut self, values: P) -> &mut Self {
		self.inner.implicits = Some(values.to_args());
		self
	}

	/// # With Action.
	///
	/// Run `cb` with the final values each time the argument is bound.
	pub fn action<F>(&mut self, cb: F) -> &mut Self
	where F: FnMut(&[String]) -> Flow + 'static {
		self.inner.action = Some(Action::Custom {
			callback: Box::new(cb),
			needs_parameters: true,
		});
		self
	}

	/// # With Info Action.
	///
	/// Like [`ArgHandle::action`], but for arguments that only exist to
	/// trigger something (print some information, etc.). The callback
	/// receives an empty slice and runs before binding; if it returns
	/// [`Flow::Exit`], binding is skipped.
	pub fn info_action<F>(&mut self, cb: F) -> &mut Self
	where F: FnMut(&[String]) -> Flow + 'static {
		self.inner.action = Some(Action::Custom {
			callback: Box::new(cb),
			needs_parameters: false,
		});
		self
	}

	/// # With Validator.
	///
	/// The validator receives the final values and returns `0` on success,
	/// or the 1-based position of the first bad slot.
	pub fn validator<F>(&mut self, cb: F) -> &mut Self
	where F: Fn(&[String]) -> usize + 'static {
		self.inner.validator = Some(Box::new(cb));
		self
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use std::{
		cell::RefCell,
		rc::Rc,
	};

	/// # Helper: Owned Strings.
	fn owned(src: &[&str]) -> Vec<String> {
		src.iter().map(|s| (*s).to_owned()).collect()
	}

	/// # Helper: Four-Slot Argument.
	fn four() -> Argument {
		let mut arg = Argument::new::<(i32, f32, char, u32)>("-I".to_owned(), None);
		ArgHandle::<(i32, f32, char, u32)>::new(&mut arg)
			.implicit_value((10, 0.5, 'h', 404))
			.default_value((0, 0.0, 'a', 0));
		arg
	}

	#[test]
	fn t_resolve_fallbacks() {
		let arg = four();

		// Nothing given: implicit values wholesale.
		assert_eq!(arg.resolve(&[]), Ok(owned(&["10", "0.5", "h", "404"])));

		// Some given: the rest come from implicit values.
		assert_eq!(arg.resolve(&owned(&["7"])), Ok(owned(&["7", "0.5", "h", "404"])));
		assert_eq!(
			arg.resolve(&owned(&["7", "1.5", "x"])),
			Ok(owned(&["7", "1.5", "x", "404"])),
		);

		// Extras are ignored.
		assert_eq!(
			arg.resolve(&owned(&["1", "2", "3", "4", "5", "6"])),
			Ok(owned(&["1", "2", "3", "4"])),
		);

		// Defaults only.
		let mut arg = Argument::new::<(i32, i32)>("-D".to_owned(), None);
		ArgHandle::<(i32, i32)>::new(&mut arg).default_value((0, 5));
		assert_eq!(arg.resolve(&[]), Ok(owned(&["0", "5"])));
		assert_eq!(arg.resolve(&owned(&["3"])), Ok(owned(&["3", "5"])));
	}

	#[test]
	fn t_resolve_insufficient() {
		let arg = Argument::new::<(i32, i32)>("-p".to_owned(), Some("--pair".to_owned()));
		assert_eq!(arg.resolve(&owned(&["1", "2"])), Ok(owned(&["1", "2"])));

		match arg.resolve(&owned(&["1"])) {
			Err(ArgotError::InsufficientParameters { argument, usage }) => {
				assert_eq!(argument, "-p");
				assert_eq!(usage, "-p [int] [int] ");
			},
			other => panic!("Expected insufficient parameters, got {other:?}."),
		}

		// Zero arity never runs short.
		let arg = Argument::new::<()>("-z".to_owned(), None);
		assert_eq!(arg.resolve(&owned(&["extra"])), Ok(Vec::new()));
	}

	#[test]
	fn t_resolve_validator() {
		let mut arg = Argument::new::<(i32, i32)>("-J".to_owned(), None);
		ArgHandle::<(i32, i32)>::new(&mut arg)
			.validator(|v| {
				v.iter()
					.position(|x| to_type::<i32>(x).map_or(true, |n| ! (1..10).contains(&n)))
					.map_or(0, |p| p + 1)
			});

		assert!(arg.resolve(&owned(&["1", "9"])).is_ok());
		assert_eq!(
			arg.resolve(&owned(&["1", "10"])),
			Err(ArgotError::Validation { argument: "-J".to_owned(), position: 2 }),
		);
		assert_eq!(
			arg.resolve(&owned(&["x", "5"])),
			Err(ArgotError::Validation { argument: "-J".to_owned(), position: 1 }),
		);
	}

	#[test]
	fn t_bind() {
		let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
		let seen2 = Rc::clone(&seen);

		let mut arg = Argument::new::<(i32,)>("-n".to_owned(), None);
		ArgHandle::<(i32,)>::new(&mut arg)
			.default_value((1,))
			.action(move |v| {
				seen2.borrow_mut().push(v.to_vec());
				Flow::Continue
			});

		// Defaults show up before binding.
		assert!(! arg.is_used());
		assert_eq!(arg.parse::<i32>(0), Ok(1));

		assert_eq!(arg.bind(&owned(&["5"])), Ok(Flow::Continue));
		assert!(arg.is_used());
		assert_eq!(arg.parse::<i32>(0), Ok(5));
		assert_eq!(&arg[0], "5");

		// A second bind wins, and falls back to the defaults, not the
		// previous values.
		assert_eq!(arg.bind(&[]), Ok(Flow::Continue));
		assert_eq!(arg.parse::<i32>(0), Ok(1));

		assert_eq!(*seen.borrow(), [owned(&["5"]), owned(&["1"])]);
	}

	#[test]
	fn t_bind_info_action() {
		let mut arg = Argument::new::<(i32,)>("-G".to_owned(), None);
		ArgHandle::<(i32,)>::new(&mut arg).info_action(|v| {
			assert!(v.is_empty());
			Flow::Exit(3)
		});

		// The action runs before binding, so the missing parameter never
		// becomes a problem.
		assert_eq!(arg.bind(&[]), Ok(Flow::Exit(3)));
		assert!(arg.is_used());
	}

	#[test]
	fn t_reset() {
		let mut arg = four();
		assert_eq!(arg.bind(&owned(&["7"])), Ok(Flow::Continue));
		assert!(arg.is_used());

		arg.reset();
		assert!(! arg.is_used());
		assert_eq!(arg.values(), ["0", "0", "a", "0"]);

		// Without defaults, the slots are emptied.
		let mut arg = Argument::new::<(i32,)>("-n".to_owned(), None);
		assert_eq!(arg.bind(&owned(&["5"])), Ok(Flow::Continue));
		arg.reset();
		assert!(! arg.is_used());
		assert_eq!(
			arg.parse::<i32>(0),
			Err(ArgotError::SlotUnset { argument: "-n".to_owned(), index: 0 }),
		);
	}

	#[test]
	fn t_parse_access() {
		let arg = Argument::new::<(i32,)>("-n".to_owned(), None);
		assert_eq!(
			arg.parse::<i32>(0),
			Err(ArgotError::SlotUnset { argument: "-n".to_owned(), index: 0 }),
		);
		assert_eq!(
			arg.parse::<i32>(1),
			Err(ArgotError::SlotOutOfRange { argument: "-n".to_owned(), index: 1 }),
		);
		assert!(arg.get(1).is_none());
	}

	#[test]
	fn t_usage() {
		let arg = four();
		assert_eq!(
			arg.usage(),
			"-I [int: 10] [float: 0.5] [char: h] [uint: 404]  default: int(0) float(0) char(a) uint(0) ",
		);

		let mut arg = Argument::new::<(bool,)>("-f".to_owned(), Some("--flag".to_owned()));
		arg.set_flag();
		assert_eq!(arg.usage(), "-f ");
		assert_eq!(arg.callees_formatted(), "-f, --flag");
		assert_eq!(arg.callees().collect::<Vec<_>>(), ["-f", "--flag"]);
		assert!(arg.answers_to("--flag"));
		assert!(! arg.answers_to("--flags"));
	}
}

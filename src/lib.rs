/*!
# Argot

This crate provides a declarative CLI argument parser built around
fixed-arity parameter slots.

Each argument is registered upfront with one or two callees (`-f`,
`--flag`), a typed list of parameters, and whatever extras it needs:
default values, implicit values (used when the argument is present but
given nothing), a validator, an action, a priority. [`Parser`] then works
through the raw arguments, matches tokens to registrations, fills in any
missing parameters, enforces the required ones, and dispatches actions in
priority order.

Parsed values are stored as strings and converted on demand via the
[`StringParsable`] trait, so asking for a type that can't be parsed from a
string is a compile-time error rather than a runtime surprise.



## Token Rules

* A token is an _option_ if it starts with `-` followed by anything other than a digit; everything else (including `-5`, `-`, and `--`) is a _value_;
* Short callees are a dash and one non-digit character: `-f`;
* Long callees are two dashes and at least two characters, the first of which is not a digit: `--flag`;
* Short options can be bundled: `-abc` is equivalent to `-a -b -c`, with each taking its parameters, in turn, from the tokens that follow;
* An option takes every value that follows it as a parameter, up to the next option; any beyond its arity are ignored;
* Values outside an option's reach are ignored.



## Built-Ins

Every [`Parser`] comes with `-h`/`--help` and `-V`/`--version` flags
pre-registered. Both run before anything else, even when required
arguments are missing, and stop the parse with [`Flow::Exit`].



## Example

```
use argot::{Flow, Parser, Version};

let mut parser = Parser::new("app", Version::new(1, 0));

parser.register::<(i32, f32)>(["-r", "--ratio"]).unwrap()
    .help("Numerator and scale.")
    .parameter_names(["count", "scale"])
    .implicit_value((10, 0.5))
    .default_value((0, 0.0));

parser.register::<(i32,)>("-j").unwrap()
    .help("Jobs; between 1 and 9.")
    .validator(|v| usize::from(argot::to_type::<i32>(&v[0]).map_or(true, |n| ! (1..10).contains(&n))))
    .required();

parser.add_flag(["-q", "--quiet"]).unwrap()
    .help("Keep it down.");

// Normally you'd call parser.parse_env() instead.
match parser.parse(["-j", "4", "--ratio", "3"]) {
    Ok(Flow::Continue) => {},
    Ok(Flow::Exit(code)) => std::process::exit(code),
    Err(e) => {
        eprintln!("{e}");
        std::process::exit(1);
    },
}

let ratio = parser.get("-r").unwrap();
assert_eq!(ratio.parse::<i32>(0), Ok(3));
assert_eq!(ratio.parse::<f32>(1), Ok(0.5)); // Implicit.

assert_eq!(parser.get("-j").unwrap().parse::<i32>(0), Ok(4));
assert!(! parser.get("--quiet").unwrap().is_used());
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod argument;
mod callee;
mod convert;
mod error;
mod params;
mod parser;

pub use argument::{
	ArgHandle,
	Argument,
	Flow,
};
pub use callee::Callees;
pub use convert::{
	StringParsable,
	to_type,
};
pub use error::{
	ArgotError,
	ErrorKind,
};
pub use params::Params;
pub use parser::{
	Parser,
	Version,
};

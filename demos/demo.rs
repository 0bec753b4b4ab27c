/*!
# Argot: Demo

This example registers a handful of typical arguments, parses whatever is
passed to it, and prints the results.

Try `cargo run --example demo -- -h` for a list of options. Set
`DEMO_DEBUG=1` to see the parser's own logging.
*/

use argot::{
	ArgotError,
	Flow,
	Parser,
	Version,
	to_type,
};



/// # Build Hash.
const BUILD: &str = "00000";



fn main() {
	if std::env::var_os("DEMO_DEBUG").is_some() { init_tracing(); }

	match _main() {
		Ok(Flow::Continue) => {},
		Ok(Flow::Exit(code)) => std::process::exit(code),
		Err(e) => {
			eprintln!("\x1b[91;1mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	}
}

/// # Log to STDERR.
fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter("argot=trace")
		.with_writer(std::io::stderr)
		.init();
}

/// # Actual Main.
fn _main() -> Result<Flow, ArgotError> {
	let mut parser = Parser::new("demo", Version::new(1, 0));

	parser.register::<(i32, f32, char, u32)>("-I")?
		.help("Up to four parameters.\nPass between zero and four; anything missing is filled in from the implicit values.\nIf -I is never passed, the defaults are used instead.")
		.parameter_names(["count", "ratio", "letter", "code"])
		.implicit_value((10, 0.5, 'h', 404))
		.default_value((0, 0.0, 'a', 0));

	parser.register::<(i32,)>("-J")?
		.help("Required, and must be between 1 and 9.")
		.parameter_names(["level"])
		.validator(|v| usize::from(to_type::<i32>(&v[0]).map_or(true, |n| ! (1..10).contains(&n))))
		.required();

	parser.add_flag(["--Flag", "-F"])?
		.help("A plain flag.");

	parser.add_flag(["-G", "--git-commit"])?
		.help("Print the build hash and exit.")
		.info_action(|_| {
			println!("Built from commit {BUILD}.");
			Flow::Exit(0)
		});

	parser.add_flag(["-f", "--flag"])?;

	let flow = parser.parse_env()?;
	if flow.is_exit() { return Ok(flow); }

	let i = parser.get("-I")?;
	println!(
		"-I: {} {} {} {}",
		i.parse::<i32>(0)?,
		i.parse::<f32>(1)?,
		i.parse::<char>(2)?,
		i.parse::<u32>(3)?,
	);
	println!("-J: {}", parser.get("-J")?.parse::<i32>(0)?);
	println!("-F: {}", parser.get("-F")?.is_used());
	println!("-f: {}", parser.get("--flag")?.parse::<bool>(0)?);

	Ok(Flow::Continue)
}

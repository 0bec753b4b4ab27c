/*!
# Argot: Properties
*/

use argot::{
	ArgotError,
	Flow,
	Parser,
	Version,
	to_type,
};
use proptest::prelude::*;
use std::{
	cell::RefCell,
	rc::Rc,
};



/// # Strategy: Callee Character.
///
/// Anything valid after a dash.
fn callee_char() -> impl Strategy<Value=char> {
	prop::char::range('!', '~').prop_filter("digit or dash", |c| ! c.is_ascii_digit() && *c != '-')
}



proptest! {
	#[test]
	/// Bound arguments always have a value for every slot.
	fn t_slots_filled(given in prop::collection::vec(any::<i32>(), 0..7)) {
		let mut parser = Parser::new("app", Version::new(1, 0));
		parser.register::<(i32, i32, i32, i32)>("-n").expect("Bad callee.")
			.implicit_value((1, 2, 3, 4))
			.default_value((5, 6, 7, 8));

		let args = std::iter::once("-n".to_owned())
			.chain(given.iter().map(ToString::to_string));
		prop_assert_eq!(parser.parse_to(args, &mut std::io::sink()), Ok(Flow::Continue));

		let n = parser.get("-n").expect("Missing -n.");
		prop_assert!(n.is_used());
		prop_assert_eq!(n.values().len(), 4);
		prop_assert!(n.values().iter().all(|v| ! v.is_empty()));

		for idx in 0..4 {
			let expected = given.get(idx).copied().unwrap_or(idx as i32 + 1);
			prop_assert_eq!(n.parse::<i32>(idx), Ok(expected));
		}
	}

	#[test]
	/// Same-kind callee pairs are rejected in either order.
	fn t_same_kind_pairs(
		a in callee_char(),
		b in callee_char(),
		long in "[a-z]{2,6}",
	) {
		let mut parser = Parser::new("app", Version::new(1, 0));
		let short_a = format!("-{a}");
		let short_b = format!("-{b}");
		let long_b = format!("--{long}");
		let long_z = format!("--{long}z");

		for pair in [
			[short_a.as_str(), short_b.as_str()],
			[short_b.as_str(), short_a.as_str()],
			[long_b.as_str(), long_z.as_str()],
			[long_z.as_str(), long_b.as_str()],
		] {
			prop_assert!(matches!(
				parser.register::<()>(pair),
				Err(ArgotError::CalleePair(_, _)),
			));
		}
	}

	#[test]
	/// Once a callee is taken, it stays taken.
	fn t_duplicates(c in callee_char()) {
		let mut parser = Parser::new("app", Version::new(1, 0));
		let callee = format!("-{c}");

		// The built-ins are already there.
		let first = parser.register::<()>(callee.as_str()).map(|_| ());
		if c == 'h' || c == 'V' {
			prop_assert_eq!(first, Err(ArgotError::DuplicateCallee(callee.clone())));
		}
		else {
			prop_assert_eq!(first, Ok(()));
			prop_assert_eq!(
				parser.register::<(i32,)>(callee.as_str()).map(|_| ()),
				Err(ArgotError::DuplicateCallee(callee.clone())),
			);
		}
	}

	#[test]
	/// Integers convert exactly, and trailing junk fails.
	fn t_to_type_int(n in any::<i64>(), junk in "[a-z ]{1,3}") {
		let raw = n.to_string();
		prop_assert_eq!(to_type::<i64>(&raw), Ok(n));
		prop_assert_eq!(to_type::<i64>(&format!("  {raw}")), Ok(n));

		let bad = format!("{raw}{junk}");
		let is_conversion = matches!(to_type::<i64>(&bad), Err(ArgotError::Conversion { .. }));
		prop_assert!(is_conversion);
	}

	#[test]
	/// Negative numbers are always values.
	fn t_negative_values(n in i64::MIN..0) {
		let mut parser = Parser::new("app", Version::new(1, 0));
		parser.register::<(i64,)>("-n").expect("Bad callee.");

		let raw = n.to_string();
		prop_assert_eq!(
			parser.parse_to(["-n", raw.as_str()], &mut std::io::sink()),
			Ok(Flow::Continue),
		);
		prop_assert_eq!(parser.get("-n").and_then(|a| a.parse::<i64>(0)), Ok(n));
	}

	#[test]
	/// Dispatch follows priority, then input order.
	fn t_priority_order(priorities in prop::collection::vec(0_usize..4, 1..8)) {
		let order = Rc::new(RefCell::new(Vec::new()));
		let mut parser = Parser::new("app", Version::new(1, 0));
		let callees: Vec<String> = (0..priorities.len()).map(|i| format!("--arg{i}")).collect();

		for (idx, (callee, priority)) in callees.iter().zip(&priorities).enumerate() {
			let order = Rc::clone(&order);
			parser.register::<()>(callee.as_str()).expect("Bad callee.")
				.priority(*priority)
				.action(move |_| {
					order.borrow_mut().push(idx);
					Flow::Continue
				});
		}

		// Feed them in backwards so input order and registration order differ.
		let args: Vec<&str> = callees.iter().rev().map(String::as_str).collect();
		prop_assert_eq!(parser.parse_to(args, &mut std::io::sink()), Ok(Flow::Continue));

		let mut expected: Vec<usize> = (0..priorities.len()).rev().collect();
		expected.sort_by_key(|&idx| std::cmp::Reverse(priorities[idx]));
		prop_assert_eq!(&*order.borrow(), &expected);
	}
}

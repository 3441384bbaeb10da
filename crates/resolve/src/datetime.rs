//! Date/time pattern conversion.
//!
//! CLDR date patterns use the TR35 letter vocabulary; the output library
//! understands a smaller one. A maximal run of one repeated pattern letter
//! is translated as a unit via a fixed table; letters with no counterpart
//! (era, quarter, fractional seconds, ...) drop out entirely, taking an
//! immediately preceding separator run with them so no dangling `.` or
//! `-` is left behind. Text inside single-quoted literal runs passes
//! through untouched.

/// Converts a CLDR date/time pattern to the output pattern vocabulary.
pub fn convert_date_pattern(pattern: &str) -> String {
	let mut out = String::new();
	let mut chars = pattern.chars().peekable();
	let mut in_literal = false;

	while let Some(c) = chars.next() {
		if c == '\'' {
			in_literal = !in_literal;
			out.push(c);
			continue;
		}
		if in_literal {
			out.push(c);
			continue;
		}
		// CLDR occasionally uses a typographic apostrophe where a literal
		// quote is meant.
		if c == '\u{2019}' {
			out.push('\'');
			continue;
		}
		if !c.is_ascii_alphabetic() {
			out.push(c);
			continue;
		}

		let mut count = 1;
		while chars.peek() == Some(&c) {
			chars.next();
			count += 1;
		}
		let token = translate(c, count);
		if token.is_empty() {
			strip_trailing_separators(&mut out);
		} else {
			out.push_str(&token);
		}
	}

	out.trim_matches([' ', '-']).to_string()
}

/// Translates one pattern token (letter and run length).
fn translate(letter: char, count: usize) -> String {
	match letter {
		// Two-digit years stay two digits; everything else, including the
		// 3+ digit forms, becomes the four-digit year token.
		'y' => if count == 2 { "yy" } else { "yyyy" }.to_string(),
		// Format and stand-alone months; no narrow form downstream, so
		// width caps at the wide name.
		'M' | 'L' => "M".repeat(count.min(4)),
		'd' => "d".repeat(count.min(2)),
		// Day-of-week names.
		'E' | 'e' | 'c' => if count >= 4 { "dddd" } else { "ddd" }.to_string(),
		'a' => "AP".to_string(),
		'h' | 'K' => "h".repeat(count.min(2)),
		'H' | 'k' => "H".repeat(count.min(2)),
		'm' => "m".repeat(count.min(2)),
		's' => "s".repeat(count.min(2)),
		// All zone flavors collapse to the single zone token.
		'z' | 'Z' | 'v' | 'V' => "t".to_string(),
		// Era, extended year, quarter, week counts, day-of-year, fractional
		// seconds and the other TR35 letters have no counterpart.
		_ => String::new(),
	}
}

fn strip_trailing_separators(out: &mut String) {
	while matches!(
		out.chars().next_back(),
		Some(' ' | '-' | '.' | ':' | ',' | ';' | '/')
	) {
		out.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_identity_pattern() {
		assert_eq!(convert_date_pattern("yyyy-MM-dd"), "yyyy-MM-dd");
		assert_eq!(convert_date_pattern("HH:mm:ss"), "HH:mm:ss");
	}

	#[test]
	fn test_long_year_runs_collapse_to_four_digits() {
		assert_eq!(convert_date_pattern("yyyyy"), "yyyy");
		assert_eq!(convert_date_pattern("y"), "yyyy");
		assert_eq!(convert_date_pattern("yy"), "yy");
	}

	#[test]
	fn test_day_names() {
		assert_eq!(convert_date_pattern("EEEE, d MMMM y"), "dddd, d MMMM yyyy");
		assert_eq!(convert_date_pattern("EEE d.M.y"), "ddd d.M.yyyy");
	}

	#[test]
	fn test_am_pm_marker() {
		assert_eq!(convert_date_pattern("h:mm a"), "h:mm AP");
	}

	#[test]
	fn test_zone_tokens() {
		assert_eq!(convert_date_pattern("HH:mm:ss z"), "HH:mm:ss t");
		assert_eq!(convert_date_pattern("HH:mm:ss zzzz"), "HH:mm:ss t");
		assert_eq!(convert_date_pattern("HH:mm:ss v"), "HH:mm:ss t");
	}

	#[test]
	fn test_unsupported_run_strips_preceding_separator() {
		assert_eq!(convert_date_pattern("HH:mm:ss.SSS"), "HH:mm:ss");
	}

	#[test]
	fn test_era_dropped_with_leading_trim() {
		assert_eq!(convert_date_pattern("G y"), "yyyy");
		assert_eq!(convert_date_pattern("y G"), "yyyy");
	}

	#[test]
	fn test_extended_year_is_unsupported() {
		assert_eq!(convert_date_pattern("uuuu-MM-dd"), "MM-dd");
		assert_eq!(convert_date_pattern("MM-dd, u"), "MM-dd");
	}

	#[test]
	fn test_narrow_month_caps_at_wide() {
		assert_eq!(convert_date_pattern("MMMMM"), "MMMM");
		assert_eq!(convert_date_pattern("LLL"), "MMM");
	}

	#[test]
	fn test_quoted_literals_pass_through() {
		assert_eq!(
			convert_date_pattern("y'年'M'月'd'日'"),
			"yyyy'年'M'月'd'日'"
		);
		// Pattern letters inside a literal are not tokens.
		assert_eq!(convert_date_pattern("'at' HH:mm"), "'at' HH:mm");
	}

	#[test]
	fn test_non_pattern_characters_pass_verbatim() {
		assert_eq!(convert_date_pattern("d. MMMM y"), "d. MMMM yyyy");
	}
}

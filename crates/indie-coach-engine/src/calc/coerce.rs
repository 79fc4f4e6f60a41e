//! Lenient number parsing for calculator inputs.
//!
//! Inputs come straight from an edit box, so anything that does not start
//! with a number becomes 0 instead of an error.

use std::sync::OnceLock;

use regex::Regex;

/// Parses the leading integer of `input` (`"12.7kg"` is 12). Unparsable,
/// empty or non-finite input is 0.
pub fn leading_int(input: &str) -> f64 {
    static INT_REGEX: OnceLock<Regex> = OnceLock::new();
    let int_regex =
        INT_REGEX.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("Invalid integer regex"));
    parse_prefix(int_regex, input)
}

/// Parses the leading decimal number of `input`, exponent included
/// (`"1.5e3 seats"` is 1500). Unparsable, empty or non-finite input is 0.
pub fn leading_float(input: &str) -> f64 {
    static FLOAT_REGEX: OnceLock<Regex> = OnceLock::new();
    let float_regex = FLOAT_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid float regex")
    });
    parse_prefix(float_regex, input)
}

fn parse_prefix(regex: &Regex, input: &str) -> f64 {
    regex
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

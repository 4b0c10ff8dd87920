//! Numeric coercion for the board's text inputs.
//!
//! Inputs never reject what the user types: text that does not parse becomes
//! zero, matching how the board has always behaved.
use regex::Regex;
use std::sync::OnceLock;

fn non_digits() -> Option<&'static Regex> {
    static NON_DIGITS: OnceLock<Option<Regex>> = OnceLock::new();
    NON_DIGITS.get_or_init(|| Regex::new(r"[^0-9]").ok()).as_ref()
}

/// Drop every character that is not an ASCII digit.
#[must_use]
pub fn digits_only(text: &str) -> String {
    non_digits().map_or_else(
        || text.chars().filter(char::is_ascii_digit).collect(),
        |re| re.replace_all(text, "").into_owned(),
    )
}

/// Parse a signed integer, coercing anything unparsable to `0`.
#[must_use]
pub fn coerce_int(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Winning-score entry: digits only, empty means `0`. Values too large for
/// `i64` saturate.
#[must_use]
pub fn coerce_winning_score(text: &str) -> i64 {
    let digits = digits_only(text);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(i64::MAX)
}

/// Score entry for a player row. `None` while the field is blank, which keeps
/// the Add button disabled.
#[must_use]
pub fn parse_score_entry(text: &str) -> Option<i64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(coerce_int(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_signs_and_letters() {
        assert_eq!(digits_only("-3a0 "), "30");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn coerce_int_defaults_to_zero() {
        assert_eq!(coerce_int(" 15 "), 15);
        assert_eq!(coerce_int("-5"), -5);
        assert_eq!(coerce_int("five"), 0);
        assert_eq!(coerce_int(""), 0);
    }

    #[test]
    fn winning_score_ignores_non_digits() {
        assert_eq!(coerce_winning_score("4x2"), 42);
        assert_eq!(coerce_winning_score("-7"), 7);
        assert_eq!(coerce_winning_score(""), 0);
        assert_eq!(coerce_winning_score("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn score_entry_blank_is_none() {
        assert_eq!(parse_score_entry("   "), None);
        assert_eq!(parse_score_entry("10"), Some(10));
        assert_eq!(parse_score_entry("1.5"), Some(0));
    }
}

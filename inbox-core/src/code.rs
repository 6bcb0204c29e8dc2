//! Verification-code extraction from message text.

use std::sync::LazyLock;

use regex::Regex;

/// Fewest digits an isolated token needs to count as a code.
pub const MIN_CODE_DIGITS: usize = 4;

/// Most digits an isolated token may have to count as a code.
pub const MAX_CODE_DIGITS: usize = 8;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b([0-9]{{{MIN_CODE_DIGITS},{MAX_CODE_DIGITS}}})\b");
    Regex::new(&pattern).expect("code pattern is valid")
});

/// Return the first isolated run of 4 to 8 ASCII digits in `text`.
///
/// A run is isolated when no word character touches it on either side, so
/// `"A1234"` and `"123456789"` yield nothing.
#[must_use]
pub fn extract_code(text: &str) -> Option<&str> {
    CODE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn finds_code_in_sentence() {
        assert_eq!(extract_code("your code is 48213 today"), Some("48213"));
    }

    #[test]
    fn short_numbers_are_ignored() {
        assert_eq!(extract_code("order #12 shipped"), None);
        assert_eq!(extract_code("123"), None);
    }

    #[test]
    fn first_token_wins_over_longer_later_token() {
        assert_eq!(extract_code("ref 4821, code 99887766"), Some("4821"));
    }

    #[test]
    fn overlong_runs_are_not_split() {
        assert_eq!(extract_code("tracking 123456789"), None);
        assert_eq!(extract_code("tracking 123456789 then 2468"), Some("2468"));
    }

    #[test]
    fn digits_glued_to_letters_are_ignored() {
        assert_eq!(extract_code("ID A12345 or 12345B"), None);
        assert_eq!(extract_code("Code:654321."), Some("654321"));
    }

    #[test]
    fn boundary_lengths() {
        assert_eq!(extract_code("1234"), Some("1234"));
        assert_eq!(extract_code("12345678"), Some("12345678"));
        assert_eq!(extract_code(""), None);
    }

    proptest! {
        #[test]
        fn isolated_codes_are_found(code in "[0-9]{4,8}", prefix in "[a-z ]{0,12}") {
            let text = format!("{prefix} {code} end");
            prop_assert_eq!(extract_code(&text), Some(code.as_str()));
        }

        #[test]
        fn result_is_always_a_short_digit_run(text in ".{0,64}") {
            if let Some(code) = extract_code(&text) {
                prop_assert!((MIN_CODE_DIGITS..=MAX_CODE_DIGITS).contains(&code.len()));
                prop_assert!(code.bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }
}

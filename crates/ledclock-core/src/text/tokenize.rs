//! Delimiter-based line splitting.

use alloc::string::String;
use alloc::vec::Vec;

/// Splits `input` on every literal occurrence of `separator`.
///
/// Empty fields are kept, including a trailing one when the input ends at a
/// separator, and the result always has at least one element. An empty
/// separator yields the whole input as a single token.
pub fn tokenize(input: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        let mut single = Vec::with_capacity(1);
        single.push(String::from(input));
        return single;
    }

    input.split(separator).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(tokenize("a,b,,c", ","), ["a", "b", "", "c"]);
    }

    #[test]
    fn test_no_separator_yields_whole_input() {
        assert_eq!(tokenize("x", ","), ["x"]);
    }

    #[test]
    fn test_trailing_empty_field_is_kept() {
        assert_eq!(tokenize("a,", ","), ["a", ""]);
    }

    #[test]
    fn test_leading_empty_field_is_kept() {
        assert_eq!(tokenize(",a", ","), ["", "a"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("", ","), [""]);
    }

    #[test]
    fn test_multi_character_separator() {
        assert_eq!(tokenize("a::b::c", "::"), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_separator() {
        assert_eq!(tokenize("ab", ""), ["ab"]);
    }
}

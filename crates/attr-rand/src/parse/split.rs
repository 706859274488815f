//! Nesting-aware string splitting.
//!
//! Splits on a multi-character separator while ignoring separators inside
//! balanced delimiter pairs, so `[0 0 0, 1 1 1]..[2 2 2, 3 3 3]` decomposes
//! on `..` without tearing the bracketed lists apart.

/// Delimiter pairs that suppress separator matches while open.
pub const NESTING_PAIRS: [(char, char); 5] = [
    ('\'', '\''),
    ('"', '"'),
    ('{', '}'),
    ('[', ']'),
    ('(', ')'),
];

/// Splits `input` on `separator`, ignoring separators nested inside the
/// default delimiter pairs (`'' "" {} [] ()`).
///
/// The result is never empty: an input without the separator comes back as a
/// single element, and a trailing separator produces a trailing empty
/// element. Unmatched opening delimiters are tolerated; they suppress
/// separator matches through the end of the input.
pub fn nested_split<'a>(input: &'a str, separator: &str) -> Vec<&'a str> {
    nested_split_with(input, separator, &NESTING_PAIRS)
}

/// [`nested_split`] with a caller-chosen set of delimiter pairs.
///
/// The scan keeps a stack of open pairs. A character equal to the close of
/// the top pair pops it; otherwise a character that opens any pair pushes it
/// (close is checked first, so identical-open-close quote pairs toggle).
/// The separator is matched greedily, one character at a time, only while the
/// stack is empty. A partial match interrupted by a non-matching character
/// resets and the interrupting character is re-tested against the separator
/// start, so overlapping candidates are never silently consumed.
pub fn nested_split_with<'a>(
    input: &'a str,
    separator: &str,
    pairs: &[(char, char)],
) -> Vec<&'a str> {
    let sep: Vec<char> = separator.chars().collect();
    if sep.is_empty() {
        return vec![input];
    }

    let mut parts = Vec::new();
    let mut stack: Vec<char> = Vec::new();
    let mut start = 0; // byte offset of the current token
    let mut matched = 0; // separator characters matched so far
    let mut match_start = 0; // byte offset where the partial match began

    for (i, c) in input.char_indices() {
        if stack.last() == Some(&c) {
            stack.pop();
        } else if let Some(pair) = pairs.iter().find(|pair| pair.0 == c) {
            stack.push(pair.1);
        }

        if !stack.is_empty() {
            matched = 0;
            continue;
        }

        if c == sep[matched] {
            if matched == 0 {
                match_start = i;
            }
            matched += 1;
            if matched == sep.len() {
                parts.push(&input[start..match_start]);
                start = i + c.len_utf8();
                matched = 0;
            }
        } else if matched > 0 {
            // Restart the match on the interrupting character itself.
            matched = 0;
            if c == sep[0] {
                match_start = i;
                matched = 1;
            }
        }
    }

    parts.push(&input[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_no_separator_returns_input() {
        assert_eq!(nested_split("abc", ","), vec!["abc"]);
        assert_eq!(nested_split("", ","), vec![""]);
    }

    #[test]
    fn test_plain_split() {
        assert_eq!(nested_split("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(nested_split("a b,c d,e f", ","), vec!["a b", "c d", "e f"]);
    }

    #[test]
    fn test_trailing_separator_emits_empty_element() {
        assert_eq!(nested_split("a,", ","), vec!["a", ""]);
        assert_eq!(nested_split(",a", ","), vec!["", "a"]);
    }

    #[test]
    fn test_brackets_protect_separator() {
        assert_eq!(nested_split("[a,b,c],d", ","), vec!["[a,b,c]", "d"]);
        assert_eq!(
            nested_split("[a,b,c],'d,e',f", ","),
            vec!["[a,b,c]", "'d,e'", "f"]
        );
        assert_eq!(
            nested_split("[a,b,c],{x:d,y:e},\"f,g,h\"", ","),
            vec!["[a,b,c]", "{x:d,y:e}", "\"f,g,h\""]
        );
    }

    #[test]
    fn test_quotes_protect_multichar_separator() {
        assert_eq!(nested_split("a..'b..c'..d", ".."), vec!["a", "'b..c'", "d"]);
    }

    #[test]
    fn test_partial_match_is_not_consumed() {
        // The lone `.` before `b` must not start a false match.
        assert_eq!(nested_split("a.b..c", ".."), vec!["a.b", "c"]);
        assert_eq!(nested_split("1.5..2.5", ".."), vec!["1.5", "2.5"]);
    }

    #[test]
    fn test_interrupting_char_restarts_the_match() {
        // The second `a` both interrupts and restarts a match of `ab`.
        assert_eq!(nested_split("xaab", "ab"), vec!["xa", ""]);
    }

    #[test]
    fn test_nested_open_interrupts_partial_match() {
        assert_eq!(nested_split("a.{x}..b", ".."), vec!["a.{x}", "b"]);
    }

    #[test]
    fn test_run_of_separator_chars() {
        assert_eq!(nested_split("...", ".."), vec!["", "."]);
        assert_eq!(nested_split("....", ".."), vec!["", "", ""]);
    }

    #[test]
    fn test_unmatched_open_suppresses_to_the_end() {
        assert_eq!(nested_split("[a,b,c", ","), vec!["[a,b,c"]);
        assert_eq!(nested_split("a,[b,c", ","), vec!["a", "[b,c"]);
    }

    #[test]
    fn test_custom_pairs() {
        let pairs = [('<', '>')];
        assert_eq!(
            nested_split_with("<a,b>,c", ",", &pairs),
            vec!["<a,b>", "c"]
        );
        // Brackets are ordinary characters for this pair set.
        assert_eq!(
            nested_split_with("[a,b],c", ",", &pairs),
            vec!["[a", "b]", "c"]
        );
    }

    proptest! {
        /// Splitting a join of separator-free, nesting-free parts recovers
        /// the parts exactly.
        #[test]
        fn prop_split_inverts_join(parts in prop::collection::vec("[a-z0-9 .]{0,8}", 1..6)) {
            let joined = parts.join(",");
            let split: Vec<String> = nested_split(&joined, ",")
                .into_iter()
                .map(str::to_string)
                .collect();
            prop_assert_eq!(split, parts);
        }

        /// A separator inside any balanced pair never splits.
        #[test]
        fn prop_never_splits_inside_balanced_pairs(
            inner in "[a-z,]{0,10}",
            (open, close) in prop::sample::select(NESTING_PAIRS.to_vec()),
        ) {
            // Quote pairs toggle, so strip the quote character from the body.
            let inner = inner.replace(open, "");
            let wrapped = format!("{open}{inner}{close}");
            prop_assert_eq!(nested_split(&wrapped, ","), vec![wrapped.as_str()]);
        }

        /// The result is never empty and rejoins to the input when no
        /// nesting characters are present.
        #[test]
        fn prop_rejoin_is_lossless(input in "[a-z,. ]{0,24}") {
            let split = nested_split(&input, ",");
            prop_assert!(!split.is_empty());
            prop_assert_eq!(split.join(","), input);
        }
    }
}

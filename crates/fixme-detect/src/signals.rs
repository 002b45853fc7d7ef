//! Character-level helpers: punctuation trimming, line splitting, indentation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// One character of Unicode general category P (punctuation). Math,
/// currency and modifier symbols such as `$ + = ^ |` are category S.
static RE_PUNCTUATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\p{P}$").ok());

/// ASCII punctuation that Unicode classifies as symbols (category S).
const ASCII_SYMBOLS: &str = "$+<=>^`|~";

/// Whether `c` is Unicode punctuation (category P).
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(c);
    }
    match RE_PUNCTUATION.as_ref() {
        Some(re) => re.is_match(c.encode_utf8(&mut [0; 4])),
        None => false,
    }
}

/// Strip leading and trailing punctuation from a word.
pub fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(is_punctuation)
}

/// Characters that end a line.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Spaces and tabs, not line breaks.
pub fn is_horizontal_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// Whether at least `min_lines` non-blank lines share the same number of
/// leading spaces.
pub fn has_consistent_indentation(text: &str, min_lines: usize) -> bool {
    let mut buckets: HashMap<usize, usize> = HashMap::new();
    for line in text.split(is_line_break) {
        if line.trim_matches(is_horizontal_whitespace).is_empty() {
            continue;
        }
        let leading = line.chars().take_while(|&c| c == ' ').count();
        let count = buckets.entry(leading).or_default();
        *count += 1;
        if *count >= min_lines {
            return true;
        }
    }
    false
}

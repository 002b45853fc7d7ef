//! URL detection.

use regex::Regex;
use std::sync::LazyLock;

use super::Span;

pub const PATTERN_NAME: &str = "url";

/// Scheme-prefixed or `www.`-prefixed run of non-space characters.
/// Trailing punctuation is trimmed afterwards, see [`trim_span_end`].
pub static RE_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(?:https?://|ftp://|www\.)[^\s<>"]+"#).ok());

static RE_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:https?://|ftp://|www\.)").ok());

/// Sentence punctuation that ends a URL when it is the last character.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Whether the URL detector compiled.
pub fn is_available() -> bool {
    RE_URL.is_some() && RE_PREFIX.is_some()
}

/// Find URL spans, left to right, non-overlapping.
/// Returns an empty list when the detector is unavailable.
pub fn find_spans(text: &str) -> Vec<Span> {
    let (Some(re), Some(prefix)) = (RE_URL.as_ref(), RE_PREFIX.as_ref()) else {
        return Vec::new();
    };

    re.find_iter(text)
        .filter_map(|m| {
            let end = m.start() + trim_span_end(m.as_str());
            let candidate = &text[m.start()..end];
            // A bare "www." or "https://" carries no host.
            let prefix_len = prefix.find(candidate).map_or(0, |p| p.end());
            (candidate.len() > prefix_len).then_some(Span {
                start: m.start(),
                end,
            })
        })
        .collect()
}

/// Length of `candidate` once trailing punctuation and unbalanced closing
/// brackets are dropped. Brackets are counted once up front, so a long run
/// of closers is trimmed in linear time.
pub fn trim_span_end(candidate: &str) -> usize {
    let mut parens = BracketCount::of(candidate, '(', ')');
    let mut squares = BracketCount::of(candidate, '[', ']');
    let mut end = candidate.len();
    while let Some(last) = candidate[..end].chars().next_back() {
        let drop = match last {
            ')' => parens.drop_unbalanced_close(),
            ']' => squares.drop_unbalanced_close(),
            c => TRAILING_PUNCTUATION.contains(&c),
        };
        if !drop {
            break;
        }
        end -= last.len_utf8();
    }
    end
}

struct BracketCount {
    open: usize,
    close: usize,
}

impl BracketCount {
    fn of(span: &str, open: char, close: char) -> Self {
        span.chars().fold(Self { open: 0, close: 0 }, |mut acc, c| {
            if c == open {
                acc.open += 1;
            } else if c == close {
                acc.close += 1;
            }
            acc
        })
    }

    /// Drop one trailing closer if closers outnumber openers.
    fn drop_unbalanced_close(&mut self) -> bool {
        if self.close > self.open {
            self.close -= 1;
            true
        } else {
            false
        }
    }
}

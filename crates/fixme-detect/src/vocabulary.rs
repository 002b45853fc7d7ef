//! Fixed vocabularies scored by the detector. All entries are lowercase.

/// Keywords common across mainstream programming languages.
pub const KEYWORDS: &[&str] = &[
    "function", "var", "let", "const", "return", "if", "else", "for", "while", "class",
    "import", "from", "def", "public", "private", "static", "void", "int", "string", "bool",
    "float", "double", "export", "require", "module", "package", "namespace", "interface",
    "implements", "extends", "async", "await",
];

/// Multi-character operators that rarely appear in prose.
pub const SYNTAX_TOKENS: &[&str] = &[
    "=>", "===", "!==", "!=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "::", "->",
];

/// Exact, case-insensitive keyword match. `word` must already be lowercase.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Whether a keyword occurs anywhere inside `word`. `word` must already be lowercase.
pub fn contains_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| word.contains(keyword))
}

/// Number of distinct syntax tokens present in `word`.
pub fn syntax_tokens_in(word: &str) -> usize {
    SYNTAX_TOKENS
        .iter()
        .filter(|token| word.contains(*token))
        .count()
}

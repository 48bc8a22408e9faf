use super::token::TokenType;
use lazy_static::lazy_static;
use std::collections::HashSet;

pub const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

pub const OPERATORS: &[&str] = &[
    "<<=", ">>=", "...", "..=", "&&", "||", "<<", ">>", "==", "!=", "<=", ">=", "+=", "-=",
    "*=", "/=", "%=", "^=", "&=", "|=", "..", "+", "-", "*", "/", "%", "^", "!", "&", "|",
    "=", "<", ">", "~",
];

pub const PUNCTUATION: &[&str] = &[
    "::", "->", "=>", "{", "}", "(", ")", "[", "]", ";", ",", ".", ":", "#", "$", "?",
];

pub const PUNC_UNDERSCORE: &str = "_";

lazy_static! {
    static ref ALL_KEYWORDS: HashSet<&'static str> = STRICT_KEYWORDS
        .iter()
        .chain(RESERVED_KEYWORDS.iter())
        .copied()
        .collect();

    /// Operators and punctuation, longest first so the first prefix hit is the maximal one.
    pub static ref SYMBOLS: Vec<(&'static str, TokenType)> = {
        let mut symbols: Vec<(&'static str, TokenType)> = OPERATORS
            .iter()
            .map(|op| (*op, TokenType::Operator))
            .chain(PUNCTUATION.iter().map(|p| (*p, TokenType::Punctuation)))
            .collect();
        symbols.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        symbols
    };
}

pub fn is_keyword(word: &str) -> bool {
    ALL_KEYWORDS.contains(word)
}

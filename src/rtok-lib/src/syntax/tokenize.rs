use super::{
    keywords::{is_keyword, PUNC_UNDERSCORE, SYMBOLS},
    token::{Token, TokenType},
    tokenization_result::TokenizationResult,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Pattern_White_Space only; other Unicode spaces such as NBSP are not Rust whitespace.
    static ref WHITESPACE: Regex =
        Regex::new(r"^[\t\n\x0B\x0C\r \x{85}\x{200E}\x{200F}\x{2028}\x{2029}]+").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"^//[^\r\n]*").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*").unwrap();
    static ref RAW_IDENTIFIER: Regex =
        Regex::new(r"^r#[\p{XID_Start}_]\p{XID_Continue}*").unwrap();
    static ref LIFETIME: Regex = Regex::new(r"^'[\p{XID_Start}_]\p{XID_Continue}*").unwrap();
    static ref CHAR: Regex =
        Regex::new(r"^'(?:[^'\\\r\n]|\\(?:x[0-9a-fA-F]{2}|u\{[0-9a-fA-F_]{1,6}\}|[^\r\n]))'")
            .unwrap();
    static ref BYTE: Regex =
        Regex::new(r"^b'(?:[^'\\\r\n]|\\(?:x[0-9a-fA-F]{2}|[^\r\n]))'").unwrap();
    static ref NUMBER_PATTERNS: Vec<(Regex, TokenType)> = vec![
        (
            Regex::new(r"^[0-9][0-9_]*(?:\.[0-9][0-9_]*)?[eE][+-]?_*[0-9][0-9_]*(?:f32|f64)?")
                .unwrap(),
            TokenType::Float
        ),
        (
            Regex::new(r"^[0-9][0-9_]*\.[0-9][0-9_]*(?:f32|f64)?").unwrap(),
            TokenType::Float
        ),
        (
            Regex::new(r"^[0-9][0-9_]*(?:f32|f64)").unwrap(),
            TokenType::Float
        ),
        (
            Regex::new(
                r"^(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|[0-9][0-9_]*)(?:i8|i16|i32|i64|i128|isize|u8|u16|u32|u64|u128|usize)?"
            )
            .unwrap(),
            TokenType::Integer
        ),
    ];
    static ref TRAILING_DOT_FLOAT: Regex = Regex::new(r"^[0-9][0-9_]*\.").unwrap();
}

/// A candidate token at the current position, before its text is sliced out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Lexeme {
    token_type: TokenType,
    len: usize,
    unterminated: bool,
}

impl Lexeme {
    fn new(token_type: TokenType, len: usize) -> Self {
        Self {
            token_type,
            len,
            unterminated: false,
        }
    }

    fn into_token(self, remaining: &str, position: usize) -> Token {
        let value = &remaining[..self.len];
        if self.unterminated {
            Token::unterminated(self.token_type, value, position)
        } else {
            Token::new(self.token_type, value, position)
        }
    }
}

type Rule = fn(&str) -> Option<Lexeme>;

// Order is priority: on equal length the earlier rule wins.
const RULES: &[Rule] = &[
    whitespace,
    line_comment,
    block_comment,
    raw_string,
    string,
    char_literal,
    byte_literal,
    lifetime,
    raw_identifier,
    identifier,
    number,
    trailing_dot_float,
    symbol,
];

/// Splits `input` into tokens that cover it exactly, in order.
///
/// Never fails. Runs of characters that no rule accepts become a single
/// `Garbage` token and scanning continues after them.
pub fn tokenize(input: &str) -> TokenizationResult {
    let mut tokens = Vec::new();
    let mut position = 0;
    while position < input.len() {
        let remaining = &input[position..];
        let token = match longest_match(remaining) {
            Some(lexeme) => lexeme.into_token(remaining, position),
            None => {
                let len = garbage_len(remaining);
                Token::new(TokenType::Garbage, &remaining[..len], position)
            }
        };
        position = token.span.end;
        tokens.push(token);
    }
    TokenizationResult::new(tokens)
}

fn longest_match(remaining: &str) -> Option<Lexeme> {
    let mut best: Option<Lexeme> = None;
    for rule in RULES {
        if let Some(lexeme) = rule(remaining) {
            if best.map_or(true, |b| lexeme.len > b.len) {
                best = Some(lexeme);
            }
        }
    }
    best
}

fn garbage_len(remaining: &str) -> usize {
    remaining
        .char_indices()
        .skip(1)
        .find(|(i, _)| longest_match(&remaining[*i..]).is_some())
        .map(|(i, _)| i)
        .unwrap_or(remaining.len())
}

fn regex_rule(pattern: &Regex, remaining: &str, token_type: TokenType) -> Option<Lexeme> {
    pattern
        .find(remaining)
        .filter(|m| m.start() == 0 && !m.is_empty())
        .map(|m| Lexeme::new(token_type, m.end()))
}

fn whitespace(remaining: &str) -> Option<Lexeme> {
    regex_rule(&WHITESPACE, remaining, TokenType::Whitespace)
}

fn line_comment(remaining: &str) -> Option<Lexeme> {
    let mat = LINE_COMMENT.find(remaining)?;
    let text = mat.as_str();
    let is_doc = (text.starts_with("///") && !text.starts_with("////")) || text.starts_with("//!");
    let token_type = if is_doc {
        TokenType::DocComment
    } else {
        TokenType::LineComment
    };
    Some(Lexeme::new(token_type, mat.end()))
}

fn block_comment(remaining: &str) -> Option<Lexeme> {
    if !remaining.starts_with("/*") {
        return None;
    }
    let is_doc = (remaining.starts_with("/**")
        && !remaining.starts_with("/***")
        && !remaining.starts_with("/**/"))
        || remaining.starts_with("/*!");
    let token_type = if is_doc {
        TokenType::DocComment
    } else {
        TokenType::BlockComment
    };

    let bytes = remaining.as_bytes();
    let mut depth = 1usize;
    let mut i = 2;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return Some(Lexeme::new(token_type, i));
            }
        } else {
            i += 1;
        }
    }
    Some(Lexeme {
        token_type,
        len: remaining.len(),
        unterminated: true,
    })
}

fn string(remaining: &str) -> Option<Lexeme> {
    let (token_type, open) = if remaining.starts_with("b\"") {
        (TokenType::ByteString, 2)
    } else if remaining.starts_with('"') {
        (TokenType::String, 1)
    } else {
        return None;
    };

    let bytes = remaining.as_bytes();
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(ascii_bytes(remaining, Lexeme::new(token_type, i + 1))),
            _ => i += 1,
        }
    }
    Some(ascii_bytes(
        remaining,
        Lexeme {
            token_type,
            len: remaining.len(),
            unterminated: true,
        },
    ))
}

/// `r"..."`, `r#"..."#`, `br##"..."##`: closes only at a quote followed by
/// as many hashes as were opened.
fn raw_string(remaining: &str) -> Option<Lexeme> {
    let (token_type, prefix) = if remaining.starts_with("br") {
        (TokenType::RawByteString, 2)
    } else if remaining.starts_with('r') {
        (TokenType::RawString, 1)
    } else {
        return None;
    };

    let bytes = remaining.as_bytes();
    let hashes = bytes[prefix..].iter().take_while(|b| **b == b'#').count();
    let quote = prefix + hashes;
    if bytes.get(quote) != Some(&b'"') {
        return None;
    }

    let mut i = quote + 1;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            let closing = bytes[i + 1..].iter().take_while(|b| **b == b'#').count();
            if closing >= hashes {
                return Some(ascii_bytes(
                    remaining,
                    Lexeme::new(token_type, i + 1 + hashes),
                ));
            }
        }
        i += 1;
    }
    Some(ascii_bytes(
        remaining,
        Lexeme {
            token_type,
            len: remaining.len(),
            unterminated: true,
        },
    ))
}

/// Byte literals must be ASCII. A byte literal with other content is kept
/// whole as one `Garbage` token.
fn ascii_bytes(remaining: &str, lexeme: Lexeme) -> Lexeme {
    let is_bytes = matches!(
        lexeme.token_type,
        TokenType::Byte | TokenType::ByteString | TokenType::RawByteString
    );
    if is_bytes && !remaining[..lexeme.len].is_ascii() {
        Lexeme::new(TokenType::Garbage, lexeme.len)
    } else {
        lexeme
    }
}

fn char_literal(remaining: &str) -> Option<Lexeme> {
    regex_rule(&CHAR, remaining, TokenType::Char)
}

fn byte_literal(remaining: &str) -> Option<Lexeme> {
    regex_rule(&BYTE, remaining, TokenType::Byte).map(|lexeme| ascii_bytes(remaining, lexeme))
}

fn lifetime(remaining: &str) -> Option<Lexeme> {
    regex_rule(&LIFETIME, remaining, TokenType::Lifetime)
}

fn raw_identifier(remaining: &str) -> Option<Lexeme> {
    regex_rule(&RAW_IDENTIFIER, remaining, TokenType::Identifier)
}

fn identifier(remaining: &str) -> Option<Lexeme> {
    let mat = IDENTIFIER.find(remaining)?;
    let word = mat.as_str();
    let token_type = if word == PUNC_UNDERSCORE {
        TokenType::Punctuation
    } else if is_keyword(word) {
        TokenType::Keyword
    } else {
        TokenType::Identifier
    };
    Some(Lexeme::new(token_type, mat.end()))
}

fn number(remaining: &str) -> Option<Lexeme> {
    NUMBER_PATTERNS
        .iter()
        .filter_map(|(pattern, token_type)| regex_rule(pattern, remaining, *token_type))
        .fold(None, |best: Option<Lexeme>, lexeme| match best {
            Some(b) if b.len >= lexeme.len => Some(b),
            _ => Some(lexeme),
        })
}

/// `1.` is a float unless the dot starts a range or a field/method access.
fn trailing_dot_float(remaining: &str) -> Option<Lexeme> {
    let mat = TRAILING_DOT_FLOAT.find(remaining)?;
    match remaining[mat.end()..].chars().next() {
        Some(c) if c == '.' || is_identifier_start(c) => None,
        _ => Some(Lexeme::new(TokenType::Float, mat.end())),
    }
}

fn symbol(remaining: &str) -> Option<Lexeme> {
    SYMBOLS
        .iter()
        .find(|(text, _)| remaining.starts_with(text))
        .map(|(text, token_type)| Lexeme::new(*token_type, text.len()))
}

fn is_identifier_start(c: char) -> bool {
    let mut buf = [0u8; 4];
    IDENTIFIER.is_match(c.encode_utf8(&mut buf))
}

/// 1-based line and column (in chars) of a byte offset.
pub fn get_line_col(input: &str, pos: usize) -> (usize, usize) {
    let prefix = &input[..pos];
    let line = prefix.matches('\n').count() + 1;
    let last_line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = prefix[last_line_start..].chars().count() + 1;
    (line, column)
}

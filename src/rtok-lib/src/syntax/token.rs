use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Keyword,
    Identifier,
    Lifetime,
    Integer,
    Float,
    Char,
    Byte,
    String,
    ByteString,
    RawString,
    RawByteString,
    Operator,
    Punctuation,
    Whitespace,
    LineComment,
    BlockComment,
    DocComment,
    Garbage,
}

impl TokenType {
    /// Input the tokenizer could not classify.
    pub fn is_garbage(&self) -> bool {
        matches!(self, TokenType::Garbage)
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenType::LineComment | TokenType::BlockComment | TokenType::DocComment
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::Integer
                | TokenType::Float
                | TokenType::Char
                | TokenType::Byte
                | TokenType::String
                | TokenType::ByteString
                | TokenType::RawString
                | TokenType::RawByteString
        )
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One lexical unit. `value` is always `source[span]`.
///
/// The span is not part of the serialized form; it is rebuilt from the
/// running offset when a result is loaded back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    #[serde(skip)]
    pub span: std::ops::Range<usize>,
    /// Set on strings and block comments that hit end of input before closing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub unterminated: bool,
}

impl Token {
    pub fn new(token_type: TokenType, value: &str, start: usize) -> Self {
        Self {
            token_type,
            value: value.to_string(),
            span: start..start + value.len(),
            unterminated: false,
        }
    }

    pub fn unterminated(token_type: TokenType, value: &str, start: usize) -> Self {
        Self {
            unterminated: true,
            ..Self::new(token_type, value, start)
        }
    }

    /// Garbage tokens and unterminated literals both block baseline creation.
    pub fn is_garbage(&self) -> bool {
        self.token_type.is_garbage() || self.unterminated
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} {}..{}",
            self.token_type, self.value, self.span.start, self.span.end
        )?;
        if self.unterminated {
            write!(f, " (unterminated)")?;
        }
        Ok(())
    }
}

use super::token::Token;
use super::tokenize::get_line_col;
use crate::error::RtokError;

/// Ordered tokens for one source text. The tokens partition the input with
/// no gaps and no overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizationResult {
    pub tokens: Vec<Token>,
}

impl TokenizationResult {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// One JSON record per line, in token order.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            // Serializing a plain struct of strings and unit enums cannot fail.
            let line = serde_json::to_string(token).unwrap_or_default();
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Parses the form written by [`serialize`](Self::serialize). Spans are
    /// rebuilt from the running offset.
    pub fn deserialize(text: &str) -> Result<Self, RtokError> {
        let mut tokens = Vec::new();
        let mut position = 0;
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut token: Token =
                serde_json::from_str(line).map_err(|e| RtokError::InvalidBaseline {
                    path: None,
                    line: index + 1,
                    message: e.to_string(),
                })?;
            token.span = position..position + token.value.len();
            position = token.span.end;
            tokens.push(token);
        }
        Ok(Self { tokens })
    }

    pub fn garbage_tokens(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_garbage()).collect()
    }

    pub fn has_garbage(&self) -> bool {
        self.tokens.iter().any(Token::is_garbage)
    }

    /// Concatenation of every token's text, which equals the tokenized input.
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    /// Lists each garbage token with its position and the line it sits on.
    pub fn garbage_report(&self, source: &str) -> String {
        let mut report = String::new();
        for token in self.garbage_tokens() {
            let (line, column) = get_line_col(source, token.span.start);
            let line_text = source.lines().nth(line - 1).unwrap_or("");
            report.push_str(&format!(
                "  {token} at line {line}, column {column}\n    | {}\n",
                line_text.trim_end()
            ));
        }
        report
    }
}

impl std::fmt::Display for TokenizationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

/// Points at the first differing record and shows both serialized forms.
pub fn mismatch_report(expected: &TokenizationResult, actual: &TokenizationResult) -> String {
    let expected_text = expected.serialize();
    let actual_text = actual.serialize();
    let first_difference = expected_text
        .lines()
        .zip(actual_text.lines())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.tokens.len().min(actual.tokens.len()));

    format!(
        "First difference at token {} (expected {} tokens, got {}).\nExpected:\n---\n{expected_text}---\nActual:\n---\n{actual_text}---",
        first_difference + 1,
        expected.tokens.len(),
        actual.tokens.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::token::TokenType;
    use crate::syntax::tokenize::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_is_one_record_per_line() {
        let result = tokenize("let x;");
        assert_eq!(
            result.serialize(),
            concat!(
                "{\"type\":\"Keyword\",\"value\":\"let\"}\n",
                "{\"type\":\"Whitespace\",\"value\":\" \"}\n",
                "{\"type\":\"Identifier\",\"value\":\"x\"}\n",
                "{\"type\":\"Punctuation\",\"value\":\";\"}\n",
            )
        );
    }

    #[test]
    fn test_deserialize_restores_spans() {
        let source = "fn main() {\n    /* é */ \"unterminated\n";
        let result = tokenize(source);
        let restored = TokenizationResult::deserialize(&result.serialize()).unwrap();
        assert_eq!(restored, result);
        assert_eq!(restored.source_text(), source);
    }

    #[test]
    fn test_deserialize_reports_bad_line() {
        let text = "{\"type\":\"Keyword\",\"value\":\"fn\"}\n{\"type\":\"Nope\",\"value\":\"x\"}\n";
        match TokenizationResult::deserialize(text) {
            Err(RtokError::InvalidBaseline { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(tokenize("a + b"), tokenize("a + b"));
        assert_ne!(tokenize("a + b"), tokenize("a - b"));
        assert_ne!(tokenize("a"), tokenize("a "));
    }

    #[test]
    fn test_garbage_tokens() {
        let result = tokenize("let x = @@ 5;");
        let garbage = result.garbage_tokens();
        assert_eq!(garbage.len(), 1);
        assert_eq!(garbage[0].value, "@@");
        assert_eq!(garbage[0].token_type, TokenType::Garbage);
        assert!(result.has_garbage());
        assert!(!tokenize("let x = 5;").has_garbage());
    }

    #[test]
    fn test_garbage_report_has_position_and_context() {
        let source = "fn f() {}\nlet x = @@ 5;\n";
        let report = tokenize(source).garbage_report(source);
        assert!(report.contains("\"@@\""), "{report}");
        assert!(report.contains("line 2, column 9"), "{report}");
        assert!(report.contains("| let x = @@ 5;"), "{report}");
    }

    #[test]
    fn test_mismatch_report() {
        let report = mismatch_report(&tokenize("a + b"), &tokenize("a - b"));
        assert!(report.starts_with("First difference at token 3"), "{report}");
        assert!(report.contains("\"value\":\"+\""));
        assert!(report.contains("\"value\":\"-\""));
    }
}

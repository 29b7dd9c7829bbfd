//! Lexer (tokenizer) for ye/bol source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Scanning never fails: characters that start no token (quotes, punctuation,
//! non-ASCII letters) are skipped and remembered as [`SkippedChar`]s so the
//! caller can warn about them.
//!
//! A consequence worth knowing: a quoted string such as `"test.txt"` is not a
//! literal. The quotes and the dot are skipped, leaving the identifiers `test`
//! and `txt`.

use super::ast::SourceLocation;
use std::fmt;

/// Words the scanner tags as [`TokenKind::Keyword`].
///
/// `end`, `read` and `write` are deliberately absent. The parser gives them
/// meaning by position, so they scan as identifiers.
pub const KEYWORDS: [&str; 10] = [
    "ye", "bol", "agar", "warna", "jabtak", "switch", "case", "default", "array", "file",
];

/// Single-character operators
pub const OPERATORS: [char; 7] = ['+', '-', '*', '/', '=', '<', '>'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
}

/// A classified lexical unit. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    /// True for a keyword token spelled `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }

    /// True for an identifier or number, the tokens that can stand alone as a
    /// condition, print expression or case label.
    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Number)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword => write!(f, "keyword '{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Operator => write!(f, "operator '{}'", self.text),
        }
    }
}

/// A character the scanner dropped without producing a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChar {
    pub ch: char,
    pub location: SourceLocation,
}

impl fmt::Display for SkippedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized character {:?} at line {}, column {}",
            self.ch, self.location.line, self.location.column
        )
    }
}

/// Lexer for ye/bol source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    skipped: Vec<SkippedChar>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            skipped: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            match self.next_token() {
                Some(token) => tokens.push(token),
                None => {
                    let location = self.current_location();
                    self.advance();
                    self.skipped.push(SkippedChar { ch, location });
                }
            }
        }

        tokens
    }

    /// Characters skipped so far, in source order
    pub fn skipped(&self) -> &[SkippedChar] {
        &self.skipped
    }

    /// Location just past the last character consumed
    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Scan one token starting at the current character, or `None` if the
    /// character starts nothing (the caller skips it).
    fn next_token(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let ch = self.peek()?;

        if ch.is_ascii_alphabetic() {
            let word = self.take_while(|c| c.is_ascii_alphabetic());
            let kind = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            return Some(Token::new(kind, word, loc));
        }

        if ch.is_ascii_digit() {
            let digits = self.take_while(|c| c.is_ascii_digit());
            return Some(Token::new(TokenKind::Number, digits, loc));
        }

        if OPERATORS.contains(&ch) {
            self.advance();
            return Some(Token::new(TokenKind::Operator, ch.to_string(), loc));
        }

        None
    }

    /// Consume the maximal run of characters matching `pred`
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

/// Scan `input` in one call, discarding the skipped-character record.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n\r\n   ").is_empty());
    }

    #[test]
    fn test_declaration_tokens() {
        let tokens = tokenize("ye x = 2 + 3");

        assert_eq!(texts(&tokens), vec!["ye", "x", "=", "2", "+", "3"]);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[3].kind, TokenKind::Number);
    }

    #[test]
    fn test_all_keywords() {
        let tokens = tokenize("ye bol agar warna jabtak switch case default array file");
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_end_read_write_are_identifiers() {
        let tokens = tokenize("end read write");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_number_keeps_leading_zeros() {
        let tokens = tokenize("007");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "007");
    }

    #[test]
    fn test_letters_and_digits_split() {
        // Identifiers are letters only, so a trailing digit run is a number
        let tokens = tokenize("abc123def");
        assert_eq!(texts(&tokens), vec!["abc", "123", "def"]);
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn test_operators_are_single_chars() {
        let tokens = tokenize("<=>+-*/");
        assert_eq!(texts(&tokens), vec!["<", "=", ">", "+", "-", "*", "/"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_quoted_string_drops_quotes() {
        let mut lexer = Lexer::new(r#"file write "test.txt" "Hello, World!""#);
        let tokens = lexer.tokenize();

        assert_eq!(
            texts(&tokens),
            vec!["file", "write", "test", "txt", "Hello", "World"]
        );
        let skipped: Vec<char> = lexer.skipped().iter().map(|s| s.ch).collect();
        assert_eq!(skipped, vec!['"', '.', '"', '"', ',', '!', '"']);
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("ye x\n  bol x");
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 4));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 7));
    }

    #[test]
    fn test_skipped_location() {
        let mut lexer = Lexer::new("x\n ;");
        lexer.tokenize();
        assert_eq!(
            lexer.skipped(),
            &[SkippedChar {
                ch: ';',
                location: SourceLocation::new(2, 2)
            }]
        );
    }
}

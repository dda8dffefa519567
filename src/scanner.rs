use {
    crate::{
        error::ScanError,
        literal::Literal,
        reporter::Reporter,
        token::{keywords, SourcePosition, Token, TokenKind},
    },
    std::collections::HashMap,
};

trait IsIdentifier {
    fn is_identifier_start(&self) -> bool;
    fn is_identifier(&self) -> bool;
}

impl IsIdentifier for char {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_identifier(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}

/// Scan a whole source text, reporting lexical errors to `reporter`.
///
/// The result always ends with exactly one [`TokenKind::Eof`] token.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// Current scanner state for iterating over the source input.
pub struct Scanner<'src, 'rep> {
    source: &'src str,                          // Utf8 source
    line: usize,                                // Current line number
    start_line: usize,                          // Line of the current token's first character
    start: usize,                               // Byte offset of the current token
    current: usize,                             // Byte offset of the next unread character
    tokens: Vec<Token>,                         // Accumulated output
    keywords: HashMap<&'static str, TokenKind>, // List of recognized keywords
    reporter: &'rep mut dyn Reporter,
}

impl<'src, 'rep> Scanner<'src, 'rep> {
    pub fn new(source: &'src str, reporter: &'rep mut dyn Reporter) -> Self {
        Self {
            source,
            line: 1,
            start_line: 1,
            start: 0,
            current: 0,
            tokens: vec![],
            keywords: keywords(),
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }
        self.start = self.current;
        self.start_line = self.line;
        self.add_token(TokenKind::Eof);
        tracing::debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scan finished"
        );
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.matches('/') {
                    // A comment goes until the end of the line.
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {
                // Ignore whitespace.
            }
            '\n' => {
                self.line += 1;
            }
            '"' => self.string(),
            d if d.is_ascii_digit() => self.number(),
            a if a.is_identifier_start() => self.identifier(),
            _ => self.error(ScanError::UnexpectedCharacter {
                character: c,
                line: self.line,
                span: (self.start..self.current).into(),
            }),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume one whole character. Only called when not at end.
    fn advance(&mut self) -> char {
        let c = self.source[self.current..].chars().next().unwrap_or('\0');
        self.current += c.len_utf8();
        c
    }

    /// Return true and advance if the next character is the expected one.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn string(&mut self) {
        while self.peek() != Some('"') && !self.is_at_end() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }
        if self.is_at_end() {
            self.error(ScanError::UnterminatedString {
                line: self.line,
                span: (self.start..self.current).into(),
            });
            return;
        }
        // The closing ".
        self.advance();

        // Skip " " around the string value.
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_with_value(TokenKind::String, Literal::Str(value.into()));
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            // Consume the "."
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        let value = self
            .lexeme()
            .parse()
            .expect("a run of ascii digits with an optional fraction is a valid f64");
        self.add_token_with_value(TokenKind::Number, Literal::Num(value));
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_identifier()) {
            self.advance();
        }

        let kind = self
            .keywords
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.start_line,
            span: self.start..self.current,
        }
    }

    fn error(&mut self, error: ScanError) {
        tracing::debug!(line = error.line(), %error, "lexical error");
        self.reporter.report_scan_error(&error);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(Token::new(kind, self.lexeme(), None, self.current_position()));
    }

    fn add_token_with_value(&mut self, kind: TokenKind, value: Literal) {
        self.push(Token::new(
            kind,
            self.lexeme(),
            Some(value),
            self.current_position(),
        ));
    }

    fn push(&mut self, token: Token) {
        tracing::trace!(%token, position = %token.position, "token");
        self.tokens.push(token);
    }
}

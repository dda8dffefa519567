use {crate::literal::Literal, maplit::hashmap, std::collections::HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    KwAnd,
    KwClass,
    KwElse,
    KwFalse,
    KwFun,
    KwFor,
    KwIf,
    KwNil,
    KwOr,
    KwPrint,
    KwReturn,
    KwSuper,
    KwThis,
    KwTrue,
    KwVar,
    KwWhile,
}

/// Reserved words of the language, keyed by their exact spelling.
pub fn keywords() -> HashMap<&'static str, TokenKind> {
    hashmap! {
        "and" => TokenKind::KwAnd,
        "class" => TokenKind::KwClass,
        "else" => TokenKind::KwElse,
        "false" => TokenKind::KwFalse,
        "for" => TokenKind::KwFor,
        "fun" => TokenKind::KwFun,
        "if" => TokenKind::KwIf,
        "nil" => TokenKind::KwNil,
        "or" => TokenKind::KwOr,
        "print" => TokenKind::KwPrint,
        "return" => TokenKind::KwReturn,
        "super" => TokenKind::KwSuper,
        "this" => TokenKind::KwThis,
        "true" => TokenKind::KwTrue,
        "var" => TokenKind::KwVar,
        "while" => TokenKind::KwWhile,
    }
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwAnd
                | TokenKind::KwClass
                | TokenKind::KwElse
                | TokenKind::KwFalse
                | TokenKind::KwFun
                | TokenKind::KwFor
                | TokenKind::KwIf
                | TokenKind::KwNil
                | TokenKind::KwOr
                | TokenKind::KwPrint
                | TokenKind::KwReturn
                | TokenKind::KwSuper
                | TokenKind::KwThis
                | TokenKind::KwTrue
                | TokenKind::KwVar
                | TokenKind::KwWhile
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::KwAnd => "AND",
            TokenKind::KwClass => "CLASS",
            TokenKind::KwElse => "ELSE",
            TokenKind::KwFalse => "FALSE",
            TokenKind::KwFun => "FUN",
            TokenKind::KwFor => "FOR",
            TokenKind::KwIf => "IF",
            TokenKind::KwNil => "NIL",
            TokenKind::KwOr => "OR",
            TokenKind::KwPrint => "PRINT",
            TokenKind::KwReturn => "RETURN",
            TokenKind::KwSuper => "SUPER",
            TokenKind::KwThis => "THIS",
            TokenKind::KwTrue => "TRUE",
            TokenKind::KwVar => "VAR",
            TokenKind::KwWhile => "WHILE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub span: std::ops::Range<usize>,
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}..{}]", self.line, self.span.start, self.span.end)
    }
}

/// A classified slice of source text.
///
/// `lexeme` is always the verbatim text at `position.span`, and `literal` is
/// only ever set for [`TokenKind::Number`] and [`TokenKind::String`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub position: SourcePosition,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if let Some(ref literal) = self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            position,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn literal_num(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Num(x)) => Some(x),
            _ => None,
        }
    }

    pub fn literal_str(&self) -> Option<&str> {
        match self.literal {
            Some(Literal::Str(ref s)) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        let table = keywords();
        assert_eq!(table.get("class"), Some(&TokenKind::KwClass));
        assert_eq!(table.get("while"), Some(&TokenKind::KwWhile));
        assert_eq!(table.get("Class"), None);
        assert_eq!(table.get("classroom"), None);
        assert_eq!(table.get("cla"), None);
    }

    #[test]
    fn every_keyword_kind_is_reachable() {
        let words = [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        let table = keywords();
        assert_eq!(table.len(), words.len());
        for word in words {
            let kind = table[word];
            assert!(kind.is_keyword());
            assert_eq!(kind.name(), word.to_uppercase());
        }
    }

    #[test]
    fn display_includes_literal_when_present() {
        let position = SourcePosition { line: 1, span: 0..3 };
        let num = Token::new(TokenKind::Number, "1.5", Some(Literal::Num(1.5)), position.clone());
        assert_eq!(num.to_string(), "NUMBER 1.5 1.5");

        let plus = Token::new(TokenKind::Plus, "+", None, position);
        assert_eq!(plus.to_string(), "PLUS +");
    }
}

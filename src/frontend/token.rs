use std::fmt;

use crate::frontend::tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    RealLiteral,
    StrLiteral,
    BoolLiteral,
    Global,
    Array,
    If,
    Then,
    ElseIf,
    Else,
    EndIf,
    For,
    To,
    Next,
    While,
    EndWhile,
    Do,
    Until,
    Switch,
    Case,
    Default,
    EndSwitch,
    Function,
    EndFunction,
    Procedure,
    EndProcedure,
    Return,
    Class,
    Inherits,
    EndClass,
    Private,
    Public,
    New,
    Super,
    Print,
    Break,
    Continue,
    ByRef,
    ByVal,
    And,
    Or,
    Not,
    Div,
    Mod,
    Assign,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Comma,
    Dot,
    Colon,
    Eof,
}

impl TokenKind {
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::RealLiteral | TokenKind::StrLiteral | TokenKind::BoolLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Tokenizer::text_of(*self) {
            Some(text) => write!(f, "{}", text),
            None => match self {
                TokenKind::Identifier => write!(f, "identifier"),
                TokenKind::IntLiteral => write!(f, "integer literal"),
                TokenKind::RealLiteral => write!(f, "real literal"),
                TokenKind::StrLiteral => write!(f, "string literal"),
                TokenKind::BoolLiteral => write!(f, "boolean literal"),
                TokenKind::Eof => write!(f, "end of input"),
                other => write!(f, "{:?}", other),
            },
        }
    }
}

/// A classified fragment of source text and the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Contents of a string literal without its surrounding quotes.
    pub fn unquoted(&self) -> &str {
        let text = self.text.as_str();
        if self.kind == TokenKind::StrLiteral && text.len() >= 2 {
            &text[1..text.len() - 1]
        } else {
            text
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

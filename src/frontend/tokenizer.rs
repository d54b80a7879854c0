use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::frontend::token::TokenKind;

// Canonical source text of every keyword and operator kind.
const KNOWN_TOKENS: &[(TokenKind, &str)] = &[
    (TokenKind::Global, "global"),
    (TokenKind::Array, "array"),
    (TokenKind::If, "if"),
    (TokenKind::Then, "then"),
    (TokenKind::ElseIf, "elseif"),
    (TokenKind::Else, "else"),
    (TokenKind::EndIf, "endif"),
    (TokenKind::For, "for"),
    (TokenKind::To, "to"),
    (TokenKind::Next, "next"),
    (TokenKind::While, "while"),
    (TokenKind::EndWhile, "endwhile"),
    (TokenKind::Do, "do"),
    (TokenKind::Until, "until"),
    (TokenKind::Switch, "switch"),
    (TokenKind::Case, "case"),
    (TokenKind::Default, "default"),
    (TokenKind::EndSwitch, "endswitch"),
    (TokenKind::Function, "function"),
    (TokenKind::EndFunction, "endfunction"),
    (TokenKind::Procedure, "procedure"),
    (TokenKind::EndProcedure, "endprocedure"),
    (TokenKind::Return, "return"),
    (TokenKind::Class, "class"),
    (TokenKind::Inherits, "inherits"),
    (TokenKind::EndClass, "endclass"),
    (TokenKind::Private, "private"),
    (TokenKind::Public, "public"),
    (TokenKind::New, "new"),
    (TokenKind::Super, "super"),
    (TokenKind::Print, "print"),
    (TokenKind::Break, "break"),
    (TokenKind::Continue, "continue"),
    (TokenKind::ByRef, "byRef"),
    (TokenKind::ByVal, "byVal"),
    (TokenKind::And, "AND"),
    (TokenKind::Or, "OR"),
    (TokenKind::Not, "NOT"),
    (TokenKind::Div, "DIV"),
    (TokenKind::Mod, "MOD"),
    (TokenKind::Assign, "="),
    (TokenKind::Equal, "=="),
    (TokenKind::NotEqual, "!="),
    (TokenKind::LessThan, "<"),
    (TokenKind::GreaterThan, ">"),
    (TokenKind::LessThanEqual, "<="),
    (TokenKind::GreaterThanEqual, ">="),
    (TokenKind::Plus, "+"),
    (TokenKind::Minus, "-"),
    (TokenKind::Multiply, "*"),
    (TokenKind::Divide, "/"),
    (TokenKind::Power, "^"),
    (TokenKind::LParen, "("),
    (TokenKind::RParen, ")"),
    (TokenKind::LBrack, "["),
    (TokenKind::RBrack, "]"),
    (TokenKind::Comma, ","),
    (TokenKind::Dot, "."),
    (TokenKind::Colon, ":"),
];

lazy_static! {
    static ref BY_TEXT: HashMap<&'static str, TokenKind> =
        KNOWN_TOKENS.iter().map(|&(kind, text)| (text, kind)).collect();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref REAL: Regex =
        Regex::new(r"^(([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+)$").unwrap();
    static ref STRING: Regex = Regex::new(r#"^("[^"]*"|'[^']*')$"#).unwrap();
}

/// Classification table for lexical fragments.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the kind of `fragment`, or `None` when it is not a token of the language.
    pub fn classify(&self, fragment: &str) -> Option<TokenKind> {
        if let Some(&kind) = BY_TEXT.get(fragment) {
            return Some(kind);
        }
        if fragment == "true" || fragment == "false" {
            Some(TokenKind::BoolLiteral)
        } else if IDENTIFIER.is_match(fragment) {
            Some(TokenKind::Identifier)
        } else if INTEGER.is_match(fragment) {
            Some(TokenKind::IntLiteral)
        } else if REAL.is_match(fragment) {
            Some(TokenKind::RealLiteral)
        } else if STRING.is_match(fragment) {
            Some(TokenKind::StrLiteral)
        } else {
            None
        }
    }

    /// Canonical source text of a keyword or operator kind.
    pub fn text_of(kind: TokenKind) -> Option<&'static str> {
        KNOWN_TOKENS
            .iter()
            .find(|(known, _)| *known == kind)
            .map(|&(_, text)| text)
    }
}

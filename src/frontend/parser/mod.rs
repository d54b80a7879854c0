use crate::ast::{Node, NodeKind};
use crate::errors::{PseudoError, PseudoResult};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};

mod declarations;
mod expressions;
mod statements;

/// Recursive-descent parser pulling tokens from a [`Lexer`] on demand.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    // Number of enclosing statement blocks; zero at top level.
    nesting: usize,
    // `Function` or `Procedure` while inside a subroutine body.
    subroutine: Option<TokenKind>,
    // Enclosing loop and switch bodies, for `break` and `continue`.
    loops: usize,
    switches: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            current_token: Token::eof(0),
            nesting: 0,
            subroutine: None,
            loops: 0,
            switches: 0,
        }
    }

    /// Parses the whole program.
    ///
    /// Returns `Ok(None)` when the input holds no statements at all, otherwise
    /// a `Program` node whose children are the top-level statements in order.
    /// The first syntax error aborts the parse.
    pub fn parse(&mut self) -> PseudoResult<Option<Node>> {
        self.lexer.restart();
        self.nesting = 0;
        self.subroutine = None;
        self.loops = 0;
        self.switches = 0;
        self.next()?;

        let mut statements = Vec::new();
        while !self.at(TokenKind::Eof) {
            statements.push(self.statement()?);
        }
        tracing::debug!(statements = statements.len(), "parse finished");
        if statements.is_empty() {
            return Ok(None);
        }
        Ok(Some(Node::new(NodeKind::Program, statements)))
    }

    // Consumes the current token and returns it.
    fn next(&mut self) -> PseudoResult<Token> {
        let upcoming = self.lexer.advance()?;
        Ok(std::mem::replace(&mut self.current_token, upcoming))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    fn line_number(&self) -> usize {
        self.current_token.line
    }

    fn eat(&mut self, kind: TokenKind) -> PseudoResult<bool> {
        if self.at(kind) {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect(&mut self, expected: TokenKind) -> PseudoResult<Token> {
        if !self.at(expected) {
            return Err(self.syntax_error(format!("'{}'", expected)));
        }
        self.next()
    }

    fn expect_ident(&mut self) -> PseudoResult<String> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.syntax_error("identifier"));
        }
        Ok(self.next()?.text)
    }

    fn syntax_error(&self, expected: impl Into<String>) -> PseudoError {
        PseudoError::syntax_error(expected, self.current_token.to_string(), self.line_number())
    }

    /**
     * Parse a block of statements up to (not including) one of `stops`.
     * The last stop is the keyword that closes the construct and is named
     * in the error when input ends first.
     */
    fn block(&mut self, stops: &[TokenKind]) -> PseudoResult<Node> {
        self.nesting += 1;
        let mut statements = Vec::new();
        while !stops.contains(&self.current_token.kind) {
            if self.at(TokenKind::Eof) {
                let closing = stops.last().copied().unwrap_or(TokenKind::Eof);
                return Err(self.syntax_error(format!("'{}'", closing)));
            }
            statements.push(self.statement()?);
        }
        self.nesting -= 1;
        Ok(Node::block(statements))
    }

    /// Comma-separated expressions up to `close`, which is left unconsumed. May be empty.
    fn expression_list(&mut self, close: TokenKind) -> PseudoResult<Vec<Node>> {
        let mut exprs = Vec::new();
        if self.at(close) {
            return Ok(exprs);
        }
        loop {
            exprs.push(self.expression()?);
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        Ok(exprs)
    }

    /// Like [`Parser::expression_list`] but at least one expression is required.
    fn required_expression_list(&mut self, close: TokenKind) -> PseudoResult<Vec<Node>> {
        if self.at(close) {
            return Err(self.syntax_error("list of expressions"));
        }
        self.expression_list(close)
    }
}

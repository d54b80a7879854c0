use crate::ast::{Node, NodeKind};
use crate::config::parser::CONSTRUCTOR_NAME;
use crate::errors::{PseudoError, PseudoResult};
use crate::frontend::parser::Parser;
use crate::frontend::token::TokenKind;

impl<'a> Parser<'a> {
    /**
     * subroutine = "function" name "(" params ")" block "endfunction"
     *            | "procedure" name "(" params ")" block "endprocedure"
     *
     * Allowed only at top level and as class members.
     */
    pub(super) fn subroutine_declaration(&mut self) -> PseudoResult<Node> {
        if self.nesting > 0 {
            return Err(PseudoError::invalid_statement(
                "nested subroutine declaration not allowed",
                self.line_number(),
            ));
        }
        let keyword = self.next()?.kind;
        let closing = match keyword {
            TokenKind::Function => TokenKind::EndFunction,
            _ => TokenKind::EndProcedure,
        };
        let name = if self.eat(TokenKind::New)? {
            CONSTRUCTOR_NAME.to_string()
        } else {
            self.expect_ident()?
        };
        let params = self.parameters()?;

        let enclosing = self.subroutine.replace(keyword);
        let body = self.block(&[closing]);
        self.subroutine = enclosing;
        let body = body?;
        self.expect(closing)?;

        let kind = match keyword {
            TokenKind::Function => NodeKind::FunDecl { name },
            _ => NodeKind::ProcDecl { name },
        };
        Ok(Node::new(kind, vec![params, body]))
    }

    /**
     * params = "(" [ param { "," param } ] ")"
     * param  = ident [ ":" ( "byRef" | "byVal" ) ]
     */
    fn parameters(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                let name = self.expect_ident()?;
                let is_byref = if !self.eat(TokenKind::Colon)? {
                    false
                } else if self.eat(TokenKind::ByRef)? {
                    true
                } else if self.eat(TokenKind::ByVal)? {
                    false
                } else {
                    return Err(self.syntax_error(format!("'{}' or '{}'", TokenKind::ByRef, TokenKind::ByVal)));
                };
                params.push(Node::leaf(NodeKind::Param { is_byref, name }));
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(Node::new(NodeKind::Params, params))
    }

    /**
     * class  = "class" ident [ "inherits" ident ] { member } "endclass"
     * member = [ "private" | "public" ] ( ident | subroutine )
     *
     * Members without a visibility keyword are private. The parent class is
     * recorded by name only.
     */
    pub(super) fn class_declaration(&mut self) -> PseudoResult<Node> {
        if self.nesting > 0 {
            return Err(PseudoError::invalid_statement(
                "nested class declaration not allowed",
                self.line_number(),
            ));
        }
        self.expect(TokenKind::Class)?;
        let name = self.expect_ident()?;
        let parent = if self.eat(TokenKind::Inherits)? {
            Some(self.expect_ident()?)
        } else {
            None
        };

        let mut members = Vec::new();
        while !self.eat(TokenKind::EndClass)? {
            let is_public = if self.eat(TokenKind::Public)? {
                true
            } else {
                self.eat(TokenKind::Private)?;
                false
            };
            let member = match self.current_token.kind {
                TokenKind::Function | TokenKind::Procedure => self.subroutine_declaration()?,
                TokenKind::Identifier => Node::identifier(self.next()?.text),
                TokenKind::Eof => return Err(self.syntax_error(format!("'{}'", TokenKind::EndClass))),
                _ => return Err(self.syntax_error("class member")),
            };
            members.push(Node::new(NodeKind::ClassMember { is_public }, vec![member]));
        }
        Ok(Node::new(NodeKind::ClassDecl { name, parent }, members))
    }
}

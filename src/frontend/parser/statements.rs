use crate::ast::{Node, NodeKind};
use crate::errors::{PseudoError, PseudoResult};
use crate::frontend::parser::Parser;
use crate::frontend::token::TokenKind;

const IF_STOPS: &[TokenKind] = &[TokenKind::ElseIf, TokenKind::Else, TokenKind::EndIf];
const CASE_STOPS: &[TokenKind] = &[TokenKind::Case, TokenKind::Default, TokenKind::EndSwitch];

impl<'a> Parser<'a> {
    pub(super) fn statement(&mut self) -> PseudoResult<Node> {
        let line = self.line_number();
        let stmt = match self.current_token.kind {
            TokenKind::Global => {
                self.expect(TokenKind::Global)?;
                if self.at(TokenKind::Array) {
                    self.array_declaration(true)?
                } else {
                    self.assignment_or_call(true)?
                }
            }
            TokenKind::Array => self.array_declaration(false)?,
            TokenKind::Identifier | TokenKind::Super | TokenKind::New => self.assignment_or_call(false)?,
            TokenKind::If => self.if_statement()?,
            TokenKind::For => self.for_loop()?,
            TokenKind::While => self.while_loop()?,
            TokenKind::Do => self.do_until_loop()?,
            TokenKind::Switch => self.switch_statement()?,
            TokenKind::Function | TokenKind::Procedure => self.subroutine_declaration()?,
            TokenKind::Class => self.class_declaration()?,
            TokenKind::Print => self.print_statement()?,
            TokenKind::Return => self.return_statement()?,
            TokenKind::Break | TokenKind::Continue => self.jump_statement()?,
            TokenKind::Eof => return Err(self.syntax_error("statement")),
            _ => {
                return Err(PseudoError::UnexpectedToken {
                    token: self.current_token.to_string(),
                    line,
                })
            }
        };
        tracing::debug!(line, kind = stmt.kind.name(), "parsed statement");
        Ok(stmt)
    }

    /**
     * array-decl = [ "global" ] "array" ident "[" expr { "," expr } "]"
     */
    fn array_declaration(&mut self, is_global: bool) -> PseudoResult<Node> {
        self.expect(TokenKind::Array)?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::LBrack)?;
        let dims = self.required_expression_list(TokenKind::RBrack)?;
        self.expect(TokenKind::RBrack)?;
        Ok(Node::leaf(NodeKind::ArrayDecl { is_global, name, dims }))
    }

    /**
     * assignment = [ "global" ] chain "=" expr
     * call       = chain                 (chain ends in a call or an instantiation)
     *
     * Without the `array` keyword a bracket suffix is always an index.
     */
    fn assignment_or_call(&mut self, is_global: bool) -> PseudoResult<Node> {
        let target = self.access_chain()?;
        if self.eat(TokenKind::Assign)? {
            let value = self.expression()?;
            return Ok(Node::binary(NodeKind::Assign { is_global }, target, value));
        }
        if !is_global && matches!(target.kind, NodeKind::Call | NodeKind::New(_)) {
            return Ok(target);
        }
        Err(self.syntax_error(format!("'{}'", TokenKind::Assign)))
    }

    fn if_statement(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::If)?;
        let mut branches = vec![self.conditional_branch()?];
        while self.eat(TokenKind::ElseIf)? {
            branches.push(self.conditional_branch()?);
        }
        if self.eat(TokenKind::Else)? {
            let block = self.block(&[TokenKind::EndIf])?;
            branches.push(Node::new(NodeKind::Else, vec![block]));
        }
        self.expect(TokenKind::EndIf)?;
        Ok(Node::new(NodeKind::If, branches))
    }

    // condition "then" block, shared by `if` and `elseif`
    fn conditional_branch(&mut self) -> PseudoResult<Node> {
        let condition = self.expression()?;
        self.expect(TokenKind::Then)?;
        let block = self.block(IF_STOPS)?;
        Ok(Node::new(NodeKind::Branch, vec![condition, block]))
    }

    fn for_loop(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::For)?;
        let counter = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let from = self.expression()?;
        self.expect(TokenKind::To)?;
        let to = self.expression()?;
        let body = self.loop_body(&[TokenKind::Next])?;
        self.expect(TokenKind::Next)?;
        if !self.at(TokenKind::Identifier) || self.current_token.text != counter {
            return Err(self.syntax_error(format!("'{} {}'", TokenKind::Next, counter)));
        }
        self.next()?;
        Ok(Node::new(NodeKind::For, vec![Node::identifier(counter), from, to, body]))
    }

    fn loop_body(&mut self, stops: &[TokenKind]) -> PseudoResult<Node> {
        self.loops += 1;
        let body = self.block(stops);
        self.loops -= 1;
        body
    }

    fn while_loop(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::While)?;
        let condition = self.expression()?;
        let body = self.loop_body(&[TokenKind::EndWhile])?;
        self.expect(TokenKind::EndWhile)?;
        Ok(Node::new(NodeKind::While, vec![condition, body]))
    }

    fn do_until_loop(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::Do)?;
        let body = self.loop_body(&[TokenKind::Until])?;
        self.expect(TokenKind::Until)?;
        let condition = self.expression()?;
        Ok(Node::new(NodeKind::DoUntil, vec![body, condition]))
    }

    /**
     * switch = "switch" expr ":" { "case" label ":" block } [ "default" ":" block ] "endswitch"
     */
    fn switch_statement(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::Switch)?;
        let mut clauses = vec![self.expression()?];
        self.expect(TokenKind::Colon)?;

        let mut has_default = false;
        loop {
            match self.current_token.kind {
                TokenKind::Case | TokenKind::Default if has_default => {
                    return Err(PseudoError::invalid_statement(
                        "default must be the last clause of a switch",
                        self.line_number(),
                    ));
                }
                TokenKind::Case => {
                    self.next()?;
                    let label = self.case_label()?;
                    self.expect(TokenKind::Colon)?;
                    let block = self.clause_body()?;
                    clauses.push(Node::new(NodeKind::Case, vec![label, block]));
                }
                TokenKind::Default => {
                    self.next()?;
                    self.expect(TokenKind::Colon)?;
                    let block = self.clause_body()?;
                    clauses.push(Node::new(NodeKind::Default, vec![block]));
                    has_default = true;
                }
                TokenKind::EndSwitch => {
                    self.next()?;
                    break;
                }
                TokenKind::Eof => return Err(self.syntax_error(format!("'{}'", TokenKind::EndSwitch))),
                _ => return Err(self.syntax_error(format!("'{}'", TokenKind::Case))),
            }
        }
        Ok(Node::new(NodeKind::Switch, clauses))
    }

    fn clause_body(&mut self) -> PseudoResult<Node> {
        self.switches += 1;
        let body = self.block(CASE_STOPS);
        self.switches -= 1;
        body
    }

    // A literal, or a negated numeric literal.
    fn case_label(&mut self) -> PseudoResult<Node> {
        if self.eat(TokenKind::Minus)? {
            if !matches!(self.current_token.kind, TokenKind::IntLiteral | TokenKind::RealLiteral) {
                return Err(self.syntax_error("numeric literal"));
            }
            return Ok(Node::unary(NodeKind::Negate, self.literal()?));
        }
        if !self.current_token.kind.is_literal() {
            return Err(self.syntax_error("literal"));
        }
        self.literal()
    }

    /**
     * `break` leaves the innermost loop or switch; `continue` needs a loop.
     */
    fn jump_statement(&mut self) -> PseudoResult<Node> {
        let token = self.next()?;
        let allowed = match token.kind {
            TokenKind::Break => self.loops + self.switches > 0,
            _ => self.loops > 0,
        };
        if !allowed {
            let target = if token.kind == TokenKind::Break { "loop or switch" } else { "loop" };
            return Err(PseudoError::invalid_statement(
                format!("{} outside of {}", token.kind, target),
                token.line,
            ));
        }
        Ok(Node::leaf(NodeKind::GoToInstr(token.kind)))
    }

    fn print_statement(&mut self) -> PseudoResult<Node> {
        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::LParen)?;
        let exprs = self.expression_list(TokenKind::RParen)?;
        self.expect(TokenKind::RParen)?;
        Ok(Node::new(NodeKind::Print, exprs))
    }

    /**
     * return = "return" [ expr ]
     *
     * The value is present exactly when another token follows on the same line.
     */
    fn return_statement(&mut self) -> PseudoResult<Node> {
        let line = self.expect(TokenKind::Return)?.line;
        let subroutine = self.subroutine.ok_or_else(|| {
            PseudoError::invalid_statement("return outside of function or procedure", line)
        })?;
        if self.at(TokenKind::Eof) || self.line_number() != line {
            return Ok(Node::leaf(NodeKind::Return));
        }
        if subroutine == TokenKind::Procedure {
            return Err(PseudoError::invalid_statement("procedure cannot return a value", line));
        }
        let value = self.expression()?;
        Ok(Node::new(NodeKind::Return, vec![value]))
    }
}

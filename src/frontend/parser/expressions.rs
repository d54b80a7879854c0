use crate::ast::{Node, NodeKind};
use crate::config::parser::is_member_keyword;
use crate::errors::{PseudoError, PseudoResult};
use crate::frontend::parser::Parser;
use crate::frontend::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
enum Family {
    Add,
    Mul,
    Pow,
    Cmp,
}

impl Family {
    fn node_kind(self, op: TokenKind) -> NodeKind {
        match self {
            Family::Add => NodeKind::AddOp(op),
            Family::Mul => NodeKind::MulOp(op),
            Family::Pow => NodeKind::PowOp(op),
            Family::Cmp => NodeKind::CmpOp(op),
        }
    }
}

const LOWEST_PRECEDENCE: u8 = 1;
// Prefix NOT sits between AND and the comparisons.
const NOT_PRECEDENCE: u8 = 3;

// Binary operators, loosest first.
const BINARY_OPERATORS: &[(TokenKind, u8, Assoc, Family)] = &[
    (TokenKind::Or, 1, Assoc::Left, Family::Add),
    (TokenKind::And, 2, Assoc::Left, Family::Mul),
    (TokenKind::Equal, 4, Assoc::Left, Family::Cmp),
    (TokenKind::NotEqual, 4, Assoc::Left, Family::Cmp),
    (TokenKind::LessThan, 4, Assoc::Left, Family::Cmp),
    (TokenKind::GreaterThan, 4, Assoc::Left, Family::Cmp),
    (TokenKind::LessThanEqual, 4, Assoc::Left, Family::Cmp),
    (TokenKind::GreaterThanEqual, 4, Assoc::Left, Family::Cmp),
    (TokenKind::Plus, 5, Assoc::Left, Family::Add),
    (TokenKind::Minus, 5, Assoc::Left, Family::Add),
    (TokenKind::Multiply, 6, Assoc::Left, Family::Mul),
    (TokenKind::Divide, 6, Assoc::Left, Family::Mul),
    (TokenKind::Div, 6, Assoc::Left, Family::Mul),
    (TokenKind::Mod, 6, Assoc::Left, Family::Mul),
    (TokenKind::Power, 7, Assoc::Right, Family::Pow),
];

fn binary_operator(kind: TokenKind) -> Option<(u8, Assoc, Family)> {
    BINARY_OPERATORS
        .iter()
        .find(|(op, ..)| *op == kind)
        .map(|&(_, precedence, assoc, family)| (precedence, assoc, family))
}

impl<'a> Parser<'a> {
    pub(super) fn expression(&mut self) -> PseudoResult<Node> {
        self.binary_expression(LOWEST_PRECEDENCE)
    }

    // Precedence climbing over BINARY_OPERATORS.
    fn binary_expression(&mut self, min_precedence: u8) -> PseudoResult<Node> {
        let mut lhs = self.prefix_expression(min_precedence)?;
        while let Some((precedence, assoc, family)) = binary_operator(self.current_token.kind) {
            if precedence < min_precedence {
                break;
            }
            let op = self.next()?.kind;
            let next_min = match assoc {
                Assoc::Left => precedence + 1,
                Assoc::Right => precedence,
            };
            let rhs = self.binary_expression(next_min)?;
            lhs = Node::binary(family.node_kind(op), lhs, rhs);
        }
        Ok(lhs)
    }

    // NOT never reaches below the operator it is an operand of: in
    // `a + NOT b == c` it takes only `b`.
    fn prefix_expression(&mut self, min_precedence: u8) -> PseudoResult<Node> {
        if self.eat(TokenKind::Not)? {
            let operand = self.binary_expression(min_precedence.max(NOT_PRECEDENCE + 1))?;
            return Ok(Node::unary(NodeKind::Not, operand));
        }
        self.unary_expression()
    }

    // Unary minus takes only its immediate operand: `-3 * 5` is `(-3) * 5`.
    fn unary_expression(&mut self) -> PseudoResult<Node> {
        if self.eat(TokenKind::Minus)? {
            let operand = self.unary_expression()?;
            return Ok(Node::unary(NodeKind::Negate, operand));
        }
        let primary = self.primary_expression()?;
        self.suffixes(primary)
    }

    /**
     * primary = "(" expr ")" | literal | ident | "super" | "new" ident "(" exprs ")"
     */
    fn primary_expression(&mut self) -> PseudoResult<Node> {
        match self.current_token.kind {
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                let expr = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::IntLiteral | TokenKind::RealLiteral | TokenKind::StrLiteral | TokenKind::BoolLiteral => {
                self.literal()
            }
            TokenKind::Identifier | TokenKind::Super | TokenKind::New => self.chain_base(),
            _ => Err(self.syntax_error("expression")),
        }
    }

    pub(super) fn literal(&mut self) -> PseudoResult<Node> {
        let token = self.next()?;
        let kind = match token.kind {
            TokenKind::IntLiteral => NodeKind::IntLiteral(token.text.parse::<i64>().map_err(|_| {
                PseudoError::InvalidNumber {
                    number: token.text.clone(),
                    line: token.line,
                }
            })?),
            TokenKind::RealLiteral => match token.text.parse::<f64>() {
                Ok(val) if val.is_finite() => NodeKind::NumLiteral(val),
                _ => {
                    return Err(PseudoError::InvalidNumber {
                        number: token.text,
                        line: token.line,
                    })
                }
            },
            TokenKind::StrLiteral => NodeKind::StrLiteral(token.unquoted().to_string()),
            TokenKind::BoolLiteral => NodeKind::BoolLiteral(token.text == "true"),
            _ => {
                return Err(PseudoError::syntax_error("literal", token.to_string(), token.line));
            }
        };
        Ok(Node::leaf(kind))
    }

    /// Parses an access chain: a base followed by any field, index and call suffixes.
    pub(super) fn access_chain(&mut self) -> PseudoResult<Node> {
        let base = self.chain_base()?;
        self.suffixes(base)
    }

    fn chain_base(&mut self) -> PseudoResult<Node> {
        match self.current_token.kind {
            TokenKind::Identifier => Ok(Node::identifier(self.next()?.text)),
            TokenKind::Super => {
                self.next()?;
                Ok(Node::leaf(NodeKind::Super))
            }
            TokenKind::New => {
                self.next()?;
                let class_name = self.expect_ident()?;
                self.expect(TokenKind::LParen)?;
                let args = self.expression_list(TokenKind::RParen)?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::new(NodeKind::New(class_name), vec![Node::new(NodeKind::Args, args)]))
            }
            _ => Err(self.syntax_error("identifier")),
        }
    }

    // Each suffix applies to the result of everything before it.
    fn suffixes(&mut self, mut object: Node) -> PseudoResult<Node> {
        loop {
            object = match self.current_token.kind {
                TokenKind::Dot => {
                    self.next()?;
                    let name = self.member_name()?;
                    Node::new(NodeKind::Field(name), vec![object])
                }
                TokenKind::LBrack => {
                    self.next()?;
                    let indices = self.required_expression_list(TokenKind::RBrack)?;
                    self.expect(TokenKind::RBrack)?;
                    Node::new(NodeKind::Index, vec![object, Node::new(NodeKind::Args, indices)])
                }
                TokenKind::LParen => {
                    self.next()?;
                    let args = self.expression_list(TokenKind::RParen)?;
                    self.expect(TokenKind::RParen)?;
                    Node::new(NodeKind::Call, vec![object, Node::new(NodeKind::Args, args)])
                }
                _ => return Ok(object),
            };
        }
    }

    // Identifier after '.', where `new` names the parent constructor in `super.new(...)`.
    fn member_name(&mut self) -> PseudoResult<String> {
        if self.at(TokenKind::Identifier) || is_member_keyword(&self.current_token.text) {
            return Ok(self.next()?.text);
        }
        Err(self.syntax_error("identifier"))
    }
}

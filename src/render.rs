//! Canonical source rendering of a syntax tree.
//!
//! Every compound operand is parenthesised, so parsing the rendered lines
//! again yields a tree equal to the one rendered.

use crate::ast::{Node, NodeKind};
use crate::config::render::INDENT;
use crate::frontend::token::TokenKind;
use crate::frontend::tokenizer::Tokenizer;

/// Renders a statement (or a whole `Program`) as indented source lines.
pub fn render(node: &Node) -> Vec<String> {
    let mut out = Renderer { lines: Vec::new() };
    match node.kind {
        NodeKind::Program | NodeKind::Block => out.statements(&node.sub_nodes, 0),
        _ => out.statement(node, 0),
    }
    out.lines
}

/// Renders a single expression on one line.
pub fn render_expression(node: &Node) -> String {
    match &node.kind {
        NodeKind::Identifier(name) => name.clone(),
        NodeKind::Super => keyword(TokenKind::Super).to_string(),
        NodeKind::IntLiteral(val) => val.to_string(),
        NodeKind::NumLiteral(val) => format!("{:?}", val),
        NodeKind::StrLiteral(val) => {
            if val.contains('"') {
                format!("'{}'", val)
            } else {
                format!("\"{}\"", val)
            }
        }
        NodeKind::BoolLiteral(val) => val.to_string(),
        NodeKind::Field(name) => format!("{}.{}", object(node), name),
        NodeKind::Index => format!("{}[{}]", object(node), arguments(node.child(1))),
        NodeKind::Call => format!("{}({})", object(node), arguments(node.child(1))),
        NodeKind::New(class_name) => format!(
            "{} {}({})",
            keyword(TokenKind::New),
            class_name,
            arguments(node.child(0))
        ),
        NodeKind::Negate => format!("{}{}", keyword(TokenKind::Minus), operand(node.child(0))),
        NodeKind::Not => format!("{} {}", keyword(TokenKind::Not), operand(node.child(0))),
        NodeKind::AddOp(op) | NodeKind::MulOp(op) | NodeKind::PowOp(op) | NodeKind::CmpOp(op) => format!(
            "{} {} {}",
            operand(node.child(0)),
            keyword(*op),
            operand(node.child(1))
        ),
        NodeKind::Args => arguments(Some(node)),
        other => other.name().to_string(),
    }
}

fn keyword(kind: TokenKind) -> &'static str {
    Tokenizer::text_of(kind).unwrap_or("")
}

fn is_compound(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::AddOp(_)
            | NodeKind::MulOp(_)
            | NodeKind::PowOp(_)
            | NodeKind::CmpOp(_)
            | NodeKind::Negate
            | NodeKind::Not
    )
}

fn operand(node: Option<&Node>) -> String {
    match node {
        Some(node) if is_compound(node) => format!("({})", render_expression(node)),
        Some(node) => render_expression(node),
        None => String::new(),
    }
}

// The object a suffix applies to; numeric literals get parentheses so the
// following '.' is not read as a decimal point.
fn object(node: &Node) -> String {
    match node.child(0) {
        Some(obj) if matches!(obj.kind, NodeKind::IntLiteral(_) | NodeKind::NumLiteral(_)) => {
            format!("({})", render_expression(obj))
        }
        other => operand(other),
    }
}

fn arguments(args: Option<&Node>) -> String {
    args.map(|args| {
        args.sub_nodes
            .iter()
            .map(render_expression)
            .collect::<Vec<_>>()
            .join(", ")
    })
    .unwrap_or_default()
}

struct Renderer {
    lines: Vec<String>,
}

impl Renderer {
    fn emit(&mut self, depth: usize, text: String) {
        self.lines.push(format!("{}{}", INDENT.repeat(depth), text));
    }

    fn statements(&mut self, statements: &[Node], depth: usize) {
        for statement in statements {
            self.statement(statement, depth);
        }
    }

    fn block(&mut self, block: Option<&Node>, depth: usize) {
        if let Some(block) = block {
            self.statements(&block.sub_nodes, depth);
        }
    }

    fn global_prefix(is_global: bool) -> String {
        if is_global {
            format!("{} ", keyword(TokenKind::Global))
        } else {
            String::new()
        }
    }

    fn statement(&mut self, node: &Node, depth: usize) {
        self.statement_with_prefix(node, depth, "");
    }

    fn statement_with_prefix(&mut self, node: &Node, depth: usize, prefix: &str) {
        match &node.kind {
            NodeKind::Assign { is_global } => {
                let target = node.child(0).map(render_expression).unwrap_or_default();
                let value = node.child(1).map(render_expression).unwrap_or_default();
                self.emit(depth, format!("{}{} = {}", Self::global_prefix(*is_global), target, value));
            }
            NodeKind::ArrayDecl { is_global, name, dims } => {
                let dims = dims.iter().map(render_expression).collect::<Vec<_>>().join(", ");
                self.emit(
                    depth,
                    format!("{}{} {}[{}]", Self::global_prefix(*is_global), keyword(TokenKind::Array), name, dims),
                );
            }
            NodeKind::If => {
                for (i, branch) in node.sub_nodes.iter().enumerate() {
                    match branch.kind {
                        NodeKind::Branch => {
                            let opener = if i == 0 { TokenKind::If } else { TokenKind::ElseIf };
                            let condition = branch.child(0).map(render_expression).unwrap_or_default();
                            self.emit(depth, format!("{} {} {}", keyword(opener), condition, keyword(TokenKind::Then)));
                            self.block(branch.child(1), depth + 1);
                        }
                        _ => {
                            self.emit(depth, keyword(TokenKind::Else).to_string());
                            self.block(branch.child(0), depth + 1);
                        }
                    }
                }
                self.emit(depth, keyword(TokenKind::EndIf).to_string());
            }
            NodeKind::For => {
                let counter = node.child(0).map(render_expression).unwrap_or_default();
                let from = node.child(1).map(render_expression).unwrap_or_default();
                let to = node.child(2).map(render_expression).unwrap_or_default();
                self.emit(
                    depth,
                    format!("{} {} = {} {} {}", keyword(TokenKind::For), counter, from, keyword(TokenKind::To), to),
                );
                self.block(node.child(3), depth + 1);
                self.emit(depth, format!("{} {}", keyword(TokenKind::Next), counter));
            }
            NodeKind::While => {
                let condition = node.child(0).map(render_expression).unwrap_or_default();
                self.emit(depth, format!("{} {}", keyword(TokenKind::While), condition));
                self.block(node.child(1), depth + 1);
                self.emit(depth, keyword(TokenKind::EndWhile).to_string());
            }
            NodeKind::DoUntil => {
                self.emit(depth, keyword(TokenKind::Do).to_string());
                self.block(node.child(0), depth + 1);
                let condition = node.child(1).map(render_expression).unwrap_or_default();
                self.emit(depth, format!("{} {}", keyword(TokenKind::Until), condition));
            }
            NodeKind::Switch => {
                let subject = node.child(0).map(render_expression).unwrap_or_default();
                self.emit(depth, format!("{} {}:", keyword(TokenKind::Switch), subject));
                for clause in node.sub_nodes.iter().skip(1) {
                    match clause.kind {
                        NodeKind::Case => {
                            let label = clause.child(0).map(render_expression).unwrap_or_default();
                            self.emit(depth + 1, format!("{} {}:", keyword(TokenKind::Case), label));
                            self.block(clause.child(1), depth + 2);
                        }
                        _ => {
                            self.emit(depth + 1, format!("{}:", keyword(TokenKind::Default)));
                            self.block(clause.child(0), depth + 2);
                        }
                    }
                }
                self.emit(depth, keyword(TokenKind::EndSwitch).to_string());
            }
            NodeKind::FunDecl { name } | NodeKind::ProcDecl { name } => {
                let (opener, closing) = match node.kind {
                    NodeKind::FunDecl { .. } => (TokenKind::Function, TokenKind::EndFunction),
                    _ => (TokenKind::Procedure, TokenKind::EndProcedure),
                };
                let params = node
                    .child(0)
                    .map(|params| params.sub_nodes.iter().map(parameter).collect::<Vec<_>>().join(", "))
                    .unwrap_or_default();
                self.emit(depth, format!("{}{} {}({})", prefix, keyword(opener), name, params));
                self.block(node.child(1), depth + 1);
                self.emit(depth, keyword(closing).to_string());
            }
            NodeKind::ClassDecl { name, parent } => {
                let header = match parent {
                    Some(parent) => format!(
                        "{} {} {} {}",
                        keyword(TokenKind::Class),
                        name,
                        keyword(TokenKind::Inherits),
                        parent
                    ),
                    None => format!("{} {}", keyword(TokenKind::Class), name),
                };
                self.emit(depth, header);
                for member in &node.sub_nodes {
                    self.statement(member, depth + 1);
                }
                self.emit(depth, keyword(TokenKind::EndClass).to_string());
            }
            NodeKind::ClassMember { is_public } => {
                let visibility = if *is_public { TokenKind::Public } else { TokenKind::Private };
                let prefix = format!("{} ", keyword(visibility));
                match node.child(0) {
                    Some(member) if matches!(member.kind, NodeKind::Identifier(_)) => {
                        self.emit(depth, format!("{}{}", prefix, render_expression(member)));
                    }
                    Some(member) => self.statement_with_prefix(member, depth, &prefix),
                    None => {}
                }
            }
            NodeKind::Return => match node.child(0) {
                Some(value) => self.emit(depth, format!("{} {}", keyword(TokenKind::Return), render_expression(value))),
                None => self.emit(depth, keyword(TokenKind::Return).to_string()),
            },
            NodeKind::GoToInstr(kind) => self.emit(depth, keyword(*kind).to_string()),
            NodeKind::Print => {
                self.emit(depth, format!("{}({})", keyword(TokenKind::Print), arguments(Some(node))));
            }
            NodeKind::Program | NodeKind::Block => self.statements(&node.sub_nodes, depth),
            _ => self.emit(depth, render_expression(node)),
        }
    }
}

fn parameter(param: &Node) -> String {
    match &param.kind {
        NodeKind::Param { is_byref: true, name } => format!("{}:{}", name, keyword(TokenKind::ByRef)),
        NodeKind::Param { name, .. } => name.clone(),
        other => other.name().to_string(),
    }
}

use std::fmt;

use crate::ast::{Node, NodeKind};
use crate::frontend::tokenizer::Tokenizer;

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            NodeKind::Assign { is_global } => write!(f, " is_global={}", is_global),
            NodeKind::ArrayDecl { is_global, name, .. } => write!(f, " name={} is_global={}", name, is_global),
            NodeKind::FunDecl { name } | NodeKind::ProcDecl { name } => write!(f, " name={}", name),
            NodeKind::Param { is_byref, name } => write!(f, " name={} is_byref={}", name, is_byref),
            NodeKind::ClassDecl { name, parent } => match parent {
                Some(parent) => write!(f, " name={} parent={}", name, parent),
                None => write!(f, " name={}", name),
            },
            NodeKind::ClassMember { is_public } => write!(f, " is_public={}", is_public),
            NodeKind::Identifier(name) | NodeKind::Field(name) | NodeKind::New(name) => write!(f, " {}", name),
            NodeKind::IntLiteral(val) => write!(f, " {}", val),
            NodeKind::NumLiteral(val) => write!(f, " {:?}", val),
            NodeKind::StrLiteral(val) => write!(f, " {:?}", val),
            NodeKind::BoolLiteral(val) => write!(f, " {}", val),
            NodeKind::GoToInstr(kind)
            | NodeKind::AddOp(kind)
            | NodeKind::MulOp(kind)
            | NodeKind::PowOp(kind)
            | NodeKind::CmpOp(kind) => write!(f, " {}", Tokenizer::text_of(*kind).unwrap_or("?")),
            _ => Ok(()),
        }
    }
}

impl Node {
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if let NodeKind::ArrayDecl { dims, .. } = &self.kind {
            writeln!(f, "{:indent$}dims:", "", indent = (depth + 1) * 2)?;
            for dim in dims {
                dim.fmt_tree(f, depth + 2)?;
            }
        }
        for sub_node in &self.sub_nodes {
            sub_node.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

// Indented tree dump, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

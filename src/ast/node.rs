use crate::frontend::token::TokenKind;

/// A node of the syntax tree: a variant tag with its scalar fields plus the
/// ordered children it owns.
///
/// The meaning of `sub_nodes` depends on the variant:
///
/// * `Program`, `Block`, `Params`, `Args`, `Print`: the listed items in order.
/// * `Assign`: `[target, value]`.
/// * `If`: one or more `Branch` nodes, optionally followed by an `Else`.
/// * `Branch`: `[condition, Block]`. `Else` and `Default`: `[Block]`.
/// * `For`: `[Identifier(counter), from, to, Block]`.
/// * `While`: `[condition, Block]`. `DoUntil`: `[Block, condition]`.
/// * `Switch`: `[subject, Case*, Default?]`. `Case`: `[label, Block]`.
/// * `FunDecl`, `ProcDecl`: `[Params, Block]`.
/// * `ClassDecl`: `ClassMember*`; each member wraps exactly one field
///   `Identifier` or subroutine declaration.
/// * `Return`: the returned expression, if any.
/// * `Field`: `[object]`. `Index`, `Call`: `[object, Args]`. `New`: `[Args]`.
/// * Binary operators: `[left, right]`. `Negate`, `Not`: `[operand]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub sub_nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Program,
    Block,
    Assign { is_global: bool },
    ArrayDecl { is_global: bool, name: String, dims: Vec<Node> },
    If,
    Branch,
    Else,
    For,
    While,
    DoUntil,
    Switch,
    Case,
    Default,
    FunDecl { name: String },
    ProcDecl { name: String },
    Params,
    Param { is_byref: bool, name: String },
    ClassDecl { name: String, parent: Option<String> },
    ClassMember { is_public: bool },
    Return,
    GoToInstr(TokenKind),
    Print,
    Identifier(String),
    Super,
    Field(String),
    Index,
    Call,
    New(String),
    Args,
    IntLiteral(i64),
    NumLiteral(f64),
    StrLiteral(String),
    BoolLiteral(bool),
    AddOp(TokenKind),
    MulOp(TokenKind),
    PowOp(TokenKind),
    CmpOp(TokenKind),
    Negate,
    Not,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Block => "Block",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::ArrayDecl { .. } => "ArrayDecl",
            NodeKind::If => "If",
            NodeKind::Branch => "Branch",
            NodeKind::Else => "Else",
            NodeKind::For => "For",
            NodeKind::While => "While",
            NodeKind::DoUntil => "DoUntil",
            NodeKind::Switch => "Switch",
            NodeKind::Case => "Case",
            NodeKind::Default => "Default",
            NodeKind::FunDecl { .. } => "FunDecl",
            NodeKind::ProcDecl { .. } => "ProcDecl",
            NodeKind::Params => "Params",
            NodeKind::Param { .. } => "Param",
            NodeKind::ClassDecl { .. } => "ClassDecl",
            NodeKind::ClassMember { .. } => "ClassMember",
            NodeKind::Return => "Return",
            NodeKind::GoToInstr(_) => "GoToInstr",
            NodeKind::Print => "Print",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Super => "Super",
            NodeKind::Field(_) => "Field",
            NodeKind::Index => "Index",
            NodeKind::Call => "Call",
            NodeKind::New(_) => "New",
            NodeKind::Args => "Args",
            NodeKind::IntLiteral(_) => "IntLiteral",
            NodeKind::NumLiteral(_) => "NumLiteral",
            NodeKind::StrLiteral(_) => "StrLiteral",
            NodeKind::BoolLiteral(_) => "BoolLiteral",
            NodeKind::AddOp(_) => "AddOp",
            NodeKind::MulOp(_) => "MulOp",
            NodeKind::PowOp(_) => "PowOp",
            NodeKind::CmpOp(_) => "CmpOp",
            NodeKind::Negate => "Negate",
            NodeKind::Not => "Not",
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, sub_nodes: Vec<Node>) -> Self {
        Self { kind, sub_nodes }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Identifier(name.into()))
    }

    pub fn block(statements: Vec<Node>) -> Self {
        Self::new(NodeKind::Block, statements)
    }

    pub fn unary(kind: NodeKind, operand: Node) -> Self {
        Self::new(kind, vec![operand])
    }

    pub fn binary(kind: NodeKind, left: Node, right: Node) -> Self {
        Self::new(kind, vec![left, right])
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.sub_nodes.get(index)
    }

    /// Scalar name carried by the variant, if it has one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::ArrayDecl { name, .. }
            | NodeKind::FunDecl { name }
            | NodeKind::ProcDecl { name }
            | NodeKind::Param { name, .. }
            | NodeKind::ClassDecl { name, .. }
            | NodeKind::Identifier(name)
            | NodeKind::Field(name)
            | NodeKind::New(name) => Some(name),
            _ => None,
        }
    }

    /// Calls `visit` on this node and every node below it, parents first.
    /// Array dimensions are visited as children of their declaration.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        if let NodeKind::ArrayDecl { dims, .. } = &self.kind {
            for dim in dims {
                dim.walk(visit);
            }
        }
        for sub_node in &self.sub_nodes {
            sub_node.walk(visit);
        }
    }

    pub fn count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}

use tracing::trace;

use crate::{symbols::symtable::SymbolId, Position, MK_HANDLE};

use super::types::{DecafType, Operator};

MK_HANDLE!(
    /// Index of a node inside its [`Ast`].
    NodeId
);

/// Node Kinds
///
/// Every syntactic construct of a Decaf program is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `package Name { fields methods }`
    Package,
    MethodDecl,
    While,
    /// `first`: variable declarations, `second`: statements
    Block,
    /// Unary or binary operation, see [`Operator`]
    Expr,
    /// `first`: array size constant when the variable is an array,
    /// `second`: initial value
    VarDecl,
    /// `extern func name(types) type;`
    Extern,
    /// One parameter type of an extern
    ExternType,
    /// One formal parameter of a method
    MethodIdentifier,
    ConstantInt,
    ConstantBool,
    /// The literal text, quotes included, is held in `name`
    ConstantString,
    Break,
    Return,
    /// Assignment target, `first` is the optional array index
    LValue,
    /// Variable read, `first` is the optional array index
    RValue,
    Assign,
    MethodCall,
    /// Wraps one call argument expression in `first`
    MethodArg,
    /// `first`: the `IfBlock`, `second`: the optional `ElseBlock`
    If,
    /// `first`: condition, `second`: body
    IfBlock,
    /// `first`: body
    ElseBlock,
    Continue,
    /// `first`: the extern chain, `second`: the package
    Program,
}

/// AST Node
///
/// `first`, `second` and `next` are owning edges into the arena: each node is
/// referenced by at most one of them. `symbol` is a lookup link into the symbol
/// table and owns nothing.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub operator: Option<Operator>,
    pub name: Option<String>,
    pub value: i32,
    pub declared_type: Option<DecafType>,
    pub symbol: Option<SymbolId>,
    /// Words of storage, the element count for arrays
    pub size: usize,
    pub first: Option<NodeId>,
    pub second: Option<NodeId>,
    pub next: Option<NodeId>,
    pub position: Position,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            operator: None,
            name: None,
            value: 0,
            declared_type: None,
            symbol: None,
            size: 0,
            first: None,
            second: None,
            next: None,
            position: Position::null(),
        }
    }

    /// The identifier text, or an empty string for unnamed nodes.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Node arena for one compilation unit.
///
/// Nodes are never removed; dropping the arena releases the whole tree.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Ast { nodes: vec![] }
    }

    /// Allocates a node of the given kind with every other field empty.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        trace!(?id, ?kind, "creating AST node");
        self.nodes.push(Node::new(kind));
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links `ids` through their `next` fields in order and returns the head.
    pub fn chain<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> Option<NodeId> {
        let mut ids = ids.into_iter();
        let head = ids.next()?;
        let mut tail = head;
        for id in ids {
            self.node_mut(tail).next = Some(id);
            tail = id;
        }
        Some(head)
    }

    /// Iterates a sibling chain starting at `head`.
    pub fn siblings(&self, head: Option<NodeId>) -> Siblings<'_> {
        Siblings {
            ast: self,
            current: head,
        }
    }
}

pub struct Siblings<'a> {
    ast: &'a Ast,
    current: Option<NodeId>,
}

impl Iterator for Siblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.ast.node(id).next;
        Some(id)
    }
}

use std::io::{self, Write};

use crate::{
    ast::ast::{Ast, NodeId},
    errors::errors::{Error, ErrorImpl},
    printer::{print_tree, tree_to_string},
    symbols::symtable::SymbolTable,
};

use super::analyzer::analyze;

/// Everything one compilation unit shares between its phases: the node
/// arena, the symbol table (with its temporary counter) and the program root.
#[derive(Debug, Default)]
pub struct Compilation {
    pub ast: Ast,
    pub symbols: SymbolTable,
    root: Option<NodeId>,
}

impl Compilation {
    pub fn new() -> Self {
        Compilation {
            ast: Ast::new(),
            symbols: SymbolTable::new(),
            root: None,
        }
    }

    /// Hands over the finished program. Only the first call is accepted.
    pub fn set_root(&mut self, root: NodeId) -> Result<(), Error> {
        if self.root.is_some() {
            return Err(Error::new(
                ErrorImpl::RootAlreadySet,
                self.ast.node(root).position.clone(),
            ));
        }
        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Runs the semantic checks over the program root.
    pub fn analyze(&mut self) -> Vec<Error> {
        analyze(self)
    }

    /// Writes the tree dump of the program root.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        print_tree(&self.ast, 0, self.root, out)
    }

    pub fn dump_to_string(&self) -> String {
        tree_to_string(&self.ast, self.root)
    }
}

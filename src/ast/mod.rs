/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node arena, node kinds and sibling chains
/// - build: Constructors for each syntactic construct
/// - types: Decaf types and expression operators
pub mod ast;
pub mod build;
pub mod types;

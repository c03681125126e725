//! Symbol table and call-site parameter matching.
//!
//! The table is a level-tagged registry of declared names:
//!
//! - Insertion rejects a name already declared at the same level
//! - Lookup can walk outwards level by level, so inner declarations shadow
//!   outer ones
//! - Closing a scope removes every entry at or above its level and reports
//!   the storage reclaimed
//!
//! Parameter matching compares a method's formal parameter chain with the
//! argument chain of a call, position by position.

pub mod params;
pub mod symtable;

pub use params::check_parameters;
pub use symtable::{SubType, Symbol, SymbolId, SymbolTable};

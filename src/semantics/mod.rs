//! Semantic analysis module.
//!
//! This module checks a parsed program against the symbol table:
//!
//! - Registering declarations level by level, with storage offsets
//! - Resolving variable and method references and linking them to their
//!   symbol entries
//! - Typing expressions and checking assignments, conditions and returns
//! - Matching call arguments against method parameters
//!
//! All state of one compilation unit lives in a [`Compilation`]. Errors are
//! collected and returned together; analysis never stops at the first one.

pub mod analyzer;
pub mod compilation;

pub use analyzer::{analyze, Analyzer, FRAME_HEADER_WORDS};
pub use compilation::Compilation;

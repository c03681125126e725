//! Error types and error handling for the compiler.
//!
//! This module defines the error types produced while checking a parsed
//! program. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for declaration, resolution and call checks
//! - Helpful error messages and suggestions
//!
//! Semantic errors are recoverable: they are collected and reported in a
//! batch rather than aborting the pass that found them.

pub mod errors;

#[cfg(test)]
mod tests;

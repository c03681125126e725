//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::DecafType;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::symbols::symtable::SubType;
use crate::Position;

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: "y".to_string(),
        },
        Position::new(42, "test.decaf"),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.decaf");
}

#[test]
fn test_duplicate_declaration_error() {
    let error = Error::new(
        ErrorImpl::DuplicateDeclaration {
            name: "x".to_string(),
            level: 1,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
    assert_eq!(
        error.get_tip().to_string(),
        "`x` is already declared at level 1, rename one of them"
    );
}

#[test]
fn test_undeclared_identifier_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: "foo".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UndeclaredIdentifier");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UndeclaredIdentifier {
            name: "foo".to_string()
        }
    );
}

#[test]
fn test_parameter_mismatch_tips() {
    let arity = Error::new(
        ErrorImpl::ParameterMismatch {
            method: "f".to_string(),
            expected: 2,
            received: 3,
        },
        Position::null(),
    );
    assert_eq!(arity.get_error_name(), "ParameterMismatch");
    assert_eq!(arity.get_tip().to_string(), "`f` expects 2 arguments, received 3");

    let types = Error::new(
        ErrorImpl::ParameterMismatch {
            method: "f".to_string(),
            expected: 1,
            received: 1,
        },
        Position::null(),
    );
    assert_eq!(
        types.get_tip().to_string(),
        "Argument types of the call to `f` do not match its parameters"
    );
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: DecafType::Int,
            received: DecafType::Bool,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.get_tip().to_string(), "Expected type `INT`, received `BOOL`");
}

#[test]
fn test_subtype_mismatch_error() {
    let error = Error::new(
        ErrorImpl::SubtypeMismatch {
            name: "a".to_string(),
            expected: SubType::Array,
            found: SubType::Scalar,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "SubtypeMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "`a` is used as an array but declared as a scalar"
    );
}

#[test]
fn test_outside_loop_error() {
    let error = Error::new(
        ErrorImpl::OutsideLoop {
            statement: "break".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "OutsideLoop");
    assert_eq!(error.get_internal_error().to_string(), "break statement outside of a loop");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::RootAlreadySet, Position::null());

    assert_eq!(error.get_error_name(), "RootAlreadySet");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::InvalidArraySize {
            name: "a".to_string(),
            size: 0,
        },
        Position::new(3, "test.decaf"),
    );

    assert_eq!(
        error.to_string(),
        "array \"a\" declared with size 0 (test.decaf:3)"
    );
}

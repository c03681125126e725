use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::DecafType, symbols::symtable::SubType, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::ParameterMismatch { .. } => "ParameterMismatch",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::SubtypeMismatch { .. } => "SubtypeMismatch",
            ErrorImpl::InvalidArraySize { .. } => "InvalidArraySize",
            ErrorImpl::OutsideLoop { .. } => "OutsideLoop",
            ErrorImpl::InvalidReturn { .. } => "InvalidReturn",
            ErrorImpl::RootAlreadySet => "RootAlreadySet",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::DuplicateDeclaration { name, level } => ErrorTip::Suggestion(format!(
                "`{}` is already declared at level {}, rename one of them",
                name, level
            )),
            ErrorImpl::UndeclaredIdentifier { name } => {
                ErrorTip::Suggestion(format!("`{}` is not declared in any enclosing scope", name))
            }
            ErrorImpl::ParameterMismatch {
                method,
                expected,
                received,
            } => {
                if expected == received {
                    ErrorTip::Suggestion(format!(
                        "Argument types of the call to `{}` do not match its parameters",
                        method
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "`{}` expects {} arguments, received {}",
                        method, expected, received
                    ))
                }
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::SubtypeMismatch {
                name,
                expected,
                found,
            } => ErrorTip::Suggestion(format!(
                "`{}` is used as {} but declared as {}",
                name,
                expected.describe(),
                found.describe()
            )),
            ErrorImpl::InvalidArraySize { .. } => {
                ErrorTip::Suggestion(String::from("Array sizes must be at least 1"))
            }
            ErrorImpl::OutsideLoop { statement } => {
                ErrorTip::Suggestion(format!("`{}` can only appear inside a while loop", statement))
            }
            ErrorImpl::InvalidReturn { method } => ErrorTip::Suggestion(format!(
                "The return statement does not agree with the return type of `{}`",
                method
            )),
            ErrorImpl::RootAlreadySet => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.position)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("name {name:?} already declared at level {level}")]
    DuplicateDeclaration { name: String, level: usize },
    #[error("identifier {name:?} not declared")]
    UndeclaredIdentifier { name: String },
    #[error("call to {method:?} does not match its parameters: expected {expected} arguments, received {received}")]
    ParameterMismatch {
        method: String,
        expected: usize,
        received: usize,
    },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError {
        expected: DecafType,
        received: DecafType,
    },
    #[error("{name:?} used as {expected:?} but declared as {found:?}")]
    SubtypeMismatch {
        name: String,
        expected: SubType,
        found: SubType,
    },
    #[error("array {name:?} declared with size {size}")]
    InvalidArraySize { name: String, size: i32 },
    #[error("{statement} statement outside of a loop")]
    OutsideLoop { statement: String },
    #[error("invalid return statement in method {method:?}")]
    InvalidReturn { method: String },
    #[error("program root already set for this compilation")]
    RootAlreadySet,
}

//! Type and operator definitions for the AST.
//!
//! Decaf has four declarable types and a fixed operator set. Both are closed
//! enums so every consumer matches them exhaustively.

use std::fmt::Display;

/// The declarable types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecafType {
    Int,
    Bool,
    Void,
    String,
}

impl DecafType {
    /// Upper-case label used by the tree dump and the symbol table display.
    pub fn label(&self) -> &'static str {
        match self {
            DecafType::Int => "INT",
            DecafType::Bool => "BOOL",
            DecafType::Void => "VOID",
            DecafType::String => "STRING",
        }
    }
}

impl Display for DecafType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Not,
    Divide,
    Mod,
    And,
    Or,
    RightShift,
    LeftShift,
    UnaryMinus,
    Leq,
    Geq,
    Gt,
    Lt,
    Eq,
    Neq,
}

/// How an operator constrains its operands and what it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// int x int -> int
    Arithmetic,
    /// int x int -> bool
    Relational,
    /// T x T -> bool
    Equality,
    /// bool x bool -> bool
    Logical,
    /// int -> int
    Negation,
    /// bool -> bool
    Complement,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Not => "!",
            Operator::Divide => "/",
            Operator::Mod => "%",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::RightShift => ">>",
            Operator::LeftShift => "<<",
            Operator::UnaryMinus => "-",
            Operator::Leq => "<=",
            Operator::Geq => ">=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "==",
            Operator::Neq => "!=",
        }
    }

    pub fn class(&self) -> OperatorClass {
        match self {
            Operator::Plus
            | Operator::Minus
            | Operator::Times
            | Operator::Divide
            | Operator::Mod
            | Operator::RightShift
            | Operator::LeftShift => OperatorClass::Arithmetic,
            Operator::Leq | Operator::Geq | Operator::Gt | Operator::Lt => {
                OperatorClass::Relational
            }
            Operator::Eq | Operator::Neq => OperatorClass::Equality,
            Operator::And | Operator::Or => OperatorClass::Logical,
            Operator::UnaryMinus => OperatorClass::Negation,
            Operator::Not => OperatorClass::Complement,
        }
    }

    /// Unary operators leave the expression's `second` child empty.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Not | Operator::UnaryMinus)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod printer;
pub mod semantics;
pub mod symbols;

/// A source location: line number and file name.
///
/// Set by the parser on the nodes it builds; diagnostics carry a clone of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn new(line: u32, file: &str) -> Self {
        Position(line, Rc::new(String::from(file)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::null()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn test_null_position() {
        let position = Position::null();
        assert_eq!(position.0, 0);
        assert_eq!(position.1.as_str(), "<null>");
        assert_eq!(Position::default(), position);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(12, "prog.decaf").to_string(), "prog.decaf:12");
    }
}

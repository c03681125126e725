use crate::ast::ast::{Ast, NodeId};

/// Checks a call's arguments against a method's formal parameters.
///
/// Each formal is compared with the expression wrapped by the argument at the
/// same position. Types must be equal; both chains must end together.
pub fn check_parameters(ast: &Ast, formal: Option<NodeId>, actual: Option<NodeId>) -> bool {
    match (formal, actual) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(formal), Some(actual)) => {
            let formal = ast.node(formal);
            let actual = ast.node(actual);
            let actual_type = actual
                .first
                .and_then(|expression| ast.node(expression).declared_type);

            if formal.declared_type.is_none() || formal.declared_type != actual_type {
                return false;
            }

            check_parameters(ast, formal.next, actual.next)
        }
    }
}

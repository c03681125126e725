use std::io::{self, Write};

use crate::ast::{
    ast::{Ast, Node, NodeId, NodeKind},
    types::DecafType,
};

fn indent<W: Write>(out: &mut W, level: usize) -> io::Result<()> {
    write!(out, "{:width$}", "", width = level)
}

fn type_label(ty: Option<DecafType>) -> &'static str {
    ty.map(|ty| ty.label()).unwrap_or("UNTYPED")
}

fn bool_label(value: i32) -> &'static str {
    if value == 1 {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Prints `node`, its children and then its siblings, indented by `level`.
///
/// A missing node prints nothing.
pub fn print_tree<W: Write>(
    ast: &Ast,
    level: usize,
    node: Option<NodeId>,
    out: &mut W,
) -> io::Result<()> {
    for id in ast.siblings(node) {
        print_node(ast, level, ast.node(id), out)?;
    }
    Ok(())
}

/// Prints one node's stanza and its children, without its siblings.
fn print_node<W: Write>(ast: &Ast, level: usize, node: &Node, out: &mut W) -> io::Result<()> {
    indent(out, level)?;

    match node.kind {
        NodeKind::VarDecl => print_var_decl(ast, node, out)?,
        NodeKind::MethodDecl => {
            write!(
                out,
                "METHOD FUNCTION {} {}",
                node.name(),
                type_label(node.declared_type)
            )?;
            if node.first.is_none() {
                writeln!(out, " (VOID)")?;
            } else {
                writeln!(out)?;
                indent(out, level + 2)?;
                writeln!(out, "(")?;
                print_tree(ast, level + 2, node.first, out)?;
                indent(out, level + 2)?;
                writeln!(out, ")")?;
            }
            print_tree(ast, level + 2, node.second, out)?;
        }
        NodeKind::Expr => {
            match node.operator {
                Some(operator) => writeln!(out, "EXPR {}", operator)?,
                None => writeln!(out, "EXPR")?,
            }
            print_tree(ast, level + 1, node.first, out)?;
            if !node.operator.is_some_and(|operator| operator.is_unary()) {
                print_tree(ast, level + 1, node.second, out)?;
            }
        }
        NodeKind::Block => {
            writeln!(out, "BLOCK STATEMENT")?;
            print_tree(ast, level, node.first, out)?;
            print_tree(ast, level, node.second, out)?;
        }
        NodeKind::While => {
            writeln!(out, "WHILE STATEMENT")?;
            print_tree(ast, level + 1, node.first, out)?;
            print_tree(ast, level + 2, node.second, out)?;
        }
        NodeKind::Package => {
            writeln!(out, "PACKAGE name {}", node.name())?;
            print_tree(ast, level, node.first, out)?;
            writeln!(out)?;
            print_tree(ast, level, node.second, out)?;
        }
        NodeKind::Extern => {
            writeln!(out, "EXTERN FUNC {}", node.name())?;
            print_tree(ast, level + 1, node.first, out)?;
            writeln!(out, "END EXTERN with Type: {}", type_label(node.declared_type))?;
            writeln!(out)?;
        }
        NodeKind::ExternType => writeln!(out, "Extern Type {}", type_label(node.declared_type))?,
        NodeKind::Program => {
            print_tree(ast, level, node.first, out)?;
            print_tree(ast, level, node.second, out)?;
        }
        NodeKind::MethodIdentifier => writeln!(
            out,
            "PARAMETER {} {}",
            type_label(node.declared_type),
            node.name()
        )?,
        NodeKind::Break => writeln!(out, "BREAK STATEMENT")?,
        NodeKind::Continue => writeln!(out, "CONTINUE STATEMENT")?,
        NodeKind::Return => {
            writeln!(out, "RETURN STATEMENT")?;
            print_tree(ast, level + 1, node.first, out)?;
        }
        NodeKind::ConstantInt => writeln!(out, "INT CONSTANT with value {}", node.value)?,
        NodeKind::ConstantBool => {
            writeln!(out, "BOOL CONSTANT with value {}", bool_label(node.value))?
        }
        NodeKind::ConstantString => writeln!(out, "STRING CONSTANT {}", node.name())?,
        NodeKind::MethodCall => {
            writeln!(out, "METHOD CALL name: {}", node.name())?;
            indent(out, level + 1)?;
            writeln!(out, "(")?;
            print_tree(ast, level + 2, node.first, out)?;
            indent(out, level + 1)?;
            writeln!(out, ")")?;
        }
        NodeKind::MethodArg => {
            writeln!(out, "METHOD ARG")?;
            print_tree(ast, level, node.first, out)?;
        }
        NodeKind::Assign => {
            writeln!(out, "ASSIGNMENT STATEMENT")?;
            print_tree(ast, level, node.first, out)?;
            print_tree(ast, level + 2, node.second, out)?;
        }
        NodeKind::If => {
            writeln!(out, "IF STATEMENT")?;
            // The branches are printed directly, without their wrapper nodes
            if let Some(if_block) = node.first {
                let if_block = ast.node(if_block);
                print_tree(ast, level + 1, if_block.first, out)?;
                print_tree(ast, level + 3, if_block.second, out)?;
            }
            if let Some(else_block) = node.second {
                indent(out, level + 2)?;
                writeln!(out, "ELSE STATEMENT")?;
                print_tree(ast, level + 3, ast.node(else_block).first, out)?;
            }
        }
        NodeKind::IfBlock => {
            writeln!(out, "IF BLOCK")?;
            print_tree(ast, level + 1, node.first, out)?;
            print_tree(ast, level + 1, node.second, out)?;
        }
        NodeKind::ElseBlock => {
            writeln!(out, "ELSE BLOCK")?;
            print_tree(ast, level + 1, node.first, out)?;
        }
        NodeKind::LValue | NodeKind::RValue => {
            writeln!(out, "Variable {}", node.name())?;
            if node.first.is_some() {
                indent(out, level)?;
                writeln!(out, "[")?;
                print_tree(ast, level + 1, node.first, out)?;
                indent(out, level)?;
                writeln!(out, "]")?;
            }
        }
    }

    Ok(())
}

fn print_var_decl<W: Write>(ast: &Ast, node: &Node, out: &mut W) -> io::Result<()> {
    write!(out, "Variable {}", node.name())?;
    if let Some(size) = node.first {
        write!(out, "[{}]", ast.node(size).value)?;
    }
    write!(out, " with type {}", type_label(node.declared_type))?;
    if let Some(init) = node.second {
        let init = ast.node(init);
        if node.declared_type == Some(DecafType::Bool) {
            write!(out, " = {}", bool_label(init.value))?;
        } else {
            write!(out, " = {}", init.value)?;
        }
    }
    writeln!(out)
}

/// Renders the tree rooted at `root` into a string.
pub fn tree_to_string(ast: &Ast, root: Option<NodeId>) -> String {
    let mut buffer = Vec::new();
    print_tree(ast, 0, root, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

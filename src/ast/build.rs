//! Node constructors shaped like the grammar's productions.
//!
//! Each function creates the node for one construct and wires its children
//! the way the tree printer and the analyzer expect. Lists are passed as
//! vectors and chained in order.

use super::{
    ast::{Ast, NodeId, NodeKind},
    types::{DecafType, Operator},
};

fn named(ast: &mut Ast, kind: NodeKind, name: &str) -> NodeId {
    let id = ast.create_node(kind);
    ast.node_mut(id).name = Some(String::from(name));
    id
}

fn typed(ast: &mut Ast, kind: NodeKind, name: &str, ty: DecafType) -> NodeId {
    let id = named(ast, kind, name);
    ast.node_mut(id).declared_type = Some(ty);
    id
}

pub fn int_constant(ast: &mut Ast, value: i32) -> NodeId {
    let id = ast.create_node(NodeKind::ConstantInt);
    ast.node_mut(id).value = value;
    id
}

pub fn bool_constant(ast: &mut Ast, value: bool) -> NodeId {
    let id = ast.create_node(NodeKind::ConstantBool);
    ast.node_mut(id).value = value as i32;
    id
}

/// `text` is the literal as written, quotes included.
pub fn string_constant(ast: &mut Ast, text: &str) -> NodeId {
    named(ast, NodeKind::ConstantString, text)
}

pub fn var_decl(ast: &mut Ast, name: &str, ty: DecafType) -> NodeId {
    typed(ast, NodeKind::VarDecl, name, ty)
}

pub fn array_decl(ast: &mut Ast, name: &str, ty: DecafType, length: i32) -> NodeId {
    let id = var_decl(ast, name, ty);
    let length = int_constant(ast, length);
    ast.node_mut(id).first = Some(length);
    id
}

/// A variable declaration with a constant initial value.
pub fn initialized_decl(ast: &mut Ast, name: &str, ty: DecafType, init: NodeId) -> NodeId {
    let id = var_decl(ast, name, ty);
    ast.node_mut(id).second = Some(init);
    id
}

pub fn parameter(ast: &mut Ast, name: &str, ty: DecafType) -> NodeId {
    typed(ast, NodeKind::MethodIdentifier, name, ty)
}

pub fn method(
    ast: &mut Ast,
    name: &str,
    ty: DecafType,
    params: Vec<NodeId>,
    body: NodeId,
) -> NodeId {
    let id = typed(ast, NodeKind::MethodDecl, name, ty);
    let params = ast.chain(params);
    let node = ast.node_mut(id);
    node.first = params;
    node.second = Some(body);
    id
}

pub fn block(ast: &mut Ast, declarations: Vec<NodeId>, statements: Vec<NodeId>) -> NodeId {
    let id = ast.create_node(NodeKind::Block);
    let declarations = ast.chain(declarations);
    let statements = ast.chain(statements);
    let node = ast.node_mut(id);
    node.first = declarations;
    node.second = statements;
    id
}

pub fn rvalue(ast: &mut Ast, name: &str) -> NodeId {
    named(ast, NodeKind::RValue, name)
}

pub fn lvalue(ast: &mut Ast, name: &str) -> NodeId {
    named(ast, NodeKind::LValue, name)
}

/// `name[index]` as an `LValue` or `RValue`.
pub fn indexed(ast: &mut Ast, kind: NodeKind, name: &str, index: NodeId) -> NodeId {
    let id = named(ast, kind, name);
    ast.node_mut(id).first = Some(index);
    id
}

pub fn binary(ast: &mut Ast, operator: Operator, left: NodeId, right: NodeId) -> NodeId {
    let id = ast.create_node(NodeKind::Expr);
    let node = ast.node_mut(id);
    node.operator = Some(operator);
    node.first = Some(left);
    node.second = Some(right);
    id
}

pub fn unary(ast: &mut Ast, operator: Operator, operand: NodeId) -> NodeId {
    let id = ast.create_node(NodeKind::Expr);
    let node = ast.node_mut(id);
    node.operator = Some(operator);
    node.first = Some(operand);
    id
}

/// A call; each argument expression is wrapped in a `MethodArg`.
pub fn call(ast: &mut Ast, name: &str, arguments: Vec<NodeId>) -> NodeId {
    let id = named(ast, NodeKind::MethodCall, name);
    let wrapped: Vec<NodeId> = arguments
        .into_iter()
        .map(|expression| {
            let argument = ast.create_node(NodeKind::MethodArg);
            ast.node_mut(argument).first = Some(expression);
            argument
        })
        .collect();
    let arguments = ast.chain(wrapped);
    ast.node_mut(id).first = arguments;
    id
}

pub fn assign(ast: &mut Ast, target: NodeId, value: NodeId) -> NodeId {
    let id = ast.create_node(NodeKind::Assign);
    let node = ast.node_mut(id);
    node.first = Some(target);
    node.second = Some(value);
    id
}

pub fn return_stmt(ast: &mut Ast, value: Option<NodeId>) -> NodeId {
    let id = ast.create_node(NodeKind::Return);
    ast.node_mut(id).first = value;
    id
}

pub fn while_stmt(ast: &mut Ast, condition: NodeId, body: NodeId) -> NodeId {
    let id = ast.create_node(NodeKind::While);
    let node = ast.node_mut(id);
    node.first = Some(condition);
    node.second = Some(body);
    id
}

pub fn if_stmt(
    ast: &mut Ast,
    condition: NodeId,
    then_body: NodeId,
    else_body: Option<NodeId>,
) -> NodeId {
    let if_block = ast.create_node(NodeKind::IfBlock);
    {
        let node = ast.node_mut(if_block);
        node.first = Some(condition);
        node.second = Some(then_body);
    }

    let else_block = else_body.map(|body| {
        let else_block = ast.create_node(NodeKind::ElseBlock);
        ast.node_mut(else_block).first = Some(body);
        else_block
    });

    let id = ast.create_node(NodeKind::If);
    let node = ast.node_mut(id);
    node.first = Some(if_block);
    node.second = else_block;
    id
}

pub fn extern_decl(ast: &mut Ast, name: &str, ty: DecafType, types: Vec<DecafType>) -> NodeId {
    let id = typed(ast, NodeKind::Extern, name, ty);
    let types: Vec<NodeId> = types
        .into_iter()
        .map(|ty| {
            let extern_type = ast.create_node(NodeKind::ExternType);
            ast.node_mut(extern_type).declared_type = Some(ty);
            extern_type
        })
        .collect();
    let types = ast.chain(types);
    ast.node_mut(id).first = types;
    id
}

pub fn package(ast: &mut Ast, name: &str, fields: Vec<NodeId>, methods: Vec<NodeId>) -> NodeId {
    let id = named(ast, NodeKind::Package, name);
    let fields = ast.chain(fields);
    let methods = ast.chain(methods);
    let node = ast.node_mut(id);
    node.first = fields;
    node.second = methods;
    id
}

/// The root: externs first, then the package.
pub fn program(ast: &mut Ast, externs: Vec<NodeId>, package: NodeId) -> NodeId {
    let id = ast.create_node(NodeKind::Program);
    let externs = ast.chain(externs);
    let node = ast.node_mut(id);
    node.first = externs;
    node.second = Some(package);
    id
}

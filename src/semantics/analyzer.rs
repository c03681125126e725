use tracing::debug;

use crate::{
    ast::{
        ast::{Ast, NodeId, NodeKind},
        types::{DecafType, OperatorClass},
    },
    errors::errors::{Error, ErrorImpl},
    symbols::{
        params::check_parameters,
        symtable::{SubType, Symbol, SymbolId, SymbolTable},
    },
};

use super::compilation::Compilation;

/// Words reserved at the start of every activation record: the return
/// address and the saved stack pointer. Parameters start after them.
pub const FRAME_HEADER_WORDS: usize = 2;

/// Walks a program in source order, filling the symbol table and checking
/// names, types and calls.
///
/// Errors are collected; the walk always visits the whole tree.
#[derive(Debug)]
pub struct Analyzer<'a> {
    ast: &'a mut Ast,
    symbols: &'a mut SymbolTable,
    diagnostics: Vec<Error>,
    level: usize,
    offset: usize,
    max_offset: usize,
    loop_depth: usize,
    method: Option<(String, DecafType)>,
}

/// Analyzes the program root of `compilation` and returns every error found.
pub fn analyze(compilation: &mut Compilation) -> Vec<Error> {
    let root = compilation.root();
    let mut analyzer = Analyzer::new(&mut compilation.ast, &mut compilation.symbols);
    analyzer.visit_chain(root);
    analyzer.finish()
}

impl<'a> Analyzer<'a> {
    pub fn new(ast: &'a mut Ast, symbols: &'a mut SymbolTable) -> Self {
        Analyzer {
            ast,
            symbols,
            diagnostics: vec![],
            level: 0,
            offset: 0,
            max_offset: 0,
            loop_depth: 0,
            method: None,
        }
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn finish(self) -> Vec<Error> {
        self.diagnostics
    }

    /// Visits `head` and each of its siblings as statements.
    pub fn visit_chain(&mut self, head: Option<NodeId>) {
        let mut current = head;
        while let Some(id) = current {
            self.visit_statement(id);
            current = self.ast.node(id).next;
        }
    }

    fn visit_statement(&mut self, id: NodeId) {
        let node = self.ast.node(id);
        let (kind, first, second) = (node.kind, node.first, node.second);

        match kind {
            NodeKind::Program => {
                self.visit_chain(first);
                self.visit_chain(second);
            }
            NodeKind::Extern => self.declare_extern(id),
            NodeKind::Package => self.declare_package(id),
            NodeKind::VarDecl => self.declare_variable(id),
            NodeKind::MethodDecl => self.declare_method(id),
            NodeKind::Block => self.visit_block(id),
            NodeKind::While => {
                self.expect_condition(first);
                self.loop_depth += 1;
                self.visit_body(second);
                self.loop_depth -= 1;
            }
            NodeKind::If => {
                self.visit_body(first);
                self.visit_body(second);
            }
            NodeKind::IfBlock => {
                self.expect_condition(first);
                self.visit_body(second);
            }
            NodeKind::ElseBlock => self.visit_body(first),
            NodeKind::Assign => self.check_assignment(id),
            NodeKind::Return => self.check_return(id),
            NodeKind::Break | NodeKind::Continue => {
                if self.loop_depth == 0 {
                    let statement = if kind == NodeKind::Break {
                        "break"
                    } else {
                        "continue"
                    };
                    self.report(
                        ErrorImpl::OutsideLoop {
                            statement: String::from(statement),
                        },
                        id,
                    );
                }
            }
            NodeKind::MethodCall
            | NodeKind::Expr
            | NodeKind::ConstantInt
            | NodeKind::ConstantBool
            | NodeKind::ConstantString
            | NodeKind::LValue
            | NodeKind::RValue
            | NodeKind::MethodArg => {
                self.type_of(id);
            }
            // Declared together with their extern or method
            NodeKind::ExternType | NodeKind::MethodIdentifier => {}
        }
    }

    fn visit_body(&mut self, body: Option<NodeId>) {
        if let Some(body) = body {
            self.visit_statement(body);
        }
    }

    fn visit_block(&mut self, id: NodeId) {
        let node = self.ast.node(id);
        let (declarations, statements) = (node.first, node.second);

        self.level += 1;
        self.visit_chain(declarations);
        self.visit_chain(statements);
        let reclaimed = self.symbols.delete(self.level);
        self.offset = self.offset.saturating_sub(reclaimed);
        self.level -= 1;
    }

    fn report(&mut self, error_impl: ErrorImpl, id: NodeId) {
        let error = Error::new(error_impl, self.ast.node(id).position.clone());
        self.push_error(error);
    }

    fn push_error(&mut self, error: Error) {
        debug!(error = %error, "semantic error");
        self.diagnostics.push(error);
    }

    fn declared_type(&self, id: NodeId) -> DecafType {
        let node = self.ast.node(id);
        match node.declared_type {
            Some(ty) => ty,
            None => panic!("Attempted to declare `{}` without a type", node.name()),
        }
    }

    /// Inserts `symbol` and links it to the declaring node.
    fn declare(&mut self, id: NodeId, symbol: Symbol) -> Option<SymbolId> {
        match self
            .symbols
            .insert(symbol, self.ast.node(id).position.clone())
        {
            Ok(symbol_id) => {
                self.ast.node_mut(id).symbol = Some(symbol_id);
                Some(symbol_id)
            }
            Err(error) => {
                self.push_error(error);
                None
            }
        }
    }

    fn allocate(&mut self, size: usize) {
        self.offset += size;
        self.max_offset = self.max_offset.max(self.offset);
    }

    fn declare_extern(&mut self, id: NodeId) {
        let ty = self.declared_type(id);
        let node = self.ast.node(id);
        let symbol = Symbol::new(node.name(), ty, SubType::ExternMethod, self.level, 1, 0)
            .with_params(node.first);
        self.declare(id, symbol);
    }

    fn declare_package(&mut self, id: NodeId) {
        let node = self.ast.node(id);
        let (fields, methods) = (node.first, node.second);
        let symbol = Symbol::new(node.name(), DecafType::Void, SubType::Package, self.level, 1, 0);
        self.declare(id, symbol);

        self.visit_chain(fields);
        self.visit_chain(methods);
    }

    fn declare_variable(&mut self, id: NodeId) {
        let ty = self.declared_type(id);
        let node = self.ast.node(id);
        let name = node.name().to_string();
        let (length, init) = (node.first, node.second);

        let (subtype, size) = match length {
            None => (SubType::Scalar, 1),
            Some(length) => {
                let length = self.ast.node(length).value;
                if length < 1 {
                    self.report(ErrorImpl::InvalidArraySize { name, size: length }, id);
                    return;
                }
                (SubType::Array, length as usize)
            }
        };

        self.ast.node_mut(id).size = size;
        let symbol = Symbol::new(&name, ty, subtype, self.level, size, self.offset);
        if self.declare(id, symbol).is_some() {
            self.allocate(size);
        }

        if let Some(init) = init {
            if let Some(received) = self.type_of(init) {
                if received != ty {
                    self.report(
                        ErrorImpl::TypeMatchError {
                            expected: ty,
                            received,
                        },
                        init,
                    );
                }
            }
        }
    }

    fn declare_method(&mut self, id: NodeId) {
        let ty = self.declared_type(id);
        let node = self.ast.node(id);
        let name = node.name().to_string();
        let (params, body) = (node.first, node.second);

        // Inserted before the body so the method can call itself
        let symbol = Symbol::new(&name, ty, SubType::Method, self.level, FRAME_HEADER_WORDS, 0)
            .with_params(params);
        let method = self.declare(id, symbol);

        let saved = (self.offset, self.max_offset);
        self.offset = FRAME_HEADER_WORDS;
        self.max_offset = FRAME_HEADER_WORDS;
        self.level += 1;

        let parameters: Vec<NodeId> = self.ast.siblings(params).collect();
        for parameter in parameters {
            let parameter_type = self.declared_type(parameter);
            let symbol = Symbol::new(
                self.ast.node(parameter).name(),
                parameter_type,
                SubType::Scalar,
                self.level,
                1,
                self.offset,
            );
            self.ast.node_mut(parameter).size = 1;
            if self.declare(parameter, symbol).is_some() {
                self.allocate(1);
            }
        }

        self.method = Some((name.clone(), ty));
        self.visit_body(body);
        self.method = None;

        let frame = self.max_offset;
        if let Some(method) = method {
            self.symbols.symbol_mut(method).size = frame;
        }
        self.ast.node_mut(id).size = frame;

        self.symbols.delete(self.level);
        self.level -= 1;
        (self.offset, self.max_offset) = saved;
        debug!(method = %name, frame, "analyzed method");
    }

    fn expect_condition(&mut self, condition: Option<NodeId>) {
        let Some(condition) = condition else {
            return;
        };
        if let Some(received) = self.type_of(condition) {
            if received != DecafType::Bool {
                self.report(
                    ErrorImpl::TypeMatchError {
                        expected: DecafType::Bool,
                        received,
                    },
                    condition,
                );
            }
        }
    }

    fn check_assignment(&mut self, id: NodeId) {
        let node = self.ast.node(id);
        let (target, value) = (node.first, node.second);

        let expected = target.and_then(|target| self.type_of(target));
        let received = value.and_then(|value| self.type_of(value));
        if let (Some(expected), Some(received)) = (expected, received) {
            if expected != received {
                self.report(ErrorImpl::TypeMatchError { expected, received }, id);
            }
        }
    }

    fn check_return(&mut self, id: NodeId) {
        let value = self.ast.node(id).first;
        let received = value.and_then(|value| self.type_of(value));
        let Some((method, expected)) = self.method.clone() else {
            return;
        };

        match (value, expected) {
            (None, DecafType::Void) => {}
            (None, _) | (Some(_), DecafType::Void) => {
                self.report(ErrorImpl::InvalidReturn { method }, id)
            }
            (Some(_), expected) => {
                if let Some(received) = received {
                    if received != expected {
                        self.report(ErrorImpl::TypeMatchError { expected, received }, id);
                    }
                }
            }
        }
    }

    /// Types an expression node and records the type on it.
    ///
    /// `None` means the type is unknown because of an error already reported.
    fn type_of(&mut self, id: NodeId) -> Option<DecafType> {
        let node = self.ast.node(id);
        let (kind, first) = (node.kind, node.first);
        let ty = match kind {
            NodeKind::ConstantInt => Some(DecafType::Int),
            NodeKind::ConstantBool => Some(DecafType::Bool),
            NodeKind::ConstantString => Some(DecafType::String),
            NodeKind::LValue | NodeKind::RValue => self.resolve_variable(id),
            NodeKind::Expr => self.type_expression(id),
            NodeKind::MethodCall => self.check_call(id),
            NodeKind::MethodArg => first.and_then(|expression| self.type_of(expression)),
            NodeKind::Package
            | NodeKind::MethodDecl
            | NodeKind::While
            | NodeKind::Block
            | NodeKind::VarDecl
            | NodeKind::Extern
            | NodeKind::ExternType
            | NodeKind::MethodIdentifier
            | NodeKind::Break
            | NodeKind::Return
            | NodeKind::Assign
            | NodeKind::If
            | NodeKind::IfBlock
            | NodeKind::ElseBlock
            | NodeKind::Continue
            | NodeKind::Program => None,
        };

        if ty.is_some() {
            self.ast.node_mut(id).declared_type = ty;
        }
        ty
    }

    fn type_expression(&mut self, id: NodeId) -> Option<DecafType> {
        let node = self.ast.node(id);
        let (first, second) = (node.first, node.second);
        let Some(operator) = node.operator else {
            panic!("Attempted to type an expression without an operator")
        };

        let left = first.and_then(|left| self.type_of(left));
        let right = second.and_then(|right| self.type_of(right));

        let (operand, result) = match operator.class() {
            OperatorClass::Arithmetic | OperatorClass::Negation => {
                (Some(DecafType::Int), DecafType::Int)
            }
            OperatorClass::Relational => (Some(DecafType::Int), DecafType::Bool),
            OperatorClass::Logical | OperatorClass::Complement => {
                (Some(DecafType::Bool), DecafType::Bool)
            }
            // Both sides must agree with the left one
            OperatorClass::Equality => (left, DecafType::Bool),
        };

        if let Some(expected) = operand {
            for (child, ty) in [(first, left), (second, right)] {
                if let (Some(child), Some(received)) = (child, ty) {
                    if received != expected {
                        self.report(ErrorImpl::TypeMatchError { expected, received }, child);
                    }
                }
            }
        }

        Some(result)
    }

    fn resolve_variable(&mut self, id: NodeId) -> Option<DecafType> {
        let node = self.ast.node(id);
        let name = node.name().to_string();
        let index = node.first;
        let index_type = index.and_then(|index| self.type_of(index));

        let Some(symbol_id) = self.symbols.search(&name, self.level, true) else {
            self.report(ErrorImpl::UndeclaredIdentifier { name }, id);
            return None;
        };
        let symbol = self.symbols.symbol(symbol_id);
        let (ty, found) = (symbol.ty, symbol.subtype);
        self.ast.node_mut(id).symbol = Some(symbol_id);

        let expected = if index.is_some() {
            SubType::Array
        } else {
            SubType::Scalar
        };
        if found != expected {
            self.report(
                ErrorImpl::SubtypeMismatch {
                    name,
                    expected,
                    found,
                },
                id,
            );
        }

        if let (Some(index), Some(received)) = (index, index_type) {
            if received != DecafType::Int {
                self.report(
                    ErrorImpl::TypeMatchError {
                        expected: DecafType::Int,
                        received,
                    },
                    index,
                );
            }
        }

        Some(ty)
    }

    fn check_call(&mut self, id: NodeId) -> Option<DecafType> {
        let node = self.ast.node(id);
        let name = node.name().to_string();
        let arguments = node.first;

        let argument_ids: Vec<NodeId> = self.ast.siblings(arguments).collect();
        let mut all_typed = true;
        for argument in &argument_ids {
            if self.type_of(*argument).is_none() {
                all_typed = false;
            }
        }

        let Some(symbol_id) = self.symbols.search(&name, self.level, true) else {
            self.report(ErrorImpl::UndeclaredIdentifier { name }, id);
            return None;
        };
        let symbol = self.symbols.symbol(symbol_id);
        let (ty, found, params) = (symbol.ty, symbol.subtype, symbol.params);
        self.ast.node_mut(id).symbol = Some(symbol_id);

        if !found.is_callable() {
            self.report(
                ErrorImpl::SubtypeMismatch {
                    name,
                    expected: SubType::Method,
                    found,
                },
                id,
            );
            return None;
        }

        // Arguments that failed to type were reported already
        if all_typed && !check_parameters(self.ast, params, arguments) {
            let expected = self.ast.siblings(params).count();
            self.report(
                ErrorImpl::ParameterMismatch {
                    method: name,
                    expected,
                    received: argument_ids.len(),
                },
                id,
            );
        }

        Some(ty)
    }
}

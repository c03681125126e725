//! Integration tests for end-to-end analysis.
//!
//! These tests build small Decaf programs the way the parser's actions would,
//! then run them through semantic analysis, parameter matching and the tree
//! dump.

use decaf::{
    ast::{
        ast::{Ast, NodeId, NodeKind},
        build::*,
        types::{DecafType, Operator},
    },
    printer::tree_to_string,
    semantics::{Analyzer, Compilation},
    symbols::{check_parameters, SubType, SymbolTable},
};

/// `int x; int f(int a) { f(argument); }` as a top-level chain.
fn declarations_with_call(ast: &mut Ast, argument: NodeId) -> (NodeId, NodeId, NodeId) {
    let x = var_decl(ast, "x", DecafType::Int);
    let a = parameter(ast, "a", DecafType::Int);
    let call = call(ast, "f", vec![argument]);
    let body = block(ast, vec![], vec![call]);
    let f = method(ast, "f", DecafType::Int, vec![a], body);
    ast.chain([x, f]);
    (x, f, call)
}

#[test]
fn test_call_with_matching_argument() {
    let mut ast = Ast::new();
    let mut symbols = SymbolTable::new();
    let argument = rvalue(&mut ast, "x");
    let (x, f, call) = declarations_with_call(&mut ast, argument);

    let mut analyzer = Analyzer::new(&mut ast, &mut symbols);
    analyzer.visit_chain(Some(x));
    let errors = analyzer.finish();
    assert!(errors.is_empty(), "{:?}", errors);

    // Only the two level 0 entries survive; `a` went with the method's scope
    assert_eq!(symbols.len(), 2);

    let x_symbol = symbols.symbol(symbols.search("x", 0, false).unwrap());
    assert_eq!(x_symbol.level, 0);
    assert_eq!(x_symbol.ty, DecafType::Int);
    assert_eq!(x_symbol.subtype, SubType::Scalar);

    let f_id = symbols.search("f", 0, false).unwrap();
    let f_symbol = symbols.symbol(f_id);
    assert_eq!(f_symbol.level, 0);
    assert_eq!(f_symbol.ty, DecafType::Int);
    assert_eq!(f_symbol.subtype, SubType::Method);
    assert_eq!(ast.siblings(f_symbol.params).count(), 1);
    assert_eq!(ast.node(f).symbol, Some(f_id));

    assert!(symbols.search("a", 1, false).is_none());

    let call_node = ast.node(call);
    assert_eq!(call_node.symbol, Some(f_id));
    assert_eq!(ast.node(argument).declared_type, Some(DecafType::Int));
    assert!(check_parameters(&ast, f_symbol.params, call_node.first));
}

#[test]
fn test_call_with_boolean_argument() {
    let mut ast = Ast::new();
    let mut symbols = SymbolTable::new();
    let argument = bool_constant(&mut ast, true);
    let (x, _, call) = declarations_with_call(&mut ast, argument);

    let mut analyzer = Analyzer::new(&mut ast, &mut symbols);
    analyzer.visit_chain(Some(x));
    let errors = analyzer.finish();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ParameterMismatch");

    let f_symbol = symbols.symbol(symbols.search("f", 0, false).unwrap());
    assert!(!check_parameters(&ast, f_symbol.params, ast.node(call).first));
}

#[test]
fn test_dump_lists_stanzas_in_order() {
    let mut compilation = Compilation::new();
    let ast = &mut compilation.ast;
    let argument = rvalue(ast, "x");
    let (x, f, _) = declarations_with_call(ast, argument);
    // Undo the top-level chain so the package owns each list
    ast.node_mut(x).next = None;
    let package = package(ast, "P", vec![x], vec![f]);
    let root = program(ast, vec![], package);
    compilation.set_root(root).unwrap();

    assert!(compilation.analyze().is_empty());
    let dump = compilation.dump_to_string();

    let x_stanza = dump.find("Variable x with type INT").unwrap();
    let f_stanza = dump.find("METHOD FUNCTION f INT").unwrap();
    let parameter = dump.find("PARAMETER INT a").unwrap();
    let call_stanza = dump.find("METHOD CALL name: f").unwrap();
    let argument_stanza = dump.find("METHOD ARG").unwrap();
    assert!(x_stanza < f_stanza);
    assert!(f_stanza < parameter);
    assert!(parameter < call_stanza);
    assert!(call_stanza < argument_stanza);
    assert_eq!(dump.matches("PARAMETER").count(), 1);
    assert_eq!(dump.matches("METHOD ARG").count(), 1);
}

#[test]
fn test_full_program_with_externs() {
    let mut compilation = Compilation::new();
    let ast = &mut compilation.ast;

    let print_int = extern_decl(ast, "print_int", DecafType::Void, vec![DecafType::Int]);
    let total = var_decl(ast, "total", DecafType::Int);
    let values = array_decl(ast, "values", DecafType::Int, 10);

    // void main() { int i; i = 0; while (i < 10) { total = total + values[i]; i = i + 1; } print_int(total); }
    let i = var_decl(ast, "i", DecafType::Int);
    let i_target = lvalue(ast, "i");
    let zero = int_constant(ast, 0);
    let reset = assign(ast, i_target, zero);

    let i_read = rvalue(ast, "i");
    let ten = int_constant(ast, 10);
    let condition = binary(ast, Operator::Lt, i_read, ten);

    let total_target = lvalue(ast, "total");
    let total_read = rvalue(ast, "total");
    let index = rvalue(ast, "i");
    let element = indexed(ast, NodeKind::RValue, "values", index);
    let sum = binary(ast, Operator::Plus, total_read, element);
    let accumulate = assign(ast, total_target, sum);

    let step_target = lvalue(ast, "i");
    let step_read = rvalue(ast, "i");
    let one = int_constant(ast, 1);
    let increment = binary(ast, Operator::Plus, step_read, one);
    let step = assign(ast, step_target, increment);

    let loop_body = block(ast, vec![], vec![accumulate, step]);
    let loop_stmt = while_stmt(ast, condition, loop_body);

    let total_argument = rvalue(ast, "total");
    let report = call(ast, "print_int", vec![total_argument]);

    let body = block(ast, vec![i], vec![reset, loop_stmt, report]);
    let main = method(ast, "main", DecafType::Void, vec![], body);
    let package = package(ast, "Sum", vec![total, values], vec![main]);
    let root = program(ast, vec![print_int], package);
    compilation.set_root(root).unwrap();

    let errors = compilation.analyze();
    assert!(errors.is_empty(), "{:?}", errors);

    let names: Vec<&str> = compilation
        .symbols
        .iter()
        .map(|(_, symbol)| symbol.name.as_str())
        .collect();
    assert_eq!(names, vec!["main", "values", "total", "Sum", "print_int"]);

    let main_symbol = compilation.ast.node(main).symbol.unwrap();
    assert_eq!(compilation.symbols.symbol(main_symbol).size, 3);

    let table = compilation.symbols.to_string();
    assert!(table.starts_with("\tLABEL\t\tOffset\tSIZE\tLEVEL\ttype\tsubtype\n"));
    assert!(table.contains("\tvalues\t\t1\t10\t0\tINT\tArray\n"));
    assert!(table.contains("\tprint_int\t\t0\t1\t0\tVOID\tExtern Method\n"));

    let dump = compilation.dump_to_string();
    assert!(dump.starts_with("EXTERN FUNC print_int\n Extern Type INT\nEND EXTERN with Type: VOID\n\n"));
    assert!(dump.contains("Variable values[10] with type INT\n"));
    assert!(dump.contains("WHILE STATEMENT\n"));
}

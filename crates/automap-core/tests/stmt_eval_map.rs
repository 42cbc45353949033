use automap_core::stmt::{Expr, ExprArg, Type, Value};
use std_util::prelude::*;

fn ints(items: &[i64]) -> Value {
    Value::list_from_vec(items.iter().copied().map(Value::I64).collect())
}

#[test]
fn map_applies_body_in_order() {
    let expr = Expr::map(ints(&[3, 1, 2]), Expr::cast(Expr::arg(0usize), Type::string()));

    assert_eq!(
        expr.eval_const().unwrap(),
        Value::list_from_vec(vec!["3".into(), "1".into(), "2".into()])
    );
}

#[test]
fn map_empty_list() {
    let expr = Expr::map(ints(&[]), Expr::arg(0usize));
    assert_eq!(expr.eval_const().unwrap(), ints(&[]));
}

#[test]
fn map_null_is_null() {
    let expr = Expr::map(Value::Null, Expr::arg(0usize));
    assert_eq!(expr.eval_const().unwrap(), Value::Null);
}

#[test]
fn map_non_list_is_error() {
    let err = assert_err!(Expr::map(Value::I64(1), Expr::arg(0usize)).eval_const());
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn nested_map_reads_outer_arg() {
    // [[a, b]] -> [[(outer, inner)]] where outer is read through nesting = 1
    let inner = Value::list_from_vec(vec!["a".into(), "b".into()]);
    let outer = Value::list_from_vec(vec![inner]);

    let expr = Expr::map(
        outer,
        Expr::map(
            Expr::arg(0usize),
            Expr::Arg(ExprArg {
                position: 0,
                nesting: 1,
            }),
        ),
    );

    let value = expr.eval_const().unwrap();
    let rows = value.expect_list();
    assert_eq!(rows.len(), 1);
    // Each inner item evaluates to the outer item (the inner list itself).
    assert_eq!(rows[0].expect_list().len(), 2);
    assert_eq!(rows[0].expect_list()[0], rows[0].expect_list()[1]);
}

#[test]
fn arg_outside_map_is_error() {
    assert!(Expr::arg(0usize).eval_const().is_err());
}

#[test]
fn arg_nesting_overflow_is_error() {
    let expr = Expr::map(
        ints(&[1]),
        Expr::Arg(ExprArg {
            position: 0,
            nesting: 2,
        }),
    );
    assert!(expr.eval_const().is_err());
}

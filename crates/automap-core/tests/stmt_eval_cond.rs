use automap_core::stmt::{ConstHost, Env, Expr, Statement, Value};
use std_util::prelude::*;

// ---------------------------------------------------------------------------
// Cond
// ---------------------------------------------------------------------------

#[test]
fn cond_picks_branch() {
    let expr = Expr::cond(true, "yes", "no");
    assert_eq!(expr.eval_const().unwrap(), Value::from("yes"));

    let expr = Expr::cond(false, "yes", "no");
    assert_eq!(expr.eval_const().unwrap(), Value::from("no"));
}

#[test]
fn cond_only_evaluates_taken_branch() {
    // The untaken branch reads an undefined variable.
    let expr = Expr::cond(true, 1i64, Expr::var("missing"));
    assert_eq!(expr.eval_const().unwrap(), Value::I64(1));
}

#[test]
fn cond_with_non_bool_condition_is_error() {
    let err = assert_err!(Expr::cond(1i64, "yes", "no").eval_const());
    assert!(err.is_expression_evaluation_failed());
}

// ---------------------------------------------------------------------------
// IsNull
// ---------------------------------------------------------------------------

#[test]
fn is_null_and_is_not_null() {
    assert_eq!(Expr::is_null(Value::Null).eval_const().unwrap(), Value::Bool(true));
    assert_eq!(Expr::is_null(1i64).eval_const().unwrap(), Value::Bool(false));
    assert_eq!(Expr::is_not_null(Value::Null).eval_const().unwrap(), Value::Bool(false));
    assert_eq!(Expr::is_not_null("x").eval_const().unwrap(), Value::Bool(true));
}

// ---------------------------------------------------------------------------
// Variables and blocks
// ---------------------------------------------------------------------------

#[test]
fn var_reads_env() {
    let mut env = Env::new().with("source", 7i64);
    let value = Expr::var("source").eval(&mut env, &mut ConstHost).unwrap();
    assert_eq!(value, Value::I64(7));
}

#[test]
fn undefined_var_is_error() {
    let err = assert_err!(Expr::var("nope").eval_const());
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("`nope`"));
}

#[test]
fn block_binds_let_for_its_expression_only() {
    let block = Expr::block(
        vec![Statement::let_("tmp", Expr::cast(Value::from("41"), automap_core::stmt::Type::i64()))],
        Expr::cond(Expr::is_null(Expr::var("tmp")), Value::Null, Expr::var("tmp")),
    );

    let mut env = Env::new();
    assert_eq!(block.eval(&mut env, &mut ConstHost).unwrap(), Value::I64(41));

    // `tmp` went out of scope with the block.
    assert!(Expr::var("tmp").eval(&mut env, &mut ConstHost).is_err());
}

#[test]
fn later_let_shadows_earlier() {
    let block = Expr::block(
        vec![Statement::let_("x", 1i64), Statement::let_("x", 2i64)],
        Expr::var("x"),
    );
    assert_eq!(block.eval_const().unwrap(), Value::I64(2));
}

#[test]
fn block_without_statements_is_its_expression() {
    assert_eq!(Expr::block(vec![], Expr::var("x")), Expr::var("x"));
}

#[test]
fn statement_exec_binds_in_env() {
    let mut env = Env::new();
    Statement::let_("name", "Jane").exec(&mut env, &mut ConstHost).unwrap();
    assert_eq!(env.get("name"), Some(&Value::from("Jane")));
}

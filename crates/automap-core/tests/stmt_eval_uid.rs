use automap_core::stmt::{Expr, Func, Value};
use std_util::prelude::*;
use uuid::Uuid;

#[test]
fn uid_to_string_is_hyphenated() {
    let uid = Uuid::parse_str("67e5504410b1426f9247bb680e5fe0c8").unwrap();
    let value = Expr::call(Func::UidToString, [Value::from(uid).into()])
        .eval_const()
        .unwrap();
    assert_eq!(value, Value::from("67e55044-10b1-426f-9247-bb680e5fe0c8"));
}

#[test]
fn uid_from_string_round_trip() {
    let uid = Uuid::new_v4();
    let expr = Expr::call(
        Func::UidFromString,
        [Expr::call(Func::UidToString, [Value::from(uid).into()])],
    );
    assert_eq!(expr.eval_const().unwrap(), Value::Uid(uid));
}

#[test]
fn uid_from_invalid_string_is_error() {
    assert!(Expr::call(Func::UidFromString, ["not-a-uid".into()])
        .eval_const()
        .is_err());
}

#[test]
fn uid_to_string_of_int_is_type_conversion_error() {
    let err = assert_err!(Expr::call(Func::UidToString, [1i64.into()]).eval_const());
    assert!(err.is_type_conversion());
}

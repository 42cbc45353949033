use automap_core::stmt::{Expr, Func, Value, DEFAULT_DATE_TIME_FORMAT};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std_util::prelude::*;

fn format(value: impl Into<Expr>, format: &str) -> Expr {
    Expr::call(Func::FormatDateTime(format.to_string()), [value.into()])
}

fn parse(value: impl Into<Expr>, format: &str) -> Expr {
    Expr::call(Func::ParseDateTime(format.to_string()), [value.into()])
}

#[test]
fn format_with_default_format() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let value = format(Value::from(date), DEFAULT_DATE_TIME_FORMAT)
        .eval_const()
        .unwrap();
    assert_eq!(value, Value::from("2024-01-15T10:30:00+00:00"));
}

#[test]
fn parse_with_default_format() {
    let value = parse("2024-01-15T10:30:00+02:00", DEFAULT_DATE_TIME_FORMAT)
        .eval_const()
        .unwrap();

    let expected = DateTime::parse_from_rfc3339("2024-01-15T10:30:00+02:00").unwrap();
    assert_eq!(value, Value::DateTime(expected));
}

#[test]
fn format_then_parse_preserves_instant() {
    let custom = "%d/%m/%Y %H:%M:%S %z";
    let date = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();

    let value = parse(format(Value::from(date), custom), custom)
        .eval_const()
        .unwrap();

    let parsed: DateTime<FixedOffset> = value.try_into().unwrap();
    assert_eq!(parsed.timestamp(), date.timestamp());
}

#[test]
fn null_passes_through() {
    assert_eq!(format(Value::Null, "%Y").eval_const().unwrap(), Value::Null);
    assert_eq!(parse(Value::Null, "%Y").eval_const().unwrap(), Value::Null);
}

#[test]
fn parse_invalid_string_is_error() {
    assert!(parse("yesterday", DEFAULT_DATE_TIME_FORMAT).eval_const().is_err());
}

#[test]
fn format_non_date_is_type_conversion_error() {
    let err = assert_err!(format(Value::I64(1), DEFAULT_DATE_TIME_FORMAT).eval_const());
    assert!(err.is_type_conversion());
}

#[test]
fn parse_naive_format_as_utc() {
    let value = parse("2024-01-15 10:30:00", "%Y-%m-%d %H:%M:%S")
        .eval_const()
        .unwrap();
    assert_eq!(value, Value::from(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()));

    let value = parse("2024-01-15", "%Y-%m-%d").eval_const().unwrap();
    assert_eq!(value, Value::from(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()));
}

#[test]
fn unknown_specifier_is_error() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

    assert_err!(format(Value::from(date), "%Q").eval_const());
    assert_err!(parse("2024", "%Q").eval_const());
}

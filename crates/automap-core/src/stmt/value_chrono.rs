use chrono::{
    format::{Item, ParseErrorKind, StrftimeItems},
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};
use std::fmt::Write;

use crate::{err, stmt::Value, Error, Result};

/// RFC 3339 in `chrono` format syntax, e.g. `2024-01-15T10:30:00+00:00`.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl TryFrom<Value> for DateTime<FixedOffset> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(value) => Ok(value),
            value => Err(Error::type_conversion(value, "DateTime")),
        }
    }
}

/// Formats a date-time value with `format`. `null` passes through.
pub(crate) fn format_date_time(value: Value, format: &str) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::DateTime(value) => {
            let items = strftime_items(format)?;
            let mut out = String::new();

            write!(out, "{}", value.format_with_items(items))
                .map_err(|_| err!("cannot format date-time with `{format}`"))?;

            Ok(Value::String(out))
        }
        value => Err(Error::type_conversion(value, "DateTime")),
    }
}

/// Parses a string with `format`. Date-time values and `null` pass through.
///
/// A format without an offset reads the time as UTC; a format without a time
/// reads midnight.
pub(crate) fn parse_date_time(value: Value, format: &str) -> Result<Value> {
    match value {
        Value::Null | Value::DateTime(_) => Ok(value),
        Value::String(value) => {
            strftime_items(format)?;
            Ok(Value::DateTime(parse(&value, format)?))
        }
        value => Err(Error::type_conversion(value, "DateTime")),
    }
}

fn parse(input: &str, format: &str) -> Result<DateTime<FixedOffset>> {
    let err = match DateTime::parse_from_str(input, format) {
        Ok(parsed) => return Ok(parsed),
        Err(err) => err,
    };

    if err.kind() != ParseErrorKind::NotEnough {
        return Err(err.into());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(naive.and_utc().fixed_offset());
    }

    let date = NaiveDate::parse_from_str(input, format)?;
    Ok(date.and_time(NaiveTime::default()).and_utc().fixed_offset())
}

/// Rejects formats with an unknown specifier.
fn strftime_items(format: &str) -> Result<StrftimeItems<'_>> {
    let items = StrftimeItems::new(format);

    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(err!("invalid date-time format `{format}`"));
    }

    Ok(items)
}

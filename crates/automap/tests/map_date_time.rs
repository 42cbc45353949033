use automap::{
    schema::{Class, Property},
    stmt::{Object, Type, Value},
    AutoMapper, Context, Schema,
};
use chrono::{DateTime, FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn schema() -> Schema {
    Schema::builder()
        .class(
            Class::new("Event")
                .with_property(Property::new("startsAt", Type::date_time()))
                .with_property(Property::new("endsAt", Type::date_time().into_nullable())),
        )
        .class(
            Class::new("EventDto")
                .with_property(Property::new("startsAt", Type::string()))
                .with_property(Property::new("endsAt", Type::string().into_nullable())),
        )
        .class(
            Class::new("EventCopy")
                .with_property(Property::new("startsAt", Type::date_time()))
                .with_property(Property::new("endsAt", Type::mixed())),
        )
        .build()
        .unwrap()
}

fn starts_at() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .unwrap()
}

fn event() -> Object {
    Object::with_fields("Event", [("startsAt", Value::from(starts_at())), ("endsAt", Value::Null)])
}

#[test]
fn date_to_string_uses_the_default_format() {
    let automap = AutoMapper::new(schema());

    let dto = automap.map(event(), "EventDto", &Context::new()).unwrap();
    let dto = dto.expect_object();

    assert_eq!(dto.get("startsAt"), Some(Value::from("2024-01-15T10:30:00+02:00")));
    assert_eq!(dto.get("endsAt"), Some(Value::Null));
}

#[test]
fn string_to_date_round_trips() {
    let automap = AutoMapper::new(schema());

    let dto = automap.map(event(), "EventDto", &Context::new()).unwrap();
    let back = automap.map(dto, "Event", &Context::new()).unwrap();

    let parsed: DateTime<FixedOffset> = back.expect_object().get("startsAt").unwrap().try_into().unwrap();
    assert_eq!(parsed, starts_at());
}

#[test]
fn custom_format_applies_both_ways() {
    let automap = AutoMapper::builder()
        .schema(schema())
        .date_time_format("%d/%m/%Y %H:%M %z")
        .build();

    let dto = automap.map(event(), "EventDto", &Context::new()).unwrap();
    assert_eq!(
        dto.expect_object().get("startsAt"),
        Some(Value::from("15/01/2024 10:30 +0200"))
    );

    let back = automap.map(dto, "Event", &Context::new()).unwrap();
    assert_eq!(back.expect_object().get("startsAt"), Some(Value::from(starts_at())));
}

#[test]
fn date_to_date_and_mixed_copies() {
    let automap = AutoMapper::new(schema());
    let event = Object::with_fields(
        "Event",
        [("startsAt", Value::from(starts_at())), ("endsAt", Value::from(starts_at()))],
    );

    let copy = automap.map(event, "EventCopy", &Context::new()).unwrap();
    let copy = copy.expect_object();

    assert_eq!(copy.get("startsAt"), Some(Value::from(starts_at())));
    assert_eq!(copy.get("endsAt"), Some(Value::from(starts_at())));
}

#[test]
fn malformed_date_string_is_error() {
    let automap = AutoMapper::new(schema());
    let dto = Object::with_fields("EventDto", [("startsAt", "next tuesday")]);

    assert_err!(automap.map(dto, "Event", &Context::new()));
}

#[test]
fn format_without_offset_reads_utc() {
    let automap = AutoMapper::builder()
        .schema(schema())
        .date_time_format("%Y-%m-%d %H:%M:%S")
        .build();
    let dto = Object::with_fields("EventDto", [("startsAt", "2024-01-15 10:30:00")]);

    let event = automap.map(dto, "Event", &Context::new()).unwrap();

    let expected = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .unwrap();
    assert_eq!(event.expect_object().get("startsAt"), Some(Value::from(expected)));
}

#[test]
fn date_only_format_reads_midnight() {
    let automap = AutoMapper::builder()
        .schema(schema())
        .date_time_format("%Y-%m-%d")
        .build();
    let dto = Object::with_fields("EventDto", [("startsAt", "2024-01-15")]);

    let event = automap.map(dto, "Event", &Context::new()).unwrap();

    let expected = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .unwrap();
    assert_eq!(event.expect_object().get("startsAt"), Some(Value::from(expected)));

    let dto = automap.map(event, "EventDto", &Context::new()).unwrap();
    assert_eq!(dto.expect_object().get("startsAt"), Some(Value::from("2024-01-15")));
}

#[test]
fn invalid_format_is_an_error() {
    let automap = AutoMapper::builder()
        .schema(schema())
        .date_time_format("%Q")
        .build();

    assert_err!(automap.map(event(), "EventDto", &Context::new()));

    let dto = Object::with_fields("EventDto", [("startsAt", "2024-01-15")]);
    assert_err!(automap.map(dto, "Event", &Context::new()));
}

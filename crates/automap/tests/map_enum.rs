use automap::{
    schema::{Class, Property},
    stmt::{Object, Type, TypeEnum, Value, ValueEnum},
    AutoMapper, Context, Schema,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn schema() -> Schema {
    Schema::builder()
        .enumeration(
            TypeEnum::new("Status")
                .backed_case("active", "A")
                .backed_case("banned", "B"),
        )
        .enumeration(
            TypeEnum::new("Priority")
                .backed_case("low", 1)
                .backed_case("high", 2)
                .default_case("low"),
        )
        .enumeration(TypeEnum::new("Color").case("Red").case("Green"))
        .enumeration(TypeEnum::new("Paint").case("Green").case("Red"))
        .class(
            Class::new("Ticket")
                .with_property(Property::new("status", Type::string()))
                .with_property(Property::new("priority", Type::i64()))
                .with_property(Property::new("color", Type::enumeration("Color"))),
        )
        .class(
            Class::new("TicketModel")
                .with_property(Property::new("status", Type::enumeration("Status")))
                .with_property(Property::new("priority", Type::enumeration("Priority")))
                .with_property(Property::new("color", Type::enumeration("Paint"))),
        )
        .class(
            Class::new("TicketView")
                .with_property(Property::new("status", Type::string()))
                .with_property(Property::new("priority", Type::string()))
                .with_property(Property::new("color", Type::string())),
        )
        .build()
        .unwrap()
}

fn ticket(status: &str, priority: i64) -> Object {
    Object::with_fields(
        "Ticket",
        [
            ("status", Value::from(status)),
            ("priority", Value::from(priority)),
            ("color", ValueEnum::new("Color", "Red").into()),
        ],
    )
}

#[test]
fn scalars_match_backing_values() {
    let automap = AutoMapper::new(schema());

    let model = automap.map(ticket("A", 2), "TicketModel", &Context::new()).unwrap();
    let model = model.expect_object();

    assert_eq!(model.get("status"), Some(ValueEnum::new("Status", "active").into()));
    assert_eq!(model.get("priority"), Some(ValueEnum::new("Priority", "high").into()));
}

#[test]
fn scalars_match_case_names() {
    let automap = AutoMapper::new(schema());

    let model = automap.map(ticket("banned", 1), "TicketModel", &Context::new()).unwrap();

    assert_eq!(
        model.expect_object().get("status"),
        Some(ValueEnum::new("Status", "banned").into())
    );
}

#[test]
fn enum_to_enum_matches_by_name() {
    let automap = AutoMapper::new(schema());

    let model = automap.map(ticket("A", 1), "TicketModel", &Context::new()).unwrap();

    assert_eq!(
        model.expect_object().get("color"),
        Some(ValueEnum::new("Paint", "Red").into())
    );
}

#[test]
fn unmatched_value_falls_back_to_default_case() {
    let automap = AutoMapper::new(schema());

    let model = automap.map(ticket("A", 7), "TicketModel", &Context::new()).unwrap();

    assert_eq!(
        model.expect_object().get("priority"),
        Some(ValueEnum::new("Priority", "low").into())
    );
}

#[test]
fn unmatched_value_without_default_is_error() {
    let automap = AutoMapper::new(schema());

    let err = assert_err!(automap.map(ticket("Z", 1), "TicketModel", &Context::new()));
    assert!(err.is_unmatched_enum_value());
}

#[test]
fn enum_to_scalar_uses_backing_value() {
    let automap = AutoMapper::new(schema());
    let model = Object::with_fields(
        "TicketModel",
        [
            ("status", ValueEnum::new("Status", "active")),
            ("priority", ValueEnum::new("Priority", "high")),
            ("color", ValueEnum::new("Paint", "Green")),
        ],
    );

    let view = automap.map(model.clone(), "TicketView", &Context::new()).unwrap();
    let view = view.expect_object();

    assert_eq!(view.get("status"), Some(Value::from("A")));
    assert_eq!(view.get("priority"), Some(Value::from("2")));
    assert_eq!(view.get("color"), Some(Value::from("Green")));

    let array = automap.map(model, "array", &Context::new()).unwrap();
    assert_eq!(
        array,
        Value::map_from([
            ("status", Value::from("A")),
            ("priority", Value::from(2)),
            ("color", Value::from("Green")),
        ])
    );
}

use automap::{
    schema::{Class, Property},
    stmt::{Object, Type, Value},
    AutoMapper, Context, Schema,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn schema() -> Schema {
    Schema::builder()
        .class(
            Class::new("Person")
                .with_property(Property::new("first", Type::string()))
                .with_property(Property::new("last", Type::string())),
        )
        .class(
            Class::new("PersonDto")
                .with_property(Property::new("first", Type::string()))
                .with_property(Property::new("last", Type::string()))
                .with_property(Property::new("fullName", Type::string())),
        )
        .build()
        .unwrap()
}

fn person() -> Object {
    Object::with_fields("Person", [("first", "Ada"), ("last", "Lovelace")])
}

fn text(value: &Value, field: &str) -> String {
    value
        .field(field)
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[test]
fn callback_computes_a_property_from_the_whole_source() {
    let automap = AutoMapper::new(schema());

    let mut metadata = automap.create_metadata("Person", "PersonDto").unwrap();
    metadata.for_member("fullName", |source, _target, _context| {
        Ok(format!("{} {}", text(source, "first"), text(source, "last")).into())
    });
    automap.register(metadata);

    let dto = automap.map(person(), "PersonDto", &Context::new()).unwrap();
    let dto = dto.expect_object();

    assert_eq!(dto.get("fullName"), Some(Value::from("Ada Lovelace")));
    assert_eq!(dto.get("first"), Some(Value::from("Ada")));
}

#[test]
fn callback_replaces_the_structural_mapping() {
    let automap = AutoMapper::new(schema());

    let mut metadata = automap.create_metadata("Person", "PersonDto").unwrap();
    metadata.for_member("first", |source, _, _| Ok(text(source, "first").to_uppercase().into()));
    automap.register(metadata);

    let mapper = automap.get_mapper("Person", "PersonDto").unwrap();
    let order: Vec<_> = mapper
        .procedure()
        .properties
        .iter()
        .map(|property| property.property.as_str())
        .collect();

    // Callbacks run after the structural properties.
    assert_eq!(order, ["last", "first"]);

    let dto = mapper.map(person(), &Context::new()).unwrap();
    assert_eq!(dto.expect_object().get("first"), Some(Value::from("ADA")));
}

#[test]
fn callback_sees_the_target_and_context() {
    let automap = AutoMapper::new(schema());

    let mut metadata = automap.create_metadata("Person", "PersonDto").unwrap();
    metadata.for_member("fullName", |_, target, context| {
        let suffix = context.flag("suffix").and_then(Value::as_str).unwrap_or("");
        let current = target.as_str().unwrap_or("");
        Ok(format!("{current}{suffix}").into())
    });
    automap.register(metadata);

    let existing = Object::with_fields("PersonDto", [("fullName", "Ada")]);
    let context = Context::new().with_flag("suffix", " (Countess)");

    automap.map(person(), existing.clone(), &context).unwrap();

    assert_eq!(existing.get("fullName"), Some(Value::from("Ada (Countess)")));
}

#[test]
fn callback_error_aborts_the_call() {
    let automap = AutoMapper::new(schema());

    let mut metadata = automap.create_metadata("Person", "PersonDto").unwrap();
    metadata.for_member("fullName", |_, _, _| Err(anyhow::anyhow!("directory offline").into()));
    automap.register(metadata);

    let err = assert_err!(automap.map(person(), "PersonDto", &Context::new()));
    assert!(err.to_string().contains("directory offline"));
}

#[test]
fn callback_into_array_key() {
    let automap = AutoMapper::new(schema());

    let mut metadata = automap.create_metadata("Person", "array").unwrap();
    metadata.for_member("display", |source, _, _| Ok(text(source, "last").into()));
    automap.register(metadata);

    let array = automap.map(person(), "array", &Context::new()).unwrap();

    assert_eq!(
        array,
        Value::map_from([("first", "Ada"), ("last", "Lovelace"), ("display", "Lovelace")])
    );
}

use automap::{
    schema::{Class, Property},
    stmt::{Object, Type, Value},
    AutoMapper, Context, Schema,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use uuid::Uuid;

const ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

fn schema() -> Schema {
    Schema::builder()
        .class(Class::new("Document").with_property(Property::new("id", Type::uid())))
        .class(Class::new("DocumentDto").with_property(Property::new("id", Type::string())))
        .class(Class::new("DocumentRef").with_property(Property::new("id", Type::uid())))
        .build()
        .unwrap()
}

fn id() -> Uuid {
    Uuid::parse_str(ID).unwrap()
}

#[test]
fn uid_to_string_is_hyphenated() {
    let automap = AutoMapper::new(schema());
    let document = Object::with_fields("Document", [("id", id())]);

    let dto = automap.map(document, "DocumentDto", &Context::new()).unwrap();

    assert_eq!(dto.expect_object().get("id"), Some(Value::from(ID)));
}

#[test]
fn string_to_uid_accepts_other_forms() {
    let automap = AutoMapper::new(schema());
    let simple = id().simple().to_string().to_uppercase();
    let dto = Object::with_fields("DocumentDto", [("id", simple)]);

    let document = automap.map(dto, "Document", &Context::new()).unwrap();

    assert_eq!(document.expect_object().get("id"), Some(Value::from(id())));
}

#[test]
fn uid_to_uid_copies() {
    let automap = AutoMapper::new(schema());
    let document = Object::with_fields("Document", [("id", id())]);

    let reference = automap.map(document, "DocumentRef", &Context::new()).unwrap();

    assert_eq!(reference.expect_object().get("id"), Some(Value::from(id())));
}

#[test]
fn uid_array_round_trip() {
    let automap = AutoMapper::new(schema());
    let document = Object::with_fields("Document", [("id", id())]);

    let array = automap.map(document.clone(), "array", &Context::new()).unwrap();
    assert_eq!(array, Value::map_from([("id", ID)]));

    let back = automap.map(array, "Document", &Context::new()).unwrap();
    assert_eq!(back, Value::from(document));
}

#[test]
fn malformed_uid_is_error() {
    let automap = AutoMapper::new(schema());
    let dto = Object::with_fields("DocumentDto", [("id", "not-a-uid")]);

    assert_err!(automap.map(dto, "Document", &Context::new()));
}

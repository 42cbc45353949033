use automap::{
    schema::{Class, Param, Property},
    stmt::{Object, Type, Value},
    AutoMapper, Context, Schema,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;
use std_util::prelude::*;

fn schema() -> Schema {
    Schema::builder()
        .class(
            Class::new("User")
                .with_property(Property::new("id", Type::i64()))
                .with_property(Property::new("name", Type::string()))
                .with_property(Property::new("email", Type::string().into_nullable()))
                .with_property(Property::new("age", Type::i64()))
                .with_property(Property::new("password", Type::string())),
        )
        .class(
            Class::new("UserDto")
                .with_property(Property::new("id", Type::i64()))
                .with_property(Property::new("name", Type::string()))
                .with_property(Property::new("email", Type::string().into_nullable()))
                .with_property(Property::new("age", Type::string()))
                .with_property(Property::new("password", Type::string()).ignore())
                .with_property(Property::new("role", Type::string()).default_value("member"))
                .with_property(
                    Property::new("contact", Type::string().into_nullable()).source_name("email"),
                )
                .with_property(Property::new("nickname", Type::string())),
        )
        .class(
            Class::new("AccountInput")
                .with_property(Property::new("id", Type::i64().into_nullable()))
                .with_property(Property::new("owner", Type::string())),
        )
        .class(
            Class::new("Account")
                .with_property(Property::new("id", Type::i64()).readonly())
                .with_property(Property::new("owner", Type::string()))
                .with_property(Property::new("currency", Type::string()))
                .with_constructor([Param::new("id"), Param::new("currency").with_default("EUR")]),
        )
        .class(Class::new("Charge").with_property(Property::new("amount", Type::i64())))
        .class(
            Class::new("Transfer")
                .with_property(Property::new("amount", Type::i64()))
                .with_property(Property::new("currency", Type::string().into_nullable())),
        )
        .class(
            Class::new("Payment")
                .with_property(Property::new("amount", Type::i64()))
                .with_property(Property::new("currency", Type::string().into_nullable()))
                .with_constructor([Param::new("amount"), Param::new("currency").with_default("EUR")]),
        )
        .class(Class::new("A").with_property(Property::new("name", Type::string())))
        .class(Class::new("A_B").with_property(Property::new("name", Type::string())))
        .class(Class::new("B_C").with_property(Property::new("name", Type::string())))
        .class(Class::new("C").with_property(Property::new("name", Type::string())))
        .build()
        .unwrap()
}

fn user() -> Object {
    Object::with_fields(
        "User",
        [
            ("id", Value::from(1)),
            ("name", Value::from("Jane")),
            ("email", Value::from("jane@example.com")),
            ("age", Value::from(42)),
            ("password", Value::from("secret")),
        ],
    )
}

#[test]
fn maps_properties_by_name() {
    let automap = AutoMapper::new(schema());

    let dto = automap.map(user(), "UserDto", &Context::new()).unwrap();
    let dto = dto.expect_object();

    assert_eq!(dto.class(), "UserDto");
    assert_eq!(dto.get("id"), Some(Value::from(1)));
    assert_eq!(dto.get("name"), Some(Value::from("Jane")));
    assert_eq!(dto.get("age"), Some(Value::from("42")));
    assert_eq!(dto.get("contact"), Some(Value::from("jane@example.com")));
    assert_eq!(dto.get("role"), Some(Value::from("member")));

    // Ignored, and without a source counterpart.
    assert!(!dto.has("password"));
    assert!(!dto.has("nickname"));
}

#[test]
fn null_source_maps_to_null() {
    let automap = AutoMapper::new(schema());

    assert_eq!(automap.map(Value::Null, "UserDto", &Context::new()).unwrap(), Value::Null);

    let target = Object::with_fields("UserDto", [("name", "kept")]);
    let ret = automap.map(Value::Null, target.clone(), &Context::new()).unwrap();

    assert_eq!(ret, Value::Null);
    assert_eq!(target.get("name"), Some(Value::from("kept")));
}

#[test]
fn get_mapper_returns_the_same_mapper() {
    let automap = AutoMapper::new(schema());

    let a = automap.get_mapper("User", "UserDto").unwrap();
    let b = automap.get_mapper("User", "UserDto").unwrap();

    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(a.identity(), "Mapper_User_UserDto");
}

#[test]
fn class_prefix_names_mappers() {
    let automap = AutoMapper::builder().schema(schema()).class_prefix("Auto_").build();

    let mapper = automap.get_mapper("User", "array").unwrap();
    assert_eq!(mapper.identity(), "Auto_User_array");
}

#[test]
fn object_to_array_and_back() {
    let automap = AutoMapper::new(schema());

    let array = automap.map(user(), "array", &Context::new()).unwrap();

    assert_eq!(
        array,
        Value::map_from([
            ("id", Value::from(1)),
            ("name", Value::from("Jane")),
            ("email", Value::from("jane@example.com")),
            ("age", Value::from(42)),
            ("password", Value::from("secret")),
        ])
    );

    let back = automap.map(array, "User", &Context::new()).unwrap();
    assert_eq!(back, Value::from(user()));
}

#[test]
fn unmappable_values_are_rejected() {
    let automap = AutoMapper::new(schema());

    let err = assert_err!(automap.map(Value::from(5), "UserDto", &Context::new()));
    assert!(err.is_no_mapping_found());

    let err = assert_err!(automap.map(Value::map_from([("a", 1)]), "array", &Context::new()));
    assert!(err.is_no_mapping_found());

    let err = assert_err!(automap.get_mapper("array", "array"));
    assert!(err.is_no_mapping_found());

    assert!(!automap.has_mapper("array", "array").unwrap());
}

#[test]
fn unknown_class_is_invalid_schema() {
    let automap = AutoMapper::new(schema());

    let err = assert_err!(automap.get_mapper("User", "Ghost"));
    assert!(err.is_invalid_schema());
}

#[test]
fn without_auto_register_pairs_must_be_registered() {
    let automap = AutoMapper::builder().schema(schema()).auto_register(false).build();

    assert!(!automap.has_mapper("User", "UserDto").unwrap());
    let err = assert_err!(automap.get_mapper("User", "UserDto"));
    assert!(err.is_no_mapping_found());

    let metadata = automap.create_metadata("User", "UserDto").unwrap();
    automap.register(metadata);

    assert!(automap.has_mapper("User", "UserDto").unwrap());
    let dto = automap.map(user(), "UserDto", &Context::new()).unwrap();
    assert_eq!(dto.expect_object().get("name"), Some(Value::from("Jane")));
}

// ---- constructors ----

#[test]
fn constructor_arguments_fall_back_to_defaults() {
    let automap = AutoMapper::new(schema());
    let input = Object::with_fields("AccountInput", [("id", Value::from(7)), ("owner", Value::from("jane"))]);

    let account = automap.map(input, "Account", &Context::new()).unwrap();
    let account = account.expect_object();

    assert_eq!(account.get("id"), Some(Value::from(7)));
    assert_eq!(account.get("currency"), Some(Value::from("EUR")));
    assert_eq!(account.get("owner"), Some(Value::from("jane")));
}

#[test]
fn missing_constructor_argument() {
    let automap = AutoMapper::new(schema());
    let input = Object::with_fields("AccountInput", [("id", Value::Null), ("owner", Value::from("jane"))]);

    let err = assert_err!(automap.map(input, "Account", &Context::new()));
    assert!(err.is_missing_constructor_argument());
}

#[test]
fn constructor_properties_are_not_assigned_twice() {
    let automap = AutoMapper::new(schema());
    let mapper = automap.get_mapper("AccountInput", "Account").unwrap();
    let procedure = mapper.procedure();

    let args = assert_some!(&procedure.constructor);
    let params: Vec<_> = args.iter().map(|arg| arg.param.as_str()).collect();
    assert_eq!(params, ["id", "currency"]);
    assert!(args[0].property.is_some());
    assert!(args[1].property.is_none());

    let assigned: Vec<_> = procedure.properties.iter().map(|p| p.property.as_str()).collect();
    assert_eq!(assigned, ["owner"]);
}

#[test]
fn unmapped_nullable_argument_takes_its_default() {
    let automap = AutoMapper::new(schema());
    let charge = Object::with_fields("Charge", [("amount", 10)]);

    let payment = automap.map(charge, "Payment", &Context::new()).unwrap();
    let payment = payment.expect_object();

    assert_eq!(payment.get("amount"), Some(Value::from(10)));
    assert_eq!(payment.get("currency"), Some(Value::from("EUR")));
}

#[test]
fn mapped_null_argument_stays_null() {
    let automap = AutoMapper::new(schema());

    let transfer = Object::with_fields("Transfer", [("amount", Value::from(10)), ("currency", Value::Null)]);
    let payment = automap.map(transfer, "Payment", &Context::new()).unwrap();
    assert_eq!(payment.expect_object().get("currency"), Some(Value::Null));

    let transfer = Object::with_fields("Transfer", [("amount", Value::from(10)), ("currency", Value::from("USD"))]);
    let payment = automap.map(transfer, "Payment", &Context::new()).unwrap();
    assert_eq!(payment.expect_object().get("currency"), Some(Value::from("USD")));
}

// ---- identity ----

#[test]
fn pairs_with_underscores_get_their_own_mapper() {
    let automap = AutoMapper::new(schema());

    let first = automap.get_mapper("A", "B_C").unwrap();
    let second = automap.get_mapper("A_B", "C").unwrap();
    assert!(!Rc::ptr_eq(&first, &second));
    assert_ne!(first.identity(), second.identity());

    let a = Object::with_fields("A", [("name", "a")]);
    let dto = automap.map(a, "B_C", &Context::new()).unwrap();
    assert_eq!(dto.expect_object().class(), "B_C");

    let ab = Object::with_fields("A_B", [("name", "ab")]);
    let dto = automap.map(ab, "C", &Context::new()).unwrap();
    assert_eq!(dto.expect_object().class(), "C");
    assert_eq!(dto.expect_object().get("name"), Some(Value::from("ab")));
}

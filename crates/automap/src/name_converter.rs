//! Naming of associative array keys.
//!
//! When one side of a mapping is an associative array, each object property
//! is stored under the key returned by the registry's [`NameConverter`].

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Converts an object property name into an associative array key.
pub trait NameConverter {
    fn convert(&self, property: &str) -> String;
}

/// Keys are the property names, unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNameConverter;

impl NameConverter for IdentityNameConverter {
    fn convert(&self, property: &str) -> String {
        property.to_string()
    }
}

/// `firstName` is stored under `first_name`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCaseNameConverter;

impl NameConverter for SnakeCaseNameConverter {
    fn convert(&self, property: &str) -> String {
        property.to_snake_case()
    }
}

/// `first_name` is stored under `firstName`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CamelCaseNameConverter;

impl NameConverter for CamelCaseNameConverter {
    fn convert(&self, property: &str) -> String {
        property.to_lower_camel_case()
    }
}

impl<F> NameConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, property: &str) -> String {
        self(property)
    }
}

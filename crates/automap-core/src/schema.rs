mod builder;
pub use builder::Builder;

mod class;
pub use class::Class;

mod param;
pub use param::Param;

mod property;
pub use property::Property;

mod verify;

use crate::{stmt::TypeEnum, Error, Result};
use indexmap::IndexMap;

/// Describes the classes and enums values can be mapped between.
///
/// This plays the role of reflection: the mapping engine asks the schema for
/// a class's properties, their declared types, read-only flags and
/// constructor parameters.
#[derive(Debug, Default)]
pub struct Schema {
    classes: IndexMap<String, Class>,
    enums: IndexMap<String, TypeEnum>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the class named `name`.
    pub fn class(&self, name: &str) -> Result<&Class> {
        self.get_class(name)
            .ok_or_else(|| Error::invalid_schema(format!("class `{name}` is not declared")))
    }

    pub fn get_class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Returns the enum named `name`.
    pub fn enum_ty(&self, name: &str) -> Result<&TypeEnum> {
        self.enums
            .get(name)
            .ok_or_else(|| Error::invalid_schema(format!("enum `{name}` is not declared")))
    }

    /// All properties of `class`, inherited ones included.
    ///
    /// Parent properties come first. A property redeclared by a subclass
    /// keeps its parent's position and takes the subclass's definition.
    pub fn properties(&self, class: &str) -> Result<Vec<&Property>> {
        let mut properties: IndexMap<&str, &Property> = IndexMap::new();

        for class in self.lineage(class)?.into_iter().rev() {
            for property in &class.properties {
                properties.insert(&property.name, property);
            }
        }

        Ok(properties.into_values().collect())
    }

    /// Finds a property of `class` by name, inherited ones included.
    pub fn property(&self, class: &str, name: &str) -> Result<Option<&Property>> {
        for class in self.lineage(class)? {
            if let Some(property) = class.property(name) {
                return Ok(Some(property));
            }
        }

        Ok(None)
    }

    /// The constructor parameters of `class`. Subclasses without their own
    /// constructor inherit their parent's.
    pub fn constructor(&self, class: &str) -> Result<Option<&[Param]>> {
        for class in self.lineage(class)? {
            if let Some(params) = &class.constructor {
                return Ok(Some(params));
            }
        }

        Ok(None)
    }

    /// Returns `true` if `class` is `parent` or inherits from it.
    pub fn instance_of(&self, class: &str, parent: &str) -> bool {
        let mut current = Some(class);

        while let Some(name) = current {
            if name == parent {
                return true;
            }

            current = self.get_class(name).and_then(|class| class.parent.as_deref());
        }

        false
    }

    /// `class` followed by its ancestors, nearest first.
    fn lineage(&self, class: &str) -> Result<Vec<&Class>> {
        let mut lineage = vec![];
        let mut current = Some(class);

        while let Some(name) = current {
            let class = self.class(name)?;

            if lineage.iter().any(|c: &&Class| c.name == class.name) {
                return Err(Error::invalid_schema(format!(
                    "class `{name}` inherits from itself"
                )));
            }

            lineage.push(class);
            current = class.parent.as_deref();
        }

        Ok(lineage)
    }
}

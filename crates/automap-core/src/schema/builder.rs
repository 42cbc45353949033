use super::{Class, Schema};
use crate::{stmt::TypeEnum, Error, Result};
use indexmap::IndexMap;

/// Collects class and enum declarations, then verifies them.
#[derive(Debug, Default)]
pub struct Builder {
    classes: IndexMap<String, Class>,
    enums: IndexMap<String, TypeEnum>,

    /// First duplicate declaration, reported by `build`.
    duplicate: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&mut self, class: Class) -> &mut Self {
        if self.classes.contains_key(&class.name) || self.enums.contains_key(&class.name) {
            self.duplicate.get_or_insert_with(|| class.name.clone());
        }
        self.classes.insert(class.name.clone(), class);
        self
    }

    pub fn enumeration(&mut self, ty: TypeEnum) -> &mut Self {
        if self.classes.contains_key(&ty.name) || self.enums.contains_key(&ty.name) {
            self.duplicate.get_or_insert_with(|| ty.name.clone());
        }
        self.enums.insert(ty.name.clone(), ty);
        self
    }

    pub fn build(&mut self) -> Result<Schema> {
        if let Some(name) = self.duplicate.take() {
            return Err(Error::invalid_schema(format!(
                "type `{name}` is declared more than once"
            )));
        }

        let schema = Schema {
            classes: std::mem::take(&mut self.classes),
            enums: std::mem::take(&mut self.enums),
        };

        schema.verify()?;
        Ok(schema)
    }
}

use super::{Class, Schema};
use crate::{
    stmt::{Type, TypeKind},
    Error, Result,
};
use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for class in self.schema.classes() {
            self.verify_parent(class)?;
            self.verify_properties_are_unique(class)?;
            self.verify_property_types(class)?;
            self.verify_constructor(class)?;
        }

        for ty in self.schema.enums.values() {
            if let Some(default) = &ty.default {
                if ty.get_case(default).is_none() {
                    return Err(Error::invalid_schema(format!(
                        "default case `{default}` is not a case of enum `{}`",
                        ty.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_parent(&self, class: &Class) -> Result<()> {
        // Walks the whole lineage, catching both undeclared parents and
        // inheritance cycles.
        self.schema.lineage(&class.name).map(|_| ())
    }

    fn verify_properties_are_unique(&self, class: &Class) -> Result<()> {
        let mut seen = HashSet::new();

        for property in &class.properties {
            if !seen.insert(&property.name) {
                return Err(Error::invalid_schema(format!(
                    "property `{}` is declared more than once in class `{}`",
                    property.name, class.name
                )));
            }
        }

        Ok(())
    }

    fn verify_property_types(&self, class: &Class) -> Result<()> {
        for property in &class.properties {
            self.verify_type(&property.ty).map_err(|err| {
                err.context(Error::from_args(format_args!(
                    "property `{}` of class `{}`",
                    property.name, class.name
                )))
            })?;
        }

        Ok(())
    }

    fn verify_type(&self, ty: &Type) -> Result<()> {
        match &ty.kind {
            TypeKind::Object(class) => self.schema.class(class).map(|_| ()),
            TypeKind::Enum(name) => self.schema.enum_ty(name).map(|_| ()),
            TypeKind::List(item) => self.verify_type(item),
            TypeKind::Union(members) => members.iter().try_for_each(|member| self.verify_type(member)),
            _ => Ok(()),
        }
    }

    fn verify_constructor(&self, class: &Class) -> Result<()> {
        let Some(params) = &class.constructor else {
            return Ok(());
        };

        for param in params {
            if self.schema.property(&class.name, &param.name)?.is_none() {
                return Err(Error::invalid_schema(format!(
                    "constructor parameter `{}` of class `{}` does not name a property",
                    param.name, class.name
                )));
            }
        }

        Ok(())
    }
}

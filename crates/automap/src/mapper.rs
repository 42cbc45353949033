use crate::{
    auto_mapper::Shared,
    metadata::{Callback, ARRAY},
    procedure::{Procedure, SOURCE, TARGET},
    Context,
};
use automap_core::{
    err,
    stmt::{Env, FuncMapper, Host, Object, Value, ValueMap},
    Error, Result, Schema,
};
use indexmap::IndexMap;
use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

/// Converts source values of one type into targets of another.
///
/// Mappers are created and cached by [`AutoMapper`](crate::AutoMapper);
/// nested mappers are looked up through the registry on first use.
pub struct Mapper {
    procedure: Rc<Procedure>,

    schema: Rc<Schema>,

    registry: RefCell<Weak<Shared>>,

    /// Nested mappers already looked up, by dependency name.
    dependencies: RefCell<HashMap<String, Weak<Mapper>>>,

    callbacks: RefCell<IndexMap<String, Callback>>,
}

impl Mapper {
    pub(crate) fn new(procedure: Rc<Procedure>, schema: Rc<Schema>) -> Mapper {
        Mapper {
            procedure,
            schema,
            registry: RefCell::new(Weak::new()),
            dependencies: RefCell::new(HashMap::new()),
            callbacks: RefCell::new(IndexMap::new()),
        }
    }

    pub fn identity(&self) -> &str {
        &self.procedure.identity
    }

    pub fn procedure(&self) -> &Procedure {
        &self.procedure
    }

    pub(crate) fn inject_registry(&self, registry: Weak<Shared>) {
        *self.registry.borrow_mut() = registry;
    }

    pub(crate) fn add_callback(&self, property: impl Into<String>, callback: Callback) {
        self.callbacks.borrow_mut().insert(property.into(), callback);
    }

    /// Maps `source`, constructing a new target or populating the context's
    /// target to populate.
    pub fn map(&self, source: impl Into<Value>, context: &Context) -> Result<Value> {
        let source = source.into();

        if source.is_null() {
            return Ok(Value::Null);
        }

        let root;
        let context = if context.depth() == 0 {
            root = context.with_new_references();
            &root
        } else {
            context
        };

        let procedure = &*self.procedure;
        let populate = context.target_to_populate().cloned();

        if populate.is_some()
            && procedure.target_readonly
            && !procedure.allow_readonly_target_to_populate
        {
            return Err(Error::read_only_target(&procedure.target));
        }

        let source_object = source.as_object().cloned();

        if populate.is_none() {
            if let Some(object) = &source_object {
                if let Some(target) = context.reference(object, &procedure.target) {
                    return Ok(target);
                }
            }
        }

        let mut host = ExecHost {
            mapper: self,
            context,
        };

        let mut target = match populate {
            Some(target @ (Value::Object(_) | Value::Map(_))) => target,
            Some(target) => {
                return Err(err!(
                    "cannot populate {} as `{}`",
                    target.kind_name(),
                    procedure.target
                ))
            }
            None => self.construct(&source, &mut host)?,
        };

        if let (Some(object), Value::Object(_)) = (&source_object, &target) {
            context.set_reference(object, &procedure.target, target.clone());
        }

        let populating = context.target_to_populate().is_some();
        let mut env = Env::new()
            .with(SOURCE, source.clone())
            .with(TARGET, target.clone());

        for property in &procedure.properties {
            if populating && property.target_readonly {
                continue;
            }

            if !property.is_mapped(&source, context) {
                continue;
            }

            let value = property.eval(&mut env, &mut host)?;

            if value.is_null() && !property.target_nullable {
                continue;
            }

            match &mut target {
                Value::Object(object) => object.set(&property.property, value),
                Value::Map(map) => {
                    map.insert(property.property.clone(), value);
                }
                _ => {}
            }
        }

        Ok(target)
    }

    fn construct(&self, source: &Value, host: &mut ExecHost<'_>) -> Result<Value> {
        let procedure = &*self.procedure;

        if procedure.target == ARRAY {
            return Ok(Value::Map(ValueMap::new()));
        }

        let object = Object::new(&procedure.target);

        for (name, value) in &procedure.defaults {
            object.set(name, value.clone());
        }

        if let Some(args) = &procedure.constructor {
            let mut env = Env::new()
                .with(SOURCE, source.clone())
                .with(TARGET, Value::Null);

            for arg in args {
                let value = match &arg.property {
                    Some(property) if property.is_mapped(source, host.context) => {
                        Some(property.eval(&mut env, host)?)
                    }
                    _ => None,
                };

                // A mapped `null` is kept when the argument accepts it.
                let value = match (value, &arg.default) {
                    (Some(Value::Null), _) if arg.nullable => Value::Null,
                    (Some(value), _) if !value.is_null() => value,
                    (_, Some(default)) => default.clone(),
                    (_, None) if arg.nullable => Value::Null,
                    (_, None) => {
                        return Err(Error::missing_constructor_argument(
                            &procedure.target,
                            &arg.param,
                        ))
                    }
                };

                object.set(&arg.param, value);
            }
        }

        Ok(object.into())
    }

    /// The mapper of a nested pair, looked up in the registry on first use.
    fn dependency(&self, func: &FuncMapper) -> Result<Rc<Mapper>> {
        let cached = self
            .dependencies
            .borrow()
            .get(&func.name)
            .and_then(Weak::upgrade);

        if let Some(mapper) = cached {
            return Ok(mapper);
        }

        let Some(registry) = self.registry.borrow().upgrade() else {
            return Err(err!("mapper `{}` is not attached to a registry", self.identity()));
        };

        let mapper = registry.get_mapper(&func.source, &func.target)?;

        self.dependencies
            .borrow_mut()
            .insert(func.name.clone(), Rc::downgrade(&mapper));

        Ok(mapper)
    }
}

impl core::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Mapper")
            .field("identity", &self.procedure.identity)
            .field("source", &self.procedure.source)
            .field("target", &self.procedure.target)
            .finish()
    }
}

/// Services a running procedure calls back into.
struct ExecHost<'a> {
    mapper: &'a Mapper,
    context: &'a Context,
}

impl Host for ExecHost<'_> {
    fn call_mapper(&mut self, func: &FuncMapper, source: Value, target: Value) -> Result<Value> {
        let mapper = self.mapper.dependency(func)?;
        let mut context = self.context.with_new_context(&func.property);

        if self.context.is_deep_target_to_populate() && !target.is_null() {
            context = context.with_target_to_populate(target);
        }

        mapper.map(source, &context)
    }

    fn call_callback(&mut self, name: &str, source: Value, target: Value) -> Result<Value> {
        let callback = self.mapper.callbacks.borrow().get(name).cloned();

        let Some(callback) = callback else {
            return Err(err!(
                "mapper `{}` has no callback for `{name}`",
                self.mapper.identity()
            ));
        };

        callback(&source, &target, self.context)
    }

    fn instance_of(&self, class: &str, parent: &str) -> bool {
        self.mapper.schema.instance_of(class, parent)
    }
}

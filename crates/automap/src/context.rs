use automap_core::stmt::{Object, Value};
use indexmap::IndexMap;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Objects already mapped during one top-level call, keyed by source
/// instance and target type. The source handle is kept so its identity stays
/// valid for the whole call.
type References = Rc<RefCell<HashMap<(usize, String), (Object, Value)>>>;

/// Options for one mapping call.
///
/// A nested mapping (a property holding an object) runs with a context
/// derived by [`with_new_context`](Context::with_new_context).
#[derive(Debug, Clone, Default)]
pub struct Context {
    target_to_populate: Option<Value>,

    path: Vec<String>,

    depth: usize,

    groups: Option<Vec<String>>,

    /// Dotted paths, relative to the current depth.
    allowed_attributes: Option<Vec<String>>,

    /// Dotted paths, relative to the current depth.
    ignored_attributes: Vec<String>,

    deep_target_to_populate: bool,

    flags: IndexMap<String, Value>,

    references: References,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    /// Populate `target` instead of creating a new instance.
    pub fn with_target_to_populate(mut self, target: impl Into<Value>) -> Context {
        let target = target.into();
        self.target_to_populate = if target.is_null() { None } else { Some(target) };
        self
    }

    /// Only map properties that belong to one of `groups`.
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Context {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Only map the listed properties. Nested properties are written as dotted
    /// paths: `address.city`. Listing `address` allows all of its properties.
    pub fn with_allowed_attributes(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Context {
        self.allowed_attributes = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Never map the listed properties (dotted paths, as for allowed
    /// attributes).
    pub fn with_ignored_attributes(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Context {
        self.ignored_attributes = paths.into_iter().map(Into::into).collect();
        self
    }

    /// When populating, also populate nested objects already present on the
    /// target instead of replacing them.
    pub fn with_deep_target_to_populate(mut self, deep: bool) -> Context {
        self.deep_target_to_populate = deep;
        self
    }

    /// Sets an arbitrary flag, visible to callbacks.
    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<Value>) -> Context {
        self.flags.insert(name.into(), value.into());
        self
    }

    pub fn target_to_populate(&self) -> Option<&Value> {
        self.target_to_populate.as_ref()
    }

    /// Property names from the top-level value down to the current one.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    pub fn is_deep_target_to_populate(&self) -> bool {
        self.deep_target_to_populate
    }

    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }

    /// Returns `true` if the allowed and ignored attributes let `property`
    /// through at the current depth.
    pub fn is_allowed(&self, property: &str) -> bool {
        if self.ignored_attributes.iter().any(|path| path == property) {
            return false;
        }

        match &self.allowed_attributes {
            None => true,
            Some(paths) => paths
                .iter()
                .any(|path| path == property || is_parent_of(property, path)),
        }
    }

    /// The context of a nested mapping for `property`.
    ///
    /// The path grows by `property`, depth increases, attribute filters are
    /// narrowed to the paths below `property` and the target to populate is
    /// cleared. The reference table is shared.
    pub fn with_new_context(&self, property: &str) -> Context {
        let allowed_attributes = match &self.allowed_attributes {
            Some(paths) if !paths.iter().any(|path| path == property) => {
                Some(narrow(paths, property))
            }
            _ => None,
        };

        let mut path = self.path.clone();
        path.push(property.to_string());

        Context {
            target_to_populate: None,
            path,
            depth: self.depth + 1,
            groups: self.groups.clone(),
            allowed_attributes,
            ignored_attributes: narrow(&self.ignored_attributes, property),
            deep_target_to_populate: self.deep_target_to_populate,
            flags: self.flags.clone(),
            references: self.references.clone(),
        }
    }

    /// A copy of this context with an empty reference table.
    pub(crate) fn with_new_references(&self) -> Context {
        Context {
            references: References::default(),
            ..self.clone()
        }
    }

    pub(crate) fn reference(&self, source: &Object, target: &str) -> Option<Value> {
        self.references
            .borrow()
            .get(&(source.id(), target.to_string()))
            .map(|(_, value)| value.clone())
    }

    pub(crate) fn set_reference(&self, source: &Object, target: &str, value: Value) {
        self.references
            .borrow_mut()
            .insert((source.id(), target.to_string()), (source.clone(), value));
    }
}

fn is_parent_of(property: &str, path: &str) -> bool {
    path.strip_prefix(property)
        .is_some_and(|rest| rest.starts_with('.'))
}

fn narrow(paths: &[String], property: &str) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.strip_prefix(property)?.strip_prefix('.'))
        .map(str::to_string)
        .collect()
}

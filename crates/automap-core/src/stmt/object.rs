use super::Value;
use indexmap::IndexMap;
use std::{
    cell::RefCell,
    rc::Rc,
};

/// An instance of a class.
///
/// Objects are shared by reference: cloning an `Object` clones the handle,
/// not the fields. This is what lets a mapper populate an existing target in
/// place and lets mapped object graphs contain cycles.
#[derive(Clone)]
pub struct Object {
    class: Rc<str>,
    fields: Rc<RefCell<IndexMap<String, Value>>>,
}

impl Object {
    pub fn new(class: impl AsRef<str>) -> Object {
        Object {
            class: Rc::from(class.as_ref()),
            fields: Rc::new(RefCell::new(IndexMap::new())),
        }
    }

    /// Creates an instance with the given field values.
    pub fn with_fields<K, V>(class: impl AsRef<str>, fields: impl IntoIterator<Item = (K, V)>) -> Object
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let object = Object::new(class);
        for (name, value) in fields {
            object.set(name, value);
        }
        object
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns a copy of the field value, or `None` if it was never set.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.borrow_mut().insert(name.into(), value.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.borrow().contains_key(name)
    }

    /// Names of the fields that are set, in insertion order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.borrow().keys().cloned().collect()
    }

    /// Returns `true` if both handles point to the same instance.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.fields, &other.fields)
    }

    /// An identifier for the instance, stable while it is alive.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.fields) as *const () as usize
    }
}

thread_local! {
    // Pairs of instances currently being compared or printed, so cyclic
    // graphs terminate.
    static VISITING: RefCell<Vec<(usize, usize)>> = const { RefCell::new(Vec::new()) };
}

fn enter(pair: (usize, usize)) -> bool {
    VISITING.with(|visiting| {
        let mut visiting = visiting.borrow_mut();
        if visiting.contains(&pair) {
            false
        } else {
            visiting.push(pair);
            true
        }
    })
}

fn leave(pair: (usize, usize)) {
    VISITING.with(|visiting| {
        let mut visiting = visiting.borrow_mut();
        if let Some(pos) = visiting.iter().rposition(|p| *p == pair) {
            visiting.remove(pos);
        }
    })
}

/// Field-wise equality. Two instances are equal if they have the same class
/// and equal fields; a pair already under comparison (a cycle) is assumed
/// equal.
impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        if self.class != other.class {
            return false;
        }

        let pair = (self.id(), other.id());
        if !enter(pair) {
            return true;
        }

        let eq = *self.fields.borrow() == *other.fields.borrow();
        leave(pair);
        eq
    }
}

impl core::fmt::Debug for Object {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let pair = (self.id(), 0);
        if !enter(pair) {
            return write!(f, "{} {{ .. }}", self.class);
        }

        let mut out = f.debug_struct(&self.class);
        for (name, value) in self.fields.borrow().iter() {
            out.field(name, value);
        }
        let res = out.finish();

        leave(pair);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_fields() {
        let a = Object::new("User");
        let b = a.clone();
        b.set("name", "Jane");

        assert!(a.ptr_eq(&b));
        assert_eq!(a.get("name"), Some(Value::from("Jane")));
    }

    #[test]
    fn equality_is_field_wise() {
        let a = Object::with_fields("User", [("name", "Jane")]);
        let b = Object::with_fields("User", [("name", "Jane")]);
        let c = Object::with_fields("Admin", [("name", "Jane")]);

        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn cyclic_graphs_compare_and_print() {
        let a = Object::new("Node");
        let b = Object::new("Node");
        a.set("next", b.clone());
        b.set("next", a.clone());

        let c = Object::new("Node");
        let d = Object::new("Node");
        c.set("next", d.clone());
        d.set("next", c.clone());

        assert_eq!(a, c);
        assert!(format!("{a:?}").contains("Node { .. }"));
    }
}

use super::{Type, TypeKind};

/// The members of a union type.
///
/// `TypeUnion` enforces the set invariant: inserting a type that is already
/// present is a no-op. Unlike a plain set, declaration order is kept and is
/// significant: it is the tie-break when several members could handle a
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUnion {
    // Invariant: no duplicates, no nullable members, no nested unions.
    types: Vec<Type>,
}

impl TypeUnion {
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Insert `ty` if it is not already present. Returns whether it was inserted.
    pub fn insert(&mut self, ty: Type) -> bool {
        if self.types.contains(&ty) {
            return false;
        }
        self.types.push(ty);
        true
    }

    pub fn contains(&self, ty: &Type) -> bool {
        self.types.contains(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    /// Returns `true` if every member is an object type.
    pub fn is_all_objects(&self) -> bool {
        !self.types.is_empty() && self.types.iter().all(Type::is_object)
    }

    /// Collapse the union into a single `Type`.
    ///
    /// - 0 members → the null type
    /// - 1 member  → that type directly
    /// - 2+ members → a union type
    pub fn simplify(mut self) -> Type {
        match self.types.len() {
            0 => Type::null(),
            1 => self.types.remove(0),
            _ => Type::new(TypeKind::Union(self)),
        }
    }
}

impl Default for TypeUnion {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for TypeUnion {
    type Item = Type;
    type IntoIter = std::vec::IntoIter<Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeUnion {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

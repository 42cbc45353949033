use super::Transformer;
use automap_core::stmt::{Type, TypeKind};

pub(super) fn resolve(source: &Type, target: &Type) -> Option<Transformer> {
    if target.is_null() {
        return None;
    }

    if target.is_mixed() {
        // Values with a dedicated provider are converted by it.
        return match source.kind {
            TypeKind::Object(_) | TypeKind::Enum(_) | TypeKind::DateTime | TypeKind::Uid => None,
            _ => Some(Transformer::Copy),
        };
    }

    if !source.is_builtin() || !target.is_builtin() {
        return None;
    }

    if source.kind == target.kind || source.is_null() {
        return Some(Transformer::Copy);
    }

    if source.is_mixed() {
        return Some(Transformer::Builtin(target.clone().into_non_null()));
    }

    // Scalars never become arrays, and arrays never become scalars.
    if source.is_map() || target.is_map() {
        return None;
    }

    Some(Transformer::Builtin(target.clone().into_non_null()))
}

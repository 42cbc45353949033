use super::{ResolveCx, Transformer};
use crate::metadata::ARRAY;
use automap_core::{
    stmt::{Type, TypeKind},
    Result,
};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    let (Some(source_key), Some(target_key)) = (type_key(source), type_key(target)) else {
        return Ok(None);
    };

    if source_key == ARRAY && target_key == ARRAY {
        return Ok(None);
    }

    if !cx.registry.has_mapper(source_key, target_key)? {
        return Ok(None);
    }

    Ok(Some(Transformer::Object {
        source: source_key.to_string(),
        target: target_key.to_string(),
    }))
}

fn type_key(ty: &Type) -> Option<&str> {
    match &ty.kind {
        TypeKind::Object(class) => Some(class),
        TypeKind::Map => Some(ARRAY),
        _ => None,
    }
}

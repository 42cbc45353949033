use super::{ResolveCx, Transformer};
use automap_core::{
    stmt::{Type, TypeKind},
    Result,
};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    if let Some(name) = target.enum_name() {
        let convertible = matches!(
            source.kind,
            TypeKind::Enum(_) | TypeKind::String | TypeKind::I64 | TypeKind::Mixed
        );

        if !convertible {
            return Ok(None);
        }

        return Ok(Some(Transformer::EnumFromValue(cx.schema.enum_ty(name)?.clone())));
    }

    if let Some(name) = source.enum_name() {
        let scalar = matches!(
            target.kind,
            TypeKind::String | TypeKind::I64 | TypeKind::F64 | TypeKind::Mixed
        );

        if scalar {
            return Ok(Some(Transformer::EnumToValue(
                cx.schema.enum_ty(name)?.clone(),
                target.clone().into_non_null(),
            )));
        }
    }

    Ok(None)
}

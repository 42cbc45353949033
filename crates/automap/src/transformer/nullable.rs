use super::{ResolveCx, Transformer};
use automap_core::{stmt::Type, Result};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    if !source.nullable && !target.nullable {
        return Ok(None);
    }

    // Only `null` inhabits the null type.
    if source.is_null() {
        return Ok(Some(Transformer::Copy));
    }

    if target.is_null() {
        return Ok(None);
    }

    let inner = cx.resolve(&source.clone().into_non_null(), &target.clone().into_non_null())?;

    Ok(inner.map(|transformer| {
        if source.nullable {
            Transformer::Nullable(Box::new(transformer))
        } else {
            transformer
        }
    }))
}

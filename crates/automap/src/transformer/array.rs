use super::{ResolveCx, Transformer};
use automap_core::{stmt::Type, Result};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    let (Some(source_item), Some(target_item)) = (source.list_item(), target.list_item()) else {
        return Ok(None);
    };

    Ok(cx
        .resolve(source_item, target_item)?
        .map(|item| Transformer::Array(Box::new(item))))
}

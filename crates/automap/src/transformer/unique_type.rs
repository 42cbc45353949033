use super::{ResolveCx, Transformer};
use automap_core::{stmt::Type, Error, Result};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    let Some(members) = target.union_members() else {
        return Ok(None);
    };

    if !members.is_all_objects() {
        return Ok(None);
    }

    let mut candidates = vec![];

    for member in members {
        if let Some(transformer) = cx.resolve(source, member)? {
            candidates.push((member, transformer));
        }
    }

    if candidates.len() > 1 {
        return Err(Error::ambiguous_mapping(
            cx.metadata.identity(),
            cx.property,
            candidates.iter().map(|(member, _)| member.to_string()).collect(),
        ));
    }

    Ok(candidates.pop().map(|(_, transformer)| transformer))
}

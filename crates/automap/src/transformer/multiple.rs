use super::{ResolveCx, Transformer};
use crate::UnionPolicy;
use automap_core::{
    stmt::{Type, TypeKind},
    Result, Schema,
};

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
    if let Some(members) = source.union_members() {
        let mut branches = vec![];

        for member in ordered(members.iter(), cx) {
            if let Some(transformer) = cx.resolve(&member, target)? {
                branches.push((member, transformer));
            }
        }

        let transformer = if branches.len() > 1 {
            Transformer::Multiple(branches)
        } else {
            let Some((_, transformer)) = branches.pop() else {
                return Ok(None);
            };

            if source.nullable {
                Transformer::Nullable(Box::new(transformer))
            } else {
                transformer
            }
        };

        return Ok(Some(transformer));
    }

    let Some(members) = target.union_members() else {
        return Ok(None);
    };

    // A union of objects only is the unique type provider's business.
    if members.is_all_objects() {
        return Ok(None);
    }

    let exact = source.clone().into_non_null();
    if members.contains(&exact) {
        return cx.resolve(source, &exact);
    }

    for member in members {
        if let Some(transformer) = cx.resolve(source, member)? {
            return Ok(Some(transformer));
        }
    }

    Ok(None)
}

/// Union members in the order their runtime checks are emitted.
fn ordered<'a>(members: impl Iterator<Item = &'a Type>, cx: &ResolveCx<'_>) -> Vec<Type> {
    let mut ordered: Vec<Type> = vec![];

    for member in members {
        let index = match cx.union_policy {
            UnionPolicy::FirstDeclared => None,
            UnionPolicy::MostSpecific => ordered
                .iter()
                .position(|placed| subsumes(placed, member, cx.schema)),
        };

        match index {
            Some(index) => ordered.insert(index, member.clone()),
            None => ordered.push(member.clone()),
        }
    }

    ordered
}

/// Returns `true` if every value of `specific` is also a value of `general`.
fn subsumes(general: &Type, specific: &Type, schema: &Schema) -> bool {
    if general == specific {
        return false;
    }

    match (&general.kind, &specific.kind) {
        (TypeKind::Mixed, _) => true,
        (TypeKind::F64, TypeKind::I64) => true,
        (TypeKind::Object(parent), TypeKind::Object(class)) => schema.instance_of(class, parent),
        (TypeKind::List(general), TypeKind::List(specific)) => subsumes(general, specific, schema),
        _ => false,
    }
}

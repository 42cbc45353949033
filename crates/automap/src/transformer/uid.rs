use super::Transformer;
use automap_core::stmt::Type;

pub(super) fn resolve(source: &Type, target: &Type) -> Option<Transformer> {
    match (source.is_uid(), target.is_uid()) {
        (true, true) => Some(Transformer::Copy),
        (true, false) if target.is_mixed() => Some(Transformer::Copy),
        (true, false) if target.is_string() => Some(Transformer::UidToString),
        (false, true) if source.is_string() || source.is_mixed() => Some(Transformer::StringToUid),
        _ => None,
    }
}

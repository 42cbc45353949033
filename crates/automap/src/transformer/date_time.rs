use super::{ResolveCx, Transformer};
use automap_core::stmt::Type;

pub(super) fn resolve(source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Option<Transformer> {
    let format = cx.metadata.date_time_format();

    match (source.is_date_time(), target.is_date_time()) {
        (true, true) => Some(Transformer::Copy),
        (true, false) if target.is_mixed() => Some(Transformer::Copy),
        (true, false) if target.is_string() => Some(Transformer::DateTimeToString(format.to_string())),
        (false, true) if source.is_string() || source.is_mixed() => {
            Some(Transformer::StringToDateTime(format.to_string()))
        }
        _ => None,
    }
}

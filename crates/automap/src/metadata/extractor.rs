use super::{CompileCx, MapperMetadata, PropertyMapping, ReadAccessor, ARRAY};
use crate::transformer::{ResolveCx, Transformer};
use automap_core::{
    schema::{Param, Property},
    stmt::{Type, TypeKind},
    Error, Result,
};

/// Strategy for discovering the properties of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingExtractor {
    /// Object to object: walks the target class, reads same-named source
    /// properties.
    SourceTarget,

    /// Object to array: walks the source class.
    FromSource,

    /// Array to object: walks the target class.
    FromTarget,
}

impl MappingExtractor {
    pub fn for_pair(source: &str, target: &str) -> MappingExtractor {
        if target == ARRAY {
            MappingExtractor::FromSource
        } else if source == ARRAY {
            MappingExtractor::FromTarget
        } else {
            MappingExtractor::SourceTarget
        }
    }

    pub(crate) fn extract(
        self,
        metadata: &MapperMetadata,
        cx: &CompileCx<'_>,
    ) -> Result<Vec<PropertyMapping>> {
        let mut mappings = match self {
            MappingExtractor::SourceTarget => source_target(metadata, cx)?,
            MappingExtractor::FromSource => from_source(metadata, cx)?,
            MappingExtractor::FromTarget => from_target(metadata, cx)?,
        };

        // Callbacks replace structural mappings and run last.
        for property in metadata.callbacks().keys() {
            mappings.push(callback_mapping(metadata, cx, property)?);
        }

        Ok(mappings)
    }
}

fn source_target(metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Vec<PropertyMapping>> {
    let constructor = cx.schema.constructor(metadata.target())?;
    let mut mappings = vec![];

    for property in cx.schema.properties(metadata.target())? {
        if property.ignore || metadata.callbacks().contains_key(&property.name) {
            continue;
        }

        let source_name = property.source_name.as_deref().unwrap_or(&property.name);

        let Some(source_property) = cx.schema.property(metadata.source(), source_name)? else {
            tracing::debug!(
                mapper = metadata.identity(),
                property = %property.name,
                "source has no such property; skipping"
            );
            continue;
        };

        if source_property.ignore {
            continue;
        }

        let (readonly, in_constructor) = binding(metadata, property, constructor)?;

        let Some(transformer) = resolve(metadata, cx, &property.name, &source_property.ty, &property.ty)?
        else {
            continue;
        };

        mappings.push(PropertyMapping {
            property: property.name.clone(),
            read_accessor: ReadAccessor::Field(source_name.to_string()),
            source_type: source_property.ty.clone(),
            target_type: property.ty.clone(),
            read_target: transformer.assign_by_ref(),
            transformer,
            check_exists: false,
            target_readonly: readonly,
            in_constructor,
            max_depth: property.max_depth.or(source_property.max_depth),
            groups: if property.groups.is_empty() {
                source_property.groups.clone()
            } else {
                property.groups.clone()
            },
        });
    }

    Ok(mappings)
}

fn from_target(metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Vec<PropertyMapping>> {
    let constructor = cx.schema.constructor(metadata.target())?;
    let mut mappings = vec![];

    for property in cx.schema.properties(metadata.target())? {
        if property.ignore || metadata.callbacks().contains_key(&property.name) {
            continue;
        }

        let key = cx
            .name_converter
            .convert(property.source_name.as_deref().unwrap_or(&property.name));
        let source_type = array_input(&property.ty);

        let (readonly, in_constructor) = binding(metadata, property, constructor)?;

        let Some(transformer) = resolve(metadata, cx, &property.name, &source_type, &property.ty)? else {
            continue;
        };

        mappings.push(PropertyMapping {
            property: property.name.clone(),
            read_accessor: ReadAccessor::Field(key),
            source_type,
            target_type: property.ty.clone(),
            read_target: transformer.assign_by_ref(),
            transformer,
            check_exists: metadata.attribute_checking(),
            target_readonly: readonly,
            in_constructor,
            max_depth: property.max_depth,
            groups: property.groups.clone(),
        });
    }

    Ok(mappings)
}

fn from_source(metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Vec<PropertyMapping>> {
    let mut mappings = vec![];

    for property in cx.schema.properties(metadata.source())? {
        if property.ignore {
            continue;
        }

        let key = cx.name_converter.convert(&property.name);

        if metadata.callbacks().contains_key(&key) {
            continue;
        }

        let target_type = array_shape(&property.ty);

        let Some(transformer) = resolve(metadata, cx, &key, &property.ty, &target_type)? else {
            continue;
        };

        mappings.push(PropertyMapping {
            property: key,
            read_accessor: ReadAccessor::Field(property.name.clone()),
            source_type: property.ty.clone(),
            target_type,
            read_target: transformer.assign_by_ref(),
            transformer,
            check_exists: false,
            target_readonly: false,
            in_constructor: false,
            max_depth: property.max_depth,
            groups: property.groups.clone(),
        });
    }

    Ok(mappings)
}

fn callback_mapping(
    metadata: &MapperMetadata,
    cx: &CompileCx<'_>,
    property: &str,
) -> Result<PropertyMapping> {
    let mut target_type = Type::mixed();
    let mut readonly = false;
    let mut in_constructor = false;

    if !metadata.target_is_array() {
        if let Some(target_property) = cx.schema.property(metadata.target(), property)? {
            let constructor = cx.schema.constructor(metadata.target())?;
            (readonly, in_constructor) = binding(metadata, target_property, constructor)?;
            target_type = target_property.ty.clone();
        }
    }

    Ok(PropertyMapping {
        property: property.to_string(),
        read_accessor: ReadAccessor::Source,
        source_type: Type::mixed(),
        target_type,
        transformer: Transformer::Callback(property.to_string()),
        check_exists: false,
        read_target: true,
        target_readonly: readonly,
        in_constructor,
        max_depth: None,
        groups: vec![],
    })
}

/// Whether the target property is read-only and whether the constructor
/// binds it. A read-only property the constructor does not bind cannot be
/// written at all.
fn binding(
    metadata: &MapperMetadata,
    property: &Property,
    constructor: Option<&[Param]>,
) -> Result<(bool, bool)> {
    let readonly = property.readonly || metadata.is_target_readonly();
    let in_constructor = constructor
        .is_some_and(|params| params.iter().any(|param| param.name == property.name));

    if readonly && !in_constructor {
        return Err(Error::invalid_target_binding(
            metadata.identity(),
            &property.name,
        ));
    }

    Ok((readonly, in_constructor))
}

fn resolve(
    metadata: &MapperMetadata,
    cx: &CompileCx<'_>,
    property: &str,
    source: &Type,
    target: &Type,
) -> Result<Option<Transformer>> {
    let resolve_cx = ResolveCx {
        chain: cx.transformers,
        schema: cx.schema,
        registry: cx.registry,
        metadata,
        union_policy: cx.config.union_policy,
        property,
    };

    let transformer = resolve_cx.resolve(source, target)?;

    if transformer.is_none() {
        tracing::debug!(
            mapper = metadata.identity(),
            property,
            source = %source,
            target = %target,
            "no transformer found; skipping property"
        );
    }

    Ok(transformer)
}

/// The type a value takes on the associative array side of a mapping.
pub(crate) fn array_shape(ty: &Type) -> Type {
    let shape = match &ty.kind {
        TypeKind::Object(_) => Type::map(),
        TypeKind::DateTime | TypeKind::Uid => Type::string(),
        TypeKind::Enum(_) => Type::mixed(),
        TypeKind::List(item) => Type::list(array_shape(item)),
        TypeKind::Union(members) => Type::union(members.iter().map(array_shape)),
        _ => ty.clone(),
    };

    let nullable = ty.nullable || shape.nullable;
    shape.with_nullable(nullable)
}

/// The type a value read from an associative array is assumed to have.
///
/// Array values are untyped: scalars are read as mixed and coerced, nested
/// objects as arrays.
pub(crate) fn array_input(ty: &Type) -> Type {
    let input = match &ty.kind {
        TypeKind::Object(_) | TypeKind::Map => Type::map(),
        TypeKind::Null => Type::null(),
        TypeKind::List(item) => Type::list(array_input(item)),
        TypeKind::Union(members) => Type::union(members.iter().map(array_input)),
        _ => Type::mixed(),
    };

    let nullable = ty.nullable || input.nullable;
    input.with_nullable(nullable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_shape_of_types() {
        assert_eq!(array_shape(&Type::object("User")), Type::map());
        assert_eq!(array_shape(&Type::date_time().into_nullable()), Type::string().into_nullable());
        assert_eq!(array_shape(&Type::uid()), Type::string());
        assert_eq!(array_shape(&Type::enumeration("Status")), Type::mixed());
        assert_eq!(
            array_shape(&Type::list(Type::object("Tag"))),
            Type::list(Type::map())
        );
        assert_eq!(
            array_shape(&Type::union([Type::object("Cat"), Type::object("Dog")])),
            Type::map()
        );
        assert_eq!(array_shape(&Type::i64()), Type::i64());
    }

    #[test]
    fn array_input_reads_scalars_as_mixed() {
        assert_eq!(array_input(&Type::i64()), Type::mixed());
        assert_eq!(array_input(&Type::date_time().into_nullable()), Type::mixed().into_nullable());
        assert_eq!(array_input(&Type::object("User")), Type::map());
        assert_eq!(array_input(&Type::list(Type::object("Tag"))), Type::list(Type::map()));
    }
}

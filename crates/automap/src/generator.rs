use crate::{
    metadata::{CompileCx, PropertyMapping, ReadAccessor},
    procedure::{Condition, ConstructorArg, Procedure, PropertyStatement, SOURCE, TARGET},
    MapperMetadata,
};
use automap_core::{
    stmt::{Expr, VarScope},
    Result,
};

/// Assembles the procedure of a mapper from its compiled metadata.
pub(crate) fn generate(metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Procedure> {
    let mappings = metadata.compile(cx)?;
    let dependencies = metadata.dependencies(cx)?;

    let mut scope = VarScope::new();
    scope.reserve(SOURCE);
    scope.reserve(TARGET);

    let mut properties: Vec<_> = mappings
        .iter()
        .map(|mapping| property_statement(metadata, mapping, &mut scope))
        .collect();

    let mut defaults = vec![];
    let mut constructor = None;

    if !metadata.target_is_array() {
        let class_properties = cx.schema.properties(metadata.target())?;

        for property in &class_properties {
            if let Some(default) = &property.default {
                defaults.push((property.name.clone(), default.clone()));
            }
        }

        if let Some(params) = cx.schema.constructor(metadata.target())? {
            let mut args = Vec::with_capacity(params.len());

            for param in params {
                let target_property = class_properties.iter().find(|p| p.name == param.name);

                // A bound property is computed once, as an argument.
                let property = properties
                    .iter()
                    .position(|statement| statement.property == param.name)
                    .map(|index| properties.remove(index));

                args.push(ConstructorArg {
                    param: param.name.clone(),
                    default: param
                        .default
                        .clone()
                        .or_else(|| target_property.and_then(|p| p.default.clone())),
                    nullable: target_property.is_some_and(|p| p.ty.nullable || p.ty.is_mixed()),
                    property,
                });
            }

            constructor = Some(args);
        }
    }

    Ok(Procedure {
        identity: metadata.identity().to_string(),
        source: metadata.source().to_string(),
        target: metadata.target().to_string(),
        target_readonly: metadata.is_target_readonly(),
        allow_readonly_target_to_populate: cx.config.allow_readonly_target_to_populate,
        defaults,
        constructor,
        properties,
        dependencies,
    })
}

fn property_statement(
    metadata: &MapperMetadata,
    mapping: &PropertyMapping,
    scope: &mut VarScope,
) -> PropertyStatement {
    let mut conditions = vec![];

    let input = match &mapping.read_accessor {
        ReadAccessor::Field(name) => {
            if mapping.check_exists {
                conditions.push(Condition::SourceHas(name.clone()));
            }
            Expr::field(Expr::var(SOURCE), name)
        }
        ReadAccessor::Source => Expr::var(SOURCE),
    };

    if !mapping.groups.is_empty() {
        conditions.push(Condition::Groups(mapping.groups.clone()));
    }

    if let Some(max_depth) = mapping.max_depth {
        conditions.push(Condition::MaxDepth(max_depth));
    }

    // Constructor arguments are computed before the target exists.
    let target = if mapping.read_target && !mapping.in_constructor {
        Expr::field(Expr::var(TARGET), &mapping.property)
    } else {
        Expr::null()
    };

    let (output, statements) = mapping
        .transformer
        .transform(input, target, &mapping.property, scope);

    let target_type = &mapping.target_type;

    PropertyStatement {
        property: mapping.property.clone(),
        conditions,
        statements,
        output,
        target_nullable: metadata.target_is_array() || target_type.nullable || target_type.is_mixed(),
        target_readonly: mapping.target_readonly,
    }
}

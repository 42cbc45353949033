//! Conversion strategies for one property.
//!
//! A [`Transformer`] turns the expression reading a source value into the
//! expression computing the target value. Transformers are picked by the
//! providers of a [`ChainTransformerFactory`], tried in priority order.

mod array;
mod builtin;
mod date_time;
mod enumeration;

mod factory;
pub use factory::{ChainTransformerFactory, CustomTransformerFactory, ResolveCx, TransformerFactory};

mod multiple;
mod nullable;
mod object;
mod uid;
mod unique_type;

use crate::metadata::MapperDependency;
use automap_core::stmt::{Expr, Func, FuncMapper, Statement, Type, TypeEnum, VarScope};

#[derive(Debug, Clone, PartialEq)]
pub enum Transformer {
    /// Use the source value as is.
    Copy,

    /// Coerce a builtin value to the target type.
    Builtin(Type),

    /// Transform each item of a list.
    Array(Box<Transformer>),

    /// Return `null` for a `null` input without running the inner transformer.
    Nullable(Box<Transformer>),

    /// Dispatch on the runtime type of the input. The first branch whose type
    /// matches wins; no match gives `null`.
    Multiple(Vec<(Type, Transformer)>),

    DateTimeToString(String),

    StringToDateTime(String),

    UidToString,

    StringToUid,

    /// Scalar or enum case to a case of the enum.
    EnumFromValue(TypeEnum),

    /// Case of the enum to its backing value or name, then to the target type.
    EnumToValue(TypeEnum, Type),

    /// Delegate to the mapper of a nested (source, target) pair.
    Object { source: String, target: String },

    /// Run the callback registered for the property.
    Callback(String),
}

impl Transformer {
    /// Builds the expression computing the target value from `input`.
    ///
    /// `target` reads the current value of the target property, or is `null`.
    /// Returned statements must run before the expression is evaluated.
    pub fn transform(
        &self,
        input: Expr,
        target: Expr,
        property: &str,
        scope: &mut VarScope,
    ) -> (Expr, Vec<Statement>) {
        match self {
            Transformer::Copy => (input, vec![]),
            Transformer::Builtin(ty) => (Expr::cast(input, ty), vec![]),
            Transformer::Array(item) => {
                let (output, statements) =
                    item.transform(Expr::arg(0usize), Expr::null(), property, scope);
                (Expr::map(input, Expr::block(statements, output)), vec![])
            }
            Transformer::Nullable(inner) => {
                let (value, statements) = bind_input(input, property, scope);
                let (output, inner_statements) = inner.transform(value.clone(), target, property, scope);

                let expr = Expr::cond(
                    Expr::is_not_null(value),
                    Expr::block(inner_statements, output),
                    Expr::null(),
                );
                (expr, statements)
            }
            Transformer::Multiple(branches) => {
                let (value, statements) = bind_input(input, property, scope);
                let mut expr = Expr::null();

                for (ty, transformer) in branches.iter().rev() {
                    let (output, branch_statements) =
                        transformer.transform(value.clone(), target.clone(), property, scope);

                    expr = Expr::cond(
                        Expr::is(value.clone(), ty),
                        Expr::block(branch_statements, output),
                        expr,
                    );
                }

                (expr, statements)
            }
            Transformer::DateTimeToString(format) => (
                Expr::call(Func::FormatDateTime(format.clone()), [input]),
                vec![],
            ),
            Transformer::StringToDateTime(format) => (
                Expr::call(Func::ParseDateTime(format.clone()), [input]),
                vec![],
            ),
            Transformer::UidToString => (Expr::call(Func::UidToString, [input]), vec![]),
            Transformer::StringToUid => (Expr::call(Func::UidFromString, [input]), vec![]),
            Transformer::EnumFromValue(ty) => (Expr::call(Func::EnumFrom(ty.clone()), [input]), vec![]),
            Transformer::EnumToValue(ty, target_ty) => {
                let scalar = Expr::call(Func::EnumTo(ty.clone()), [input]);

                if target_ty.is_mixed() {
                    (scalar, vec![])
                } else {
                    (Expr::cast(scalar, target_ty), vec![])
                }
            }
            Transformer::Object { source, target: target_key } => {
                let dependency = MapperDependency::new(source, target_key);
                let func = FuncMapper {
                    name: dependency.name,
                    source: dependency.source,
                    target: dependency.target,
                    property: property.to_string(),
                };
                (Expr::call_mapper(func, input, target), vec![])
            }
            Transformer::Callback(name) => (Expr::call_callback(name.clone(), input, target), vec![]),
        }
    }

    /// Mappers this transformer calls.
    pub fn dependencies(&self) -> Vec<MapperDependency> {
        match self {
            Transformer::Object { source, target } => vec![MapperDependency::new(source, target)],
            Transformer::Array(inner) | Transformer::Nullable(inner) => inner.dependencies(),
            Transformer::Multiple(branches) => branches
                .iter()
                .flat_map(|(_, transformer)| transformer.dependencies())
                .collect(),
            _ => vec![],
        }
    }

    /// Returns `true` if the output is an object that can be populated in
    /// place, so the current target value is worth reading.
    pub fn assign_by_ref(&self) -> bool {
        match self {
            Transformer::Object { .. } => true,
            Transformer::Nullable(inner) => inner.assign_by_ref(),
            _ => false,
        }
    }
}

/// Evaluates `input` once into a temporary, unless it is already trivial.
fn bind_input(input: Expr, property: &str, scope: &mut VarScope) -> (Expr, Vec<Statement>) {
    if input.is_trivial() {
        return (input, vec![]);
    }

    let var = scope.declare(property);
    (Expr::var(&var.name), vec![Statement::let_(var, input)])
}

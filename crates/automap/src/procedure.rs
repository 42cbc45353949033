//! The materialized form of a mapper.

use crate::{metadata::MapperDependency, Context};
use automap_core::{
    stmt::{Env, Expr, Host, Statement, Value},
    Result,
};

/// Name of the variable holding the source value.
pub const SOURCE: &str = "source";

/// Name of the variable holding the target being built or populated.
pub const TARGET: &str = "target";

/// An executable plan converting a source value of one type into a target of
/// another.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub identity: String,

    /// Source type key
    pub source: String,

    /// Target type key
    pub target: String,

    /// Existing instances of the target class may not be populated.
    pub target_readonly: bool,

    pub allow_readonly_target_to_populate: bool,

    /// Property values set on a newly constructed target before anything
    /// else.
    pub defaults: Vec<(String, Value)>,

    /// Constructor arguments, in parameter order. `None` if the target class
    /// has no constructor.
    pub constructor: Option<Vec<ConstructorArg>>,

    /// Properties assigned after construction, in order.
    pub properties: Vec<PropertyStatement>,

    pub dependencies: Vec<MapperDependency>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorArg {
    pub param: String,

    pub default: Option<Value>,

    /// The bound property accepts `null`.
    pub nullable: bool,

    /// How the argument is computed from the source. `None` when no source
    /// property maps to it.
    pub property: Option<PropertyStatement>,
}

/// Computes and assigns one target property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyStatement {
    pub property: String,

    /// All must hold for the property to be mapped.
    pub conditions: Vec<Condition>,

    pub statements: Vec<Statement>,

    pub output: Expr,

    /// `null` may be assigned.
    pub target_nullable: bool,

    /// Skipped when populating an existing target.
    pub target_readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The source array has the key.
    SourceHas(String),

    /// The context selects at least one of the groups.
    Groups(Vec<String>),

    /// The mapping depth is at most this value.
    MaxDepth(usize),
}

impl PropertyStatement {
    /// Returns `true` if the property is mapped for `source` under `context`.
    pub fn is_mapped(&self, source: &Value, context: &Context) -> bool {
        context.is_allowed(&self.property)
            && self
                .conditions
                .iter()
                .all(|condition| condition.holds(source, context))
    }

    /// Runs the statements, then evaluates the output.
    pub fn eval(&self, env: &mut Env, host: &mut impl Host) -> Result<Value> {
        for statement in &self.statements {
            statement.exec(env, host)?;
        }

        self.output.eval(env, host)
    }
}

impl Condition {
    pub fn holds(&self, source: &Value, context: &Context) -> bool {
        match self {
            Condition::SourceHas(key) => source.has_field(key),
            Condition::Groups(groups) => context
                .groups()
                .is_some_and(|selected| selected.iter().any(|group| groups.contains(group))),
            Condition::MaxDepth(max_depth) => context.depth() <= *max_depth,
        }
    }
}

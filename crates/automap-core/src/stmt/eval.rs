use super::{value_chrono, value_uuid, Expr, ExprArg, ExprBlock, Func, FuncMapper, Statement, Value};
use crate::{Error, Result};

/// Services the interpreter needs from the mapper running a procedure.
pub trait Host {
    /// Runs a dependency mapper on `source`, populating `target` when it is
    /// not null.
    fn call_mapper(&mut self, func: &FuncMapper, source: Value, target: Value) -> Result<Value>;

    /// Runs the callback registered under `name`.
    fn call_callback(&mut self, name: &str, source: Value, target: Value) -> Result<Value>;

    /// Returns `true` if `class` is `parent` or one of its subclasses.
    fn instance_of(&self, class: &str, parent: &str) -> bool {
        class == parent
    }
}

/// A host for constant evaluation. Mapper and callback calls fail.
#[derive(Debug, Default)]
pub struct ConstHost;

impl Host for ConstHost {
    fn call_mapper(&mut self, func: &FuncMapper, _: Value, _: Value) -> Result<Value> {
        Err(Error::expression_evaluation_failed(format!(
            "mapper `{}` cannot be called in a constant expression",
            func.name
        )))
    }

    fn call_callback(&mut self, name: &str, _: Value, _: Value) -> Result<Value> {
        Err(Error::expression_evaluation_failed(format!(
            "callback `{name}` cannot be called in a constant expression"
        )))
    }
}

/// Variables bound while a procedure runs.
///
/// Later bindings shadow earlier ones. Bindings made inside a block are
/// dropped when the block ends.
#[derive(Debug, Default)]
pub struct Env {
    vars: Vec<(String, Value)>,
}

impl Env {
    pub fn new() -> Env {
        Env::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Env {
        self.bind(name, value);
        self
    }

    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars
            .iter()
            .rev()
            .find(|(var, _)| var == name)
            .map(|(_, value)| value)
    }

    fn mark(&self) -> usize {
        self.vars.len()
    }

    fn truncate(&mut self, mark: usize) {
        self.vars.truncate(mark);
    }
}

enum ScopeStack<'a> {
    Root,
    Scope {
        args: &'a [Value],
        parent: &'a ScopeStack<'a>,
    },
}

impl Statement {
    /// Executes the statement, binding its variable in `env`.
    pub fn exec(&self, env: &mut Env, host: &mut impl Host) -> Result<()> {
        self.exec_ref(&ScopeStack::Root, env, host)
    }

    fn exec_ref(&self, scope: &ScopeStack<'_>, env: &mut Env, host: &mut impl Host) -> Result<()> {
        match self {
            Statement::Let(stmt) => {
                let value = stmt.expr.eval_ref(scope, env, host)?;
                env.bind(&stmt.var.name, value);
                Ok(())
            }
        }
    }
}

impl Expr {
    pub fn eval(&self, env: &mut Env, host: &mut impl Host) -> Result<Value> {
        self.eval_ref(&ScopeStack::Root, env, host)
    }

    pub fn eval_bool(&self, env: &mut Env, host: &mut impl Host) -> Result<bool> {
        self.eval_ref_bool(&ScopeStack::Root, env, host)
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(&mut Env::new(), &mut ConstHost)
    }

    fn eval_ref(&self, scope: &ScopeStack<'_>, env: &mut Env, host: &mut impl Host) -> Result<Value> {
        match self {
            Expr::Arg(expr_arg) => match scope.resolve_arg(expr_arg) {
                Some(value) => Ok(value.clone()),
                None => Err(Error::expression_evaluation_failed(
                    "failed to resolve argument",
                )),
            },
            Expr::Block(expr_block) => {
                let mark = env.mark();
                let res = expr_block.eval_ref(scope, env, host);
                env.truncate(mark);
                res
            }
            Expr::Call(expr_call) => {
                if expr_call.args.len() != expr_call.func.arity() {
                    return Err(Error::expression_evaluation_failed(format!(
                        "{:?} expects {} argument(s), got {}",
                        expr_call.func,
                        expr_call.func.arity(),
                        expr_call.args.len()
                    )));
                }

                let mut args = Vec::with_capacity(expr_call.args.len());
                for arg in &expr_call.args {
                    args.push(arg.eval_ref(scope, env, host)?);
                }
                let mut args = args.into_iter();
                let mut next = || args.next().unwrap_or_default();

                match &expr_call.func {
                    Func::Cast(ty) => ty.cast(next()),
                    Func::FormatDateTime(format) => value_chrono::format_date_time(next(), format),
                    Func::ParseDateTime(format) => value_chrono::parse_date_time(next(), format),
                    Func::UidToString => value_uuid::uid_to_string(next()),
                    Func::UidFromString => value_uuid::uid_from_string(next()),
                    Func::EnumFrom(ty) => ty.cast(next()),
                    Func::EnumTo(ty) => ty.to_scalar(next()),
                    Func::Mapper(func) => {
                        let source = next();
                        let target = next();
                        host.call_mapper(func, source, target)
                    }
                    Func::Callback(name) => {
                        let source = next();
                        let target = next();
                        host.call_callback(name, source, target)
                    }
                }
            }
            Expr::Cond(expr_cond) => {
                if expr_cond.cond.eval_ref_bool(scope, env, host)? {
                    expr_cond.then.eval_ref(scope, env, host)
                } else {
                    expr_cond.otherwise.eval_ref(scope, env, host)
                }
            }
            Expr::Field(expr_field) => {
                let base = expr_field.base.eval_ref(scope, env, host)?;

                base.field(&expr_field.field).ok_or_else(|| {
                    Error::expression_evaluation_failed(format!(
                        "cannot read field `{}` of {}",
                        expr_field.field,
                        base.kind_name()
                    ))
                })
            }
            Expr::Is(expr_is) => {
                let value = expr_is.expr.eval_ref(scope, env, host)?;
                let host: &_ = host;
                let is = expr_is
                    .ty
                    .is_instance(&value, &|class, parent| host.instance_of(class, parent));
                Ok(is.into())
            }
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval_ref(scope, env, host)?;
                Ok((value.is_null() != expr_is_null.negate).into())
            }
            Expr::Map(expr_map) => {
                let items = match expr_map.base.eval_ref(scope, env, host)? {
                    Value::Null => return Ok(Value::Null),
                    Value::List(items) => items,
                    base => {
                        return Err(Error::expression_evaluation_failed(format!(
                            "Map base must evaluate to a list, got {}",
                            base.kind_name()
                        )))
                    }
                };

                let mut ret = Vec::with_capacity(items.len());

                for item in items {
                    let args = [item];
                    let scope = scope.scope(&args);
                    ret.push(expr_map.map.eval_ref(&scope, env, host)?);
                }

                Ok(Value::List(ret))
            }
            Expr::Value(value) => Ok(value.clone()),
            Expr::Var(expr_var) => match env.get(&expr_var.name) {
                Some(value) => Ok(value.clone()),
                None => Err(Error::expression_evaluation_failed(format!(
                    "variable `{}` is not defined",
                    expr_var.name
                ))),
            },
        }
    }

    fn eval_ref_bool(&self, scope: &ScopeStack<'_>, env: &mut Env, host: &mut impl Host) -> Result<bool> {
        match self.eval_ref(scope, env, host)? {
            Value::Bool(ret) => Ok(ret),
            _ => Err(Error::expression_evaluation_failed(
                "expected boolean value",
            )),
        }
    }
}

impl ExprBlock {
    fn eval_ref(&self, scope: &ScopeStack<'_>, env: &mut Env, host: &mut impl Host) -> Result<Value> {
        for stmt in &self.statements {
            stmt.exec_ref(scope, env, host)?;
        }

        self.expr.eval_ref(scope, env, host)
    }
}

impl ScopeStack<'_> {
    fn resolve_arg(&self, expr_arg: &ExprArg) -> Option<&Value> {
        let mut nesting = expr_arg.nesting;
        let mut scope = self;

        while nesting > 0 {
            nesting -= 1;

            scope = match scope {
                ScopeStack::Root => return None,
                ScopeStack::Scope { parent, .. } => parent,
            };
        }

        match scope {
            ScopeStack::Root => None,
            ScopeStack::Scope { args, .. } => args.get(expr_arg.position),
        }
    }

    fn scope<'child>(&'child self, args: &'child [Value]) -> ScopeStack<'child> {
        ScopeStack::Scope { args, parent: self }
    }
}

mod eval;
pub use eval::{ConstHost, Env, Host};

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_block;
pub use expr_block::ExprBlock;

mod expr_call;
pub use expr_call::{ExprCall, Func, FuncMapper};

mod expr_cond;
pub use expr_cond::ExprCond;

mod expr_field;
pub use expr_field::ExprField;

mod expr_is;
pub use expr_is::ExprIs;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_map;
pub use expr_map::ExprMap;

mod expr_var;
pub use expr_var::ExprVar;

mod num;

mod object;
pub use object::Object;

mod statement;
pub use statement::{Let, Statement};

mod ty;
pub use ty::{Type, TypeKind};

mod ty_enum;
pub use ty_enum::{EnumCase, TypeEnum};

mod ty_union;
pub use ty_union::TypeUnion;

mod value;
pub use value::{Value, ValueMap};

mod value_chrono;
pub use value_chrono::DEFAULT_DATE_TIME_FORMAT;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_uuid;

mod var_scope;
pub use var_scope::VarScope;

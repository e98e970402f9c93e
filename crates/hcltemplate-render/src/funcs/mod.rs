//! The built-in function registry.
//!
//! A fixed, immutable table mapping the 23 function names templates may
//! call to their implementations. The table is built once per run and
//! never mutated afterwards: no name can be added, removed, or shadowed
//! by input data.
//!
//! Implementations are plain `&[Value]` functions (tested directly) with
//! thin adapters matching the engine's calling convention. Each function
//! enforces its own arity and argument types and reports misuse as an
//! error message, which the engine surfaces through evaluation
//! diagnostics.

use hcl::eval::{Context, FuncArgs, FuncDef, ParamType};
use hcl::Value;

mod collections;
mod conversion;
mod datetime;
mod encoding;
mod format;
mod numbers;
mod regexp;
mod strings;

type Func = fn(FuncArgs) -> Result<Value, String>;

/// Every function name the registry exposes.
pub const NAMES: [&str; 23] = [
    "abs",
    "can",
    "csvdecode",
    "coalesce",
    "concat",
    "convert",
    "format",
    "formatdate",
    "int",
    "jsondecode",
    "jsonencode",
    "length",
    "lower",
    "max",
    "min",
    "range",
    "regex",
    "regexall",
    "reverse",
    "strlen",
    "substr",
    "try",
    "upper",
];

/// Declares the full registry on `ctx`.
pub fn declare_all(ctx: &mut Context) {
    for (name, def) in registry() {
        ctx.declare_func(name, def);
    }
}

/// Builds the fixed name → definition table.
pub fn registry() -> Vec<(&'static str, FuncDef)> {
    vec![
        ("abs", fixed(1, numbers::abs)),
        ("can", nullable_fixed(1, conversion::can)),
        ("csvdecode", fixed(1, encoding::csvdecode)),
        ("coalesce", nullable_variadic(1, collections::coalesce)),
        ("concat", variadic(1, collections::concat)),
        ("convert", fixed(2, conversion::convert)),
        ("format", variadic(1, format::format)),
        ("formatdate", fixed(2, datetime::formatdate)),
        ("int", fixed(1, numbers::int)),
        ("jsondecode", fixed(1, encoding::jsondecode)),
        ("jsonencode", nullable_fixed(1, encoding::jsonencode)),
        ("length", fixed(1, collections::length)),
        ("lower", fixed(1, strings::lower)),
        ("max", variadic(1, numbers::max)),
        ("min", variadic(1, numbers::min)),
        ("range", variadic(1, numbers::range)),
        ("regex", fixed(2, regexp::regex)),
        ("regexall", fixed(2, regexp::regexall)),
        ("reverse", fixed(1, collections::reverse)),
        ("strlen", fixed(1, strings::strlen)),
        ("substr", fixed(3, strings::substr)),
        ("try", nullable_variadic(1, conversion::try_fn)),
        ("upper", fixed(1, strings::upper)),
    ]
}

/// Definition with exactly `arity` arguments.
fn fixed(arity: usize, func: Func) -> FuncDef {
    let mut builder = FuncDef::builder();
    for _ in 0..arity {
        builder = builder.param(ParamType::Any);
    }
    builder.build(func)
}

/// Definition with `arity` required arguments plus unbounded extras.
fn variadic(arity: usize, func: Func) -> FuncDef {
    let mut builder = FuncDef::builder();
    for _ in 0..arity {
        builder = builder.param(ParamType::Any);
    }
    builder.variadic_param(ParamType::Any).build(func)
}

/// Like [`fixed`], but the arguments may be null.
fn nullable_fixed(arity: usize, func: Func) -> FuncDef {
    let mut builder = FuncDef::builder();
    for _ in 0..arity {
        builder = builder.param(ParamType::Nullable(Box::new(ParamType::Any)));
    }
    builder.build(func)
}

/// Like [`variadic`], but the arguments may be null (`coalesce`, `try`).
fn nullable_variadic(arity: usize, func: Func) -> FuncDef {
    let mut builder = FuncDef::builder();
    for _ in 0..arity {
        builder = builder.param(ParamType::Nullable(Box::new(ParamType::Any)));
    }
    builder
        .variadic_param(ParamType::Nullable(Box::new(ParamType::Any)))
        .build(func)
}

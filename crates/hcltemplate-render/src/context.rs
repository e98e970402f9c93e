//! Evaluation context construction.

use hcl::eval::Context;
use hcl::{Map, Value};

use crate::funcs;

/// Builds the evaluation context for one run.
///
/// Every top-level field of the input object becomes a variable (nested
/// objects and lists stay nested, nothing is flattened) and the full
/// function registry is declared alongside. Variables and functions live
/// in separate namespaces, so a variable named `upper` cannot shadow the
/// function. Deterministic: the same input object always produces the
/// same context.
///
/// Field names that are not valid HCL identifiers are skipped; no
/// template expression could reference them.
pub fn build(fields: &Map<String, Value>) -> Context<'static> {
    let mut ctx = Context::new();
    for (name, value) in fields {
        if is_identifier(name) {
            ctx.declare_var(name.as_str(), value.clone());
        }
    }
    funcs::declare_all(&mut ctx);
    ctx
}

/// True if `name` is a valid HCL identifier: a letter or underscore
/// followed by letters, digits, underscores, or hyphens.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

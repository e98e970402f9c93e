//! Template rendering for `hcltemplate`.
//!
//! This crate owns everything between "raw input bytes" and "rendered
//! string": decoding the JSON payload into a value tree ([`json`]),
//! building the evaluation context from it ([`context`]), the registry of
//! built-in functions templates may call ([`funcs`]), the shared value
//! coercion rules ([`value`]), and the thin integration with the `hcl`
//! template engine itself ([`template`]).
//!
//! The template grammar (literal text with `${ expression }`
//! interpolations and `%{ directive }` control structures) is an external
//! compatibility contract implemented by the `hcl` crate; nothing in this
//! crate alters it.

pub use hcl;

pub mod context;
pub mod funcs;
pub mod json;
pub mod template;
pub mod value;

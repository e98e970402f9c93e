//! `hcltemplate` is a filter program for rendering JSON input to textual
//! output using the HCL template language.
//!
//! It reads a template from the file named on the command line, a JSON
//! object from standard input, and writes the evaluated template to
//! standard output. The JSON object's top-level keys become template
//! variables, alongside a fixed set of built-in functions. Problems at
//! any stage are collected as diagnostics and rendered together on
//! standard error.
//!
//! ```text
//! $ echo '{"name": "World"}' | hcltemplate greeting.tmpl
//! Hello, World!
//! ```

pub mod cli;
pub mod input;
pub mod pipeline;

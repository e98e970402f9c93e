//! Integration with the `hcl` template engine.
//!
//! Two operations, both translating engine errors into diagnostics:
//! [`parse`] turns template source into an evaluable [`Template`], and
//! [`evaluate`] renders it against an evaluation context. Parsing never
//! partially succeeds, and evaluation is a pure function of the template
//! and the context; all I/O happens before or after these calls.
//!
//! The engine folds string coercion into evaluation: interpolated numbers
//! and booleans render in canonical form, while interpolating a value
//! with no string form fails evaluation.

use std::str::FromStr;

use hcl::eval::{Context, Evaluate};
use hcl::Template;
use hcltemplate_diag::Diagnostic;

/// Parses template source read from `filename`.
pub fn parse(src: &str, filename: &str) -> Result<Template, Diagnostic> {
    Template::from_str(src).map_err(|err| {
        Diagnostic::error(
            "Invalid template syntax",
            format!("Could not parse {filename}: {err}."),
        )
    })
}

/// Evaluates a parsed template against `ctx`.
pub fn evaluate(template: &Template, ctx: &Context) -> Result<String, Diagnostic> {
    template
        .evaluate(ctx)
        .map_err(|err| Diagnostic::error("Error evaluating template", format!("{err}.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context, json};

    fn render(template_src: &str, json_src: &str) -> Result<String, Diagnostic> {
        let value = json::decode(json_src.as_bytes())?;
        let fields = json::ensure_object(&value)?;
        let ctx = context::build(fields);
        let template = parse(template_src, "test.tmpl")?;
        evaluate(&template, &ctx)
    }

    #[test]
    fn test_interpolation() {
        let out = render("Hello, ${name}!", r#"{"name": "World"}"#).unwrap();
        assert_eq!(out, "Hello, World!");
    }

    #[test]
    fn test_literal_template() {
        let out = render("no expressions here", "{}").unwrap();
        assert_eq!(out, "no expressions here");
    }

    #[test]
    fn test_number_interpolation_is_canonical() {
        let out = render("${count}", r#"{"count": 42}"#).unwrap();
        assert_eq!(out, "42");
    }

    #[test]
    fn test_nested_attribute_access() {
        let out = render("${user.name}", r#"{"user": {"name": "ada"}}"#).unwrap();
        assert_eq!(out, "ada");
    }

    #[test]
    fn test_function_call() {
        let out = render("${upper(name)}", r#"{"name": "abc"}"#).unwrap();
        assert_eq!(out, "ABC");
    }

    #[test]
    fn test_for_directive() {
        let out = render(
            "%{ for s in items }${s},%{ endfor }",
            r#"{"items": ["a", "b", "c"]}"#,
        )
        .unwrap();
        assert_eq!(out, "a,b,c,");
    }

    #[test]
    fn test_if_directive() {
        let out = render(
            "%{ if ready }go%{ else }wait%{ endif }",
            r#"{"ready": true}"#,
        )
        .unwrap();
        assert_eq!(out, "go");
    }

    #[test]
    fn test_undefined_variable_reports_name() {
        let diag = render("${nope}", "{}").unwrap_err();
        assert_eq!(diag.summary, "Error evaluating template");
        assert!(diag.detail.contains("nope"), "detail: {}", diag.detail);
    }

    #[test]
    fn test_parse_error() {
        let diag = parse("${ unclosed", "test.tmpl").unwrap_err();
        assert_eq!(diag.summary, "Invalid template syntax");
        assert!(diag.detail.contains("test.tmpl"));
    }

    #[test]
    fn test_function_misuse_surfaces_as_evaluation_error() {
        let diag = render("${length(name)}", r#"{"name": "abc"}"#).unwrap_err();
        assert_eq!(diag.summary, "Error evaluating template");
    }

    #[test]
    fn test_same_input_same_output() {
        let template = "${greeting}, ${upper(name)}!";
        let data = r#"{"greeting": "Hi", "name": "sam"}"#;
        assert_eq!(render(template, data).unwrap(), render(template, data).unwrap());
    }
}

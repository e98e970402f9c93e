//! JSON payload decoding and input-shape validation.

use hcl::{Map, Value};
use hcltemplate_diag::{Diagnostic, SourceRange};
use serde_json::error::Category;

/// Name stdin's contents are registered under in the source map.
pub const STDIN_NAME: &str = "<stdin>";

/// Decodes the stdin payload into a value tree.
///
/// Syntax errors carry a source range pointing at the position reported by
/// the decoder, so the reporter can show a snippet of the offending JSON.
pub fn decode(bytes: &[u8]) -> Result<Value, Diagnostic> {
    serde_json::from_slice(bytes).map_err(|err| {
        let mut diag = Diagnostic::error(
            "Cannot read input data",
            format!("Could not read JSON input data from stdin: {err}."),
        );
        if matches!(err.classify(), Category::Syntax | Category::Eof) && err.line() > 0 {
            diag = diag.with_subject(SourceRange::new(
                STDIN_NAME,
                err.line(),
                err.column().max(1),
            ));
        }
        diag
    })
}

/// Checks that the decoded root is an object, the only input shape the
/// pipeline accepts, and returns its fields.
pub fn ensure_object(value: &Value) -> Result<&Map<String, Value>, Diagnostic> {
    value.as_object().ok_or_else(|| {
        Diagnostic::error(
            "Invalid input data",
            "Input data on stdin must be a JSON object.",
        )
    })
}

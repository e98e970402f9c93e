//! Diagnostics for the `hcltemplate` pipeline.
//!
//! Every failure in the rendering pipeline (an unreadable file, malformed
//! JSON, a template syntax error, an evaluation error) is modeled as a
//! [`Diagnostic`] record rather than a Rust error that unwinds the program.
//! Diagnostics are appended to an ordered [`Diagnostics`] collection and
//! rendered exactly once at the end of the run by [`DiagnosticWriter`],
//! which adapts its line width and color use to the terminal it is writing
//! to.
//!
//! Source snippets are rendered from a [`SourceMap`], a small filename →
//! source-text registry owned by the run and passed explicitly to the
//! writer.

mod diagnostic;
mod sources;
mod writer;

pub use diagnostic::{Diagnostic, Diagnostics, Severity, SourceRange};
pub use sources::SourceMap;
pub use writer::{stderr_layout, DiagnosticWriter, FALLBACK_WIDTH};

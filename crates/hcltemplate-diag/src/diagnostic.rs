//! Core diagnostic types.
//!
//! A [`Diagnostic`] carries a severity, a short summary, a longer detail
//! paragraph, and optionally the source position it refers to. The
//! [`Diagnostics`] collection is append-only: stages of the pipeline add to
//! it and never remove or reorder entries, so the rendered output always
//! reflects the order in which problems were found.

use std::fmt;

/// How severe a diagnostic is.
///
/// Only error-severity diagnostics affect the process exit status; warnings
/// are rendered but leave the exit status at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A problem that prevents the pipeline from producing output.
    Error,
    /// A problem worth reporting that does not stop the pipeline.
    Warning,
}

impl Severity {
    /// Returns the label used when rendering, e.g. `"Error"`.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

/// A position within a named source, for snippet rendering.
///
/// Line and column are 1-based, the way parsers and editors report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRange {
    /// Name the source was registered under in the [`SourceMap`](crate::SourceMap).
    pub filename: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl SourceRange {
    /// Creates a range pointing at `line`/`column` of `filename`.
    pub fn new(filename: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }
}

/// A single structured problem report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether this diagnostic fails the run.
    pub severity: Severity,
    /// One-line description, e.g. `Cannot read template file`.
    pub summary: String,
    /// Full explanation, wrapped to the terminal width when rendered.
    pub detail: String,
    /// Source position this diagnostic refers to, if known.
    pub subject: Option<SourceRange>,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            subject: None,
        }
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            subject: None,
        }
    }

    /// Attaches the source position the diagnostic refers to.
    pub fn with_subject(mut self, subject: SourceRange) -> Self {
        self.subject = Some(subject);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}; {}", self.severity.label(), self.summary, self.detail)
    }
}

/// An ordered, append-only collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Appends every diagnostic from `other`, preserving order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// True if any entry has error severity.
    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Registry of named sources for snippet rendering.

use std::collections::HashMap;

/// Maps source names (the template filename, `<stdin>`) to their text.
///
/// The map is built up by the pipeline as inputs are read and handed to the
/// [`DiagnosticWriter`](crate::DiagnosticWriter) so diagnostics that carry a
/// [`SourceRange`](crate::SourceRange) can show the offending line. It is a
/// plain value owned by a single run; there is no global state.
#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    files: HashMap<String, String>,
}

impl SourceMap {
    /// Creates an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }

    /// Returns the full text registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Returns the 1-based `line` of the source registered under `name`.
    pub fn line(&self, name: &str, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.get(name)?.lines().nth(line - 1)
    }
}

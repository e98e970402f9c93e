//! Terminal renderer for diagnostics.
//!
//! The writer is presentational only: it never changes diagnostic content
//! or order. Layout per diagnostic is a severity-colored header, an
//! optional source snippet when the diagnostic points into a registered
//! source, and the detail text word-wrapped to the configured width:
//!
//! ```text
//! Error: Invalid input data
//!
//!   on <stdin> line 1:
//!    1: [1, 2, 3]
//!       ^
//!
//! Input data on stdin must be a JSON object.
//! ```

use std::io::{self, Write};

use console::Style;
use unicode_width::UnicodeWidthChar;

use crate::{Diagnostic, Diagnostics, Severity, SourceMap};

/// Width used when the terminal width cannot be detected.
pub const FALLBACK_WIDTH: usize = 72;

/// Narrowest width the writer will wrap to, however small the terminal.
const MIN_WIDTH: usize = 16;

/// Detects the layout for writing to the current terminal.
///
/// Returns `(width, color)`. Failure to detect a width means output is
/// redirected, so color is disabled and [`FALLBACK_WIDTH`] is used.
pub fn stderr_layout() -> (usize, bool) {
    match terminal_size::terminal_size() {
        Some((w, _)) => (w.0 as usize, true),
        None => (FALLBACK_WIDTH, false),
    }
}

/// Renders diagnostics to a stream with width-aware, optionally colorized
/// formatting.
pub struct DiagnosticWriter<'a> {
    sources: &'a SourceMap,
    width: usize,
    color: bool,
}

impl<'a> DiagnosticWriter<'a> {
    /// Creates a writer rendering snippets out of `sources`.
    pub fn new(sources: &'a SourceMap, width: usize, color: bool) -> Self {
        Self {
            sources,
            width: width.max(MIN_WIDTH),
            color,
        }
    }

    /// Writes every diagnostic in order.
    pub fn write_all(&self, out: &mut dyn Write, diags: &Diagnostics) -> io::Result<()> {
        for diag in diags {
            self.write_one(out, diag)?;
        }
        Ok(())
    }

    /// Writes a single diagnostic.
    pub fn write_one(&self, out: &mut dyn Write, diag: &Diagnostic) -> io::Result<()> {
        let header_style = match diag.severity {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow().bold(),
        };
        writeln!(
            out,
            "{} {}",
            self.paint(header_style, &format!("{}:", diag.severity.label())),
            self.paint(Style::new().bold(), &diag.summary)
        )?;
        writeln!(out)?;

        if let Some(subject) = &diag.subject {
            if let Some(line) = self.sources.line(&subject.filename, subject.line) {
                writeln!(out, "  on {} line {}:", subject.filename, subject.line)?;
                let gutter = format!(" {:>3}: ", subject.line);
                writeln!(out, "{}{}", gutter, line)?;
                writeln!(out, "{}^", " ".repeat(gutter.len() + caret_offset(line, subject.column)))?;
                writeln!(out)?;
            }
        }

        if !diag.detail.is_empty() {
            for wrapped in wrap(&diag.detail, self.width) {
                writeln!(out, "{}", wrapped)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Display width of the part of `line` before the 1-based `column`.
fn caret_offset(line: &str, column: usize) -> usize {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Word-wraps `text` to `width` columns, keeping existing line breaks.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceRange;

    fn render(diags: &Diagnostics, sources: &SourceMap, width: usize, color: bool) -> String {
        let writer = DiagnosticWriter::new(sources, width, color);
        let mut buf = Vec::new();
        writer.write_all(&mut buf, diags).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_plain_header_and_detail() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error(
            "Cannot read template file",
            "Could not read x.tmpl: No such file or directory.",
        ));

        let out = render(&diags, &SourceMap::new(), 72, false);
        assert!(out.starts_with("Error: Cannot read template file\n"));
        assert!(out.contains("Could not read x.tmpl"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_color_emits_ansi() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error("Invalid input data", "Nope."));

        let out = render(&diags, &SourceMap::new(), 72, true);
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_snippet_with_caret() {
        let mut sources = SourceMap::new();
        sources.insert("<stdin>", "{\"a\": nope}");

        let mut diags = Diagnostics::new();
        diags.push(
            Diagnostic::error("Cannot read input data", "Bad JSON.")
                .with_subject(SourceRange::new("<stdin>", 1, 7)),
        );

        let out = render(&diags, &sources, 72, false);
        assert!(out.contains("  on <stdin> line 1:\n"));
        assert!(out.contains("   1: {\"a\": nope}\n"));
        // Gutter is 6 columns wide; caret lands under column 7 of the line.
        assert!(out.contains(&format!("{}^\n", " ".repeat(6 + 6))));
    }

    #[test]
    fn test_missing_source_skips_snippet() {
        let mut diags = Diagnostics::new();
        diags.push(
            Diagnostic::error("Invalid template syntax", "Unclosed interpolation.")
                .with_subject(SourceRange::new("gone.tmpl", 3, 1)),
        );

        let out = render(&diags, &SourceMap::new(), 72, false);
        assert!(!out.contains("on gone.tmpl"));
        assert!(out.contains("Unclosed interpolation."));
    }

    #[test]
    fn test_wrap_width() {
        let detail = "one two three four five six seven eight nine ten";
        for line in wrap(detail, 20) {
            assert!(line.chars().count() <= 20, "line too long: {line:?}");
        }
        assert_eq!(wrap(detail, 200), vec![detail.to_string()]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        let lines = wrap("first paragraph\nsecond paragraph", 72);
        assert_eq!(lines, vec!["first paragraph", "second paragraph"]);
    }

    #[test]
    fn test_order_preserved_in_output() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("first summary", "a"));
        diags.push(Diagnostic::error("second summary", "b"));

        let out = render(&diags, &SourceMap::new(), 72, false);
        let first = out.find("first summary").expect("first");
        let second = out.find("second summary").expect("second");
        assert!(first < second);
    }
}

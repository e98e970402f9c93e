//! The rendering pipeline.
//!
//! A strictly linear, single-pass run: read the template file, parse it,
//! read stdin, decode the JSON, validate its shape, build the evaluation
//! context, evaluate, write the result. Any stage failure short-circuits
//! to the diagnostic reporter; diagnostics accumulated along the way are
//! always rendered together, exactly once, whether the run succeeded or
//! not. The exit status is 1 if any diagnostic has error severity and 0
//! otherwise; nothing else feeds into it.

use std::io::{self, Write};
use std::path::Path;

use hcltemplate_diag::{stderr_layout, Diagnostic, DiagnosticWriter, Diagnostics, SourceMap};
use hcltemplate_render::{context, json, template};

use crate::input;

/// Runs the whole pipeline for `template_path`, returning the process
/// exit code.
pub fn run(template_path: &Path) -> i32 {
    let mut diags = Diagnostics::new();
    let mut sources = SourceMap::new();
    let filename = template_path.display().to_string();

    let src = match input::read_template(template_path) {
        Ok(src) => src,
        Err(err) => {
            diags.push(err.into_diagnostic());
            return finish(&diags, &sources);
        }
    };
    sources.insert(&filename, &src);

    let template = match template::parse(&src, &filename) {
        Ok(template) => template,
        Err(diag) => {
            diags.push(diag);
            return finish(&diags, &sources);
        }
    };

    let payload = match input::read_stdin() {
        Ok(payload) => payload,
        Err(err) => {
            diags.push(err.into_diagnostic());
            return finish(&diags, &sources);
        }
    };
    sources.insert(json::STDIN_NAME, String::from_utf8_lossy(&payload));

    let value = match json::decode(&payload) {
        Ok(value) => value,
        Err(diag) => {
            diags.push(diag);
            return finish(&diags, &sources);
        }
    };

    let fields = match json::ensure_object(&value) {
        Ok(fields) => fields,
        Err(diag) => {
            diags.push(diag);
            return finish(&diags, &sources);
        }
    };

    let ctx = context::build(fields);

    let output = match template::evaluate(&template, &ctx) {
        Ok(output) => output,
        Err(diag) => {
            diags.push(diag);
            return finish(&diags, &sources);
        }
    };

    // The rendered string goes out verbatim: no trailing newline.
    let mut stdout = io::stdout();
    if let Err(err) = stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
    {
        diags.push(Diagnostic::error(
            "Cannot write rendered output",
            format!("Could not write the result to stdout: {err}."),
        ));
    }

    finish(&diags, &sources)
}

/// Renders every accumulated diagnostic to stderr and computes the exit
/// status.
fn finish(diags: &Diagnostics, sources: &SourceMap) -> i32 {
    let (width, color) = stderr_layout();
    let writer = DiagnosticWriter::new(sources, width, color);
    let stderr = io::stderr();
    // Nothing useful is left to do if stderr itself is unwritable.
    let _ = writer.write_all(&mut stderr.lock(), diags);

    if diags.has_errors() {
        1
    } else {
        0
    }
}

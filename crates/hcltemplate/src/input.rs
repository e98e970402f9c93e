//! Input loading for the template file and the stdin payload.
//!
//! One synchronous read per source, no retries. Errors are typed here and
//! converted into diagnostics at the pipeline boundary.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use hcltemplate_diag::Diagnostic;
use thiserror::Error;

/// A failed input read.
#[derive(Debug, Error)]
pub enum InputError {
    /// The template file could not be read (missing, unreadable, or not
    /// valid UTF-8).
    #[error("could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("could not read stdin: {source}")]
    StdinRead {
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Converts the error into the diagnostic the reporter renders.
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            InputError::FileRead { path, source } => Diagnostic::error(
                "Cannot read template file",
                format!("Could not read {}: {}.", path.display(), source),
            ),
            InputError::StdinRead { source } => Diagnostic::error(
                "Cannot read input data",
                format!("Could not read JSON input data from stdin: {source}."),
            ),
        }
    }
}

/// Reads the template file as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads all of standard input.
pub fn read_stdin() -> Result<Vec<u8>, InputError> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|source| InputError::StdinRead { source })?;
    Ok(buf)
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the location of a JSON mapping config with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping config")]
    #[diagnostic(code(remap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping config must be a JSON array")]
    #[diagnostic(
        code(remap::not_an_array),
        help("wrap the mapping entries in a top-level `[ ... ]`")
    )]
    NotAnArray {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected an array of mapping entries")]
        span: Option<SourceSpan>,
    },

    #[error("invalid mapping entry at index {index}")]
    #[diagnostic(
        code(remap::invalid_entry),
        help(
            "each entry is an object with string fields `source` and `target`, and an optional boolean `viceVersa`"
        )
    )]
    InvalidEntry {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        index: usize,
        reason: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_at(src, source.line(), source.column()).map(|at| SourceSpan::from((at, 1)));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a not-an-array error pointing at the top-level value
    pub fn not_an_array(src: &str, filename: &str) -> Box<Self> {
        let span = src
            .find(|c: char| !c.is_whitespace())
            .map(|at| SourceSpan::from((at, 1)));
        Box::new(Error::NotAnArray {
            src: NamedSource::new(filename, src.to_string()),
            span,
        })
    }

    /// Create an invalid entry error with source context
    pub fn invalid_entry(
        index: usize,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidEntry {
            src: NamedSource::new(filename, src.to_string()),
            span,
            index,
            reason: reason.into(),
        })
    }
}

/// Byte offset of a 1-based line/column pair, as reported by serde_json.
fn offset_at(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut remaining = line - 1;
    let mut offset = 0;
    for l in src.split_inclusive('\n') {
        if remaining == 0 {
            return Some(offset + column.saturating_sub(1).min(l.len()));
        }
        remaining -= 1;
        offset += l.len();
    }
    None
}

//! JSON mapping config parsing and validation.
//!
//! The config file is a JSON array of entries:
//!
//! ```json
//! [
//!   { "source": "src/models.ts", "target": "src/view-models.ts" },
//!   { "source": "src/a.ts", "target": "src/b.ts", "viceVersa": true }
//! ]
//! ```
//!
//! Validation yields [`remap_ir::MappingRequest`] values deduplicated by full
//! structural equality, with first-occurrence order preserved. All failures
//! are fatal and carry [`miette`] source labels.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod validate;

use std::path::Path;

pub use error::{Error, Result};
pub use file::ConfigFile;
use remap_ir::MappingRequest;

/// Parse and validate a mapping config file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<MappingRequest>> {
    Ok(ConfigFile::open(path)?.into_requests())
}

/// Parse and validate a mapping config from a string (uses "mapping.json" as
/// default filename)
pub fn parse_str(content: &str) -> Result<Vec<MappingRequest>> {
    parse_str_with_filename(content, "mapping.json")
}

/// Parse and validate a mapping config from a string with a custom filename
/// for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Vec<MappingRequest>> {
    validate::validate(content, filename)
}

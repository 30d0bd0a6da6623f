//! TypeScript declaration extraction.
//!
//! Scans a `.ts` declaration file and yields structured entities (name, typed
//! properties, optionality) plus the import statements found in it. The
//! scanner is deliberately shallow: it reads property signatures as written
//! instead of resolving types, which is exactly the granularity the mapping
//! inference engine works at.

mod comments;
mod imports;
mod interfaces;

use std::path::Path;

use eyre::{Context, Result};
use remap_ir::{ImportDeclaration, SchemaEntity};

/// Which declarations are visible to extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Only `export interface` declarations.
    #[default]
    ExportedOnly,
    /// Every interface declaration, exported or not.
    All,
}

/// Options controlling extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub visibility: Visibility,
}

/// The structured content of one declaration file.
#[derive(Debug, Clone, Default)]
pub struct FileSchemas {
    /// Entities in declaration order.
    pub entities: Vec<SchemaEntity>,
    /// Import statements in source order.
    pub imports: Vec<ImportDeclaration>,
}

impl FileSchemas {
    /// Names of the extracted entities, in declaration order.
    pub fn entity_names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name.clone()).collect()
    }
}

/// Extract entities and imports from a declaration source string.
///
/// `file` is the location recorded on each import declaration; it is what
/// relative specifiers are later resolved against.
pub fn extract_str(src: &str, file: &str, options: ExtractOptions) -> FileSchemas {
    let stripped = comments::strip_comments(src);
    FileSchemas {
        entities: interfaces::scan_interfaces(&stripped, options.visibility),
        imports: imports::scan_imports(&stripped, file),
    }
}

/// Extract entities and imports from a declaration file on disk.
pub fn extract_file(path: impl AsRef<Path>, options: ExtractOptions) -> Result<FileSchemas> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read declaration file '{}'", path.display()))?;
    Ok(extract_str(&src, &path.display().to_string(), options))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_extract_file_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.ts");
        fs::write(&path, "export interface User { id: number }\n").unwrap();

        let schemas = extract_file(&path, ExtractOptions::default()).unwrap();

        assert_eq!(schemas.entity_names(), vec!["User"]);
    }

    #[test]
    fn test_extract_file_missing_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.ts");

        assert!(extract_file(&path, ExtractOptions::default()).is_err());
    }
}

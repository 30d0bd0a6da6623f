//! Import statements collected while scanning declaration files.

/// An import statement found in a declaration source file.
///
/// Equality is structural so that identical statements collected from
/// repeated scans of the same file deduplicate by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDeclaration {
    /// Location of the file the statement was found in.
    pub file: String,
    /// The statement text as written.
    pub raw: String,
    /// The quoted module specifier.
    pub specifier: String,
    /// Whether the specifier is relative (starts with `.`).
    pub relative: bool,
}

//! Import synthesis, rewriting, and run-wide deduplication.

use indexmap::IndexSet;
use remap_core::paths;
use remap_ir::ImportDeclaration;

/// Builder for a named TypeScript import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Build the import as a statement string.
    pub fn build(&self) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.named.join(", "),
            self.from
        )
    }
}

/// Deduplicating collector for the artifact's import block.
///
/// Dedup is by exact final statement text; the first occurrence wins and
/// insertion order is preserved across the whole run.
#[derive(Debug)]
pub struct ImportAggregator {
    output: String,
    statements: IndexSet<String>,
}

impl ImportAggregator {
    /// Create an aggregator producing specifiers valid from `output`.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            statements: IndexSet::new(),
        }
    }

    /// Synthesize the named import covering the entities extracted from one
    /// declaration file. Skipped when the file declared nothing visible.
    pub fn add_entity_import(&mut self, file: &str, names: &[String]) {
        if names.is_empty() {
            return;
        }
        let mut import = Import::new(paths::relative(&self.output, file));
        for name in names {
            import = import.named(name);
        }
        self.statements.insert(import.build());
    }

    /// Fold in the statements collected while scanning a declaration file,
    /// rewriting relative specifiers so they stay valid from the output
    /// location.
    pub fn add_declarations(&mut self, decls: &[ImportDeclaration]) {
        for decl in decls {
            self.statements.insert(rewrite(decl, &self.output));
        }
    }

    /// Number of distinct statements collected so far.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Finish, yielding the statements in first-occurrence order.
    pub fn into_statements(self) -> Vec<String> {
        self.statements.into_iter().collect()
    }
}

/// Re-express one scanned import from the output location.
///
/// A relative specifier is resolved against its declaring file's directory
/// first; non-relative specifiers are location-independent and pass through
/// unchanged.
fn rewrite(decl: &ImportDeclaration, output: &str) -> String {
    if !decl.relative {
        return decl.raw.clone();
    }
    let resolved = paths::join(&decl.file, &decl.specifier);
    let specifier = paths::relative(output, &resolved);
    decl.raw.replacen(&decl.specifier, &specifier, 1)
}

//! Import statement scanning.

use remap_core::paths;
use remap_ir::ImportDeclaration;

use crate::interfaces::is_ident_char;

/// An import statement that spans more lines than this is abandoned as
/// malformed rather than swallowing the rest of the file.
const MAX_STATEMENT_LINES: usize = 16;

/// Scan a comment-stripped source for import statements.
///
/// `file` is recorded as the declaring location on every statement found.
pub(crate) fn scan_imports(src: &str, file: &str) -> Vec<ImportDeclaration> {
    let mut imports = Vec::new();
    let mut buffer: Option<String> = None;
    let mut buffered_lines = 0usize;

    for line in src.lines() {
        let trimmed = line.trim();
        match &mut buffer {
            None => {
                if !starts_import(trimmed) {
                    continue;
                }
                buffer = Some(trimmed.to_string());
                buffered_lines = 1;
            }
            Some(stmt) => {
                stmt.push('\n');
                stmt.push_str(trimmed);
                buffered_lines += 1;
            }
        }

        if let Some(stmt) = buffer.take() {
            if let Some(specifier) = extract_specifier(&stmt) {
                imports.push(ImportDeclaration {
                    file: file.to_string(),
                    raw: stmt,
                    relative: paths::is_relative(&specifier),
                    specifier,
                });
            } else if buffered_lines < MAX_STATEMENT_LINES {
                buffer = Some(stmt);
            }
        }
    }
    imports
}

fn starts_import(line: &str) -> bool {
    line == "import"
        || line.starts_with("import ")
        || line.starts_with("import{")
        || line.starts_with("import\"")
        || line.starts_with("import'")
}

/// Extract the quoted module specifier from a complete import statement.
///
/// Returns `None` while the statement is still incomplete (no closed
/// specifier yet), which is what drives multi-line accumulation.
fn extract_specifier(stmt: &str) -> Option<String> {
    let after = match find_word(stmt, "from") {
        Some(at) => stmt[at + "from".len()..].trim_start(),
        // side-effect import: `import "./polyfill"`
        None => stmt.strip_prefix("import")?.trim_start(),
    };

    let quote = after.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let rest = &after[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

/// First occurrence of `word` with identifier boundaries on both sides.
fn find_word(s: &str, word: &str) -> Option<usize> {
    let mut search = 0;
    while let Some(rel) = s[search..].find(word) {
        let at = search + rel;
        let end = at + word.len();
        let before_ok = s[..at].chars().next_back().is_none_or(|c| !is_ident_char(c));
        let after_ok = s[end..].chars().next().is_none_or(|c| !is_ident_char(c));
        if before_ok && after_ok {
            return Some(at);
        }
        search = end;
    }
    None
}

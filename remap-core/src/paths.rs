//! Pure location arithmetic for import-path rewriting.
//!
//! All functions here are purely textual: callers resolve paths against the
//! process working directory before they reach this module, so two locations
//! are always comparable without touching the filesystem.

/// A path is relative iff its text starts with `.`.
pub fn is_relative(path: &str) -> bool {
    path.starts_with('.')
}

/// Normalize separators to forward slashes, the only form valid in an
/// import specifier.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Directory portion of `path`: everything before the final slash.
fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Split into components, collapsing `.` and resolving `..` against
/// preceding components. Unresolvable `..` components are kept.
fn components(path: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(out.last(), Some(&"..")) || out.is_empty() {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            _ => out.push(part),
        }
    }
    out
}

/// Resolve `to` as if specified relative to the directory containing `from`.
pub fn join(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);
    let base = dirname(&from);
    let absolute = base.starts_with('/');

    let joined = components(&format!("{}/{}", base, to)).join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Compute `to` relative to the directory containing `from`.
///
/// The result uses forward slashes and always starts with `.` so it is a
/// valid relative import specifier.
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);
    let base = components(dirname(&from));
    let target = components(&to);

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; base.len() - common];
    parts.extend(&target[common..]);

    let joined = parts.join("/");
    if is_relative(&joined) {
        joined
    } else {
        format!("./{}", joined)
    }
}

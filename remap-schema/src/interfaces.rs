//! Interface declaration scanning.

use remap_ir::{PropertyDescriptor, SchemaEntity};

use crate::Visibility;

pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Scan a comment-stripped source for interface declarations.
pub(crate) fn scan_interfaces(src: &str, visibility: Visibility) -> Vec<SchemaEntity> {
    let mut entities = Vec::new();
    let mut search = 0;

    while let Some(rel) = src[search..].find("interface") {
        let at = search + rel;
        let end = at + "interface".len();
        search = end;

        let before_ok = src[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c));
        let after_ok = src[end..].chars().next().is_some_and(char::is_whitespace);
        if !before_ok || !after_ok {
            continue;
        }
        if visibility == Visibility::ExportedOnly && !preceded_by_export(src, at) {
            continue;
        }

        let ws = src[end..].len() - src[end..].trim_start().len();
        let name_start = end + ws;
        let name: String = src[name_start..]
            .chars()
            .take_while(|&c| is_ident_char(c))
            .collect();
        if name.is_empty() {
            continue;
        }

        let mut pos = name_start + name.len();
        pos = skip_type_params(src, pos);
        let Some(open_rel) = src[pos..].find('{') else {
            continue;
        };
        let open = pos + open_rel;
        let Some(close) = matching_brace(src, open) else {
            continue;
        };

        let mut entity = SchemaEntity::new(name);
        for member in split_members(&src[open + 1..close]) {
            if let Some((prop_name, descriptor)) = parse_member(&member) {
                entity.props.insert(prop_name, descriptor);
            }
        }
        entities.push(entity);
        search = close + 1;
    }
    entities
}

/// Whether the token immediately before `at` is the `export` keyword.
fn preceded_by_export(src: &str, at: usize) -> bool {
    let prefix = src[..at].trim_end();
    prefix.ends_with("export")
        && prefix[..prefix.len() - "export".len()]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c))
}

/// Skip a `<...>` type parameter list starting at the next non-whitespace
/// character, if present.
fn skip_type_params(src: &str, pos: usize) -> usize {
    let ws = src[pos..].len() - src[pos..].trim_start().len();
    let start = pos + ws;
    if !src[start..].starts_with('<') {
        return pos;
    }
    let mut depth = 0i32;
    for (i, c) in src[start..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return start + i + 1;
                }
            }
            _ => {}
        }
    }
    pos
}

/// Index of the `}` matching the `{` at `open`, quote-aware.
fn matching_brace(src: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in src[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split an interface body into member fragments.
///
/// Members separate on `;`, `,`, or a newline at nesting depth zero. A
/// fragment that begins or ends mid-union (or ends on its `:`) continues the
/// previous one, so wrapped union types stay intact.
fn split_members(body: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = ' ';

    for c in body.chars() {
        if let Some(q) = quote {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            prev = c;
            continue;
        }
        match c {
            '\'' | '"' | '`' => {
                quote = Some(c);
                current.push(c);
            }
            '{' | '[' | '(' | '<' => {
                depth += 1;
                current.push(c);
            }
            '}' | ']' | ')' => {
                depth -= 1;
                current.push(c);
            }
            // `=>` is an arrow, not a closing angle bracket
            '>' if prev != '=' => {
                depth -= 1;
                current.push(c);
            }
            ';' | ',' | '\n' if depth == 0 => {
                fragments.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
        prev = c;
    }
    fragments.push(current);

    let mut members: Vec<String> = Vec::new();
    for fragment in fragments {
        let fragment = fragment.trim().to_string();
        if fragment.is_empty() {
            continue;
        }
        let continues = fragment.starts_with('|')
            || fragment.starts_with('&')
            || members
                .last()
                .is_some_and(|p| p.ends_with('|') || p.ends_with('&') || p.ends_with(':'));
        match members.last_mut() {
            Some(last) if continues => {
                last.push(' ');
                last.push_str(&fragment);
            }
            _ => members.push(fragment),
        }
    }
    members
}

/// Parse one property signature, `name?: type`.
///
/// Only property signatures participate in mapping; methods and index
/// signatures are skipped.
fn parse_member(member: &str) -> Option<(String, PropertyDescriptor)> {
    let member = member.trim();
    let member = member.strip_prefix("readonly ").unwrap_or(member).trim_start();

    let colon = member.find(':')?;
    let (left, right) = member.split_at(colon);
    let ty_text = right[1..].trim();

    let mut name = left.trim();
    let optional = name.ends_with('?');
    if optional {
        name = name[..name.len() - 1].trim_end();
    }
    let name = name.trim_matches(|c| c == '"' || c == '\'');
    if name.is_empty() || !name.chars().all(is_ident_char) || ty_text.is_empty() {
        return None;
    }

    let ty = ty_text.split_whitespace().collect::<Vec<_>>().join(" ");
    Some((name.to_string(), PropertyDescriptor::new(ty, optional)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_exported_interface() {
        let entities = scan_interfaces(
            "export interface User {\n  id: number\n  name: string\n}\n",
            Visibility::ExportedOnly,
        );
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "User");
        assert_eq!(
            entities[0].prop("id"),
            Some(&PropertyDescriptor::new("number", false))
        );
        assert_eq!(
            entities[0].prop("name"),
            Some(&PropertyDescriptor::new("string", false))
        );
    }

    #[test]
    fn test_exported_only_skips_private_declarations() {
        let src = "interface Hidden { a: string }\nexport interface Shown { a: string }\n";
        let exported = scan_interfaces(src, Visibility::ExportedOnly);
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].name, "Shown");

        let all = scan_interfaces(src, Visibility::All);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Hidden");
    }

    #[test]
    fn test_optional_marker() {
        let entities = scan_interfaces(
            "export interface User { email?: string }",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("email"),
            Some(&PropertyDescriptor::new("string", true))
        );
    }

    #[test]
    fn test_union_types_kept_as_written() {
        let entities = scan_interfaces(
            "export interface User { nickname: string | null }",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("nickname"),
            Some(&PropertyDescriptor::new("string | null", false))
        );
    }

    #[test]
    fn test_wrapped_union_merges_across_lines() {
        let entities = scan_interfaces(
            "export interface User {\n  role: 'admin' |\n    'member'\n}",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("role"),
            Some(&PropertyDescriptor::new("'admin' | 'member'", false))
        );
    }

    #[test]
    fn test_semicolon_and_comma_separators() {
        let entities = scan_interfaces(
            "export interface P { a: string; b: number, c: boolean }",
            Visibility::ExportedOnly,
        );
        assert_eq!(entities[0].props.len(), 3);
    }

    #[test]
    fn test_generic_property_types_do_not_split() {
        let entities = scan_interfaces(
            "export interface P { pairs: Map<string, number>; next: string }",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("pairs"),
            Some(&PropertyDescriptor::new("Map<string, number>", false))
        );
        assert!(entities[0].prop("next").is_some());
    }

    #[test]
    fn test_function_valued_property_survives_arrow() {
        let entities = scan_interfaces(
            "export interface P { cb: (x: number) => void\n  after: string }",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("cb"),
            Some(&PropertyDescriptor::new("(x: number) => void", false))
        );
        assert!(entities[0].prop("after").is_some());
    }

    #[test]
    fn test_methods_and_index_signatures_skipped() {
        let entities = scan_interfaces(
            "export interface P { format(): string; [key: string]: unknown; kept: number }",
            Visibility::ExportedOnly,
        );
        let names: Vec<&str> = entities[0].props.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_readonly_modifier_stripped() {
        let entities = scan_interfaces(
            "export interface P { readonly id: number }",
            Visibility::ExportedOnly,
        );
        assert_eq!(
            entities[0].prop("id"),
            Some(&PropertyDescriptor::new("number", false))
        );
    }

    #[test]
    fn test_type_parameters_skipped() {
        let entities = scan_interfaces(
            "export interface Box<T extends object> { value: string }",
            Visibility::ExportedOnly,
        );
        assert_eq!(entities[0].name, "Box");
        assert!(entities[0].prop("value").is_some());
    }

    #[test]
    fn test_multiple_interfaces_in_declaration_order() {
        let entities = scan_interfaces(
            "export interface A { x: string }\nexport interface B { y: number }",
            Visibility::ExportedOnly,
        );
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_interface_substring_identifier_not_matched() {
        let entities = scan_interfaces(
            "const preinterface = 1\nexport interface Real { a: string }",
            Visibility::ExportedOnly,
        );
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Real");
    }
}

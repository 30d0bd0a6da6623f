//! Shape validation for the JSON mapping config.

use indexmap::IndexSet;
use miette::SourceSpan;
use remap_ir::MappingRequest;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Raw config entry, before conversion into a [`MappingRequest`].
///
/// An absent `viceVersa` deserializes to `false`, so `{source, target}` and
/// `{source, target, viceVersa: false}` are the same triple and deduplicate
/// together. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(
    rename_all = "camelCase",
    expecting = "an object with string fields `source` and `target`"
)]
struct RawEntry {
    source: String,
    target: String,
    #[serde(default)]
    vice_versa: bool,
}

impl From<RawEntry> for MappingRequest {
    fn from(raw: RawEntry) -> Self {
        MappingRequest {
            source: raw.source,
            target: raw.target,
            bidirectional: raw.vice_versa,
        }
    }
}

/// Validate a mapping config document.
///
/// Returns the requests deduplicated by full structural equality, first
/// occurrence order preserved, so generation order is deterministic.
pub(crate) fn validate(content: &str, filename: &str) -> Result<Vec<MappingRequest>> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    let Some(entries) = document.as_array() else {
        return Err(Error::not_an_array(content, filename));
    };

    let spans = entry_spans(content);
    let mut requests: IndexSet<MappingRequest> = IndexSet::new();

    for (index, value) in entries.iter().enumerate() {
        let raw: RawEntry = serde_json::from_value(value.clone()).map_err(|e| {
            Error::invalid_entry(
                index,
                e.to_string(),
                content,
                filename,
                spans.get(index).copied(),
            )
        })?;
        requests.insert(raw.into());
    }

    Ok(requests.into_iter().collect())
}

/// Find the byte span of each top-level array element in the source.
///
/// A lightweight scan used only for error labels; it tracks string and
/// nesting state so brackets inside strings or nested values don't split
/// elements.
fn entry_spans(src: &str) -> Vec<SourceSpan> {
    let bytes = src.as_bytes();
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start: Option<usize> = None;

    let close = |spans: &mut Vec<SourceSpan>, start: &mut Option<usize>, end: usize| {
        if let Some(s) = start.take() {
            let mut end = end;
            while end > s && bytes[end - 1].is_ascii_whitespace() {
                end -= 1;
            }
            spans.push(SourceSpan::from((s, end - s)));
        }
    };

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => {
                if depth == 1 && start.is_none() {
                    start = Some(i);
                }
                in_string = true;
            }
            b'[' | b'{' => {
                if depth == 1 && start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    close(&mut spans, &mut start, i);
                }
            }
            b',' if depth == 1 => close(&mut spans, &mut start, i),
            _ => {
                if depth == 1 && start.is_none() && !b.is_ascii_whitespace() {
                    start = Some(i);
                }
            }
        }
    }
    spans
}

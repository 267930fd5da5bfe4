//! Heading insertion and entry-boundary computation.
//!
//! Both operations are pure: they take the current document content plus
//! its freshly scanned heading outline and return new full text. Writing
//! the result back is the caller's job, which keeps the read-modify-write
//! window as small as the workspace allows.

use crate::model::Heading;

/// Prepends `"# {label}\n"` unless the label is already the document's
/// first heading. Returns `None` when the content is already correct.
///
/// Two checks guard against a duplicate heading. The outline is the
/// authoritative structural answer, but it can be stale relative to
/// content that was just re-read; the literal-prefix check catches the
/// case where the document gained today's heading between index
/// computation and this call. Only a level-1 heading with the exact
/// label counts as present.
pub fn ensure_today_heading(content: &str, outline: &[Heading], label: &str) -> Option<String> {
    if let Some(first) = outline.first() {
        if first.level == 1 && first.text == label {
            return None;
        }
    }

    let prefix = format!("# {}\n", label);
    if content.starts_with(&prefix) {
        return None;
    }

    Some(format!("{}{}", prefix, content))
}

/// Inserts `text` at the end of the topmost entry: just before the second
/// heading, or at end-of-document when no second heading exists.
///
/// When the topmost entry is currently empty (nothing but whitespace
/// between the first heading and the boundary), the gap is collapsed so
/// blank-line padding does not accumulate under the heading. A document
/// with no headings at all degenerates to a plain append.
pub fn append_entry(content: &str, outline: &[Heading], text: &str) -> String {
    let boundary = outline
        .get(1)
        .map(|h| h.start_offset)
        .unwrap_or(content.len());

    let mut before = &content[..boundary];
    let after = &content[boundary..];

    if let Some(first) = outline.first() {
        // Clamp against a stale index claiming the heading ends past the
        // boundary.
        let entry_start = first.end_offset.min(boundary);
        if before[entry_start..].chars().all(char::is_whitespace) {
            before = &before[..entry_start];
        }
    }

    format!("{}\n{}\n{}", before, text, after)
}

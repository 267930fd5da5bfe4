//! Heading index derived from document content.
//!
//! The journal is plain text; the only structure the core recognizes is
//! ATX-style heading lines (`#` to `######` followed by a space). The
//! scan yields [`Heading`] entries in document order with exact byte
//! offsets, which is what the splicer's boundary arithmetic works on.

use crate::model::Heading;

/// Scans `content` and returns its headings top to bottom.
///
/// A heading's span runs from the start of its line to just past the
/// terminating newline; for a final line without a newline it ends at
/// the content length.
pub fn scan(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut line_start = 0;

    while line_start < content.len() {
        let rest = &content[line_start..];
        let line_end = match rest.find('\n') {
            Some(i) => line_start + i + 1,
            None => content.len(),
        };
        let line = content[line_start..line_end].trim_end_matches('\n');

        if let Some((level, text)) = parse_heading_line(line) {
            headings.push(Heading::new(text, level, line_start, line_end));
        }

        line_start = line_end;
    }

    headings
}

fn parse_heading_line(line: &str) -> Option<(u8, String)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    // The marker must be followed by a space ("#text" is not a heading).
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest.trim().to_string()))
}

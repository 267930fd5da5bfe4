use std::path::PathBuf;

/// One entry of the journal's heading index, in document order.
///
/// Offsets are byte positions into the content the index was computed
/// from. `end_offset` points just past the heading line's newline (or to
/// the end of content for an unterminated final line). The index is
/// recomputed from content on every operation and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    pub level: u8,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u8, start_offset: usize, end_offset: usize) -> Self {
        Self {
            text: text.into(),
            level,
            start_offset,
            end_offset,
        }
    }
}

/// Handle to the journal document inside a workspace.
#[derive(Debug, Clone)]
pub struct NoteHandle {
    pub path: PathBuf,
    /// True when `get_or_create` had to create the document.
    pub created: bool,
}

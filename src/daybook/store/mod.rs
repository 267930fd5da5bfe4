//! # Workspace Layer
//!
//! This module defines the document surface daybook runs against. The
//! [`Workspace`] trait is the narrow contract the core needs from its
//! host: resolve the journal's path, create it lazily, read its current
//! content, and write new content back wholesale.
//!
//! ## Design Rationale
//!
//! The surface is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryWorkspace` (no filesystem needed)
//! - Allow **other hosts** (an editor plugin, a sync daemon) without
//!   changing core logic
//!
//! ## Implementations
//!
//! - [`fs::FileWorkspace`]: Production storage — one directory holding
//!   the journal document (`<name>.md`) and `config.json`
//! - [`memory::InMemoryWorkspace`]: In-memory documents for fast,
//!   isolated tests
//!
//! ## Consistency Model
//!
//! No locking. Commands re-read content immediately before computing a
//! write, and the splicer re-validates against literal content, so an
//! edit landing between read and write cannot produce a duplicate
//! heading. Creation never overwrites an existing document.

use crate::error::Result;
use crate::model::NoteHandle;

pub mod fs;
pub mod memory;

/// Abstract interface to the journal's host document surface.
pub trait Workspace {
    /// The full path a document name resolves to (extension appended).
    fn resolve(&self, name: &str) -> std::path::PathBuf;

    /// Look up the document, creating it (and its folder) empty when
    /// absent. The handle reports whether creation happened.
    fn get_or_create(&mut self, name: &str) -> Result<NoteHandle>;

    /// Current full content of the document.
    fn read(&self, note: &NoteHandle) -> Result<String>;

    /// Replace the document's content wholesale.
    fn write(&mut self, note: &NoteHandle, content: &str) -> Result<()>;
}

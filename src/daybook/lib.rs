//! # Daybook Architecture
//!
//! Daybook is a **UI-agnostic journaling library**. The CLI binary is one
//! client of it; the same core could sit behind a TUI, a URL handler, or an
//! editor plugin without changes.
//!
//! ## The Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs, args.rs)                       │
//! │  - Parses arguments, prints messages, launches the editor    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands, generic over the workspace     │
//! │  - Returns structured Result types                           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Locator + splicer orchestration, pure business logic      │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Workspace Layer (store/)                                    │
//! │  - Abstract Workspace trait over the journal document        │
//! │  - FileWorkspace (production), InMemoryWorkspace (testing)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Splice Model
//!
//! The journal is one document partitioned by level-1 date headings. All
//! edits reduce to two pure functions in [`splice`]: ensure today's heading
//! exists at the top, and insert text at the latest-entry boundary. Both
//! work on `(content, heading outline)` pairs and return new full text;
//! persistence stays in the workspace layer. The outline is recomputed from
//! content on every operation and treated strictly as a hint — [`splice`]
//! re-validates against the literal content before prepending a heading,
//! because the document may have changed between read and write.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Workspace abstraction and implementations
//! - [`splice`]: Heading insertion and entry-boundary algorithms
//! - [`outline`]: Heading index derived from document content
//! - [`datefmt`]: Date-pattern translation and localized formatting
//! - [`route`]: `journal/open` and `journal/append` URL routes
//! - [`prompt`]: Cancellable interactive text capture
//! - [`config`]: Settings management
//! - [`editor`]: External editor integration (reveal the journal)
//! - [`model`]: Core data types (`Heading`, `NoteHandle`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod datefmt;
pub mod editor;
pub mod error;
pub mod model;
pub mod outline;
pub mod prompt;
pub mod route;
pub mod splice;
pub mod store;

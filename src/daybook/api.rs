//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every journal operation, regardless of which trigger
//! reached it (a command, a URL route, or the open-on-start affordance).
//!
//! It dispatches, holds the loaded settings, and returns structured
//! `Result<CmdResult>` values. It does no terminal I/O and no business
//! logic of its own — the splice decisions live in `commands`/`splice`,
//! and presentation stays in the binary.
//!
//! `DaybookApi<W: Workspace>` is generic over the workspace backend:
//! `FileWorkspace` in production, `InMemoryWorkspace` in tests.

use crate::commands;
use crate::config::JournalSettings;
use crate::error::Result;
use crate::prompt::{PromptOutcome, TextPrompt};
use crate::route::{self, Route};
use crate::store::Workspace;
use std::path::PathBuf;

pub struct DaybookApi<W: Workspace> {
    workspace: W,
    config_dir: PathBuf,
    settings: JournalSettings,
}

impl<W: Workspace> DaybookApi<W> {
    pub fn new(workspace: W, config_dir: PathBuf, settings: JournalSettings) -> Self {
        Self {
            workspace,
            config_dir,
            settings,
        }
    }

    /// Locate or create the journal and ensure today's heading.
    pub fn open_journal(&mut self) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.workspace, &self.settings)
    }

    /// Append text to the topmost entry.
    pub fn append_entry(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::append::run(&mut self.workspace, &self.settings, text)
    }

    /// Quick-append: capture text interactively, then append. Returns
    /// `None` when the prompt was dismissed — nothing was written and
    /// there is nothing to report.
    pub fn quick_append(
        &mut self,
        prompt: &mut dyn TextPrompt,
    ) -> Result<Option<commands::CmdResult>> {
        match prompt.request_text("Journal entry")? {
            PromptOutcome::Value(text) => self.append_entry(&text).map(Some),
            PromptOutcome::Cancelled => Ok(None),
        }
    }

    /// Dispatch a `journal/...` URL route.
    pub fn route(&mut self, raw: &str) -> Result<commands::CmdResult> {
        match route::parse(raw)? {
            Route::Open => self.open_journal(),
            Route::Append { text } => self.append_entry(&text),
        }
    }

    pub fn config(&mut self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        // A successful Set changed the persisted value; keep the live
        // settings in step for later operations in this process.
        if let Some(updated) = &result.settings {
            self.settings = updated.clone();
        }
        Ok(result)
    }

    /// The path the configured journal name resolves to.
    pub fn journal_path(&self) -> PathBuf {
        self.workspace.resolve(&self.settings.journal_note_path)
    }

    pub fn settings(&self) -> &JournalSettings {
        &self.settings
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompt;
    use crate::store::memory::InMemoryWorkspace;

    fn api() -> DaybookApi<InMemoryWorkspace> {
        DaybookApi::new(
            InMemoryWorkspace::new(),
            PathBuf::from("/nonexistent-config"),
            JournalSettings::default(),
        )
    }

    #[test]
    fn quick_append_writes_on_value() {
        let mut api = api();
        let mut prompt = ScriptedPrompt::value("remember the milk");

        let result = api.quick_append(&mut prompt).unwrap();

        assert!(result.is_some());
        assert_eq!(
            api.workspace.content("Journal").unwrap(),
            "\nremember the milk\n"
        );
    }

    #[test]
    fn quick_append_cancel_is_a_silent_noop() {
        let mut api = api();
        let mut prompt = ScriptedPrompt::cancelled();

        let result = api.quick_append(&mut prompt).unwrap();

        assert!(result.is_none());
        assert!(api.workspace.content("Journal").is_none());
    }

    #[test]
    fn route_open_ensures_heading() {
        let mut api = api();
        api.route("journal/open").unwrap();

        let content = api.workspace.content("Journal").unwrap();
        assert!(content.starts_with("# "));
    }

    #[test]
    fn route_append_with_empty_text_writes() {
        let mut api = api();
        api.route("journal/append?text=").unwrap();

        assert_eq!(api.workspace.content("Journal").unwrap(), "\n\n");
    }

    #[test]
    fn journal_path_follows_settings() {
        let api = api();
        assert_eq!(api.journal_path(), PathBuf::from("Journal.md"));
    }
}

use super::Workspace;
use crate::error::{DaybookError, Result};
use crate::model::NoteHandle;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory workspace for testing. No persistence.
#[derive(Default)]
pub struct InMemoryWorkspace {
    docs: HashMap<PathBuf, String>,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document with content, as if another actor had written it.
    pub fn seed(&mut self, name: &str, content: &str) {
        let path = self.resolve(name);
        self.docs.insert(path, content.to_string());
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.docs.get(&self.resolve(name)).map(String::as_str)
    }
}

impl Workspace for InMemoryWorkspace {
    fn resolve(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}.md", name))
    }

    fn get_or_create(&mut self, name: &str) -> Result<NoteHandle> {
        let path = self.resolve(name);
        let created = !self.docs.contains_key(&path);
        if created {
            self.docs.insert(path.clone(), String::new());
        }
        Ok(NoteHandle { path, created })
    }

    fn read(&self, note: &NoteHandle) -> Result<String> {
        self.docs
            .get(&note.path)
            .cloned()
            .ok_or_else(|| DaybookError::Workspace(format!("No document at {}", note.path.display())))
    }

    fn write(&mut self, note: &NoteHandle, content: &str) -> Result<()> {
        match self.docs.get_mut(&note.path) {
            Some(doc) => {
                *doc = content.to_string();
                Ok(())
            }
            None => Err(DaybookError::Workspace(format!(
                "No document at {}",
                note.path.display()
            ))),
        }
    }
}

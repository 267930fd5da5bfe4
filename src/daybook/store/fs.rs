use super::Workspace;
use crate::error::{DaybookError, Result};
use crate::model::NoteHandle;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_EXT: &str = ".md";

/// File-backed workspace rooted at the daybook home directory.
pub struct FileWorkspace {
    root: PathBuf,
    file_ext: String,
}

impl FileWorkspace {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DaybookError::Io)?;
        }
        Ok(())
    }
}

impl Workspace for FileWorkspace {
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, self.file_ext))
    }

    fn get_or_create(&mut self, name: &str) -> Result<NoteHandle> {
        let path = self.resolve(name);

        if path.exists() {
            return Ok(NoteHandle {
                path,
                created: false,
            });
        }

        // The resolved name may carry subfolders; create the chain, then
        // the empty document. Never touches an existing file.
        let parent = path.parent().ok_or_else(|| {
            DaybookError::Workspace(format!("No parent folder for {}", path.display()))
        })?;
        self.ensure_dir(parent)?;
        fs::write(&path, "").map_err(DaybookError::Io)?;

        Ok(NoteHandle {
            path,
            created: true,
        })
    }

    fn read(&self, note: &NoteHandle) -> Result<String> {
        fs::read_to_string(&note.path).map_err(DaybookError::Io)
    }

    fn write(&mut self, note: &NoteHandle, content: &str) -> Result<()> {
        fs::write(&note.path, content).map_err(DaybookError::Io)
    }
}
